/// Glyphs from lowest to highest magnitude.
pub const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders daily counts as a one-line histogram.
///
/// `series` is ordered most recent day first, as the stats query returns it;
/// the output reads oldest to newest, left to right.
///
/// An all-equal series is drawn at the lowest level: `max` is bumped to
/// `min + 1` so the scale never divides by zero.
pub fn render(series: &[i64]) -> String {
    let (Some(&min), Some(&max)) = (series.iter().min(), series.iter().max()) else {
        return String::new();
    };
    let (min, max) = (min as i128, max as i128);
    let max = if max == min { min + 1 } else { max };

    let top = (LEVELS.len() - 1) as i128;
    let span = max - min;

    series
        .iter()
        .rev()
        .map(|&count| {
            let bucket = (top * (count as i128 - min) / span).clamp(0, top);
            LEVELS[bucket as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_single_value() {
        assert_eq!(render(&[5]), "▁");
    }

    #[test]
    fn test_render_all_equal_stays_on_lowest_level() {
        assert_eq!(render(&[0, 0, 0]), "▁▁▁");
        assert_eq!(render(&[7, 7]), "▁▁");
    }

    #[test]
    fn test_render_reverses_into_chronological_order() {
        // Most recent day (10) comes first in the input, last in the output.
        assert_eq!(render(&[10, 0]), "▁█");
        assert_eq!(render(&[0, 10]), "█▁");
    }

    #[test]
    fn test_render_buckets_use_floor() {
        // 7 * (c - 0) / 14: 0 -> 0, 1 -> 0, 2 -> 1, 13 -> 6, 14 -> 7
        assert_eq!(render(&[14, 13, 2, 1, 0]), "▁▁▂▇█");
    }

    #[test]
    fn test_render_one_glyph_per_day() {
        let series: Vec<i64> = (0..100).collect();
        assert_eq!(render(&series).chars().count(), 100);
    }

    #[test]
    fn test_render_handles_extreme_values() {
        assert_eq!(render(&[i64::MAX, i64::MIN]), "▁█");
        assert_eq!(render(&[i64::MAX]), "▁");
    }
}
