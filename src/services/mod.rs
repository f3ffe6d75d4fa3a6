// src/services/mod.rs

pub mod content;
pub mod pageviews;

pub use content::{ContentPolicy, ContentService};
pub use pageviews::PageviewCounter;
