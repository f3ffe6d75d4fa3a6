// src/utils/mod.rs

pub mod ago;
pub mod sparkline;
