// src/handlers/mod.rs

pub mod community;
pub mod stats;
