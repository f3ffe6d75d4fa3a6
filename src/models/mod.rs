// src/models/mod.rs

pub mod comment;
pub mod pageview;
pub mod post;
