// src/lib.rs

//! hnfeed: keyword-filtered Hacker News RSS feed builder

pub mod error;
pub mod feed;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
