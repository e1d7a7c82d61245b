pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod render;
pub mod ui;
