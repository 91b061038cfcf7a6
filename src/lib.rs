//! Vidext library

pub mod api;
pub mod config;
pub mod gui;

// Re-export main types for easier use
pub use api::{ExtractError, ExtractionClient, ExtractionResult, StreamVariant, VideoDetails};
pub use config::AppConfig;
pub use gui::{AppFlags, Message, VidextApp};
