pub mod client;
pub mod error;
pub mod models;

pub use client::ExtractionClient;
pub use error::ExtractError;
pub use models::{ExtractionResult, StreamVariant, VideoDetails};
