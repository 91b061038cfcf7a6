//! Vidext - Desktop client for a remote video-extraction API
//!
//! Paste a video URL, get the extracted metadata (title, thumbnail, size)
//! and a playable entry point for the best stream variant.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use vidext::api::ExtractionClient;
use vidext::config::AppConfig;
use vidext::gui::notify::NotifyOptions;
use vidext::gui::{AppFlags, VidextApp};

#[derive(Parser)]
struct Args {
    /// Run one extraction for the given URL and print the result
    /// instead of starting the GUI
    #[arg(long)]
    extract: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(url) = args.extract {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(async move {
            extract_cli(url).await;
        });
        return Ok(());
    }

    // Start the GUI application (synchronous entrypoint)
    VidextApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 700.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            ..Default::default()
        },
        antialiasing: true,
        flags: AppFlags {
            config: AppConfig::default(),
            notify: NotifyOptions::default(),
        },
        ..Default::default()
    })?;

    Ok(())
}

async fn extract_cli(url: String) {
    println!("Extracting: {}", url);

    let client = match ExtractionClient::new(&AppConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to initialize extraction client: {}", e);
            std::process::exit(1);
        }
    };

    let result = match client.extract(&url).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Extraction failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Title: {}", result.video_details.title);
    match result.best_variant() {
        Some(variant) => {
            println!("Quality: {}", variant.quality);
            println!("Size: {}", variant.content_length);
            println!("Stream: {}", variant.url);
        }
        None => println!("No stream variants returned"),
    }
}
