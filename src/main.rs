#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether animations should be toned down, set from command line
static REDUCED_MOTION: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake")
    })
}

/// Whether --reduced-motion was passed at launch.
pub fn reduced_motion_requested() -> bool {
    REDUCED_MOTION.get().copied().unwrap_or(false)
}

/// Keepsake - a little gift that counts the days
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - password-gated birthday timeline and anniversary keepsake")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: keepsake-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Tone down the decorative animations
    #[arg(long)]
    reduced_motion: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("keepsake-{}", name));
        (base, name.clone())
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake");
        (base, String::new())
    };

    // Store launch options globally
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = REDUCED_MOTION.set(args.reduced_motion);

    // Phone-shaped window: the layout was designed portrait-first
    let window_width = 480.0;
    let window_height = 920.0;

    let title = if !display_name.is_empty() {
        format!("Keepsake - {}", display_name)
    } else {
        "Keepsake".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
