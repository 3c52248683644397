#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use reviewcard_core::{ExportFormat, ExportSettings};

/// Launch configuration, set once from the command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Where and how exported cards are written.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory that receives exported cards
    pub output_dir: PathBuf,
    /// Export encoding and fonts
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            export: ExportSettings::default(),
        }
    }
}

/// Get the launch configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Review Card - compose a rated game card and save it as an image
#[derive(Parser, Debug)]
#[command(name = "reviewcard-desktop")]
#[command(about = "Review Card - compose a rated game card and save it as an image")]
struct Args {
    /// Directory exported cards are saved to (default: your downloads folder)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Image format of exported cards (png, jpeg, webp)
    #[arg(short, long, default_value_t = ExportFormat::Png)]
    format: ExportFormat,

    /// Extra font directory used when rendering card text (repeatable)
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

fn main() {
    reviewcard_core::logging::init(reviewcard_core::logging::DEFAULT_FILTER);

    let args = Args::parse();

    let config = AppConfig {
        output_dir: args.output_dir.unwrap_or_else(default_output_dir),
        export: ExportSettings {
            format: args.format,
            font_dirs: args.font_dirs,
        },
    };

    tracing::info!(
        "Starting with output dir {:?}, exporting {}",
        config.output_dir,
        config.export.format
    );

    let _ = CONFIG.set(config);

    // Room for the editor panel next to a full-size card
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Review Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
