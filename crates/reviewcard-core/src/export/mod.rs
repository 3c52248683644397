//! Card export: rasterize the mounted card and hand it to a download sink.
//!
//! ## Pipeline
//!
//! ```text
//! CardRegion ──rasterize (1.5x, black backdrop)──► pixels ──encode──► bytes
//!                                                                    │
//!                       <slug>-review.<ext> ◄──── DownloadSink ◄──────┘
//! ```
//!
//! Rasterization, encoding and delivery run together on the blocking pool.
//! The payload is moved into the sink and nothing is kept once
//! [`CardExporter::export`] returns.

mod filename;
pub mod raster;
mod sink;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use image::ImageFormat;

use crate::card::CardRegion;
use crate::error::{CardError, CardResult};

pub use filename::{export_filename, slug, FILENAME_SUFFIX};
pub use sink::{DirectorySink, DownloadSink};

/// Supersampling factor applied to the card's logical size.
pub const PIXEL_RATIO: f32 = 1.5;

/// Opaque color behind every exported card (RGB).
pub const BACKDROP: [u8; 3] = [0, 0, 0];

/// Encoding of exported cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::WebP => "webp",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "webp" => Ok(ExportFormat::WebP),
            other => Err(format!(
                "unknown export format '{}' (expected png, jpeg or webp)",
                other
            )),
        }
    }
}

/// Knobs for an export. Pixel ratio and backdrop are fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSettings {
    /// Output encoding
    pub format: ExportFormat,
    /// Font directories loaded on top of the system fonts
    pub font_dirs: Vec<PathBuf>,
}

/// Payload of one export, owned by the call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub format: ExportFormat,
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReceipt {
    /// Suggested filename derived from the title
    pub filename: String,
    /// Where the sink put the file
    pub location: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Turns the mounted card into a downloaded image.
pub struct CardExporter<S: DownloadSink> {
    settings: ExportSettings,
    sink: Arc<S>,
}

impl<S: DownloadSink> CardExporter<S> {
    pub fn new(settings: ExportSettings, sink: S) -> Self {
        Self {
            settings,
            sink: Arc::new(sink),
        }
    }

    /// Export the card currently mounted at `region`, named after `title`.
    ///
    /// Fails with [`CardError::RegionNotReady`] when no card is mounted and
    /// with [`CardError::ExportFailed`] for any rasterization, encoding or
    /// delivery problem. In both cases nothing is delivered.
    pub async fn export(
        &self,
        region: Option<&CardRegion>,
        title: &str,
    ) -> CardResult<ExportReceipt> {
        let Some(region) = region else {
            tracing::error!("Card region not found, nothing to export");
            return Err(CardError::RegionNotReady);
        };

        let filename = export_filename(title, self.settings.format);
        let region = region.clone();
        let settings = self.settings.clone();
        let sink = Arc::clone(&self.sink);

        let result = tokio::task::spawn_blocking(move || -> CardResult<ExportReceipt> {
            let pixels = raster::rasterize(&region, &settings)?;
            let (width, height) = pixels.dimensions();
            let bytes = raster::encode(pixels, settings.format)?;

            let location = sink.deliver(ExportedImage {
                bytes,
                filename: filename.clone(),
                width,
                height,
                format: settings.format,
            })?;

            Ok(ExportReceipt {
                filename,
                location,
                width,
                height,
            })
        })
        .await
        .map_err(|e| CardError::ExportFailed(format!("export task failed: {}", e)))?;

        match &result {
            Ok(receipt) => tracing::info!(
                file = %receipt.location.display(),
                width = receipt.width,
                height = receipt.height,
                "Exported card"
            ),
            Err(e) => tracing::error!("Failed to export card: {}", e),
        }
        result
    }
}
