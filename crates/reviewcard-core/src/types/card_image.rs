//! Card Image Type - Self-contained image sources for cards
//!
//! Uploaded files become data URIs; the bundled logo is kept as SVG text.
//! Neither needs a fetch to display or rasterize.

use base64::Engine;

/// Image data for cards (poster, profile picture, logo)
#[derive(Debug, Clone, PartialEq)]
pub enum CardImage {
    /// Base64 data URI of an uploaded file
    /// Format: "data:image/png;base64,..."
    DataUri(String),

    /// SVG document text (bundled artwork)
    Svg(String),
}

impl CardImage {
    /// Create from data URI
    pub fn from_data_uri(uri: String) -> Self {
        CardImage::DataUri(uri)
    }

    /// Create from SVG string
    pub fn from_svg(svg: String) -> Self {
        CardImage::Svg(svg)
    }

    /// Value usable directly as an `href`/`src`.
    pub fn href(&self) -> String {
        match self {
            CardImage::DataUri(uri) => uri.clone(),
            CardImage::Svg(svg) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
                format!("data:image/svg+xml;base64,{}", encoded)
            }
        }
    }
}
