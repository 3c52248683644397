//! Error types for the review card composer

use thiserror::Error;

/// Prompt shown when an export cannot produce a file.
pub const RETRY_PROMPT: &str = "Could not generate the image. Please try again.";

/// Main error type for review card operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    /// Export was requested before the card preview was mounted
    #[error("Card region is not ready")]
    RegionNotReady,

    /// Rasterizing, encoding or saving the card failed
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// A selected file could not be turned into an image reference
    #[error("Image load failed: {0}")]
    ImageLoadFailed(String),

    /// Rating outside [0, 5] or not a multiple of 0.5
    #[error("Invalid rating: {0}")]
    InvalidRating(f32),
}

impl CardError {
    /// Message to put in front of the user, if any.
    ///
    /// Export errors block with a retry prompt. Image load errors only leave
    /// the placeholder visible, so they have nothing to say.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CardError::RegionNotReady | CardError::ExportFailed(_) => Some(RETRY_PROMPT),
            CardError::ImageLoadFailed(_) | CardError::InvalidRating(_) => None,
        }
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::ExportFailed("pixmap allocation".to_string());
        assert_eq!(format!("{}", err), "Export failed: pixmap allocation");
        assert_eq!(CardError::RegionNotReady.to_string(), "Card region is not ready");
    }

    #[test]
    fn test_export_errors_prompt_retry() {
        assert_eq!(CardError::RegionNotReady.user_message(), Some(RETRY_PROMPT));
        assert_eq!(
            CardError::ExportFailed("boom".into()).user_message(),
            Some(RETRY_PROMPT)
        );
    }

    #[test]
    fn test_image_load_is_silent() {
        assert_eq!(CardError::ImageLoadFailed("eof".into()).user_message(), None);
    }
}
