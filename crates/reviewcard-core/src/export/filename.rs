//! Download filename derivation.

use super::ExportFormat;

/// Suffix appended to every exported card name.
pub const FILENAME_SUFFIX: &str = "-review";

/// Lowercase `title` and join its words with single hyphens.
///
/// Leading and trailing whitespace is dropped, so `"God of War "` becomes
/// `"god-of-war"` and an empty or blank title becomes `""`.
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Suggested download name for a card titled `title`.
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    format!("{}{}.{}", slug(title), FILENAME_SUFFIX, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_examples() {
        assert_eq!(slug("God of War"), "god-of-war");
        assert_eq!(slug("God of War "), "god-of-war");
        assert_eq!(slug("  Multi   Space "), "multi-space");
        assert_eq!(slug("Tabs\tand\nNewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slug_of_blank_title_is_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("   "), "");
    }

    #[test]
    fn test_slug_keeps_non_ascii() {
        assert_eq!(slug("Pokémon Écarlate"), "pokémon-écarlate");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("Elden Ring", ExportFormat::Png),
            "elden-ring-review.png"
        );
        assert_eq!(export_filename("", ExportFormat::Png), "-review.png");
        assert_eq!(
            export_filename("Hades II", ExportFormat::Jpeg),
            "hades-ii-review.jpg"
        );
    }
}
