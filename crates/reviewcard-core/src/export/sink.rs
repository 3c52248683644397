//! Where exported cards go.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use super::ExportedImage;
use crate::error::{CardError, CardResult};

/// Receives the payload of a finished export.
///
/// Called from the blocking pool; implementations may do file I/O.
pub trait DownloadSink: Send + Sync + 'static {
    /// Deliver `image` and return where it ended up.
    fn deliver(&self, image: ExportedImage) -> CardResult<PathBuf>;
}

/// Saves exports into a directory, the way a browser fills its download
/// folder: an existing file is never overwritten, the new one gets a
/// ` (1)`, ` (2)`, ... suffix instead.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `filename`, then `stem (1).ext`, `stem (2).ext`, ...
    fn candidates(filename: &str) -> impl Iterator<Item = String> + '_ {
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{}", ext)),
            None => (filename, String::new()),
        };
        std::iter::once(filename.to_string())
            .chain((1u32..).map(move |n| format!("{} ({}){}", stem, n, ext)))
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, image: ExportedImage) -> CardResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CardError::ExportFailed(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let safe = sanitize(&image.filename);
        for name in Self::candidates(&safe) {
            let path = self.dir.join(name);
            let file = OpenOptions::new().write(true).create_new(true).open(&path);
            match file {
                Ok(mut file) => {
                    file.write_all(&image.bytes).map_err(|e| {
                        CardError::ExportFailed(format!("cannot save {}: {}", path.display(), e))
                    })?;
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(CardError::ExportFailed(format!(
                        "cannot save {}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }
        Err(CardError::ExportFailed(format!(
            "no free name for {} in {}",
            safe,
            self.dir.display()
        )))
    }
}

/// Keep a filename inside the download directory and valid on every
/// platform the app ships to.
fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use tempfile::TempDir;

    fn payload(filename: &str) -> ExportedImage {
        ExportedImage {
            bytes: vec![1, 2, 3],
            filename: filename.to_string(),
            width: 1,
            height: 1,
            format: ExportFormat::Png,
        }
    }

    #[test]
    fn test_writes_into_directory() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path());

        let path = sink.deliver(payload("hades-review.png")).unwrap();
        assert_eq!(path, temp.path().join("hades-review.png"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path());

        sink.deliver(payload("hades-review.png")).unwrap();
        let second = sink.deliver(payload("hades-review.png")).unwrap();
        let third = sink.deliver(payload("hades-review.png")).unwrap();

        assert_eq!(second, temp.path().join("hades-review (1).png"));
        assert_eq!(third, temp.path().join("hades-review (2).png"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path().join("nested/downloads"));
        let path = sink.deliver(payload("a-review.png")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_path_separators_stay_inside() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path());
        let path = sink.deliver(payload("ac/dc-review.png")).unwrap();
        assert_eq!(path, temp.path().join("ac_dc-review.png"));
    }

    #[test]
    fn test_reserved_characters_are_replaced() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path());
        let path = sink
            .deliver(payload("star-wars:-jedi*?\"<>|\u{7}-review.png"))
            .unwrap();
        assert_eq!(path, temp.path().join("star-wars_-jedi_______-review.png"));
    }

    #[test]
    fn test_existing_file_keeps_its_bytes() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("hades-review.png"), b"mine").unwrap();
        let sink = DirectorySink::new(temp.path());

        let path = sink.deliver(payload("hades-review.png")).unwrap();
        assert_eq!(path, temp.path().join("hades-review (1).png"));
        assert_eq!(std::fs::read(temp.path().join("hades-review.png")).unwrap(), b"mine");
    }

    #[test]
    fn test_candidate_names() {
        let names: Vec<String> = DirectorySink::candidates("a.png").take(3).collect();
        assert_eq!(names, ["a.png", "a (1).png", "a (2).png"]);
        let bare: Vec<String> = DirectorySink::candidates("notes").take(2).collect();
        assert_eq!(bare, ["notes", "notes (1)"]);
    }
}
