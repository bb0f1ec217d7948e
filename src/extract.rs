//! Document text extraction
//!
//! Extractors never fail: unreadable or unsupported input yields an empty
//! string, which the pipeline's raw-length guard turns into the
//! "File seems empty or unreadable." sentinel.

use log::warn;
use std::fs;
use std::path::Path;

/// Pulls plain text out of a document
pub trait TextExtractor {
    /// Text of the document, empty on any failure
    fn extract(&self, path: &Path) -> String;
}

/// Reads the file as UTF-8, replacing invalid sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> String {
        match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("could not read {}: {e}", path.display());
                String::new()
            }
        }
    }
}

/// Text layer of a PDF via `pdf-extract`
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[cfg(feature = "pdf")]
impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> String {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("could not read {}: {e}", path.display());
                return String::new();
            }
        };
        match pdf_extract::extract_text_from_mem(&bytes) {
            // Form feeds separate pages.
            Ok(text) => text.replace('\x0C', "\n"),
            Err(e) => {
                warn!("could not extract text from {}: {e}", path.display());
                String::new()
            }
        }
    }
}

/// Whether `path` has a `.pdf` extension (any case)
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Picks an extractor from the file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoExtractor;

impl TextExtractor for AutoExtractor {
    fn extract(&self, path: &Path) -> String {
        if is_pdf(path) {
            #[cfg(feature = "pdf")]
            return PdfTextExtractor.extract(path);

            #[cfg(not(feature = "pdf"))]
            {
                warn!(
                    "{} is a PDF but PDF support is not compiled in (enable the `pdf` feature)",
                    path.display()
                );
                return String::new();
            }
        }
        PlainTextExtractor.extract(path)
    }
}

/// Extract `path` with [`AutoExtractor`]
pub fn extract_file(path: impl AsRef<Path>) -> String {
    AutoExtractor.extract(path.as_ref())
}
