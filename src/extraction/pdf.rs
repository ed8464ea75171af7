use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

use thiserror::Error;

/// Magic bytes every PDF starts with
pub const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read the PDF: {0}")]
    Unreadable(String),
}

/// Turns a stored document into plain text.
///
/// Implementations either return the full extracted text or fail; partial
/// output is never returned.
pub trait TextExtractor: Send + Sync {
    /// Extract text from an in-memory document
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;

    /// Extract text from a document on disk
    fn extract_file(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        self.extract_text(&bytes)
    }
}

static PARSER_PANIC_HOOK: Once = Once::new();

/// Whether a panic location lies inside the PDF parsing crates
fn is_parser_source(file: &str) -> bool {
    ["pdf-extract", "pdf_extract", "lopdf"]
        .iter()
        .any(|name| file.contains(name))
}

/// Log parser panics through `tracing` instead of the default stderr hook.
///
/// Panics raised anywhere else still reach the previously installed hook.
fn install_parser_panic_hook() {
    PARSER_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let from_parser = info
                .location()
                .is_some_and(|location| is_parser_source(location.file()));
            if from_parser {
                tracing::warn!("PDF parser panicked: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

/// [`TextExtractor`] backed by the `pdf-extract` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractionError::Unreadable(
                "missing %PDF- header".to_string(),
            ));
        }

        // pdf-extract panics on some malformed documents instead of erroring
        install_parser_panic_hook();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(ExtractionError::Unreadable(e.to_string())),
            Err(_) => {
                return Err(ExtractionError::Unreadable(
                    "PDF parser aborted on malformed input".to_string(),
                ))
            }
        };

        if text.trim().is_empty() {
            tracing::warn!("PDF contained no extractable text; it may be a scanned image");
        } else {
            tracing::debug!("Extracted {} characters from PDF", text.len());
        }

        Ok(text)
    }
}
