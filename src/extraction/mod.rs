//! Plain-text extraction from résumé documents.
//!
//! Extraction sits at the edge of the system: it either yields the document's
//! full text or fails with an [`ExtractionError`](pdf::ExtractionError), and a
//! failure ends the request before any matching happens.
//!
//! The [`TextExtractor`](pdf::TextExtractor) trait lets callers swap the PDF
//! backend (tests use fixed-text stubs).

pub mod pdf;

pub use pdf::{ExtractionError, PdfTextExtractor, TextExtractor};
