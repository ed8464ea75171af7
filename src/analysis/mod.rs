//! The résumé analysis pipeline.
//!
//! Ties validation, extraction and matching together. Validation always runs
//! first and a failed extraction ends the request, so no partial text ever
//! reaches the matcher.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::extraction::{ExtractionError, TextExtractor};
use crate::matching::engine::MatchingEngine;
use crate::matching::report::MatchReport;
use crate::utils::validation::{
    validate_job_description, validate_pdf_content, validate_resume_path, validate_upload,
    ValidationError,
};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable to read the PDF. Please ensure it is a text-based PDF ({0})")]
    Extraction(#[from] ExtractionError),

    #[error("Failed to read or stage resume: {0}")]
    Io(#[from] std::io::Error),
}

/// Analyze a résumé PDF on disk against a job description.
///
/// # Errors
///
/// Returns `AnalysisError::Validation` if the file is missing, is not a PDF
/// by name or content, or the job description is empty,
/// `AnalysisError::Io` if it cannot be read, and `AnalysisError::Extraction`
/// if text cannot be pulled out of the document.
pub fn analyze_resume_file<E>(
    path: &Path,
    job_description: &str,
    engine: &MatchingEngine<'_>,
    extractor: &E,
) -> Result<MatchReport, AnalysisError>
where
    E: TextExtractor + ?Sized,
{
    if !path.is_file() {
        return Err(ValidationError::FileNotFound(path.to_path_buf()).into());
    }
    let job_description = validate_job_description(job_description)?;
    validate_resume_path(path)?;

    let content = std::fs::read(path)?;
    validate_pdf_content(&content)?;

    let resume_text = extractor.extract_text(&content)?;
    Ok(engine.compare(&resume_text, job_description))
}

/// Analyze an uploaded résumé against a job description.
///
/// The upload is written to a temporary file for extraction; the file is
/// removed when this function returns, whatever the outcome.
///
/// # Errors
///
/// Returns `AnalysisError::Validation` for a missing or non-PDF upload or an
/// empty job description, `AnalysisError::Io` if the upload cannot be staged,
/// and `AnalysisError::Extraction` if text cannot be pulled out of it.
pub fn analyze_resume_bytes<E>(
    filename: Option<&str>,
    content: &[u8],
    job_description: &str,
    engine: &MatchingEngine<'_>,
    extractor: &E,
) -> Result<MatchReport, AnalysisError>
where
    E: TextExtractor + ?Sized,
{
    if filename.map_or(true, str::is_empty) {
        return Err(ValidationError::MissingResume.into());
    }
    let job_description = validate_job_description(job_description)?;
    let sanitized = validate_upload(filename, content)?;

    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()?;
    staged.write_all(content)?;
    staged.flush()?;

    tracing::debug!(
        "Staged upload {} ({} bytes) at {}",
        sanitized,
        content.len(),
        staged.path().display()
    );

    let resume_text = extractor.extract_file(staged.path())?;
    Ok(engine.compare(&resume_text, job_description))
}
