//! Centralized input validation.
//!
//! Every check here runs before extraction, so a rejected request never touches
//! the PDF parser.

use std::path::{Path, PathBuf};

use crate::extraction::pdf::PDF_MAGIC;

/// Security-related constants for input validation
pub const MAX_FILENAME_LENGTH: usize = 255;
pub const MIN_FILE_CONTENT_SIZE: usize = 1;

/// Largest accepted job description, in bytes
pub const MAX_JOB_DESCRIPTION_SIZE: usize = 1024 * 1024;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Please upload a resume PDF")]
    MissingResume,
    #[error("Resume file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Please enter a job description")]
    EmptyJobDescription,
    #[error("Job description too long: exceeds {MAX_JOB_DESCRIPTION_SIZE} bytes")]
    JobDescriptionTooLong,
    #[error("Only PDF files are allowed")]
    NotPdf,
    #[error("Filename too long: exceeds {MAX_FILENAME_LENGTH} characters")]
    FilenameTooLong,
    #[error("Invalid filename: contains path traversal or invalid characters")]
    InvalidFilename,
    #[error("Empty filename provided")]
    EmptyFilename,
    #[error("File content appears malformed or invalid")]
    InvalidFileContent,
}

/// Check that a job description has content and fits the size limit.
///
/// Returns the description with surrounding whitespace removed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyJobDescription` if nothing but whitespace
/// was given, or `ValidationError::JobDescriptionTooLong` past the limit.
pub fn validate_job_description(job_description: &str) -> Result<&str, ValidationError> {
    let trimmed = job_description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyJobDescription);
    }
    if trimmed.len() > MAX_JOB_DESCRIPTION_SIZE {
        return Err(ValidationError::JobDescriptionTooLong);
    }
    Ok(trimmed)
}

/// Whether a filename carries a `.pdf` extension (any case)
#[must_use]
pub fn has_pdf_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Whether content starts with the PDF magic bytes
#[must_use]
pub fn is_pdf_content(content: &[u8]) -> bool {
    content.starts_with(PDF_MAGIC)
}

/// Check that a résumé path exists, is a regular file, and names a PDF.
///
/// # Errors
///
/// Returns `ValidationError::FileNotFound` if the path does not point at a
/// file, or `ValidationError::NotPdf` if it lacks a `.pdf` extension.
pub fn validate_resume_path(path: &Path) -> Result<(), ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::FileNotFound(path.to_path_buf()));
    }

    let is_pdf = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(has_pdf_extension);
    if !is_pdf {
        return Err(ValidationError::NotPdf);
    }

    Ok(())
}

/// Secure filename validation to prevent directory traversal and other attacks
///
/// Validates and sanitizes filenames by:
/// - Checking length limits
/// - Preventing directory traversal (../, ..\\)
/// - Removing potentially dangerous characters
/// - Ensuring filename is not empty after sanitization
///
/// # Errors
///
/// Returns `ValidationError::EmptyFilename` if the filename is empty,
/// `ValidationError::FilenameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidFilename` if it contains invalid characters.
pub fn validate_filename(filename: &str) -> Result<String, ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::FilenameTooLong);
    }

    // Prevent directory traversal attacks
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename);
    }

    // Check for null bytes and other dangerous characters
    if filename.contains('\0') || filename.chars().any(|c| ('\x01'..='\x1F').contains(&c)) {
        return Err(ValidationError::InvalidFilename);
    }

    // Sanitize filename by keeping only safe characters
    let sanitized = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_' || *c == ' ')
        .collect::<String>();

    if sanitized.trim().is_empty() {
        return Err(ValidationError::InvalidFilename);
    }

    // Hidden files have no name in front of the extension
    if sanitized.starts_with('.') {
        return Err(ValidationError::InvalidFilename);
    }

    Ok(sanitized)
}

/// Validate an uploaded résumé.
///
/// Checks, in order: a file was supplied, its name is safe and ends in `.pdf`,
/// it is not empty, and its content starts with the PDF magic bytes.
///
/// # Errors
///
/// Returns `ValidationError::MissingResume` if no filename was given, any
/// error from [`validate_filename`], `ValidationError::NotPdf` for a non-PDF
/// name or content, or `ValidationError::InvalidFileContent` for empty content.
pub fn validate_upload(filename: Option<&str>, content: &[u8]) -> Result<String, ValidationError> {
    let Some(name) = filename.filter(|n| !n.is_empty()) else {
        return Err(ValidationError::MissingResume);
    };

    let sanitized = validate_filename(name)?;
    if !has_pdf_extension(&sanitized) {
        return Err(ValidationError::NotPdf);
    }

    validate_pdf_content(content)?;

    Ok(sanitized)
}

/// Check that résumé bytes are non-empty and start with the PDF magic bytes.
///
/// # Errors
///
/// Returns `ValidationError::InvalidFileContent` for empty content or
/// `ValidationError::NotPdf` when the magic bytes are missing.
pub fn validate_pdf_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.len() < MIN_FILE_CONTENT_SIZE {
        return Err(ValidationError::InvalidFileContent);
    }

    if !is_pdf_content(content) {
        return Err(ValidationError::NotPdf);
    }

    Ok(())
}
