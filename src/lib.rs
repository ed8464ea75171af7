//! # resume-matcher
//!
//! A library for scoring résumés against job descriptions by skill overlap.
//!
//! Recruiters and applicants often want a quick answer to "how much of this
//! posting does this résumé cover?". `resume-matcher` extracts the text of a
//! résumé PDF, scans it and the job description for a fixed vocabulary of
//! technical skills, and reports the share of the job's skills that the résumé
//! mentions.
//!
//! ## Features
//!
//! - **Deterministic normalization**: lowercase, punctuation stripped, whitespace collapsed
//! - **Vocabulary matching**: substring containment by default, whole-word on request
//! - **Explained scores**: matched and missing skills plus a plain-language explanation
//! - **Pluggable extraction**: PDF text comes through the [`TextExtractor`] trait
//!
//! ## Example
//!
//! ```rust
//! use resume_matcher::{find_skills, compute_match, normalize};
//!
//! assert_eq!(normalize("Python, ML!"), "python ml");
//!
//! let vocabulary = ["python", "sql", "java"];
//! let resume = find_skills("I know Python and SQL.", vocabulary);
//! let job = find_skills("Python and Java required", vocabulary);
//!
//! let result = compute_match(&resume, &job);
//! assert_eq!(result.matched.as_slice(), ["python"]);
//! assert_eq!(result.missing.as_slice(), ["java"]);
//! assert_eq!(result.percentage, 50.0);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: Validation, extraction and matching wired into one pipeline
//! - [`core`]: Normalization, skill sets and shared types
//! - [`extraction`]: PDF text extraction
//! - [`matching`]: Skill finding and scoring
//! - [`vocabulary`]: The skill vocabulary and its storage
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON HTTP API

pub mod analysis;
pub mod cli;
pub mod core;
pub mod extraction;
pub mod matching;
pub mod utils;
pub mod vocabulary;
pub mod web;

// Re-export commonly used types for convenience
pub use analysis::{analyze_resume_bytes, analyze_resume_file, AnalysisError};
pub use core::normalize::normalize;
pub use core::skills::SkillSet;
pub use core::types::MatchMode;
pub use extraction::{ExtractionError, PdfTextExtractor, TextExtractor};
pub use matching::engine::{MatchingConfig, MatchingEngine};
pub use matching::report::MatchReport;
pub use matching::scoring::MatchResult;
pub use matching::{compute_match, find_skills};
pub use vocabulary::store::SkillVocabulary;
