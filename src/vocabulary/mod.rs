//! Skill vocabulary storage.
//!
//! The vocabulary is the fixed list of lowercase skill keywords that résumés
//! and job descriptions are matched against. A default vocabulary is compiled
//! into the binary, but custom vocabularies can also be loaded from JSON files.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "skills": ["python", "machine learning", "rest api"]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use resume_matcher::SkillVocabulary;
//! use std::path::Path;
//!
//! // Load the embedded default vocabulary
//! let vocabulary = SkillVocabulary::load_embedded().unwrap();
//! assert!(vocabulary.contains("python"));
//!
//! // Or a custom list
//! let custom = SkillVocabulary::load_from_file(Path::new("my_skills.json")).unwrap();
//! ```

pub mod store;
