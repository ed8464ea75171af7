//! Skill extraction and résumé/job scoring.
//!
//! - [`find_skills`]: vocabulary entries contained in a text
//! - [`compute_match`]: matched/missing skills and the match percentage
//! - [`MatchingEngine`](engine::MatchingEngine): binds a vocabulary and a
//!   [`MatchMode`](crate::core::types::MatchMode) and produces a [`MatchReport`]
//!
//! ## Algorithm
//!
//! 1. Both texts are normalized (lowercase, ASCII punctuation removed,
//!    whitespace collapsed).
//! 2. Every vocabulary entry contained in a normalized text is collected, in
//!    vocabulary order.
//! 3. `matched = resume ∩ job`, `missing = job − matched`.
//! 4. `percentage = 100 * |matched| / |job|`, rounded to two decimals, or 0.0
//!    when the job description names no known skill.
//!
//! Containment is substring-based by default, so short entries can match inside
//! longer words ("r" in "research"). [`MatchMode::WholeWord`](crate::core::types::MatchMode::WholeWord)
//! restricts matches to token boundaries.
//!
//! ## Example
//!
//! ```rust
//! use resume_matcher::{MatchingConfig, MatchingEngine, SkillVocabulary};
//!
//! let vocabulary = SkillVocabulary::load_embedded().unwrap();
//! let engine = MatchingEngine::new(&vocabulary, MatchingConfig::default());
//!
//! let report = engine.compare("Python and SQL developer", "Looking for Python and Java");
//! println!("{}% match", report.match_percentage);
//! println!("missing: {}", report.missing_skills.join(", "));
//! ```

pub mod engine;
pub mod matcher;
pub mod report;
pub mod scoring;

pub use matcher::find_skills;
pub use report::MatchReport;
pub use scoring::compute_match;
