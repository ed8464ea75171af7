//! Core data types and text canonicalization.
//!
//! - [`normalize`](normalize::normalize): lowercase, strip ASCII punctuation, collapse whitespace
//! - [`SkillSet`](skills::SkillSet): ordered set of skills found in a text
//! - [`MatchMode`](types::MatchMode): substring or whole-word containment
//!
//! ## Normalization
//!
//! | Input                     | Normalized          |
//! |---------------------------|---------------------|
//! | `Python, ML!`             | `python ml`         |
//! | `Data\n\tAnalysis`        | `data analysis`     |
//! | `Node.js / C++`           | `nodejs c`          |
//!
//! Vocabulary entries are compared against normalized text as-is, so entries
//! that carry punctuation (`node.js`, `c++`, `c#`) never match.

pub mod normalize;
pub mod skills;
pub mod types;
