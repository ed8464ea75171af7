use serde::{Deserialize, Serialize};

/// How a vocabulary entry is located inside normalized text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Plain substring containment. A short skill such as "r" also matches
    /// inside longer words ("research").
    #[default]
    Substring,
    /// The skill must start and end on a token boundary
    WholeWord,
}

impl MatchMode {
    /// Parse the values accepted by the HTTP form field
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "substring" => Some(Self::Substring),
            "whole_word" | "word" => Some(Self::WholeWord),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::WholeWord => write!(f, "whole-word"),
        }
    }
}
