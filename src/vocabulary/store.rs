use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse vocabulary: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Vocabulary entry at index {index} is empty")]
    EmptyEntry { index: usize },
}

/// Vocabulary version for compatibility checking
pub const VOCABULARY_VERSION: &str = "1.0.0";

/// Serializable vocabulary format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub skills: Vec<String>,
}

/// The fixed list of skill keywords that texts are matched against.
///
/// Entries are stored lowercased and trimmed, in file order, with duplicates
/// removed. A vocabulary is built once at startup and never mutated, so it can
/// be shared freely between requests.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    index: HashSet<String>,
}

impl SkillVocabulary {
    /// Load the embedded default vocabulary
    pub fn load_embedded() -> Result<Self, VocabularyError> {
        // Validated at compile time by build.rs
        const EMBEDDED_VOCABULARY: &str = include_str!("../../vocabularies/default_skills.json");
        Self::from_json(EMBEDDED_VOCABULARY)
    }

    /// Load a vocabulary from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a vocabulary from a JSON string
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let data: VocabularyData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != VOCABULARY_VERSION {
            tracing::warn!(
                "Vocabulary version mismatch (expected {}, found {})",
                VOCABULARY_VERSION,
                data.version
            );
        }

        Self::from_skills(data.skills)
    }

    /// Build a vocabulary from raw entries.
    ///
    /// Entries are lowercased and trimmed. Repeated entries keep their first
    /// position and are otherwise dropped.
    pub fn from_skills<I, S>(skills: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self {
            skills: Vec::new(),
            index: HashSet::new(),
        };

        for (index, raw) in skills.into_iter().enumerate() {
            let skill = raw.as_ref().trim().to_lowercase();
            if skill.is_empty() {
                return Err(VocabularyError::EmptyEntry { index });
            }
            if vocabulary.index.contains(&skill) {
                tracing::warn!("Ignoring duplicate vocabulary entry '{skill}' at index {index}");
                continue;
            }
            vocabulary.index.insert(skill.clone());
            vocabulary.skills.push(skill);
        }

        tracing::debug!("Loaded vocabulary with {} skills", vocabulary.len());
        Ok(vocabulary)
    }

    /// Export vocabulary to JSON
    pub fn to_json(&self) -> Result<String, VocabularyError> {
        let data = VocabularyData {
            version: VOCABULARY_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            skills: self.skills.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.skills.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains(skill)
    }

    /// Number of skills in the vocabulary
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<'a> IntoIterator for &'a SkillVocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
