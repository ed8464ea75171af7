use crate::core::skills::SkillSet;
use crate::core::types::MatchMode;
use crate::matching::matcher::find_skills_with_mode;
use crate::matching::report::MatchReport;
use crate::vocabulary::store::SkillVocabulary;

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingConfig {
    /// How vocabulary entries are located in normalized text
    pub match_mode: MatchMode,
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    vocabulary: &'a SkillVocabulary,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine over a vocabulary
    #[must_use]
    pub fn new(vocabulary: &'a SkillVocabulary, config: MatchingConfig) -> Self {
        Self { vocabulary, config }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &SkillVocabulary {
        self.vocabulary
    }

    #[must_use]
    pub fn config(&self) -> MatchingConfig {
        self.config
    }

    /// Vocabulary skills present in `text`
    #[must_use]
    pub fn find_skills(&self, text: &str) -> SkillSet {
        find_skills_with_mode(text, self.vocabulary, self.config.match_mode)
    }

    /// Score a résumé's text against a job description
    #[must_use]
    pub fn compare(&self, resume_text: &str, job_description: &str) -> MatchReport {
        let resume_skills = self.find_skills(resume_text);
        let job_skills = self.find_skills(job_description);

        tracing::debug!(
            "Found {} resume skills and {} job skills ({} matching)",
            resume_skills.len(),
            job_skills.len(),
            self.config.match_mode
        );

        MatchReport::new(resume_skills, job_skills)
    }
}
