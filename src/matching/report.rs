use serde::Serialize;

use crate::core::skills::SkillSet;
use crate::matching::scoring::{format_percentage, MatchResult};

/// Everything returned to a caller for one résumé/job comparison
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub match_percentage: f64,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub explanation: String,

    /// Vocabulary skills found in the résumé
    pub resume_skills: SkillSet,

    /// Vocabulary skills found in the job description
    pub job_skills: SkillSet,
}

impl MatchReport {
    #[must_use]
    pub fn new(resume_skills: SkillSet, job_skills: SkillSet) -> Self {
        let MatchResult {
            matched,
            missing,
            percentage,
        } = MatchResult::calculate(&resume_skills, &job_skills);

        let explanation = explain(job_skills.len(), matched.len(), percentage);

        Self {
            match_percentage: percentage,
            matched_skills: matched,
            missing_skills: missing,
            explanation,
            resume_skills,
            job_skills,
        }
    }
}

/// Fixed-template explanation of how the percentage was derived
#[must_use]
pub fn explain(job_skill_count: usize, matched_count: usize, percentage: f64) -> String {
    format!(
        "The match score is calculated by identifying skills from the job description \
         that are also present in the resume (using keyword matching). \
         There are {job_skill_count} skills in the job description. \
         {matched_count} of them match the resume, resulting in a {}% match. \
         Missing skills are those in the job description but not found in the resume.",
        format_percentage(percentage)
    )
}
