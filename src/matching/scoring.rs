use serde::Serialize;

use crate::core::skills::SkillSet;

/// Safely convert usize to f64 for percentage calculations
///
/// Skill counts are bounded by the vocabulary size, far below the range where
/// f64 loses integer precision.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Overlap between the skills of a résumé and those of a job description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Job skills also found in the résumé
    pub matched: SkillSet,

    /// Job skills not found in the résumé
    pub missing: SkillSet,

    /// `100 * |matched| / |job skills|`, rounded to two decimals; 0.0 when the
    /// job description names no known skills
    pub percentage: f64,
}

impl MatchResult {
    /// Compare résumé skills against job skills
    #[must_use]
    pub fn calculate(resume_skills: &SkillSet, job_skills: &SkillSet) -> Self {
        let matched = job_skills.intersection(resume_skills);
        let missing = job_skills.difference(&matched);
        let percentage = match_percentage(matched.len(), job_skills.len());

        Self {
            matched,
            missing,
            percentage,
        }
    }
}

/// Compare résumé skills against job skills.
///
/// # Examples
///
/// ```
/// use resume_matcher::core::skills::SkillSet;
/// use resume_matcher::matching::scoring::compute_match;
///
/// let resume: SkillSet = ["python", "sql"].into_iter().collect();
/// let job: SkillSet = ["python", "java"].into_iter().collect();
///
/// let result = compute_match(&resume, &job);
/// assert_eq!(result.matched.as_slice(), ["python"]);
/// assert_eq!(result.missing.as_slice(), ["java"]);
/// assert_eq!(result.percentage, 50.0);
/// ```
#[must_use]
pub fn compute_match(resume_skills: &SkillSet, job_skills: &SkillSet) -> MatchResult {
    MatchResult::calculate(resume_skills, job_skills)
}

/// Percentage of `total` represented by `matched`, rounded to two decimals.
///
/// Returns 0.0 when `total` is zero.
#[must_use]
pub fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_hundredths(count_to_f64(matched) / count_to_f64(total) * 100.0)
}

/// Round to two decimal places, resolving exact ties to the even neighbour
/// (3.125 -> 3.12, 3.375 -> 3.38).
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Render a percentage with at least one decimal place ("50.0", "66.67")
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{percentage:.1}")
    } else {
        format!("{percentage}")
    }
}
