use crate::core::normalize::normalize;
use crate::core::skills::SkillSet;
use crate::core::types::MatchMode;

/// Find the vocabulary entries contained in `text`.
///
/// The text is normalized first, then each entry is tested for substring
/// containment. There is no word-boundary check: "r" is found inside
/// "research". Results follow vocabulary order.
///
/// # Examples
///
/// ```
/// use resume_matcher::matching::matcher::find_skills;
///
/// let skills = find_skills("I know Python and SQL.", ["python", "sql", "java"]);
/// assert_eq!(skills.as_slice(), ["python", "sql"]);
/// ```
#[must_use]
pub fn find_skills<I, S>(text: &str, vocabulary: I) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    find_skills_with_mode(text, vocabulary, MatchMode::Substring)
}

/// Like [`find_skills`], with an explicit containment rule
#[must_use]
pub fn find_skills_with_mode<I, S>(text: &str, vocabulary: I, mode: MatchMode) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized = normalize(text);

    vocabulary
        .into_iter()
        .filter(|skill| contains_skill(&normalized, skill.as_ref(), mode))
        .map(|skill| skill.as_ref().to_string())
        .collect()
}

/// Test whether `skill` occurs in already-normalized text
fn contains_skill(normalized: &str, skill: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => normalized.contains(skill),
        MatchMode::WholeWord => {
            // Normalized text only ever separates tokens with a single ASCII space
            let bytes = normalized.as_bytes();
            normalized.match_indices(skill).any(|(start, _)| {
                let end = start + skill.len();
                let starts_on_boundary = start == 0 || bytes[start - 1] == b' ';
                let ends_on_boundary = end == bytes.len() || bytes[end] == b' ';
                starts_on_boundary && ends_on_boundary
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_skills_basic() {
        let skills = find_skills("I know Python and SQL.", ["python", "sql", "java"]);
        let expected: SkillSet = ["python", "sql"].into_iter().collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_find_skills_empty_text() {
        assert!(find_skills("", ["python", "sql"]).is_empty());
        assert!(find_skills("   \n", ["python"]).is_empty());
    }

    #[test]
    fn test_find_skills_empty_vocabulary() {
        let vocabulary: [&str; 0] = [];
        assert!(find_skills("python", vocabulary).is_empty());
    }

    #[test]
    fn test_find_skills_multi_word_across_line_breaks() {
        let text = "Experienced in Machine\nLearning, data-analysis and REST   API design";
        let skills = find_skills(text, ["machine learning", "rest api", "data analysis"]);
        // "data-analysis" normalizes to "dataanalysis"
        assert_eq!(skills.as_slice(), ["machine learning", "rest api"]);
    }

    #[test]
    fn test_find_skills_follows_vocabulary_order() {
        let skills = find_skills("sql then python then java", ["java", "python", "sql"]);
        assert_eq!(skills.as_slice(), ["java", "python", "sql"]);
    }

    #[test]
    fn test_substring_false_positive_is_preserved() {
        // Known limitation: single-letter skills match inside longer words
        let skills = find_skills("Research assistant", ["r"]);
        assert!(skills.contains("r"));

        let skills = find_skills("JavaScript developer", ["java", "javascript"]);
        assert_eq!(skills.as_slice(), ["java", "javascript"]);
    }

    #[test]
    fn test_punctuated_skills_never_match() {
        let skills = find_skills("C++, C# and Node.js", ["c++", "c#", "node.js"]);
        assert!(skills.is_empty());
    }

    #[test]
    fn test_whole_word_mode() {
        let vocabulary = ["r", "java", "javascript", "rest api"];
        let text = "Research on JavaScript and REST API tooling";

        let skills = find_skills_with_mode(text, vocabulary, MatchMode::WholeWord);
        assert_eq!(skills.as_slice(), ["javascript", "rest api"]);

        let skills = find_skills_with_mode("I use R daily", vocabulary, MatchMode::WholeWord);
        assert_eq!(skills.as_slice(), ["r"]);
    }

    #[test]
    fn test_whole_word_checks_every_occurrence() {
        // First occurrence is inside a word, second stands alone
        let skills = find_skills_with_mode("javagrams and java", ["java"], MatchMode::WholeWord);
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_whole_word_is_subset_of_substring() {
        let vocabulary = ["r", "go", "sql", "spark", "power bi", "excel"];
        let text = "Excellent Go and SQL skills; Spark, Power BI; reporting.";

        let substring = find_skills_with_mode(text, vocabulary, MatchMode::Substring);
        let whole_word = find_skills_with_mode(text, vocabulary, MatchMode::WholeWord);
        assert!(whole_word.is_subset(&substring));
        assert!(substring.contains("excel"));
        assert!(!whole_word.contains("excel"));
    }
}
