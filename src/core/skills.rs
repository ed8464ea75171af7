use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// A set of skills that remembers insertion order.
///
/// Skills found by the matcher are inserted in vocabulary order, so iterating a
/// `SkillSet` is deterministic. Equality is set equality: two sets holding the
/// same skills compare equal regardless of order.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    skills: Vec<String>,

    /// Membership index over `skills`
    index: HashSet<String>,
}

impl SkillSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill, returning `false` if it was already present.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.index.contains(&skill) {
            return false;
        }
        self.index.insert(skill.clone());
        self.skills.push(skill);
        true
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains(skill)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.skills.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    /// Skills of `self` that are also in `other`, in `self`'s order.
    #[must_use]
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        self.iter()
            .filter(|skill| other.contains(skill))
            .cloned()
            .collect()
    }

    /// Skills of `self` that are not in `other`, in `self`'s order.
    #[must_use]
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        self.iter()
            .filter(|skill| !other.contains(skill))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.iter().all(|skill| other.contains(skill))
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &SkillSet) -> bool {
        !self.iter().any(|skill| other.contains(skill))
    }

    /// Comma-separated rendering used by the text and TSV printers
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.skills.join(separator)
    }
}

impl PartialEq for SkillSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for SkillSet {}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.skills)
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let skills = Vec::<String>::deserialize(deserializer)?;
        Ok(skills.into_iter().collect())
    }
}
