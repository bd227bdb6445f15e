// file: src/careers/table.rs
// description: static skill-to-career lookup table
// reference: skill keyword taxonomy shared by extraction and recommendation

use crate::error::{ResumeError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    ("python", &["Data Scientist", "Software Engineer"]),
    ("java", &["Java Developer", "Software Engineer"]),
    ("sql", &["Database Administrator", "Data Analyst"]),
    ("excel", &["Data Analyst", "Business Analyst"]),
    ("aws", &["Cloud Engineer", "DevOps Engineer"]),
    ("azure", &["Cloud Engineer", "DevOps Engineer"]),
    ("gcp", &["Cloud Engineer"]),
    ("docker", &["DevOps Engineer", "Site Reliability Engineer"]),
    ("kubernetes", &["DevOps Engineer", "Site Reliability Engineer"]),
    ("linux", &["System Administrator", "DevOps Engineer"]),
    ("javascript", &["Frontend Developer", "Full Stack Developer"]),
    ("typescript", &["Frontend Developer", "Full Stack Developer"]),
    ("react", &["Frontend Developer"]),
    ("node.js", &["Backend Developer", "Full Stack Developer"]),
    ("html", &["Web Developer", "Frontend Developer"]),
    ("css", &["Web Developer", "UI Developer"]),
    ("c++", &["Systems Engineer", "Game Developer"]),
    ("c#", &[".NET Developer", "Game Developer"]),
    ("rust", &["Systems Engineer", "Backend Developer"]),
    ("golang", &["Backend Developer", "Cloud Engineer"]),
    ("machine learning", &["Machine Learning Engineer", "Data Scientist"]),
    ("deep learning", &["Machine Learning Engineer", "AI Research Engineer"]),
    ("tensorflow", &["Machine Learning Engineer"]),
    ("pytorch", &["Machine Learning Engineer", "AI Research Engineer"]),
    ("pandas", &["Data Analyst", "Data Scientist"]),
    ("tableau", &["Data Analyst", "Business Intelligence Analyst"]),
    ("power bi", &["Data Analyst", "Business Intelligence Analyst"]),
    ("figma", &["UI/UX Designer"]),
    ("photoshop", &["Graphic Designer"]),
    ("seo", &["Digital Marketing Specialist"]),
    ("accounting", &["Accountant", "Financial Analyst"]),
    ("project management", &["Project Manager"]),
];

/// Immutable map from lower-cased skill name to career titles in declared
/// order. Built once and shared read-only across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCareerMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl SkillCareerMap {
    pub fn new<K, C>(entries: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: AsRef<str>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (skill, careers) in entries {
            let key = skill.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }

            let slot = map.entry(key).or_default();
            for career in careers {
                let career = career.into();
                if !career.trim().is_empty() && !slot.contains(&career) {
                    slot.push(career);
                }
            }
        }

        map.retain(|_, careers| !careers.is_empty());
        Self { entries: map }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_TABLE
                .iter()
                .map(|(skill, careers)| (*skill, careers.iter().copied())),
        )
    }

    /// Loads a JSON object of the form `{"python": ["Data Scientist"]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ResumeError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
            .map_err(|e| ResumeError::Config(format!("Invalid career map {}: {}", path.display(), e)))?;

        let map = Self::new(parsed);
        info!("Loaded {} skills from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn careers_for(&self, skill: &str) -> Option<&[String]> {
        self.entries
            .get(&skill.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_contains_source_skills() {
        let map = SkillCareerMap::builtin();
        for skill in ["python", "java", "sql", "excel", "aws"] {
            assert!(map.careers_for(skill).is_some(), "missing {}", skill);
        }
        assert_eq!(
            map.careers_for("python").unwrap(),
            &["Data Scientist".to_string(), "Software Engineer".to_string()]
        );
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let map = SkillCareerMap::new([("SQL", vec!["Data Analyst"])]);
        assert!(map.careers_for("sql").is_some());
        assert!(map.careers_for(" Sql ").is_some());
        assert_eq!(map.skills().collect::<Vec<_>>(), vec!["sql"]);
    }

    #[test]
    fn test_duplicate_keys_merge_careers() {
        let map = SkillCareerMap::new([
            ("excel", vec!["Data Analyst"]),
            ("Excel", vec!["Business Analyst", "Data Analyst"]),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.careers_for("excel").unwrap(),
            &["Data Analyst".to_string(), "Business Analyst".to_string()]
        );
    }

    #[test]
    fn test_blank_entries_dropped() {
        let map = SkillCareerMap::new([("  ", vec!["X"]), ("go", vec![""])]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("careers.json");
        fs::write(&path, r#"{"Rust": ["Systems Engineer"], "sql": ["DBA"]}"#).unwrap();

        let map = SkillCareerMap::from_json_file(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.careers_for("rust").unwrap(), &["Systems Engineer".to_string()]);
    }

    #[test]
    fn test_from_json_file_rejects_bad_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("careers.json");
        fs::write(&path, r#"{"rust": "Systems Engineer"}"#).unwrap();

        assert!(matches!(
            SkillCareerMap::from_json_file(&path),
            Err(ResumeError::Config(_))
        ));
    }
}
