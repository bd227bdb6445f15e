// file: src/extractor/skills.rs
// description: skill detection against the career table or a skills section
// reference: skill keyword taxonomy shared by extraction and recommendation

use crate::careers::SkillCareerMap;
use crate::config::SkillsMode;
use crate::error::{ResumeError, Result};
use crate::extractor::keywords::KeywordSet;
use crate::extractor::patterns::SKILL_SEPARATOR;
use crate::extractor::sections::section_lines;
use crate::models::ResumeText;
use std::collections::{BTreeSet, HashSet};

pub struct SkillsExtractor {
    keywords: KeywordSet,
    mode: SkillsMode,
}

impl SkillsExtractor {
    pub fn new(table: &SkillCareerMap, mode: SkillsMode) -> Result<Self> {
        let keywords = KeywordSet::new(table.skills())
            .map_err(|e| ResumeError::Config(format!("Invalid skill keyword: {}", e)))?;

        Ok(Self { keywords, mode })
    }

    /// Never contains two entries that differ only by case.
    pub fn extract(&self, text: &ResumeText) -> BTreeSet<String> {
        match self.mode {
            SkillsMode::Keyword => self.keyword_skills(text),
            SkillsMode::Section => section_skills(text),
        }
    }

    fn keyword_skills(&self, text: &ResumeText) -> BTreeSet<String> {
        self.keywords
            .found_in(text.text())
            .map(str::to_string)
            .collect()
    }
}

/// Tokens listed under the first "skills" heading, split on commas and
/// bullets. Source casing is kept; the first spelling of a skill wins.
fn section_skills(text: &ResumeText) -> BTreeSet<String> {
    let mut seen = HashSet::new();

    section_lines(text, "skills")
        .into_iter()
        .flat_map(|line| SKILL_SEPARATOR.split(line))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_skills_are_lowercase_and_unique() {
        let extractor =
            SkillsExtractor::new(&SkillCareerMap::builtin(), SkillsMode::Keyword).unwrap();
        let text = ResumeText::new("Skills: Python, SQL, Excel\nAutomated reports in PYTHON and sql");

        assert_eq!(extractor.extract(&text), set(&["excel", "python", "sql"]));
    }

    #[test]
    fn test_java_not_found_inside_javascript() {
        let table = SkillCareerMap::new([("java", vec!["Java Developer"])]);
        let extractor = SkillsExtractor::new(&table, SkillsMode::Keyword).unwrap();
        let text = ResumeText::new("Frontend work in JavaScript and TypeScript");

        assert!(extractor.extract(&text).is_empty());
    }

    #[test]
    fn test_empty_table_yields_no_skills() {
        let extractor =
            SkillsExtractor::new(&SkillCareerMap::default(), SkillsMode::Keyword).unwrap();
        assert!(extractor.extract(&ResumeText::new("python sql")).is_empty());
    }

    #[test]
    fn test_section_skills_keep_case() {
        let extractor =
            SkillsExtractor::new(&SkillCareerMap::builtin(), SkillsMode::Section).unwrap();
        let text = ResumeText::new(
            "Jane Doe\nTechnical Skills\nRust, Tokio • Axum\nrust, PostgreSQL\n\nHobbies\nChess",
        );

        assert_eq!(
            extractor.extract(&text),
            set(&["Axum", "PostgreSQL", "Rust", "Tokio"])
        );
    }

    #[test]
    fn test_section_skills_missing_heading() {
        let extractor =
            SkillsExtractor::new(&SkillCareerMap::builtin(), SkillsMode::Section).unwrap();
        assert!(extractor.extract(&ResumeText::new("Jane\nPython")).is_empty());
    }
}
