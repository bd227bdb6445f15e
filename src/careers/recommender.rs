// file: src/careers/recommender.rs
// description: maps extracted skills to suggested career titles
// reference: skill keyword taxonomy shared by extraction and recommendation

use crate::careers::SkillCareerMap;
use crate::models::CareerRecommendation;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct CareerRecommender {
    table: Arc<SkillCareerMap>,
}

impl CareerRecommender {
    pub fn new(table: Arc<SkillCareerMap>) -> Self {
        Self { table }
    }

    /// Union of the careers of every known skill, sorted and de-duplicated.
    /// Falls back to the general placeholder when nothing matched.
    pub fn recommend<'a, I>(&self, skills: I) -> CareerRecommendation
    where
        I: IntoIterator<Item = &'a String>,
    {
        let careers: BTreeSet<&str> = skills
            .into_iter()
            .filter_map(|skill| self.table.careers_for(skill))
            .flatten()
            .map(String::as_str)
            .collect();

        CareerRecommendation::matched(careers.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLBACK_CAREER;
    use pretty_assertions::assert_eq;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_union_of_careers() {
        let recommender = CareerRecommender::new(Arc::new(SkillCareerMap::builtin()));
        let rec = recommender.recommend(&skills(&["python", "sql", "excel"]));

        assert!(!rec.fallback);
        assert_eq!(
            rec.careers,
            skills(&[
                "Business Analyst",
                "Data Analyst",
                "Data Scientist",
                "Database Administrator",
                "Software Engineer",
            ])
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        let recommender = CareerRecommender::new(Arc::new(SkillCareerMap::builtin()));
        let rec = recommender.recommend(&skills(&["Python"]));
        assert!(rec.careers.contains(&"Data Scientist".to_string()));
    }

    #[test]
    fn test_unknown_skills_fall_back() {
        let recommender = CareerRecommender::new(Arc::new(SkillCareerMap::builtin()));
        let rec = recommender.recommend(&skills(&["knitting"]));

        assert!(rec.fallback);
        assert_eq!(rec.careers, vec![FALLBACK_CAREER.to_string()]);
    }

    #[test]
    fn test_empty_skills_fall_back() {
        let recommender = CareerRecommender::new(Arc::new(SkillCareerMap::default()));
        let rec = recommender.recommend(&Vec::new());
        assert!(rec.fallback);
    }
}
