// file: src/extractor/mod.rs
// description: resume field extraction module exports
// reference: internal module structure

pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod keywords;
pub mod name;
pub mod patterns;
pub mod sections;
pub mod skills;

pub use certifications::CertificationExtractor;
pub use contact::ContactExtractor;
pub use education::EducationExtractor;
pub use experience::ExperienceExtractor;
pub use keywords::KeywordSet;
pub use name::NameExtractor;
pub use skills::SkillsExtractor;

use crate::careers::SkillCareerMap;
use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::models::{ExtractedFields, ResumeText};
use tracing::debug;

/// Runs every field heuristic over one document. Each extractor reads only
/// the text, so the order they run in does not matter.
pub struct FieldExtractor {
    name: NameExtractor,
    contact: ContactExtractor,
    skills: SkillsExtractor,
    education: EducationExtractor,
    certifications: CertificationExtractor,
    experience: ExperienceExtractor,
}

impl FieldExtractor {
    pub fn new(config: &ExtractionConfig, table: &SkillCareerMap) -> Result<Self> {
        Ok(Self {
            name: NameExtractor::new(),
            contact: ContactExtractor::new(),
            skills: SkillsExtractor::new(table, config.skills_mode)?,
            education: EducationExtractor::new(config.scan_scope),
            certifications: CertificationExtractor::new(config.scan_scope),
            experience: ExperienceExtractor::new(config.scan_scope, config.experience_word_limit),
        })
    }

    pub fn extract(&self, text: &ResumeText) -> ExtractedFields {
        let fields = ExtractedFields {
            name: self.name.extract(text),
            email: self.contact.email(text),
            phone: self.contact.phone(text),
            skills: self.skills.extract(text),
            education: self.education.extract(text),
            certifications: self.certifications.extract(text),
            experience: self.experience.extract(text),
        };

        debug!(
            "Extracted {} skills, {} education, {} certification, {} experience lines",
            fields.skills.len(),
            fields.education.len(),
            fields.certifications.len(),
            fields.experience.len()
        );

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_empty_document_has_no_fields() {
        let extractor =
            FieldExtractor::new(&ExtractionConfig::default(), &SkillCareerMap::builtin()).unwrap();
        let fields = extractor.extract(&ResumeText::new(""));

        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn test_extracts_all_fields() {
        let extractor =
            FieldExtractor::new(&ExtractionConfig::default(), &SkillCareerMap::builtin()).unwrap();
        let text = ResumeText::new(
            "Resume\nJane Doe\njane@doe.dev | +14155552671\nSkills: Rust, Docker\nM.Tech in CSE\nCertified Kubernetes Administrator\nIntern at Acme",
        );
        let fields = extractor.extract(&text);

        assert_eq!(fields.name, Field::Found("Jane Doe".to_string()));
        assert_eq!(fields.email, Field::Found("jane@doe.dev".to_string()));
        assert_eq!(fields.phone, Field::Found("+14155552671".to_string()));
        assert!(fields.skills.contains("rust"));
        assert!(fields.skills.contains("docker"));
        assert!(fields.skills.contains("kubernetes"));
        assert_eq!(fields.education.len(), 1);
        assert_eq!(fields.certifications.len(), 1);
        assert_eq!(fields.experience.len(), 1);
    }
}
