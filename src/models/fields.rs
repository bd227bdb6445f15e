// file: src/models/fields.rs
// description: structured fields extracted from a resume
// reference: internal data structures

use crate::models::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Every field is derived independently from the raw text; none depends on
/// another field's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Field<String>,
    pub email: Field<String>,
    pub phone: Field<String>,
    pub skills: BTreeSet<String>,
    pub education: Field<Vec<String>>,
    pub certifications: Field<Vec<String>>,
    pub experience: Field<Vec<String>>,
}

impl ExtractedFields {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn found_count(&self) -> usize {
        [
            self.name.is_found(),
            self.email.is_found(),
            self.phone.is_found(),
            !self.skills.is_empty(),
            self.education.is_found(),
            self.certifications.is_found(),
            self.experience.is_found(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}
