// file: src/extractor/patterns.rs
// description: compiled regex patterns and keyword tables for field extraction
// reference: https://docs.rs/regex

use crate::extractor::keywords::KeywordSet;
use lazy_static::lazy_static;
use regex::Regex;

/// Degree keywords, most senior first. The index is the education rank.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "phd",
    "doctorate",
    "m.phil",
    "msc by research",
    "m.tech",
    "m.e",
    "m.sc",
    "mcom",
    "ma",
    "m.arch",
    "mpharm",
    "llm",
    "m.ed",
    "master of technology",
    "master of engineering",
    "master of science",
    "master of commerce",
    "master of arts",
    "master of architecture",
    "master of pharmacy",
    "master of law",
    "master of education",
    "mba",
    "mca",
    "md",
    "ms",
    "mpt",
    "mch",
    "mdes",
    "mfa",
    "m.lib",
    "m.voc",
    "mstat",
    "b.tech",
    "b.e",
    "b.sc",
    "bcom",
    "ba",
    "b.arch",
    "bpharm",
    "llb",
    "b.ed",
    "bachelor of technology",
    "bachelor of engineering",
    "bachelor of science",
    "bachelor of commerce",
    "bachelor of arts",
    "bachelor of architecture",
    "bachelor of pharmacy",
    "bachelor of law",
    "bachelor of education",
    "bba",
    "bca",
    "bhms",
    "bams",
    "bpt",
    "bds",
    "bfa",
    "bdes",
    "b.lib",
    "b.voc",
    "bstat",
    "diploma",
    "pg diploma",
    "postgraduate diploma",
    "advanced diploma",
    "associate degree",
    "graduation",
    "undergraduate",
    "degree",
    "sslc",
    "puc",
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certification",
    "certified",
    "course",
    "training",
    "license",
    "workshop",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "intern",
    "worked at",
    "company",
    "responsibilities",
    "roles",
    "designation",
];

lazy_static! {
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).expect("EMAIL regex is valid");

    // Optional +country code, optional (area) code, then 3-4 and 3-4 digit groups.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:(?:\+\d{1,3}[-.\s]?)?\(\d{2,4}\)|(?:\+\d{1,3}[-.\s]?|\b(?:\d{1,3}[-.\s])?)\d{2,4})[-.\s]?\d{3,4}[-.\s]?\d{3,4}\b"
    ).expect("PHONE regex is valid");

    pub static ref TITLE_MARKER: Regex = Regex::new(
        r"(?i)\b(?:cv|resume)\b"
    ).expect("TITLE_MARKER regex is valid");

    pub static ref SOFT_SKILLS: Regex = Regex::new(
        r"(?i)(?:communication|teamwork|leadership|creative|problem solving|adaptability)"
    ).expect("SOFT_SKILLS regex is valid");

    pub static ref SECTION_HEADERS: Regex = Regex::new(
        r"(?i)(?:education|experience|skills|projects|certification)"
    ).expect("SECTION_HEADERS regex is valid");

    // Commas and bullet glyphs separate entries inside a skills section.
    pub static ref SKILL_SEPARATOR: Regex = Regex::new(
        r"[,\x{2022}\x{25CF}\x{25AA}\x{00B7}]"
    ).expect("SKILL_SEPARATOR regex is valid");

    pub static ref DEGREES: KeywordSet = KeywordSet::new(DEGREE_KEYWORDS)
        .expect("DEGREE_KEYWORDS are valid");

    pub static ref CERTIFICATIONS: KeywordSet = KeywordSet::new(CERTIFICATION_KEYWORDS)
        .expect("CERTIFICATION_KEYWORDS are valid");

    pub static ref EXPERIENCE: KeywordSet = KeywordSet::new(EXPERIENCE_KEYWORDS)
        .expect("EXPERIENCE_KEYWORDS are valid");
}
