// file: src/careers/mod.rs
// description: career recommendation module exports
// reference: internal module structure

pub mod recommender;
pub mod table;

pub use recommender::CareerRecommender;
pub use table::SkillCareerMap;
