// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod acquisition;
pub mod careers;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod utils;

pub use acquisition::{
    DocumentFormat, DocumentTextExtractor, FileScanner, ResumeInput, ScannedFile, TextSource,
};
pub use careers::{CareerRecommender, SkillCareerMap};
pub use config::{
    AcquisitionConfig, CareerConfig, Config, ExtractionConfig, GrammarConfig, PipelineConfig,
    ScanScope, SkillsMode,
};
pub use error::{ResumeError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use extractor::FieldExtractor;
pub use models::{
    CareerRecommendation, ExtractedFields, Field, GrammarScore, QualityScore, ResumeReport,
    ResumeText,
};
pub use pipeline::{BatchOutcome, BatchRunner, BatchStats, ResumeProcessor};
pub use scoring::{GrammarChecker, LanguageToolChecker};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let processor = ResumeProcessor::from_config(&config).unwrap();
        let report = processor.analyze_text("cv.pdf", "Jane Doe\njane@doe.dev").unwrap();
        assert_eq!(report.fields.email, Field::Found("jane@doe.dev".to_string()));
    }
}
