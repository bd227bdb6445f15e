// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ResumeError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub acquisition: AcquisitionConfig,
    pub grammar: GrammarConfig,
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub careers: CareerConfig,
}

/// Where the line-collecting extractors (education, certifications,
/// experience) look for candidate lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanScope {
    #[default]
    WholeDocument,
    Section,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsMode {
    /// Whole-word lookup of every skill in the career table; lower-cased.
    #[default]
    Keyword,
    /// Comma/bullet separated tokens under a "skills" heading; casing kept.
    Section,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub scan_scope: ScanScope,
    #[serde(default)]
    pub skills_mode: SkillsMode,
    #[serde(default)]
    pub experience_word_limit: Option<usize>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scan_scope: ScanScope::WholeDocument,
            skills_mode: SkillsMode::Keyword,
            experience_word_limit: Some(8),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AcquisitionConfig {
    pub ocr_fallback: bool,
    pub tesseract_path: String,
    pub pdftoppm_path: String,
    pub ocr_language: String,
    pub ocr_dpi: u32,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrammarConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub parallel_workers: usize,
    pub skip_patterns: Vec<String>,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CareerConfig {
    /// JSON object of `skill -> [career, ...]`; the built-in table is used when unset.
    pub map_path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RESUME_SIFT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ResumeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ResumeError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            acquisition: AcquisitionConfig {
                ocr_fallback: true,
                tesseract_path: "tesseract".to_string(),
                pdftoppm_path: "pdftoppm".to_string(),
                ocr_language: "eng".to_string(),
                ocr_dpi: 300,
                max_file_size_mb: 20,
            },
            grammar: GrammarConfig {
                enabled: false,
                endpoint: "http://localhost:8081".to_string(),
                language: "en-US".to_string(),
                timeout_secs: 30,
            },
            pipeline: PipelineConfig {
                parallel_workers: 4,
                skip_patterns: vec!["~$".to_string(), ".git/".to_string()],
                output_dir: PathBuf::from("./reports"),
            },
            careers: CareerConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.parallel_workers == 0 {
            return Err(ResumeError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.extraction.experience_word_limit == Some(0) {
            return Err(ResumeError::Config(
                "experience_word_limit must be greater than 0 (omit it to keep whole lines)"
                    .to_string(),
            ));
        }

        if self.acquisition.ocr_dpi == 0 {
            return Err(ResumeError::Config(
                "ocr_dpi must be greater than 0".to_string(),
            ));
        }

        if self.grammar.enabled && self.grammar.endpoint.trim().is_empty() {
            return Err(ResumeError::Config(
                "grammar.endpoint is required when grammar checking is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.extraction.experience_word_limit, Some(8));
        assert_eq!(config.extraction.scan_scope, ScanScope::WholeDocument);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = Config::default_config();
        config.pipeline.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_word_limit_rejected() {
        let mut config = Config::default_config();
        config.extraction.experience_word_limit = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[extraction]
scan_scope = "section"
skills_mode = "section"

[acquisition]
ocr_fallback = false
tesseract_path = "/usr/bin/tesseract"
pdftoppm_path = "/usr/bin/pdftoppm"
ocr_language = "eng"
ocr_dpi = 200
max_file_size_mb = 5

[grammar]
enabled = false
endpoint = "http://localhost:8081"
language = "en-US"
timeout_secs = 10

[pipeline]
parallel_workers = 2
skip_patterns = []
output_dir = "./out"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.extraction.scan_scope, ScanScope::Section);
        assert_eq!(config.extraction.skills_mode, SkillsMode::Section);
        assert_eq!(config.extraction.experience_word_limit, None);
        assert_eq!(config.acquisition.ocr_dpi, 200);
        assert!(config.careers.map_path.is_none());
    }
}
