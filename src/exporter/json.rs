// file: src/exporter/json.rs
// description: json export of resume reports and batch manifests

use crate::error::{ResumeError, Result};
use crate::models::ResumeReport;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_reports: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ResumeError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes the report as `<source>.json` and returns the written file name.
    /// `source` is the resume's path relative to the batch root (or its bare
    /// file name); the extension and directories are kept in the name so
    /// `a/cv.pdf`, `b/cv.pdf` and `a/cv.docx` never share an output file.
    pub fn export_report(&self, report: &ResumeReport, source: &str, pretty: bool) -> Result<String> {
        let file_name = report_file_name(source, &report.content_hash);
        let path = self.output_dir.join(&file_name);

        let json = to_json(report, pretty)?;
        fs::write(&path, json).map_err(|source| ResumeError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!("Exported {} to {}", report.file_name, path.display());
        Ok(file_name)
    }

    pub fn write_manifest(&self, files: Vec<String>) -> Result<ExportManifest> {
        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_reports: files.len(),
            files,
        };

        let path = self.output_dir.join(MANIFEST_FILE);
        fs::write(&path, to_json(&manifest, true)?).map_err(|source| {
            ResumeError::FileOperation {
                path: path.clone(),
                source,
            }
        })?;

        info!(
            "Export complete: {} reports exported",
            manifest.total_reports
        );
        Ok(manifest)
    }
}

/// `dir/sub/cv.pdf` becomes `dir__sub__cv.pdf.json`.
pub fn report_file_name(source: &str, content_hash: &str) -> String {
    let flattened = source
        .trim_matches(|c: char| c == '/' || c == '\\')
        .split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("__");

    if flattened.is_empty() {
        format!("{}.json", content_hash.chars().take(16).collect::<String>())
    } else {
        format!("{}.json", flattened)
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CareerRecommendation, ExtractedFields, Field, QualityScore};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn report(file_name: &str) -> ResumeReport {
        ResumeReport {
            file_name: file_name.to_string(),
            content_hash: "ab".repeat(32),
            word_count: 3,
            fields: ExtractedFields {
                email: Field::Found("jane@doe.dev".to_string()),
                ..Default::default()
            },
            score: 10,
            quality: QualityScore::from_components(vec![]),
            grammar: None,
            recommendations: CareerRecommendation::general(),
        }
    }

    #[test]
    fn test_exporter_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports").join("2024");
        let exporter = JsonExporter::new(&nested).unwrap();
        assert!(exporter.output_dir().is_dir());
    }

    #[test]
    fn test_export_report() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let written = exporter.export_report(&report("jane.pdf"), "jane.pdf", false).unwrap();
        assert_eq!(written, "jane.pdf.json");

        let content = fs::read_to_string(dir.path().join("jane.pdf.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["email"], "jane@doe.dev");
        assert!(value["name"].is_null());
        assert_eq!(value["recommendations"]["fallback"], true);
    }

    #[test]
    fn test_reports_sharing_a_stem_get_separate_files() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let written: Vec<String> = [
            ("jane.pdf", "jane.pdf"),
            ("jane.docx", "jane.docx"),
            ("cv.pdf", "a/cv.pdf"),
            ("cv.pdf", "b\\cv.pdf"),
        ]
        .iter()
        .map(|(name, source)| exporter.export_report(&report(name), source, true).unwrap())
        .collect();

        assert_eq!(
            written,
            vec![
                "jane.pdf.json".to_string(),
                "jane.docx.json".to_string(),
                "a__cv.pdf.json".to_string(),
                "b__cv.pdf.json".to_string(),
            ]
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[test]
    fn test_report_file_name_without_source() {
        assert_eq!(report_file_name("", &"ab".repeat(32)), "abababababababab.json");
        assert_eq!(report_file_name("./cvs/x.png", "00"), "cvs__x.png.json");
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let manifest = exporter
            .write_manifest(vec!["a.json".to_string(), "b.json".to_string()])
            .unwrap();
        assert_eq!(manifest.total_reports, 2);

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let parsed: ExportManifest = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.files, vec!["a.json".to_string(), "b.json".to_string()]);
        assert!(chrono::DateTime::parse_from_rfc3339(&parsed.exported_at).is_ok());
    }
}
