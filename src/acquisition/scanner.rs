// file: src/acquisition/scanner.rs
// description: directory walking and resume discovery with filtering
// reference: https://docs.rs/walkdir

use crate::acquisition::format::DocumentFormat;
use crate::error::{ResumeError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    skip_patterns: Vec<String>,
    max_file_size_mb: usize,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub format: DocumentFormat,
    pub size: u64,
}

impl FileScanner {
    pub fn new(skip_patterns: Vec<String>, max_file_size_mb: usize) -> Self {
        Self {
            skip_patterns,
            max_file_size_mb,
        }
    }

    /// Every supported resume under `root`, ordered by relative path.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        if !root.is_dir() {
            return Err(ResumeError::Validation(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Ok(format) = DocumentFormat::from_filename(&file_name) else {
                continue;
            };

            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let size = metadata.len();
            let max_size = (self.max_file_size_mb * 1024 * 1024) as u64;
            if max_size > 0 && size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                format,
                size,
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        info!("Found {} resumes", files.len());
        Ok(files)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}
