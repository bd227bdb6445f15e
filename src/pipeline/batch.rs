// file: src/pipeline/batch.rs
// description: concurrent parsing of many resumes with progress reporting
// reference: bounded fan-out over blocking workers

use crate::acquisition::{ResumeInput, ScannedFile};
use crate::error::{ResumeError, Result};
use crate::models::ResumeReport;
use crate::pipeline::processor::ResumeProcessor;
use crate::pipeline::progress::{BatchStats, ProgressTracker};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Result of one file in a batch run.
#[derive(Debug)]
pub struct BatchItem {
    pub file: ScannedFile,
    pub outcome: Result<ResumeReport>,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub items: Vec<BatchItem>,
    pub stats: BatchStats,
}

impl BatchOutcome {
    pub fn reports(&self) -> impl Iterator<Item = (&ScannedFile, &ResumeReport)> {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().ok().map(|r| (&item.file, r)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ScannedFile, &ResumeError)> {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().err().map(|e| (&item.file, e)))
    }
}

pub struct BatchRunner {
    processor: Arc<ResumeProcessor>,
    max_concurrent_tasks: usize,
    show_progress: bool,
    colored: bool,
}

impl BatchRunner {
    pub fn new(processor: Arc<ResumeProcessor>, parallel_workers: usize) -> Self {
        Self {
            processor,
            max_concurrent_tasks: parallel_workers.max(1),
            show_progress: true,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    /// Parses every file; a failure is recorded against its file and never
    /// stops the batch. Items come back ordered by relative path.
    pub async fn run(&self, files: Vec<ScannedFile>) -> BatchOutcome {
        info!(
            "Parsing {} resumes with {} concurrent tasks",
            files.len(),
            self.max_concurrent_tasks
        );

        let progress = Arc::new(if self.show_progress {
            ProgressTracker::with_color(files.len(), self.colored)
        } else {
            ProgressTracker::hidden(files.len())
        });

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_tasks));

        let tasks = files.into_iter().map(|file| {
            let semaphore = semaphore.clone();
            let processor = self.processor.clone();
            let progress = progress.clone();

            async move {
                let _permit = semaphore.acquire_owned().await.ok();

                progress.set_message(file.relative_path.clone());
                let parsed = tokio::task::spawn_blocking({
                    let path = file.path.clone();
                    move || processor.parse_resume(&ResumeInput::from_path(path), None)
                })
                .await;

                let outcome = match parsed {
                    Ok(Ok(report)) => {
                        progress.record_parsed(file.format, &report, file.size);
                        Ok(report)
                    }
                    Ok(Err(e)) => {
                        progress.record_failed(file.format);
                        warn!("Failed to parse {}: {}", file.relative_path, e);
                        Err(e)
                    }
                    Err(e) => {
                        progress.record_failed(file.format);
                        error!("Parse task panicked: {}", e);
                        Err(ResumeError::Validation(format!("Parse task failed: {}", e)))
                    }
                };

                BatchItem { file, outcome }
            }
        });

        let mut items: Vec<BatchItem> = stream::iter(tasks)
            .buffer_unordered(self.max_concurrent_tasks)
            .collect()
            .await;

        items.sort_by(|a, b| a.file.relative_path.cmp(&b.file.relative_path));

        let stats = progress.get_stats();
        progress.finish();
        log_final_stats(&stats);

        BatchOutcome { items, stats }
    }
}

fn log_final_stats(stats: &BatchStats) {
    info!("=== Batch Summary ===");
    info!("Duration: {} seconds", stats.duration_secs);
    info!("Files parsed: {}", stats.files_parsed());
    info!("Files failed: {}", stats.files_failed());
    info!("By format (parsed/failed): {}", stats.format_breakdown());
    info!("Success rate: {:.2}%", stats.success_rate());
    info!("Average score: {:.1}", stats.average_score());
    info!("Skills found: {}", stats.skills_found);
    info!("General recommendations: {}", stats.general_recommendations);
    info!(
        "Processing speed: {:.2} files/sec",
        stats.files_per_second()
    );
    info!("=====================");
}
