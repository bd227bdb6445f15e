// file: src/pipeline/progress.rs
// description: batch counters and the progress bar shown while parsing
// reference: uses indicatif for progress bars and tracks parsing metrics

use crate::acquisition::DocumentFormat;
use crate::models::ResumeReport;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::sync::Mutex;
use std::time::Instant;

/// Parsed and failed counts for one document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatCounts {
    pub parsed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchStats {
    pub pdf: FormatCounts,
    pub word: FormatCounts,
    pub image: FormatCounts,
    pub skills_found: usize,
    /// Reports whose careers came from the general fallback.
    pub general_recommendations: usize,
    pub score_total: u64,
    pub total_bytes_processed: u64,
    pub duration_secs: u64,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self, format: DocumentFormat) -> FormatCounts {
        match format {
            DocumentFormat::Pdf => self.pdf,
            DocumentFormat::Word => self.word,
            DocumentFormat::Image => self.image,
        }
    }

    fn counts_mut(&mut self, format: DocumentFormat) -> &mut FormatCounts {
        match format {
            DocumentFormat::Pdf => &mut self.pdf,
            DocumentFormat::Word => &mut self.word,
            DocumentFormat::Image => &mut self.image,
        }
    }

    pub fn files_parsed(&self) -> usize {
        self.pdf.parsed + self.word.parsed + self.image.parsed
    }

    pub fn files_failed(&self) -> usize {
        self.pdf.failed + self.word.failed + self.image.failed
    }

    pub fn record_parsed(&mut self, format: DocumentFormat, report: &ResumeReport, bytes: u64) {
        self.counts_mut(format).parsed += 1;
        self.skills_found += report.fields.skill_count();
        self.score_total += u64::from(report.score);
        self.total_bytes_processed += bytes;
        if report.recommendations.fallback {
            self.general_recommendations += 1;
        }
    }

    pub fn record_failed(&mut self, format: DocumentFormat) {
        self.counts_mut(format).failed += 1;
    }

    pub fn average_score(&self) -> f64 {
        match self.files_parsed() {
            0 => 0.0,
            parsed => self.score_total as f64 / parsed as f64,
        }
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_parsed() + self.files_failed();
        if total == 0 {
            return 0.0;
        }
        (self.files_parsed() as f64 / total as f64) * 100.0
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.files_parsed() as f64 / self.duration_secs as f64
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} parsed, {} failed ({:.1}% success, avg score {:.1}) in {}s",
            self.files_parsed().to_string().green(),
            self.files_failed().to_string().red(),
            self.success_rate(),
            self.average_score(),
            self.duration_secs
        )
    }

    /// `pdf 3/1 · word 2/0 · image 0/0` as parsed/failed.
    pub fn format_breakdown(&self) -> String {
        [DocumentFormat::Pdf, DocumentFormat::Word, DocumentFormat::Image]
            .iter()
            .map(|format| {
                let counts = self.counts(*format);
                format!("{} {}/{}", format, counts.parsed, counts.failed)
            })
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Shared by all parse tasks of a batch; the bar advances once per file.
pub struct ProgressTracker {
    bar: ProgressBar,
    stats: Mutex<BatchStats>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_files as u64);
        bar.set_style(bar_style(colored));
        Self::build(bar)
    }

    /// Tracker that counts but never draws; used for quiet runs and tests.
    pub fn hidden(total_files: usize) -> Self {
        Self::build(ProgressBar::with_draw_target(
            Some(total_files as u64),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn build(bar: ProgressBar) -> Self {
        Self {
            bar,
            stats: Mutex::new(BatchStats::new()),
            start_time: Instant::now(),
        }
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn record_parsed(&self, format: DocumentFormat, report: &ResumeReport, bytes: u64) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_parsed(format, report, bytes);
        }
        self.bar.inc(1);
    }

    pub fn record_failed(&self, format: DocumentFormat) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_failed(format);
        }
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Batch complete");
    }

    pub fn get_stats(&self) -> BatchStats {
        let mut stats = self
            .stats
            .lock()
            .map(|stats| stats.clone())
            .unwrap_or_default();
        stats.duration_secs = self.start_time.elapsed().as_secs();
        stats
    }
}

fn bar_style(colored: bool) -> ProgressStyle {
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}", "=>-")
    };

    ProgressStyle::default_bar()
        .template(template)
        .expect("Failed to create progress bar template")
        .progress_chars(chars)
}
