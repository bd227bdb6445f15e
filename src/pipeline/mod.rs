// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod batch;
mod processor;
mod progress;

pub use batch::{BatchItem, BatchOutcome, BatchRunner};
pub use processor::ResumeProcessor;
pub use progress::{BatchStats, FormatCounts, ProgressTracker};
