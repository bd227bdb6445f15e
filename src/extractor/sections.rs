// file: src/extractor/sections.rs
// description: section scanning shared by the line-collecting extractors
// reference: heading-delimited section detection

use crate::config::ScanScope;
use crate::models::ResumeText;

/// Lines belonging to the first section whose heading contains `header`
/// (case-insensitive). Blank lines directly under the heading are skipped;
/// the section then runs until the next blank line or a line ending in `:`.
pub fn section_lines<'a>(text: &'a ResumeText, header: &str) -> Vec<&'a str> {
    let header = header.to_lowercase();
    let mut raw = text.raw_lines();

    if !raw.any(|line| line.to_lowercase().contains(&header)) {
        return Vec::new();
    }

    raw.skip_while(|line| line.trim().is_empty())
        .take_while(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.ends_with(':')
        })
        .map(str::trim)
        .collect()
}

/// Candidate lines for a line-collecting extractor under the given scope.
pub fn candidate_lines<'a>(text: &'a ResumeText, scope: ScanScope, header: &str) -> Vec<&'a str> {
    match scope {
        ScanScope::WholeDocument => text.lines().iter().map(String::as_str).collect(),
        ScanScope::Section => section_lines(text, header),
    }
}

/// Keeps the first occurrence of every line, preserving order.
pub fn dedup_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}
