// file: src/pipeline/processor.rs
// description: turns one resume document into a scored, structured report
// reference: acquires text, runs extractors, scores and recommends careers

use crate::acquisition::{self, DocumentTextExtractor, ResumeInput, TextSource};
use crate::careers::{CareerRecommender, SkillCareerMap};
use crate::config::Config;
use crate::error::Result;
use crate::extractor::FieldExtractor;
use crate::models::{ResumeReport, ResumeText};
use crate::scoring::{GrammarChecker, LanguageToolChecker, grammar_score, quality_score};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResumeProcessor {
    source: Box<dyn TextSource>,
    extractor: FieldExtractor,
    recommender: CareerRecommender,
    grammar: Option<Box<dyn GrammarChecker>>,
}

impl ResumeProcessor {
    /// Wires the default collaborators. The career table comes from
    /// `careers.map_path` when set, the built-in table otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let table = match &config.careers.map_path {
            Some(path) => SkillCareerMap::from_json_file(path)?,
            None => SkillCareerMap::builtin(),
        };

        let grammar: Option<Box<dyn GrammarChecker>> = if config.grammar.enabled {
            Some(Box::new(LanguageToolChecker::new(&config.grammar)?))
        } else {
            None
        };

        let source = Box::new(DocumentTextExtractor::new(&config.acquisition));
        Self::with_parts(config, Arc::new(table), source, grammar)
    }

    pub fn with_parts(
        config: &Config,
        table: Arc<SkillCareerMap>,
        source: Box<dyn TextSource>,
        grammar: Option<Box<dyn GrammarChecker>>,
    ) -> Result<Self> {
        Ok(Self {
            source,
            extractor: FieldExtractor::new(&config.extraction, &table)?,
            recommender: CareerRecommender::new(table),
            grammar,
        })
    }

    /// Full pipeline for one document. Any acquisition or grammar failure
    /// aborts the whole call; there is no partial report.
    pub fn parse_resume(&self, input: &ResumeInput, file_name: Option<&str>) -> Result<ResumeReport> {
        let file_name = input.resolve_filename(file_name)?;
        info!("Parsing resume: {}", file_name);

        // Reject unknown formats before touching the file.
        acquisition::DocumentFormat::from_filename(&file_name)?;

        let data = acquisition::read_input(input)?;
        let text = self.source.extract_text(&data, &file_name)?;

        self.analyze_text(&file_name, &text)
    }

    /// Same pipeline starting from already-extracted text.
    pub fn analyze_text(&self, file_name: &str, text: &str) -> Result<ResumeReport> {
        let text = ResumeText::new(text);
        let fields = self.extractor.extract(&text);
        let quality = quality_score(&fields, &text);

        let grammar = match &self.grammar {
            Some(checker) => {
                let issues = checker.check(text.text())?;
                Some(grammar_score(text.text(), &issues))
            }
            None => None,
        };

        let recommendations = self.recommender.recommend(&fields.skills);

        debug!(
            "{}: {} of 7 fields found, score {}",
            file_name,
            fields.found_count(),
            quality.score
        );

        Ok(ResumeReport {
            file_name: file_name.to_string(),
            content_hash: text.content_hash(),
            word_count: text.word_count(),
            score: quality.score,
            fields,
            quality,
            grammar,
            recommendations,
        })
    }
}
