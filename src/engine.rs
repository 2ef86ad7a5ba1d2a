use crate::config::Config;
use crate::counts::{self, TextCounts};
use crate::document::Document;
use crate::error::Result;
use crate::formulas::{self, FormulaParams};
use crate::language::FamiliarWordList;
use crate::policy::TextState;
use crate::result::ReadabilityResult;
use crate::segment::Segmenter;
use std::sync::Arc;
use tracing::debug;

/// Scores documents against a shared, immutable familiar-word list.
///
/// Cloning is cheap and clones share the word list, so one engine can be
/// handed to as many threads as needed.
#[derive(Debug, Clone)]
pub struct ReadabilityEngine {
    familiar: Arc<FamiliarWordList>,
    params: FormulaParams,
    forcast_sample_words: usize,
}

impl ReadabilityEngine {
    pub fn new(familiar: Arc<FamiliarWordList>, config: &Config) -> Self {
        Self {
            familiar,
            params: FormulaParams::from(config),
            forcast_sample_words: config.forcast_sample_words,
        }
    }

    /// Load the word list named by `config` (or the bundled one). Fails here,
    /// at startup, rather than on first use.
    pub fn from_config(config: &Config) -> Result<Self> {
        let familiar = match &config.word_list {
            Some(path) => FamiliarWordList::from_path(path)?,
            None => FamiliarWordList::bundled()?,
        };
        Ok(Self::new(Arc::new(familiar), config))
    }

    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn familiar_words(&self) -> &FamiliarWordList {
        &self.familiar
    }

    pub fn counts(&self, document: &Document) -> TextCounts {
        counts::count(document, &self.familiar, self.forcast_sample_words)
    }

    pub fn score(&self, document: &Document) -> ReadabilityResult {
        let counts = self.counts(document);
        let state = TextState::classify(&counts);
        debug!(?counts, ?state, "scoring document");
        formulas::evaluate(&counts, &self.params)
    }

    pub fn score_text<S>(&self, text: &str, segmenter: &S) -> ReadabilityResult
    where
        S: Segmenter + ?Sized,
    {
        self.score(&segmenter.segment(text))
    }
}
