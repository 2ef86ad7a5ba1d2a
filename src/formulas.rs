//! The seven readability formulas.
//!
//! Each one is a pure function of [`TextCounts`] and returns `0.0` instead of
//! dividing by zero. [`evaluate`] is what the engine calls; it skips the
//! arithmetic altogether for degenerate text.

use crate::counts::TextCounts;
use crate::policy::TextState;
use crate::result::ReadabilityResult;
use crate::util::ratio;

/// FORCAST is defined over a sample of this many words.
pub const FORCAST_SAMPLE_WORDS: usize = 150;

/// Thresholds that vary between published variants of the formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaParams {
    pub smog_min_sentences: usize,
    pub dale_chall_difficult_percent: f64,
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            smog_min_sentences: 0,
            dale_chall_difficult_percent: 5.0,
        }
    }
}

fn words_per_sentence(counts: &TextCounts) -> Option<f64> {
    ratio(counts.num_words, counts.num_sentences)
}

fn syllables_per_word(counts: &TextCounts) -> Option<f64> {
    ratio(counts.num_syllables, counts.num_words)
}

fn letters_per_word(counts: &TextCounts) -> Option<f64> {
    ratio(counts.num_letters, counts.num_words)
}

pub fn flesch_kincaid_grade_level(counts: &TextCounts) -> f64 {
    match (words_per_sentence(counts), syllables_per_word(counts)) {
        (Some(wps), Some(spw)) => 0.39 * wps + 11.8 * spw - 15.59,
        _ => 0.0,
    }
}

pub fn flesch_kincaid_reading_ease(counts: &TextCounts) -> f64 {
    match (words_per_sentence(counts), syllables_per_word(counts)) {
        (Some(wps), Some(spw)) => 206.835 - 1.015 * wps - 84.6 * spw,
        _ => 0.0,
    }
}

/// `L` is letters per 100 words, `S` sentences per 100 words.
pub fn coleman_liau_index(counts: &TextCounts) -> f64 {
    match (
        letters_per_word(counts),
        ratio(counts.num_sentences, counts.num_words),
    ) {
        (Some(lpw), Some(spw)) => 0.0588 * (lpw * 100.0) - 0.296 * (spw * 100.0) - 15.8,
        _ => 0.0,
    }
}

pub fn automated_readability_index(counts: &TextCounts) -> f64 {
    match (letters_per_word(counts), words_per_sentence(counts)) {
        (Some(lpw), Some(wps)) => 4.71 * lpw + 0.5 * wps - 21.43,
        _ => 0.0,
    }
}

/// Zero for text without a single complex word, and for samples shorter than
/// `min_sentences` (no minimum by default).
pub fn smog(counts: &TextCounts, min_sentences: usize) -> f64 {
    if counts.num_sentences < min_sentences || counts.num_complex_words == 0 {
        return 0.0;
    }
    match ratio(counts.num_complex_words * 30, counts.num_sentences) {
        Some(polysyllables) => 3.1291 + 1.0430 * polysyllables.sqrt(),
        None => 0.0,
    }
}

/// The 3.6365 adjustment applies only once the difficult-word percentage is
/// strictly above `difficult_percent`.
pub fn dale_chall(counts: &TextCounts, difficult_percent: f64) -> f64 {
    let (Some(difficult), Some(wps)) = (
        ratio(counts.num_difficult_words * 100, counts.num_words),
        words_per_sentence(counts),
    ) else {
        return 0.0;
    };

    let score = 0.1579 * difficult + 0.0496 * wps;
    if difficult > difficult_percent {
        score + 3.6365
    } else {
        score
    }
}

/// Single-syllable words in the leading sample, scaled to a 150-word sample.
pub fn forcast(counts: &TextCounts) -> f64 {
    match ratio(
        counts.forcast_sample_single_syllable * FORCAST_SAMPLE_WORDS,
        counts.forcast_sample_words,
    ) {
        Some(single_in_sample) => 20.0 - single_in_sample / 10.0,
        None => 0.0,
    }
}

/// All seven scores, or [`ReadabilityResult::ZERO`] for degenerate text.
pub fn evaluate(counts: &TextCounts, params: &FormulaParams) -> ReadabilityResult {
    match TextState::classify(counts) {
        TextState::Degenerate => ReadabilityResult::ZERO,
        TextState::Normal => ReadabilityResult {
            flesch_kincaid_grade_level: flesch_kincaid_grade_level(counts),
            flesch_kincaid_reading_ease: flesch_kincaid_reading_ease(counts),
            coleman_liau_index: coleman_liau_index(counts),
            automated_readability_index: automated_readability_index(counts),
            smog: smog(counts, params.smog_min_sentences),
            dale_chall: dale_chall(counts, params.dale_chall_difficult_percent),
            forcast: forcast(counts),
        },
    }
}
