//! Turning raw text into a [`Document`].
//!
//! Scoring only ever sees a `Document`; how it was produced is up to the
//! caller. Text is expected to be pre-normalized (encoding repaired,
//! whitespace collapsed) before it gets here.

use crate::document::{Document, Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

pub trait Segmenter {
    fn segment(&self, text: &str) -> Document;
}

/// UAX#29 sentence and word boundaries. Whitespace runs are dropped, every
/// other boundary span becomes a token ("words." gives "words" and ".").
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Document {
        let sentences = text
            .split_sentence_bounds()
            .filter(|s| !s.trim().is_empty())
            .map(|s| Sentence {
                tokens: s
                    .split_word_bounds()
                    .filter(|w| !w.trim().is_empty())
                    .map(Token::new)
                    .collect(),
            })
            .collect();

        Document::new(sentences)
    }
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Document,
{
    fn segment(&self, text: &str) -> Document {
        self(text)
    }
}
