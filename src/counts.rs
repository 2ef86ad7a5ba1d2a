//! Lexical counts over a [`Document`]: the raw inputs of every formula.

use crate::document::Document;
use crate::language::FamiliarWordList;
use serde::{Deserialize, Serialize};

/// Words with at least this many syllables are complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub num_sentences: usize,
    pub num_words: usize,
    pub num_syllables: usize,
    /// Letters across all words, for Coleman-Liau and ARI.
    pub num_letters: usize,
    pub num_complex_words: usize,
    pub num_difficult_words: usize,
    /// Single-syllable words across the whole text.
    pub num_single_syllable_words: usize,
    /// Words in the leading FORCAST sample (at most the configured length).
    pub forcast_sample_words: usize,
    pub forcast_sample_single_syllable: usize,
}

/// Count everything the formulas need in a single pass.
///
/// Sentences without tokens are skipped entirely; sentences holding only
/// punctuation still count as sentences.
pub fn count(
    document: &Document,
    familiar: &FamiliarWordList,
    forcast_sample: usize,
) -> TextCounts {
    let mut counts = TextCounts::default();

    for sentence in document.sentences.iter().filter(|s| !s.tokens.is_empty()) {
        counts.num_sentences += 1;

        for word in sentence.words() {
            counts.num_words += 1;
            counts.num_syllables += word.syllables;
            counts.num_letters += word.letters();

            if word.syllables >= COMPLEX_WORD_SYLLABLES {
                counts.num_complex_words += 1;
            }
            if !familiar.contains(&word.text) {
                counts.num_difficult_words += 1;
            }

            let single = word.syllables == 1;
            if single {
                counts.num_single_syllable_words += 1;
            }
            if counts.forcast_sample_words < forcast_sample {
                counts.forcast_sample_words += 1;
                if single {
                    counts.forcast_sample_single_syllable += 1;
                }
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Sentence;
    use crate::segment::{Segmenter, UnicodeSegmenter};

    fn familiar() -> FamiliarWordList {
        FamiliarWordList::from_words("test", ["i", "am", "the", "best", "four", "words"]).unwrap()
    }

    fn count_text(text: &str) -> TextCounts {
        count(&UnicodeSegmenter.segment(text), &familiar(), 150)
    }

    #[test]
    fn test_four_words_five_syllables() {
        let counts = count_text("I contain four words.");

        assert_eq!(counts.num_sentences, 1);
        assert_eq!(counts.num_words, 4);
        assert_eq!(counts.num_syllables, 5);
        assert_eq!(counts.num_letters, 17);
    }

    #[test]
    fn test_two_sentences() {
        let counts = count_text("I am 2 sentences. I am the best panda?");
        assert_eq!(counts.num_sentences, 2);
        assert_eq!(counts.num_words, 8);
    }

    #[test]
    fn test_difficult_and_complex_words() {
        let counts = count_text("I am the best elephant.");

        assert_eq!(counts.num_difficult_words, 1);
        assert_eq!(counts.num_complex_words, 1);
        assert_eq!(counts.num_single_syllable_words, 4);
    }

    #[test]
    fn test_empty_and_symbol_text() {
        assert_eq!(count_text(""), TextCounts::default());

        let counts = count_text("#");
        assert_eq!(counts.num_words, 0);
        assert_eq!(counts.num_syllables, 0);
    }

    #[test]
    fn test_empty_sentences_contribute_nothing() {
        let doc = Document::new(vec![
            Sentence::default(),
            Sentence::new(["four", "words"]),
            Sentence::default(),
        ]);

        let counts = count(&doc, &familiar(), 150);
        assert_eq!(counts.num_sentences, 1);
        assert_eq!(counts.num_words, 2);
    }

    #[test]
    fn test_curly_apostrophe_is_not_difficult() {
        let list = FamiliarWordList::from_words("test", ["don't", "go"]).unwrap();
        let curly = count(&UnicodeSegmenter.segment("Don\u{2019}t go."), &list, 150);
        let plain = count(&UnicodeSegmenter.segment("Don't go."), &list, 150);

        assert_eq!(curly.num_words, 2);
        assert_eq!(curly.num_difficult_words, 0);
        assert_eq!(curly, plain);
    }

    #[test]
    fn test_forcast_sample_is_leading_words() {
        let doc = Document::new(vec![Sentence::new([
            "cat", "dog", "elephant", "sun", "umbrella",
        ])]);

        let counts = count(&doc, &familiar(), 3);
        assert_eq!(counts.forcast_sample_words, 3);
        assert_eq!(counts.forcast_sample_single_syllable, 2);
        assert_eq!(counts.num_single_syllable_words, 3);
    }
}
