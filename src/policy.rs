use crate::counts::TextCounts;

/// Whether a text can be scored at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextState {
    /// At least one word (and therefore at least one sentence).
    Normal,
    /// No countable words: empty input, whitespace, punctuation or numbers only.
    Degenerate,
}

impl TextState {
    pub fn classify(counts: &TextCounts) -> Self {
        if counts.num_words == 0 || counts.num_sentences == 0 {
            TextState::Degenerate
        } else {
            TextState::Normal
        }
    }

    pub fn is_degenerate(self) -> bool {
        self == TextState::Degenerate
    }
}
