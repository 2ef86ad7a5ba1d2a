use crate::language::count_syllables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    /// Punctuation, symbols, numbers: anything without a letter in it.
    NonWord,
}

/// A token produced by a segmenter, classified once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Zero for non-words.
    pub syllables: usize,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_word = text.chars().any(char::is_alphabetic);
        let (kind, syllables) = if is_word {
            (TokenKind::Word, count_syllables(&text))
        } else {
            (TokenKind::NonWord, 0)
        };
        Self {
            text,
            kind,
            syllables,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Alphabetic characters only.
    pub fn letters(&self) -> usize {
        self.text.chars().filter(|c| c.is_alphabetic()).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Token::new).collect(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word())
    }
}

/// Sentences of tokens, as handed over by a segmenter. Read-only to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(Sentence::words)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}
