use crate::error::{ReadabilityError, Result};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

pub const BUNDLED_LIST: &str = "dale_chall";

/// On-disk shape of a word list resource.
#[derive(Deserialize, Clone, Debug)]
struct WordListFile {
    name: String,
    #[allow(dead_code)]
    size: u32,
    words: Vec<String>,
}

/// Immutable set of familiar words used by Dale-Chall.
///
/// Build one at startup and share it behind an `Arc`; lookups never mutate it.
#[derive(Clone, Debug)]
pub struct FamiliarWordList {
    name: String,
    words: HashSet<String>,
}

impl FamiliarWordList {
    /// The Dale-Chall list compiled into the binary.
    pub fn bundled() -> Result<Self> {
        read_word_list_from_dir(&format!("{BUNDLED_LIST}.json"))
    }

    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| fold_apostrophes(w.as_ref().trim()).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(ReadabilityError::WordListEmpty(name));
        }

        info!(list = %name, size = words.len(), "loaded familiar word list");
        Ok(Self { name, words })
    }

    /// Parse the JSON resource format: `{"name": .., "size": .., "words": [..]}`.
    pub fn from_json(source: &str, contents: &str) -> Result<Self> {
        let file: WordListFile =
            from_str(contents).map_err(|e| ReadabilityError::WordListMalformed {
                name: source.to_string(),
                source: e,
            })?;
        Self::from_words(file.name, file.words)
    }

    /// Plain text, one word per line. Blank lines and `#` comments are skipped.
    pub fn from_lines(name: impl Into<String>, contents: &str) -> Result<Self> {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Self::from_words(name, words)
    }

    /// Load a caller-supplied list. `.json` files use the resource format,
    /// anything else is read as plain text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ReadabilityError::WordListMissing(path.display().to_string())
            }
            std::io::ErrorKind::InvalidData => {
                ReadabilityError::WordListEncoding(path.display().to_string())
            }
            _ => ReadabilityError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let name = path.display().to_string();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&name, &contents),
            _ => Self::from_lines(name, &contents),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership. Trailing punctuation is ignored and a
    /// typographic apostrophe matches a plain one.
    pub fn contains(&self, word: &str) -> bool {
        let key = normalize(word);
        !key.is_empty() && self.words.contains(&key)
    }
}

fn fold_apostrophes(word: &str) -> String {
    word.replace('\u{2019}', "'")
}

fn normalize(word: &str) -> String {
    fold_apostrophes(word)
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

fn read_word_list_from_dir(file_name: &str) -> Result<FamiliarWordList> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| ReadabilityError::WordListMissing(file_name.to_string()))?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| ReadabilityError::WordListEncoding(file_name.to_string()))?;

    FamiliarWordList::from_json(file_name, contents)
}
