use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("Word list not found: {0}")]
    WordListMissing(String),

    #[error("Word list is not valid UTF-8: {0}")]
    WordListEncoding(String),

    #[error("Malformed word list {name}: {source}")]
    WordListMalformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Word list is empty: {0}")]
    WordListEmpty(String),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed sample {path}: {source}")]
    SampleMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;
