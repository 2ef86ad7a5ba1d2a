// Library surface: the scoring core plus the pieces the CLI is built from.
// The binary in main.rs only parses arguments and wires these together.
pub mod app_dirs;
pub mod config;
pub mod counts;
pub mod document;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod language;
pub mod policy;
pub mod report;
pub mod result;
pub mod sample;
pub mod segment;
pub mod util;

pub use counts::TextCounts;
pub use document::{Document, Sentence, Token, TokenKind};
pub use engine::ReadabilityEngine;
pub use error::{ReadabilityError, Result};
pub use language::FamiliarWordList;
pub use result::{Metric, ReadabilityResult};
pub use segment::{Segmenter, UnicodeSegmenter};
