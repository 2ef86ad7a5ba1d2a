use crate::app_dirs::AppDirs;
use crate::formulas::{FormulaParams, FORCAST_SAMPLE_WORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Custom familiar-word list; the bundled Dale-Chall list when unset.
    pub word_list: Option<PathBuf>,
    pub smog_min_sentences: usize,
    pub dale_chall_difficult_percent: f64,
    pub forcast_sample_words: usize,
    /// Collapse whitespace runs before segmenting (CLI only).
    pub collapse_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        let params = FormulaParams::default();
        Self {
            word_list: None,
            smog_min_sentences: params.smog_min_sentences,
            dale_chall_difficult_percent: params.dale_chall_difficult_percent,
            forcast_sample_words: FORCAST_SAMPLE_WORDS,
            collapse_whitespace: true,
        }
    }
}

impl Config {
    /// Replace values the formulas cannot use with their defaults.
    pub fn sanitized(mut self) -> Self {
        if self.forcast_sample_words == 0 {
            warn!(
                default = FORCAST_SAMPLE_WORDS,
                "forcast_sample_words must be positive, using the default"
            );
            self.forcast_sample_words = FORCAST_SAMPLE_WORDS;
        }
        self
    }
}

impl From<&Config> for FormulaParams {
    fn from(cfg: &Config) -> Self {
        Self {
            smog_min_sentences: cfg.smog_min_sentences,
            dale_chall_difficult_percent: cfg.dale_chall_difficult_percent,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path =
            AppDirs::config_path().unwrap_or_else(|| PathBuf::from("readability_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg.sanitized(),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "ignoring unreadable config")
                }
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
