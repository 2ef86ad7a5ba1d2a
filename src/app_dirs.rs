use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("READABILITY_SCORES_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.json"));
        }
        ProjectDirs::from("", "", "readability-scores")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }
}
