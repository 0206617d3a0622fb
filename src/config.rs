//! Data-root configuration.
//!
//! All generated files live under a single data root. An optional
//! `daily-english.ron` in that root renames any of the output locations,
//! points at replacement content files, or changes the title length.
//! Relative paths are resolved against the root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::{ContentError, ContentSet};
use crate::core::renderer::DEFAULT_TITLE_WORDS;

/// Name of the optional config file inside the data root.
pub const CONFIG_FILE: &str = "daily-english.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("RON deserialization error in {path}: {source}")]
    Ron {
        path: String,
        source: ron::error::SpannedError,
    },
    #[error("title_words must be at least 1")]
    InvalidTitleWords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub root: PathBuf,
    pub stories_dir: PathBuf,
    pub vocabularies_dir: PathBuf,
    pub dialogues_dir: PathBuf,
    pub stories_csv: PathBuf,
    pub vocabularies_csv: PathBuf,
    pub dialogues_csv: PathBuf,
    pub title_words: usize,
    pub templates: Option<PathBuf>,
    pub vocabulary: Option<PathBuf>,
    pub dialogues: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            stories_dir: PathBuf::from("stories"),
            vocabularies_dir: PathBuf::from("vocabularies"),
            dialogues_dir: PathBuf::from("dialogues"),
            stories_csv: PathBuf::from("stories.csv"),
            vocabularies_csv: PathBuf::from("vocabularies.csv"),
            dialogues_csv: PathBuf::from("dialogues.csv"),
            title_words: DEFAULT_TITLE_WORDS,
            templates: None,
            vocabulary: None,
            dialogues: None,
        }
    }
}

impl Config {
    /// Defaults rooted at `root`, without reading any file.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Read `<root>/daily-english.ron` if it exists, otherwise use defaults.
    pub fn load(root: &Path) -> Result<Config, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::with_root(root));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Ron {
            path: path.display().to_string(),
            source,
        })?;
        if config.title_words == 0 {
            return Err(ConfigError::InvalidTitleWords);
        }
        log::debug!("loaded config from {}", path.display());
        config.root = root.to_path_buf();
        Ok(config)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn stories_dir(&self) -> PathBuf {
        self.resolve(&self.stories_dir)
    }

    pub fn vocabularies_dir(&self) -> PathBuf {
        self.resolve(&self.vocabularies_dir)
    }

    pub fn dialogues_dir(&self) -> PathBuf {
        self.resolve(&self.dialogues_dir)
    }

    pub fn stories_csv(&self) -> PathBuf {
        self.resolve(&self.stories_csv)
    }

    /// The vocabulary index, which doubles as the used-words ledger.
    pub fn vocabularies_csv(&self) -> PathBuf {
        self.resolve(&self.vocabularies_csv)
    }

    pub fn dialogues_csv(&self) -> PathBuf {
        self.resolve(&self.dialogues_csv)
    }

    /// Built-in content with any configured replacement files applied.
    pub fn content(&self) -> Result<ContentSet, ContentError> {
        let templates = self.templates.as_deref().map(|p| self.resolve(p));
        let vocabulary = self.vocabulary.as_deref().map(|p| self.resolve(p));
        let dialogues = self.dialogues.as_deref().map(|p| self.resolve(p));
        ContentSet::load(
            templates.as_deref(),
            vocabulary.as_deref(),
            dialogues.as_deref(),
        )
    }
}
