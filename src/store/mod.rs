//! Flat-file persistence: CSV indexes and YAML records under a data root.

pub mod duplicates;
pub mod ledger;
pub mod records;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::core::pipeline::Generation;
use crate::core::selector::UsedWords;
use crate::schema::dialogue::Dialogue;
use duplicates::DuplicateReport;
use ledger::{TITLE_DATE_HEADER, VOCABULARY_HEADER};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Files written for one story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFiles {
    pub story: PathBuf,
    pub vocabulary: PathBuf,
}

/// The data root, as laid out by a [`Config`].
#[derive(Debug, Clone)]
pub struct Store {
    config: Config,
}

impl Store {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Words already recorded in the vocabulary index.
    pub fn used_words(&self) -> Result<UsedWords, StoreError> {
        ledger::load_used_words(&self.config.vocabularies_csv())
    }

    /// Persist a generated story: its YAML file, the story index, the
    /// day's vocabulary file and the vocabulary index.
    pub fn record_story(
        &self,
        generation: &Generation<'_>,
        date: &str,
    ) -> Result<StoryFiles, StoreError> {
        let story = &generation.story;

        let story_path = records::write_story(&self.config.stories_dir(), story, date)?;
        ledger::append_csv(
            &self.config.stories_csv(),
            &TITLE_DATE_HEADER,
            [[story.title.as_str(), date]],
        )?;

        let vocabulary_path = records::merge_daily_vocabulary(
            &self.config.vocabularies_dir(),
            &generation.vocabulary,
            date,
        )?;
        ledger::append_csv(
            &self.config.vocabularies_csv(),
            &VOCABULARY_HEADER,
            generation.vocabulary.iter().map(|entry| [entry.word.as_str()]),
        )?;

        Ok(StoryFiles {
            story: story_path,
            vocabulary: vocabulary_path,
        })
    }

    /// Persist a dialogue to the day's list and the dialogue index.
    pub fn record_dialogue(&self, dialogue: &Dialogue, date: &str) -> Result<PathBuf, StoreError> {
        let path = records::append_dialogue(&self.config.dialogues_dir(), dialogue, date)?;
        ledger::append_csv(
            &self.config.dialogues_csv(),
            &TITLE_DATE_HEADER,
            [[dialogue.title.as_str(), date]],
        )?;
        Ok(path)
    }

    /// Scan vocabulary and story files for repeated words and titles.
    /// Titles are also counted in the story index, which keeps a row for
    /// stories whose file was replaced by a later one with the same title.
    pub fn check_duplicates(&self) -> Result<DuplicateReport, StoreError> {
        let titles = duplicates::find_duplicate_titles(&self.config.stories_dir())?
            .merge(duplicates::find_duplicate_index_titles(&self.config.stories_csv())?);
        Ok(DuplicateReport {
            words: duplicates::find_duplicate_words(&self.config.vocabularies_dir())?,
            titles,
        })
    }
}
