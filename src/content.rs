//! Authored content: story templates, the vocabulary pool and dialogue
//! scripts. A default set is compiled into the library; any part can be
//! replaced by a RON file on disk.

use std::path::Path;
use thiserror::Error;

use crate::core::template::{load_templates_ron, parse_templates_ron, Template, TemplateError};
use crate::schema::dialogue::DialogueScript;
use crate::schema::vocabulary::VocabularyEntry;

const BUILTIN_TEMPLATES: &str = include_str!("../content/story_templates.ron");
const BUILTIN_VOCABULARY: &str = include_str!("../content/vocabulary.ron");
const BUILTIN_DIALOGUES: &str = include_str!("../content/dialogues.ron");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub templates: Vec<Template>,
    pub vocabulary: Vec<VocabularyEntry>,
    pub dialogues: Vec<DialogueScript>,
}

impl ContentSet {
    /// The content shipped with the crate.
    pub fn builtin() -> Result<ContentSet, ContentError> {
        Ok(ContentSet {
            templates: parse_templates_ron(BUILTIN_TEMPLATES)?,
            vocabulary: parse_vocabulary_ron(BUILTIN_VOCABULARY)?,
            dialogues: parse_dialogues_ron(BUILTIN_DIALOGUES)?,
        })
    }

    /// Built-in content with each part optionally replaced from disk.
    pub fn load(
        templates: Option<&Path>,
        vocabulary: Option<&Path>,
        dialogues: Option<&Path>,
    ) -> Result<ContentSet, ContentError> {
        let mut content = ContentSet::builtin()?;
        if let Some(path) = templates {
            content.templates = load_templates_ron(path)?;
        }
        if let Some(path) = vocabulary {
            content.vocabulary = parse_vocabulary_ron(&read(path)?)?;
        }
        if let Some(path) = dialogues {
            content.dialogues = parse_dialogues_ron(&read(path)?)?;
        }
        Ok(content)
    }
}

pub fn parse_vocabulary_ron(input: &str) -> Result<Vec<VocabularyEntry>, ContentError> {
    Ok(ron::from_str(input)?)
}

pub fn parse_dialogues_ron(input: &str) -> Result<Vec<DialogueScript>, ContentError> {
    Ok(ron::from_str(input)?)
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })
}
