/// YAML record files: one file per story, one list per day for
/// vocabulary and dialogues.

use log::{info, warn};
use rustc_hash::FxHashSet;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

use super::{io_error, StoreError};
use crate::schema::dialogue::Dialogue;
use crate::schema::story::{GeneratedStory, StoryDocument};
use crate::schema::vocabulary::{VocabularyEntry, VocabularyRecord};

pub fn story_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("story-{}.yaml", title))
}

pub fn daily_vocabulary_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("vocabulary-from-story-{}.yaml", date))
}

pub fn daily_dialogue_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("{}.yaml", date))
}

/// Write a story to its own file, named after its title.
///
/// An existing file with the same title is replaced; the duplicate check
/// is what reports title collisions.
pub fn write_story(dir: &Path, story: &GeneratedStory, date: &str) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = story_path(dir, &story.title);
    if path.exists() {
        warn!("overwriting existing story file {}", path.display());
    }

    let yaml = serde_yaml::to_string(&StoryDocument::new(story, date))?;
    std::fs::write(&path, yaml).map_err(io_error(&path))?;
    info!("created story file {}", path.display());
    Ok(path)
}

/// Add entries to the day's vocabulary file, skipping words it already
/// holds. Entries are saved without their `placeholder`.
pub fn merge_daily_vocabulary(
    dir: &Path,
    entries: &[&VocabularyEntry],
    date: &str,
) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = daily_vocabulary_path(dir, date);
    let mut records = load_record_list(&path)?;

    let mut present: FxHashSet<String> = records
        .iter()
        .filter_map(|record| record.get("word").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    for entry in entries {
        if present.insert(entry.word.clone()) {
            records.push(serde_yaml::to_value(VocabularyRecord::from(*entry))?);
        }
    }

    write_record_list(&path, &records)?;
    info!("updated vocabulary file {}", path.display());
    Ok(path)
}

/// Append a dialogue to the day's dialogue list.
pub fn append_dialogue(dir: &Path, dialogue: &Dialogue, date: &str) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = daily_dialogue_path(dir, date);
    let mut records = load_record_list(&path)?;
    records.push(serde_yaml::to_value(dialogue)?);

    write_record_list(&path, &records)?;
    info!("updated dialogue file {}", path.display());
    Ok(path)
}

/// Read a YAML file holding a list of records.
///
/// The records are kept as opaque values so entries written by other
/// tools survive a rewrite. A missing or empty file is an empty list; a
/// file that does not parse, or is not a list, is logged and replaced.
pub fn load_record_list(path: &Path) -> Result<Vec<Value>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path).map_err(io_error(path))?;
    match serde_yaml::from_str::<Value>(&contents) {
        Ok(Value::Sequence(records)) => Ok(records),
        Ok(Value::Null) => Ok(Vec::new()),
        Ok(_) => {
            warn!("{} is not a list, overwriting", path.display());
            Ok(Vec::new())
        }
        Err(e) => {
            warn!("could not parse {}, overwriting: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

fn write_record_list(path: &Path, records: &[Value]) -> Result<(), StoreError> {
    let yaml = serde_yaml::to_string(records)?;
    std::fs::write(path, yaml).map_err(io_error(path))
}
