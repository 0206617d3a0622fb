/// Duplicate detection across persisted vocabulary and story files.

use log::warn;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{io_error, ledger, StoreError};

/// Values seen more than once, with their counts, in sorted order.
pub type Duplicates = Vec<(String, usize)>;

/// Result of scanning one directory of YAML records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub duplicates: Duplicates,
    /// Files that could not be parsed, with the parser's message.
    pub unreadable: Vec<(PathBuf, String)>,
}

impl Scan {
    /// Combine two scans of the same values from different sources.
    ///
    /// Each source sees every record once, so a value's count is the
    /// larger of the two rather than their sum.
    pub fn merge(mut self, other: Scan) -> Scan {
        let mut counts: BTreeMap<String, usize> = self.duplicates.into_iter().collect();
        for (value, count) in other.duplicates {
            let entry = counts.entry(value).or_default();
            *entry = (*entry).max(count);
        }
        self.duplicates = counts.into_iter().collect();
        self.unreadable.extend(other.unreadable);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub words: Scan,
    pub titles: Scan,
}

impl DuplicateReport {
    pub fn has_duplicates(&self) -> bool {
        !self.words.duplicates.is_empty() || !self.titles.duplicates.is_empty()
    }
}

/// Count `word` fields across every vocabulary list in `dir`.
pub fn find_duplicate_words(dir: &Path) -> Result<Scan, StoreError> {
    scan(dir, |doc, out| {
        if let Value::Sequence(entries) = doc {
            out.extend(
                entries
                    .iter()
                    .filter_map(|entry| entry.get("word"))
                    .filter_map(value_text),
            );
        }
    })
}

/// Count `story.title` across every story file in `dir`.
pub fn find_duplicate_titles(dir: &Path) -> Result<Scan, StoreError> {
    scan(dir, |doc, out| {
        if let Some(title) = doc
            .get("story")
            .and_then(|story| story.get("title"))
            .and_then(value_text)
        {
            out.push(title);
        }
    })
}

/// Count titles in a story or dialogue index.
///
/// Story files are named after their title, so a repeated title replaces
/// the earlier file; the index still holds one row per generated story.
pub fn find_duplicate_index_titles(path: &Path) -> Result<Scan, StoreError> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for title in ledger::load_index_titles(path)? {
        *counts.entry(title).or_default() += 1;
    }
    Ok(Scan {
        duplicates: counts.into_iter().filter(|(_, count)| *count > 1).collect(),
        unreadable: Vec::new(),
    })
}

/// Text of a scalar field. Numbers and booleans are counted by their YAML
/// form so hand-edited records are not dropped.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        other => match serde_yaml::to_string(other) {
            Ok(text) => Some(text.trim_end().to_string()),
            Err(e) => {
                warn!("skipping value that cannot be shown: {}", e);
                None
            }
        },
    }
}

fn scan(dir: &Path, extract: impl Fn(&Value, &mut Vec<String>)) -> Result<Scan, StoreError> {
    let mut result = Scan::default();
    if !dir.is_dir() {
        warn!("{} does not exist, nothing to check", dir.display());
        return Ok(result);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(io_error(dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("yaml"))
        .collect();
    files.sort();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for path in files {
        let contents = std::fs::read_to_string(&path).map_err(io_error(&path))?;
        let doc: Value = match serde_yaml::from_str(&contents) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("error parsing {}: {}", path.display(), e);
                result.unreadable.push((path, e.to_string()));
                continue;
            }
        };

        let mut values = Vec::new();
        extract(&doc, &mut values);
        for value in values {
            *counts.entry(value).or_default() += 1;
        }
    }

    result.duplicates = counts.into_iter().filter(|(_, count)| *count > 1).collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let scan = find_duplicate_words(&dir.path().join("vocabularies")).unwrap();
        assert_eq!(scan, Scan::default());
    }

    #[test]
    fn words_counted_across_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "- word: reach out\n- word: look into\n").unwrap();
        std::fs::write(dir.path().join("b.yaml"), "- word: reach out\n- note: no word here\n").unwrap();
        std::fs::write(dir.path().join("c.txt"), "- word: look into\n").unwrap();

        let scan = find_duplicate_words(dir.path()).unwrap();
        assert_eq!(scan.duplicates, vec![("reach out".to_string(), 2)]);
        assert!(scan.unreadable.is_empty());
    }

    #[test]
    fn non_string_words_are_counted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "- word: 404\n- word: true\n").unwrap();
        std::fs::write(dir.path().join("b.yaml"), "- word: 404\n- word: 'true'\n").unwrap();

        let scan = find_duplicate_words(dir.path()).unwrap();
        assert_eq!(
            scan.duplicates,
            vec![("404".to_string(), 2), ("true".to_string(), 2)]
        );
    }

    #[test]
    fn index_titles_counted_by_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stories.csv");
        std::fs::write(
            &path,
            "title,date\nsame-title,2025-01-01\nother,2025-01-02\nsame-title,2025-01-03\n",
        )
        .unwrap();

        let scan = find_duplicate_index_titles(&path).unwrap();
        assert_eq!(scan.duplicates, vec![("same-title".to_string(), 2)]);
    }

    #[test]
    fn merge_takes_larger_count() {
        let files = Scan {
            duplicates: vec![("a".to_string(), 2), ("b".to_string(), 3)],
            unreadable: vec![(PathBuf::from("bad.yaml"), "oops".to_string())],
        };
        let index = Scan {
            duplicates: vec![("b".to_string(), 2), ("c".to_string(), 2)],
            unreadable: Vec::new(),
        };

        let merged = files.merge(index);
        assert_eq!(
            merged.duplicates,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 3),
                ("c".to_string(), 2)
            ]
        );
        assert_eq!(merged.unreadable.len(), 1);
    }

    #[test]
    fn titles_counted_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let story = "story:\n  title: thursday-morning-started-with\n  date: '2025-01-01'\n";
        std::fs::write(dir.path().join("story-1.yaml"), story).unwrap();
        std::fs::write(dir.path().join("story-2.yaml"), story).unwrap();
        std::fs::write(dir.path().join("other.yaml"), "title: loose\n").unwrap();

        let scan = find_duplicate_titles(dir.path()).unwrap();
        assert_eq!(
            scan.duplicates,
            vec![("thursday-morning-started-with".to_string(), 2)]
        );
    }

    #[test]
    fn unreadable_files_are_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.yaml"), "- [unclosed\n").unwrap();
        std::fs::write(dir.path().join("good.yaml"), "- word: ping me\n").unwrap();

        let scan = find_duplicate_words(dir.path()).unwrap();
        assert!(scan.duplicates.is_empty());
        assert_eq!(scan.unreadable.len(), 1);
        assert_eq!(scan.unreadable[0].0, dir.path().join("bad.yaml"));
    }
}
