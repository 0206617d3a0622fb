/// CSV indexes: the used-words ledger and the append-only title lists.

use log::debug;
use std::fs::OpenOptions;
use std::path::Path;

use super::{io_error, StoreError};
use crate::core::selector::UsedWords;

/// Header of the vocabulary index.
pub const VOCABULARY_HEADER: [&str; 1] = ["Word"];
/// Header of the story and dialogue indexes.
pub const TITLE_DATE_HEADER: [&str; 2] = ["title", "date"];

/// Read the first column of the vocabulary index as a set of used words.
///
/// A missing or empty file means nothing has been used yet. The header
/// row and blank cells are skipped.
pub fn load_used_words(path: &Path) -> Result<UsedWords, StoreError> {
    if !path.exists() {
        debug!("no ledger at {}, starting empty", path.display());
        return Ok(UsedWords::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut used = UsedWords::new();
    for record in reader.records() {
        let record = record?;
        if let Some(word) = record.get(0) {
            if !word.trim().is_empty() {
                used.insert(word);
            }
        }
    }
    Ok(used)
}

/// Read the title column of a story or dialogue index, one entry per row.
///
/// Repeated titles are kept; a missing file yields no titles.
pub fn load_index_titles(path: &Path) -> Result<Vec<String>, StoreError> {
    if !path.exists() {
        debug!("no index at {}", path.display());
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut titles = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(title) = record.get(0).map(str::trim).filter(|t| !t.is_empty()) {
            titles.push(title.to_string());
        }
    }
    Ok(titles)
}

/// Append rows to a CSV file, writing `header` first if the file is
/// missing or empty. Parent directories are created as needed.
pub fn append_csv<R, T>(path: &Path, header: &[&str], rows: R) -> Result<(), StoreError>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(path))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(file);
    if needs_header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(io_error(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ledger_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let used = load_used_words(&dir.path().join("vocabularies.csv")).unwrap();
        assert!(used.is_empty());
    }

    #[test]
    fn empty_ledger_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabularies.csv");
        std::fs::write(&path, "").unwrap();
        assert!(load_used_words(&path).unwrap().is_empty());
    }

    #[test]
    fn ledger_skips_header_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabularies.csv");
        std::fs::write(&path, "Word\nOn My Plate\n  reach out  \n\n\"good to go\",extra\n").unwrap();
        let used = load_used_words(&path).unwrap();
        assert_eq!(used.len(), 3);
        assert!(used.contains("on my plate"));
        assert!(used.contains("reach out"));
        assert!(used.contains("good to go"));
        assert!(!used.contains("word"));
    }

    #[test]
    fn index_titles_keep_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stories.csv");
        std::fs::write(
            &path,
            "title,date\nsame-title,2025-01-01\n\nother,2025-01-02\nsame-title,2025-01-03\n",
        )
        .unwrap();
        assert_eq!(
            load_index_titles(&path).unwrap(),
            vec!["same-title", "other", "same-title"]
        );
        assert!(load_index_titles(&dir.path().join("missing.csv"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stories.csv");
        append_csv(&path, &TITLE_DATE_HEADER, [["first-story", "2025-01-01"]]).unwrap();
        append_csv(&path, &TITLE_DATE_HEADER, [["second-story", "2025-01-02"]]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec!["title,date", "first-story,2025-01-01", "second-story,2025-01-02"]
        );
    }

    #[test]
    fn append_to_empty_file_adds_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabularies.csv");
        std::fs::write(&path, "").unwrap();
        append_csv(&path, &VOCABULARY_HEADER, [["look into"], ["good to go"]]).unwrap();
        let used = load_used_words(&path).unwrap();
        assert!(used.contains("look into"));
        assert!(used.contains("good to go"));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("Word"));
    }

    #[test]
    fn append_quotes_fields_with_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabularies.csv");
        append_csv(&path, &VOCABULARY_HEADER, [["well, actually"]]).unwrap();
        let used = load_used_words(&path).unwrap();
        assert!(used.contains("well, actually"));
    }
}
