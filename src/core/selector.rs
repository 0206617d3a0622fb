/// Vocabulary selection: matching unused entries to template slots.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::template::Template;
use crate::schema::vocabulary::{normalize_word, VocabularyEntry};

/// Words already consumed by earlier generations.
///
/// Words are stored case-folded and trimmed, so membership checks agree
/// with however the word was capitalised in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords {
    words: FxHashSet<String>,
}

impl UsedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(normalize_word(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UsedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = UsedWords::new();
        for word in iter {
            used.insert(word.as_ref());
        }
        used
    }
}

/// A template could not be filled from the remaining vocabulary.
///
/// This is an ordinary outcome, not a failure of the run: the caller is
/// expected to move on to the next candidate template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template '{template}' needs {required} unused words, found {found}")]
pub struct NotSatisfiable {
    pub template: String,
    pub required: usize,
    pub found: usize,
    /// Placeholders with no unused entry.
    pub missing: Vec<String>,
    /// Placeholders with more than one unused entry.
    pub ambiguous: Vec<String>,
}

/// Pick one unused entry for every placeholder of `template`.
///
/// Returns the matching entries in pool order, or `NotSatisfiable` unless
/// each placeholder is covered by exactly one unused entry.
pub fn select<'a>(
    pool: &'a [VocabularyEntry],
    template: &Template,
    used: &UsedWords,
) -> Result<Vec<&'a VocabularyEntry>, NotSatisfiable> {
    let required = template.placeholders();

    let selected: Vec<&VocabularyEntry> = pool
        .iter()
        .filter(|entry| !used.contains(&entry.word))
        .filter(|entry| required.contains(&entry.placeholder.as_str()))
        .collect();

    let mut missing = Vec::new();
    let mut ambiguous = Vec::new();
    for ident in &required {
        match selected.iter().filter(|e| e.placeholder == *ident).count() {
            0 => missing.push(ident.to_string()),
            1 => {}
            _ => ambiguous.push(ident.to_string()),
        }
    }

    if missing.is_empty() && ambiguous.is_empty() {
        debug_assert_eq!(selected.len(), required.len());
        Ok(selected)
    } else {
        Err(NotSatisfiable {
            template: template.name.clone(),
            required: required.len(),
            found: selected.len(),
            missing,
            ambiguous,
        })
    }
}
