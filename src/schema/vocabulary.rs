use serde::{Deserialize, Serialize};

/// Meaning of a word in the learner's target and native languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub bahasa: String,
}

/// Example sentences grouped by register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Examples {
    #[serde(default)]
    pub workplace: Vec<String>,
    #[serde(default)]
    pub casual: Vec<String>,
}

/// A neighbouring word and how it differs from the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Related {
    pub word: String,
    pub difference: String,
}

/// A word or phrase that can fill one template slot.
///
/// Everything except `word` and `placeholder` is descriptive metadata
/// that the generator never inspects; it is carried through to the
/// persisted vocabulary record unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub placeholder: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub meaning: Meaning,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub examples: Examples,
    #[serde(default)]
    pub related: Vec<Related>,
    #[serde(default)]
    pub story: String,
}

impl VocabularyEntry {
    /// Minimal entry with empty metadata.
    pub fn new(word: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            placeholder: placeholder.into(),
            pronunciation: String::new(),
            part_of_speech: String::new(),
            meaning: Meaning::default(),
            usage: String::new(),
            synonyms: Vec::new(),
            examples: Examples::default(),
            related: Vec::new(),
            story: String::new(),
        }
    }

    /// Case-folded form used for ledger lookups.
    pub fn normalized_word(&self) -> String {
        normalize_word(&self.word)
    }
}

/// The shape a vocabulary entry takes once written to a daily file:
/// the same fields, minus the template slot it was drawn for.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyRecord<'a> {
    pub word: &'a str,
    pub pronunciation: &'a str,
    pub part_of_speech: &'a str,
    pub meaning: &'a Meaning,
    pub usage: &'a str,
    pub synonyms: &'a [String],
    pub examples: &'a Examples,
    pub related: &'a [Related],
    pub story: &'a str,
}

impl<'a> From<&'a VocabularyEntry> for VocabularyRecord<'a> {
    fn from(entry: &'a VocabularyEntry) -> Self {
        Self {
            word: &entry.word,
            pronunciation: &entry.pronunciation,
            part_of_speech: &entry.part_of_speech,
            meaning: &entry.meaning,
            usage: &entry.usage,
            synonyms: &entry.synonyms,
            examples: &entry.examples,
            related: &entry.related,
            story: &entry.story,
        }
    }
}

/// Trim and lower-case a word for comparison against the used-words ledger.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
