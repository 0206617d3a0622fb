use serde::{Deserialize, Serialize};

/// One spoken line with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub speaker: String,
    pub english: String,
    pub bahasa: String,
}

/// An idiom used in the dialogue, explained in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub phrase: String,
    pub meaning_english: String,
    pub meaning_bahasa: String,
}

/// Comprehension question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub q: String,
    pub a: String,
}

/// A dialogue as authored in the content files. The persisted title is
/// `base_title` plus a random suffix, so the same script can be used on
/// several days without colliding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueScript {
    pub base_title: String,
    pub dialogue: Vec<Line>,
    #[serde(default)]
    pub expressions: Vec<Expression>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A dialogue as persisted in a daily file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub title: String,
    pub dialogue: Vec<Line>,
    pub expressions: Vec<Expression>,
    pub questions: Vec<Question>,
}
