use serde::{Deserialize, Serialize};

/// A rendered story, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    /// Kebab-case slug derived from the opening words of `text`.
    pub title: String,
    pub text: String,
    /// Words substituted into the template, in selection order.
    pub highlighted_words: Vec<String>,
}

/// On-disk layout of a story file: a single `story:` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDocument {
    pub story: StoryRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub title: String,
    pub date: String,
    pub text: String,
    pub highlighted_words: Vec<String>,
}

impl StoryDocument {
    pub fn new(story: &GeneratedStory, date: &str) -> Self {
        Self {
            story: StoryRecord {
                title: story.title.clone(),
                date: date.to_string(),
                text: story.text.clone(),
                highlighted_words: story.highlighted_words.clone(),
            },
        }
    }
}
