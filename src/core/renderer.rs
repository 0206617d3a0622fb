/// Template rendering: substitution and title derivation.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::template::{Segment, Template};
use crate::schema::story::GeneratedStory;
use crate::schema::vocabulary::VocabularyEntry;

/// Number of leading words used for a title when none is configured.
pub const DEFAULT_TITLE_WORDS: usize = 4;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("template '{template}' references '{{{placeholder}}}' but no word was selected for it")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },
}

/// Substitute the selected words into `template` and title the result.
pub fn render(
    template: &Template,
    selected: &[&VocabularyEntry],
    title_words: usize,
) -> Result<GeneratedStory, RenderError> {
    let words: HashMap<&str, &str> = selected
        .iter()
        .map(|entry| (entry.placeholder.as_str(), entry.word.as_str()))
        .collect();

    let mut text = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Placeholder(ident) => {
                let word = words.get(ident.as_str()).ok_or_else(|| {
                    RenderError::MissingPlaceholder {
                        template: template.name.clone(),
                        placeholder: ident.clone(),
                    }
                })?;
                text.push_str(word);
            }
        }
    }
    let text = text.trim().to_string();

    Ok(GeneratedStory {
        title: kebab_title(&text, title_words),
        highlighted_words: selected.iter().map(|e| e.word.clone()).collect(),
        text,
    })
}

/// Kebab-case slug built from the first `num_words` words of `text`,
/// ignoring `**` emphasis markers.
///
/// Two texts that open with the same words get the same title.
pub fn kebab_title(text: &str, num_words: usize) -> String {
    let plain = text.replace("**", "").to_lowercase();
    WORD.find_iter(&plain)
        .take(num_words)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("-")
}
