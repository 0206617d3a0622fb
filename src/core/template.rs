/// Story templates: parsing `{placeholder}` slots out of text bodies.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{name}': {reason}")]
    Parse { name: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A slot filled by the word of one vocabulary entry: `{identifier}`.
    Placeholder(String),
}

/// A named story template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Template {
    /// Parse a template body into segments.
    ///
    /// Syntax:
    /// - `{identifier}` → `Placeholder`, where the identifier is made of
    ///   letters, digits and underscores
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    pub fn parse(name: &str, body: &str) -> Result<Template, TemplateError> {
        let fail = |reason: &str| TemplateError::Parse {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = body.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            match chars[i] {
                '{' if i + 1 < len && chars[i + 1] == '{' => {
                    literal_buf.push('{');
                    i += 2;
                }
                '{' => {
                    if !literal_buf.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal_buf)));
                    }

                    let start = i + 1;
                    let mut end = start;
                    while end < len && chars[end] != '}' {
                        if chars[end] == '{' {
                            return Err(fail("nested braces are not allowed"));
                        }
                        end += 1;
                    }
                    if end == len {
                        return Err(fail("unclosed brace"));
                    }

                    let ident: String = chars[start..end].iter().collect();
                    if ident.is_empty() {
                        return Err(fail("empty braces"));
                    }
                    if !ident.chars().all(is_word_char) {
                        return Err(fail(&format!("invalid placeholder name '{}'", ident)));
                    }

                    segments.push(Segment::Placeholder(ident));
                    i = end + 1;
                }
                '}' if i + 1 < len && chars[i + 1] == '}' => {
                    literal_buf.push('}');
                    i += 2;
                }
                '}' => return Err(fail("unmatched closing brace")),
                c => {
                    literal_buf.push(c);
                    i += 1;
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(Segment::Literal(literal_buf));
        }

        Ok(Template {
            name: name.to_string(),
            segments,
        })
    }

    /// Distinct placeholder identifiers, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(ident) = segment {
                if !seen.contains(&ident.as_str()) {
                    seen.push(ident.as_str());
                }
            }
        }
        seen
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// Content files list templates as `(name, body)` pairs; bodies are parsed
// on load so syntax errors surface before any selection runs.

#[derive(Debug, Deserialize)]
struct RonTemplate {
    name: String,
    body: String,
}

/// Parse a list of templates from a RON string.
pub fn parse_templates_ron(input: &str) -> Result<Vec<Template>, TemplateError> {
    let raw: Vec<RonTemplate> = ron::from_str(input)?;
    raw.iter()
        .map(|t| Template::parse(&t.name, &t.body))
        .collect()
}

/// Load a list of templates from a RON file.
pub fn load_templates_ron(path: &Path) -> Result<Vec<Template>, TemplateError> {
    let contents = std::fs::read_to_string(path)?;
    parse_templates_ron(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(s: &str) -> Segment {
        Segment::Placeholder(s.to_string())
    }

    #[test]
    fn parse_literal_only() {
        let t = Template::parse("t", "Hello, world.").unwrap();
        assert_eq!(t.segments, vec![Segment::Literal("Hello, world.".to_string())]);
        assert!(t.placeholders().is_empty());
    }

    #[test]
    fn parse_placeholder() {
        let t = Template::parse("t", "I had a lot **{on_my_plate}** today").unwrap();
        assert_eq!(t.segments.len(), 3);
        assert_eq!(t.segments[1], placeholder("on_my_plate"));
    }

    #[test]
    fn placeholders_are_distinct_and_ordered() {
        let t = Template::parse("t", "{b} then {a} then {b} again {c}").unwrap();
        assert_eq!(t.placeholders(), vec!["b", "a", "c"]);
    }

    #[test]
    fn parse_escaped_braces() {
        let t = Template::parse("t", "Use {{braces}} here.").unwrap();
        assert_eq!(t.segments, vec![Segment::Literal("Use {braces} here.".to_string())]);
    }

    #[test]
    fn parse_errors() {
        assert!(Template::parse("t", "Bad {} here").is_err());
        assert!(Template::parse("t", "Bad {outer{inner}} here").is_err());
        assert!(Template::parse("t", "Bad {unclosed here").is_err());
        assert!(Template::parse("t", "Bad } here").is_err());
        assert!(Template::parse("t", "Bad {two words} here").is_err());
    }

    #[test]
    fn parse_error_names_template() {
        let err = Template::parse("monday_standup", "oops {").unwrap_err();
        assert_eq!(err.to_string(), "template 'monday_standup': unclosed brace");
    }

    #[test]
    fn templates_from_ron() {
        let input = r#"[
            (name: "one", body: "A {x} and {y}."),
            (name: "two", body: "Only {z}."),
        ]"#;
        let templates = parse_templates_ron(input).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "one");
        assert_eq!(templates[0].placeholders(), vec!["x", "y"]);
        assert_eq!(templates[1].placeholders(), vec!["z"]);
    }

    #[test]
    fn templates_from_ron_reject_bad_body() {
        let input = r#"[(name: "broken", body: "A {x")]"#;
        assert!(matches!(
            parse_templates_ron(input),
            Err(TemplateError::Parse { name, .. }) if name == "broken"
        ));
    }
}
