/// Story generation: shuffle templates, select vocabulary, render the
/// first template that can be filled.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::core::renderer::{render, RenderError, DEFAULT_TITLE_WORDS};
use crate::core::selector::{select, NotSatisfiable, UsedWords};
use crate::core::template::Template;
use crate::schema::story::GeneratedStory;
use crate::schema::vocabulary::VocabularyEntry;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no story template can be filled from the remaining vocabulary ({} tried)", .rejected.len())]
    NoSatisfiableTemplate { rejected: Vec<NotSatisfiable> },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The outcome of one successful run: the story plus the entries it
/// consumed, which the store persists and adds to the ledger.
#[derive(Debug, Clone)]
pub struct Generation<'a> {
    pub template: &'a str,
    pub story: GeneratedStory,
    pub vocabulary: Vec<&'a VocabularyEntry>,
}

/// Generates stories from a fixed set of templates and a vocabulary pool.
#[derive(Debug, Clone)]
pub struct StoryGenerator {
    templates: Vec<Template>,
    vocabulary: Vec<VocabularyEntry>,
    title_words: usize,
}

impl StoryGenerator {
    pub fn new(templates: Vec<Template>, vocabulary: Vec<VocabularyEntry>) -> Self {
        Self {
            templates,
            vocabulary,
            title_words: DEFAULT_TITLE_WORDS,
        }
    }

    /// Number of leading words that make up a story title.
    pub fn with_title_words(mut self, title_words: usize) -> Self {
        self.title_words = title_words;
        self
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Try templates in a random order and render the first one whose
    /// placeholders can all be filled with words not in `used`.
    ///
    /// Nothing is mutated; recording the result is up to the caller.
    pub fn generate(
        &self,
        used: &UsedWords,
        rng: &mut StdRng,
    ) -> Result<Generation<'_>, GenerationError> {
        let mut order: Vec<&Template> = self.templates.iter().collect();
        order.shuffle(rng);
        self.generate_in_order(order, used)
    }

    /// Same as [`generate`](Self::generate) with a caller-chosen order.
    pub fn generate_in_order<'a>(
        &'a self,
        order: impl IntoIterator<Item = &'a Template>,
        used: &UsedWords,
    ) -> Result<Generation<'a>, GenerationError> {
        let mut rejected = Vec::new();

        for template in order {
            let selected = match select(&self.vocabulary, template, used) {
                Ok(selected) => selected,
                Err(reason) => {
                    debug!("skipping template: {reason}");
                    rejected.push(reason);
                    continue;
                }
            };

            let story = render(template, &selected, self.title_words)?;
            info!(
                "template '{}' filled with {} words",
                template.name,
                selected.len()
            );
            return Ok(Generation {
                template: &template.name,
                story,
                vocabulary: selected,
            });
        }

        Err(GenerationError::NoSatisfiableTemplate { rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generator() -> StoryGenerator {
        let templates = vec![
            Template::parse("three", "{a} {b} {c}").unwrap(),
            Template::parse("two", "{a} {b}").unwrap(),
        ];
        let vocabulary = vec![
            VocabularyEntry::new("alpha", "a"),
            VocabularyEntry::new("bravo", "b"),
        ];
        StoryGenerator::new(templates, vocabulary)
    }

    #[test]
    fn skips_unsatisfiable_template() {
        let generator = generator();
        let generation = generator
            .generate_in_order(generator.templates(), &UsedWords::new())
            .unwrap();
        assert_eq!(generation.template, "two");
        assert_eq!(generation.story.text, "alpha bravo");
        assert_eq!(generation.story.title, "alpha-bravo");
    }

    #[test]
    fn shuffled_order_still_finds_the_only_match() {
        let generator = generator();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generation = generator.generate(&UsedWords::new(), &mut rng).unwrap();
            assert_eq!(generation.template, "two");
        }
    }

    #[test]
    fn fails_when_nothing_fits() {
        let generator = generator();
        let used: UsedWords = ["bravo"].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);
        match generator.generate(&used, &mut rng) {
            Err(GenerationError::NoSatisfiableTemplate { rejected }) => {
                assert_eq!(rejected.len(), 2);
            }
            other => panic!("expected NoSatisfiableTemplate, got {other:?}"),
        }
    }

    #[test]
    fn empty_template_list_is_unsatisfiable() {
        let generator = StoryGenerator::new(Vec::new(), Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate(&UsedWords::new(), &mut rng).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no story template can be filled from the remaining vocabulary (0 tried)"
        );
    }

    #[test]
    fn same_seed_same_story() {
        let templates = vec![
            Template::parse("one", "First {a}.").unwrap(),
            Template::parse("two", "Second {a}.").unwrap(),
            Template::parse("three", "Third {a}.").unwrap(),
        ];
        let generator =
            StoryGenerator::new(templates, vec![VocabularyEntry::new("alpha", "a")]);
        let used = UsedWords::new();
        let first = generator
            .generate(&used, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = generator
            .generate(&used, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first.story, second.story);
    }

    #[test]
    fn title_words_is_configurable() {
        let generator = StoryGenerator::new(
            vec![Template::parse("t", "One two three {a} five").unwrap()],
            vec![VocabularyEntry::new("four", "a")],
        )
        .with_title_words(2);
        let generation = generator
            .generate_in_order(generator.templates(), &UsedWords::new())
            .unwrap();
        assert_eq!(generation.story.title, "one-two");
    }
}
