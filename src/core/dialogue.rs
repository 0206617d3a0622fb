/// Dialogue generation: pick an authored script and give it a unique title.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::schema::dialogue::{Dialogue, DialogueScript};

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("no dialogue scripts are available")]
    NoDialogueScripts,
}

#[derive(Debug, Clone, Default)]
pub struct DialogueGenerator {
    scripts: Vec<DialogueScript>,
}

impl DialogueGenerator {
    pub fn new(scripts: Vec<DialogueScript>) -> Self {
        Self { scripts }
    }

    /// Pick a script at random; its title gets a six-digit hex suffix.
    pub fn generate(&self, rng: &mut StdRng) -> Result<Dialogue, DialogueError> {
        let script = self
            .scripts
            .choose(rng)
            .ok_or(DialogueError::NoDialogueScripts)?;
        let suffix: u32 = rng.gen_range(0..=0xFF_FFFF);

        Ok(Dialogue {
            title: format!("{}-{:06x}", script.base_title, suffix),
            dialogue: script.dialogue.clone(),
            expressions: script.expressions.clone(),
            questions: script.questions.clone(),
        })
    }
}
