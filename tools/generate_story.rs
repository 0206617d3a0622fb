/// Generate Story: fills a story template with unused vocabulary and
/// records the story and its words.
///
/// Usage: generate_story <YYYY-MM-DD> [--root <dir>] [--seed <n>]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use daily_english::config::Config;
use daily_english::core::pipeline::{GenerationError, StoryGenerator};
use daily_english::date::EntryDate;
use daily_english::store::Store;
use env_logger::Env;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Generate a daily English story for a software developer")]
struct Args {
    /// The date for the story, in YYYY-MM-DD format
    date: EntryDate,

    /// Directory holding the story and vocabulary files
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Seed for the template order [default: random]
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("DAILY_ENGLISH_LOG"))
        .init();

    let config = Config::load(&args.root)?;
    let content = config.content().context("failed to load content")?;
    let store = Store::new(config);

    let used = store.used_words().context("failed to read the vocabulary ledger")?;
    info!("Loaded {} existing vocabulary words", used.len());

    let generator = StoryGenerator::new(content.templates, content.vocabulary)
        .with_title_words(store.config().title_words);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generation = match generator.generate(&used, &mut rng) {
        Ok(generation) => generation,
        Err(GenerationError::NoSatisfiableTemplate { rejected }) => {
            for reason in &rejected {
                error!("{reason}");
            }
            anyhow::bail!("not enough new words in the pool to fill any story template");
        }
        Err(e) => return Err(e.into()),
    };

    let words: Vec<&str> = generation.vocabulary.iter().map(|v| v.word.as_str()).collect();
    info!("Selected {} new words: {:?}", words.len(), words);
    info!("Generated story with title '{}'", generation.story.title);

    let date = args.date.to_string();
    let files = store
        .record_story(&generation, &date)
        .context("failed to record the story")?;

    println!("{}", files.story.display());
    println!("{}", files.vocabulary.display());
    info!("Successfully generated story and vocabulary for {date}");
    Ok(())
}
