/// Generate Dialogue: appends a dialogue to the day's dialogue file.
///
/// Usage: generate_dialogue <YYYY-MM-DD> [--root <dir>] [--seed <n>]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use daily_english::config::Config;
use daily_english::core::dialogue::DialogueGenerator;
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
#[command(version, about = "Generate a daily English dialogue for a software developer")]
struct Args {
    /// The date for the dialogue, in YYYY-MM-DD format
    date: EntryDate,

    /// Directory holding the dialogue files
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Seed for script choice and title suffix [default: random]
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

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dialogue = DialogueGenerator::new(content.dialogues).generate(&mut rng)?;
    info!("Generated dialogue '{}'", dialogue.title);

    let date = args.date.to_string();
    let path = store
        .record_dialogue(&dialogue, &date)
        .context("failed to record the dialogue")?;

    println!("{}", path.display());
    info!("Successfully generated dialogue for {date}");
    Ok(())
}
