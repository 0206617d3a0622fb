/// Check Duplicates: reports vocabulary words and story titles that
/// appear in more than one record. Exits non-zero if any are found.
///
/// Usage: check_duplicates [--root <dir>]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use daily_english::config::Config;
use daily_english::store::duplicates::Scan;
use daily_english::store::Store;
use env_logger::Env;
use log::error;

#[derive(Debug, Parser)]
#[command(version, about = "Check vocabularies and stories for duplicate entries")]
struct Args {
    /// Directory holding the story and vocabulary files
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> ExitCode {
    match _main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the data root is free of duplicates.
fn _main() -> anyhow::Result<bool> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("DAILY_ENGLISH_LOG"))
        .init();

    let store = Store::new(Config::load(&args.root)?);

    let report = store.check_duplicates()?;

    println!("Checking for duplicate vocabulary words...");
    print_scan("Duplicate vocabularies found:", &report.words);
    println!("Checking for duplicate story titles...");
    print_scan("Duplicate stories found:", &report.titles);

    if report.has_duplicates() {
        println!("\nDuplicate entries found. The check has failed.");
        Ok(false)
    } else {
        println!("\nNo duplicates found in vocabularies or stories.");
        Ok(true)
    }
}

fn print_scan(heading: &str, scan: &Scan) {
    for (path, message) in &scan.unreadable {
        println!("Error parsing {}: {}", path.display(), message);
    }
    if scan.duplicates.is_empty() {
        return;
    }
    println!("\n{heading}");
    for (value, count) in &scan.duplicates {
        println!("- '{}' found {} times.", value, count);
    }
}
