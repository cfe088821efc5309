use anyhow::Result;
use clap::Parser;
use log::info;
use rack_solver::{sanitize_constraint, sanitize_rack, DictionaryPaths, Lexicon, Mode};
use std::time::Instant;

/// Find the words you can make with your tiles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tiles on the rack, `*`, `?` or `_` for a blank
    rack: String,

    /// Board window, e.g. "c t" or "^c.{2}s$"
    #[arg(default_value = "")]
    window: String,

    /// Game mode: scrabble or wwf
    #[arg(short, long, default_value_t = Mode::default())]
    mode: Mode,

    /// Maximum number of results to show
    #[arg(short = 'n', long, default_value_t = 100)]
    limit: usize,

    /// Wordfile for scrabble
    #[arg(long = "scrabble-words")]
    scrabble_words: Option<String>,

    /// Wordfile for words with friends
    #[arg(long = "wwf-words")]
    wwf_words: Option<String>,
}

fn paths(mode: Mode, primary: Option<&str>) -> DictionaryPaths {
    let paths = DictionaryPaths::new(mode);
    match primary {
        Some(path) => paths.with_primary(path),
        None => paths,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let t0 = Instant::now();
    let lexicon = Lexicon::load(
        &paths(Mode::Scrabble, cli.scrabble_words.as_deref()),
        &paths(Mode::Wwf, cli.wwf_words.as_deref()),
    )?;
    info!("dictionaries loaded in {:?}", t0.elapsed());

    let t0 = Instant::now();
    let rack = sanitize_rack(&cli.rack);
    let constraint = sanitize_constraint(&cli.window);
    let results = lexicon.find_words(&rack, &constraint, cli.mode.name())?;
    let dt = t0.elapsed();
    for result in results.iter().take(cli.limit) {
        println!("{}", result);
    }
    println!(
        "{} of {} results shown in {:.3} seconds.",
        results.len().min(cli.limit),
        results.len(),
        dt.as_secs_f64()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli)
}
