use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mdquiz::config::Config;
use mdquiz::error::Result;
use mdquiz::recorder::FileRecorder;
use mdquiz::traits::Recorder;
use mdquiz::training::Training;
use mdquiz::{parser, selection, source};

/// Train on a markdown deck of multiple-choice questions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Yaml config file; the flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Url of the question document.
    #[arg(long)]
    url: Option<String>,

    /// Train on a local markdown file instead of downloading.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Failure log path.
    #[arg(long)]
    failure_log: Option<PathBuf>,

    /// Fixed shuffle seed, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    pretty_env_logger::init();

    if let Err(error) = run() {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(url) = args.url {
        config.source_url = url;
    }
    if let Some(path) = args.failure_log {
        config.failure_log = path;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lines = match &args.file {
        Some(path) => source::read_lines(path)?,
        None => source::fetch(&config.source_url, &config.cache_path)?,
    };
    log::info!("read {} lines", lines.len());

    let mut questions = parser::parse_questions(&lines)?;
    log::info!("parsed {} questions", questions.len());
    selection::shuffle(&mut questions, &mut rng);

    let recorder = FileRecorder::new(&config.failure_log);
    let mut review = selection::build_review_set(&questions, &recorder.failures()?)?;
    selection::shuffle(&mut review, &mut rng);
    log::info!("{} questions under review", review.len());

    let mut training = Training::new(questions, review, Box::new(recorder));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stats = training.run(&mut stdin.lock(), &mut stdout.lock())?;
    log::info!("session complete: {}/{} correct", stats.correct, stats.asked);

    Ok(())
}
