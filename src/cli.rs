// src/cli.rs
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::*;
use crate::config::options::{BuildOptions, GameOptions, GenerateOptions};
use crate::core::HttpFetcher;
use crate::game::{self, Origin};
use crate::model::{self, NgramModel};
use crate::progress::Progress;
use crate::scrape::build_archive;
use crate::store::{self, ArchiveKey};
use crate::wisdom::wisdom_score;

#[derive(Parser, Debug)]
#[command(name = "proverbs", version, about = "Sumerian proverbs from the ETCSL: archive, sample, play")]
pub struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch ETCSL proverb pages and save them to an encrypted archive
    Build(BuildArgs),
    /// Print a new archive key; set PROVERB_ARCHIVE_KEY to this value
    Keygen,
    /// Print a random proverb from the archive
    Random(RandomArgs),
    /// Train the proverb model on the archive
    Train(TrainArgs),
    /// Generate a proverb with the trained model
    Generate(GenerateArgs),
    /// Sumerian or Synthetic? Guess where each proverb came from
    Game(GameArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Output archive path
    #[arg(short, long, default_value = DEFAULT_ARCHIVE)]
    output: PathBuf,
    /// Include proverbs that are only editorial (e.g. "1 line unclear")
    #[arg(long)]
    include_editorial_noise: bool,
    #[arg(long, default_value_t = FIRST_PAGE)]
    first_page: u32,
    #[arg(long, default_value_t = LAST_PAGE)]
    last_page: u32,
}

#[derive(Args, Debug)]
struct ArchiveArg {
    /// Path to the encrypted proverb archive
    #[arg(short = 'f', long = "archive", alias = "file", default_value = DEFAULT_ARCHIVE)]
    path: PathBuf,
}

#[derive(Args, Debug)]
struct ModelArg {
    /// Directory of the trained model
    #[arg(short = 'm', long = "model-dir", default_value = DEFAULT_MODEL_DIR)]
    dir: PathBuf,
}

#[derive(Args, Debug)]
struct RandomArgs {
    #[command(flatten)]
    archive: ArchiveArg,
    /// Print only the proverb text, no composition or metadata
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct TrainArgs {
    #[command(flatten)]
    archive: ArchiveArg,
    #[command(flatten)]
    model: ModelArg,
    /// Words of context per prediction
    #[arg(long, default_value_t = DEFAULT_ORDER)]
    order: usize,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    model: ModelArg,
    /// Sampling temperature 0.0–2.0
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,
}

#[derive(Args, Debug)]
struct GameArgs {
    #[command(flatten)]
    archive: ArchiveArg,
    #[command(flatten)]
    model: ModelArg,
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    match cli.command {
        Command::Build(args) => build(args),
        Command::Keygen => {
            println!("{}", ArchiveKey::generate());
            Ok(())
        }
        Command::Random(args) => random(args),
        Command::Train(args) => train(args),
        Command::Generate(args) => generate(args),
        Command::Game(args) => play(args),
    }
}

/// Page-by-page status on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, page: u32, proverbs: usize) {
        eprintln!("  6.1.{page:02}: {proverbs} proverbs");
    }
    fn item_skipped(&mut self, page: u32) {
        eprintln!("  6.1.{page:02}: not found, skipped");
    }
}

fn build(args: BuildArgs) -> Result<()> {
    // Fail before any network work if the archive could not be written.
    let key = ArchiveKey::from_env()?;
    let opts = BuildOptions {
        include_editorial_noise: args.include_editorial_noise,
        first_page: args.first_page,
        last_page: args.last_page,
        ..BuildOptions::default()
    };

    let fetcher = HttpFetcher::new()?;
    let archive = build_archive(&fetcher, &opts, Some(&mut CliProgress))?;

    store::save_archive(&args.output, &archive, &key)
        .wrap_err_with(|| format!("writing {}", args.output.display()))?;
    println!("Saved {} proverbs to {}", archive.len(), args.output.display());
    Ok(())
}

fn random(args: RandomArgs) -> Result<()> {
    let key = ArchiveKey::from_env()?;
    let archive = store::load_archive(&args.archive.path, &key)?;
    let proverb = store::random_proverb(&archive, &mut rand::rng())?;

    if args.quiet {
        println!("{}", proverb.text);
    } else {
        println!("Composition {}, proverb {}", proverb.composition, proverb.proverb_number);
        println!("Wisdom score: {}/10", wisdom_score(&proverb.text));
        println!("{}", proverb.text);
    }
    Ok(())
}

fn train(args: TrainArgs) -> Result<()> {
    let key = ArchiveKey::from_env()?;
    println!("Loading proverb archive...");
    let archive = store::load_archive(&args.archive.path, &key)?;
    let texts = model::training_texts(&archive)?;

    println!("Training on {} proverbs...", texts.len());
    let trained = NgramModel::train(&texts, args.order);
    trained.save(&args.model.dir)?;
    println!("Model saved to {}", args.model.dir.display());
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let opts = GenerateOptions {
        model_dir: args.model.dir,
        temperature: args.temperature,
        ..GenerateOptions::default()
    };
    let trained = NgramModel::load(&opts.model_dir)?;
    let text = model::generate_proverb(&trained, &mut rand::rng(), opts.temperature, opts.max_retries);
    println!("{text}");
    Ok(())
}

fn play(args: GameArgs) -> Result<()> {
    let opts = GameOptions {
        archive: args.archive.path,
        generate: GenerateOptions { model_dir: args.model.dir, ..GenerateOptions::default() },
        rounds: args.rounds,
    };
    let key = ArchiveKey::from_env()?;

    let model_dir = &opts.generate.model_dir;
    let trained = NgramModel::load(model_dir)
        .wrap_err("Run `proverbs train` first.")?;
    let archive = store::load_archive(&opts.archive, &key)?;

    println!("Sumerian or Synthetic? — proverb edition");
    println!("You'll see a proverb. Type 1 for Sumerian (from the archive), 2 for Synthetic.\n");

    let mut rng = rand::rng();
    let plan = game::plan_rounds(&mut rng, opts.rounds);
    if plan.contains(&Origin::Synthetic) {
        println!("Generating synthetic proverb(s) for this game...");
    }
    let (temperature, retries) = (opts.generate.temperature, opts.generate.max_retries);
    let rounds = game::deal_rounds(&plan, &archive, &mut rng, |rng| {
        model::generate_proverb(&trained, rng, temperature, retries)
    })?;
    println!();

    game::play(&rounds, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_of(argv: &[&str]) -> PathBuf {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Random(args) => args.archive.path,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn random_accepts_archive_and_file_flags() {
        assert_eq!(archive_of(&["proverbs", "random"]), PathBuf::from(DEFAULT_ARCHIVE));
        assert_eq!(archive_of(&["proverbs", "random", "-f", "a.json"]), PathBuf::from("a.json"));
        assert_eq!(archive_of(&["proverbs", "random", "--archive", "b.json"]), PathBuf::from("b.json"));
        assert_eq!(archive_of(&["proverbs", "random", "--file", "c.json"]), PathBuf::from("c.json"));
    }
}
