use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand};
use common::records::timestamp;
use common::seed::{self, SeedOptions};
use common::store::{DocumentStore, FilesystemDocumentStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info};

#[derive(Debug, Parser)]
#[command(name = "newsroom", version, about = "Tools for the newsroom mock API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replace the data directory's collections with generated fake data.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Directory the collection files are written to.
    #[arg(long, env = "NEWSROOM__STORE__DATA_DIR", default_value = "./resources")]
    data_dir: PathBuf,

    #[arg(long, default_value_t = 5)]
    workspaces: usize,

    #[arg(long, default_value_t = 50)]
    channels: usize,

    #[arg(long, default_value_t = 50)]
    articles: usize,

    #[arg(long, default_value_t = 50)]
    videos: usize,

    /// Seed for the random generator. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Reference time for generated timestamps. Defaults to the current UTC time.
    #[arg(long, value_parser = parse_timestamp)]
    now: Option<NaiveDateTime>,
}

impl SeedArgs {
    fn options(&self) -> SeedOptions {
        SeedOptions {
            workspaces: self.workspaces,
            channels: self.channels,
            articles: self.articles,
            videos: self.videos,
        }
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    timestamp::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    match Cli::parse().command {
        Command::Seed(args) => run_seed(args).await,
    }
}

async fn run_seed(args: SeedArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let now = args.now.unwrap_or_else(|| Utc::now().naive_utc());
    let dataset = seed::generate(&args.options(), now, &mut rng);

    let store = FilesystemDocumentStore::new(args.data_dir.clone())
        .await
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;
    let store: &dyn DocumentStore = &store;
    dataset
        .save(store)
        .await
        .with_context(|| format!("write collections to {}", args.data_dir.display()))?;

    info!(data_dir = %args.data_dir.display(), "Seed complete");
    Ok(())
}
