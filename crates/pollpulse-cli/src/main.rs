use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use pollpulse_analysis::{word_frequencies, CohortKind, PostTable, RawPost, ReportBuilder};
use pollpulse_core::{load_registry, SearchMeta};
use pollpulse_sentiment::LexiconScorer;

#[derive(Debug, Parser)]
#[command(name = "pollpulse")]
#[command(about = "Sentiment cohort analysis over social post batches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct InputArgs {
    /// JSON array of raw post records.
    #[arg(long)]
    posts: PathBuf,

    /// YAML candidate registry (handles and aliases).
    #[arg(long)]
    candidates: PathBuf,

    /// Search query the batch was fetched with.
    #[arg(long)]
    query: String,

    /// "lat,lng,radius" location filter, if one was applied.
    #[arg(long)]
    geocode: Option<String>,

    /// Result-type tag from the upstream search API.
    #[arg(long, default_value = "recent")]
    result_type: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the full sentiment report for a post batch.
    Report(InputArgs),
    /// Print the top word frequencies for a post batch.
    Words {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of words to print.
        #[arg(long, default_value_t = 250)]
        max_words: usize,
    },
}

fn load_table(input: &InputArgs) -> anyhow::Result<PostTable> {
    let registry = load_registry(&input.candidates)
        .with_context(|| format!("loading candidates from {}", input.candidates.display()))?;

    let posts_json = std::fs::read_to_string(&input.posts)
        .with_context(|| format!("reading posts from {}", input.posts.display()))?;
    let raw: Vec<RawPost> =
        serde_json::from_str(&posts_json).context("parsing posts JSON")?;

    tracing::info!(posts = raw.len(), candidates = registry.len(), "input loaded");

    let meta = SearchMeta::new(&input.query, input.geocode.clone(), &input.result_type);
    let table = PostTable::build(raw, registry, meta, &LexiconScorer)?;
    Ok(table)
}

fn run_report(input: &InputArgs) -> anyhow::Result<()> {
    let table = load_table(input)?;
    let builder = ReportBuilder::new(&table);

    println!("{}", builder.header());
    println!("{}", builder.per_candidate(CohortKind::Follows));
    println!("{}", builder.per_candidate(CohortKind::Mentions));
    println!("{}", builder.pairwise());
    println!("{}", builder.follow_coverage());
    println!("{}", builder.mention_overview());
    Ok(())
}

fn run_words(input: &InputArgs, max_words: usize) -> anyhow::Result<()> {
    let table = load_table(input)?;
    for (word, count) in word_frequencies(&table, max_words) {
        println!("{count:>6}  {word}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report(input) => run_report(&input),
        Commands::Words { input, max_words } => run_words(&input, max_words),
    }
}
