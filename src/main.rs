use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::warn;

use indramayu_dataset::config::Config;
use indramayu_dataset::generate::{write_dataset, Generator};
use indramayu_dataset::question::QuestionStyle;
use indramayu_dataset::samples::{self, DEFAULT_SAMPLE_COUNT};
use indramayu_dataset::{preview, topics, validate};

#[derive(Parser)]
#[command(name = "indramayu-dataset")]
#[command(about = "Indramayu tourism Q&A dataset tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset from the topic list
    Generate {
        /// Topic list, one topic per line
        #[arg(long)]
        topics: Option<PathBuf>,
        /// Where to write the JSON dataset
        #[arg(long)]
        output: Option<PathBuf>,
        /// Vary question templates with this seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check structure, content and language balance of a dataset
    Validate {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the first few records
    Samples {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
    },
    /// Browse a dataset in the terminal
    Preview {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Generate { topics, output, seed } => {
            let seed = config.seed(seed)?;
            run_generate(&config.with_overrides(topics, output), seed)?;
        }
        Commands::Validate { input } => {
            let config = config.with_overrides(None, input);
            if !run_validate(&config.dataset_path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Samples { input, count } => {
            let config = config.with_overrides(None, input);
            let records = samples::load_dataset(&config.dataset_path)?;
            print!("{}", samples::render_samples(&records, count));
        }
        Commands::Preview { input } => {
            let config = config.with_overrides(None, input);
            let records = samples::load_dataset(&config.dataset_path)?;
            preview::run(records, &config.dataset_path).context("terminal preview failed")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_generate(config: &Config, seed: Option<u64>) -> anyhow::Result<()> {
    let topic_list = topics::load_topics(&config.topics_path)?;
    println!("Found {} topics in {}", topic_list.len(), config.topics_path.display());

    let style = QuestionStyle::from_seed(seed);
    let dataset = Generator::new(style).generate(&topic_list);
    write_dataset(&config.dataset_path, &dataset.records)?;

    let summary = dataset.summary;
    println!("\n{}", "=".repeat(60));
    println!("DATASET: {} conversations", summary.records);
    println!("Output: {}", config.dataset_path.display());
    println!(
        "  Topics: {} ({} hand-written, {} from template)",
        summary.topics,
        summary.authored_topics,
        summary.topics - summary.authored_topics
    );
    match style {
        QuestionStyle::Categorized => println!("  Questions: categorized"),
        QuestionStyle::Varied { seed } => println!("  Questions: varied (seed {seed})"),
    }
    println!("  Format: 2 conversations per topic (Indonesian + Indramayu)");

    Ok(())
}

/// Prints the report and returns whether the dataset passed.
fn run_validate(path: &Path) -> anyhow::Result<bool> {
    let report = validate::validate_file(path)?;

    println!("{report}");
    if !report.language.balanced() {
        warn!("language distribution is outside the 40-60% range");
    }
    Ok(report.passed())
}
