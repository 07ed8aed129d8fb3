use anyhow::Result;
use clap::Parser;
use engine::{run, RunOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "freqsearch")]
#[command(about = "Index a document base and answer a batch of search requests", long_about = None)]
struct Args {
    /// Config file listing the documents to index
    #[arg(long, env = "FREQSEARCH_CONFIG", default_value = "config.json")]
    config: PathBuf,
    /// Requests file
    #[arg(long, env = "FREQSEARCH_REQUESTS", default_value = "requests.json")]
    requests: PathBuf,
    /// Answers file, overwritten on every run
    #[arg(long, env = "FREQSEARCH_ANSWERS", default_value = "answers.json")]
    answers: PathBuf,
    /// Maximum results per request (defaults to the config's max_responses)
    #[arg(long)]
    max_responses: Option<usize>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let opts = RunOptions {
        config: args.config,
        requests: args.requests,
        answers: args.answers,
        max_responses: args.max_responses,
    };
    run(&opts)?;
    Ok(())
}
