use std::path::PathBuf;

use clap::Parser;

mod scrape;

#[derive(Debug, Parser)]
#[command(name = "reelscope")]
#[command(about = "Scrape recent videos from an Instagram profile and analyze performance")]
struct Cli {
    /// Instagram username to scrape
    #[arg(short, long, default_value = "mattganzak", env = "REELSCOPE_USERNAME")]
    username: String,

    /// Number of videos to collect
    #[arg(short = 'n', long, default_value_t = 15, env = "REELSCOPE_COUNT")]
    count: usize,

    /// Name of a saved session for authenticated access
    #[arg(short, long, env = "REELSCOPE_LOGIN")]
    login: Option<String>,

    /// Output directory for exports (created if absent)
    #[arg(short, long, default_value = "output", env = "REELSCOPE_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Skip the performance analysis report
    #[arg(long)]
    no_analysis: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    scrape::run(&cli).await
}
