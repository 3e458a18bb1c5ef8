mod analyze;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use newsmood_core::SortOrder;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsmood")]
#[command(about = "Headline sentiment for a news keyword")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch recent headlines for a keyword and report their sentiment
    Analyze {
        /// Search keyword (e.g. "Global Economy")
        keyword: String,

        /// Number of articles to analyze, 1 to 100 [default: from config]
        #[arg(long)]
        limit: Option<u32>,

        /// Provider ordering: relevancy, publishedAt or popularity
        #[arg(long, default_value_t = SortOrder::Relevancy)]
        sort: SortOrder,

        /// Write a CSV report into DIR (or the configured export directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Omit the article link list
        #[arg(long)]
        no_links: bool,
    },
    /// Print the effective configuration with secrets redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = newsmood_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            keyword,
            limit,
            sort,
            export,
            no_links,
        } => {
            let options = analyze::AnalyzeOptions {
                keyword,
                limit: limit.unwrap_or(config.default_limit),
                sort,
                export_dir: export.map(|dir| dir.unwrap_or_else(|| config.export_dir.clone())),
                show_links: !no_links,
            };
            analyze::run_analyze(&config, &options).await?;
        }
        Commands::Config => print!("{}", render::render_config(&config)),
    }

    Ok(())
}
