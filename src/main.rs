mod error;
mod export;
mod fetch;
mod parser;

use std::path::PathBuf;

use clap::Parser;

const DEFAULT_URL: &str = "https://www.screener.in/company/SBCL/consolidated/";
const DEFAULT_OUTPUT: &str = "data/sbcl_last_20_quarters.csv";

#[derive(Parser)]
#[command(
    name = "screener_scraper",
    about = "Extract the most recent quarterly results for a screener.in company into a CSV file"
)]
struct Cli {
    /// Company consolidated page URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Number of most-recent quarters to extract
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let html = fetch::fetch_page(&cli.url)?;
    let quarters = parser::extract_quarters(&html, cli.limit)?;
    export::write_csv(&quarters, &cli.output)?;

    println!(
        "Wrote {} quarters to {}",
        quarters.rows.len(),
        cli.output.display()
    );
    Ok(())
}
