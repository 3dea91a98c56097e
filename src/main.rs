use std::env;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use kabunews_rs::{Digest, DigestBuilder, KnClient, KnError, Period};

/// Fetch recent company news for a ticker and print a Japanese digest.
#[derive(Parser, Debug)]
#[command(name = "kabunews", version, about)]
struct Args {
    /// Ticker symbol to look up (e.g., AAPL).
    #[arg(short, long, default_value = "")]
    ticker: String,

    /// Lookback window: 1d, 1w, or 1mo.
    #[arg(short, long, default_value_t = Period::OneWeek)]
    period: Period,

    /// Maximum number of articles in the digest.
    #[arg(short = 'n', long, default_value_t = kabunews_rs::DEFAULT_ARTICLE_LIMIT)]
    count: usize,

    /// Print the digest without translating it.
    #[arg(long)]
    no_translate: bool,

    /// Finnhub API token (falls back to the FINNHUB_API_KEY environment
    /// variable, which may come from a .env file).
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine; the variable may be set directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kabunews_rs=info,kabunews=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), KnError> {
    let args = Args::parse();

    let token = args
        .token
        .or_else(|| env::var("FINNHUB_API_KEY").ok())
        .ok_or(KnError::MissingToken)?;

    let client = KnClient::builder().token(token).build()?;

    let digest = DigestBuilder::new(&client, args.ticker)
        .period(args.period)
        .count(args.count)
        .translate(!args.no_translate)
        .run()
        .await;

    render(&digest);
    Ok(())
}

fn render(digest: &Digest) {
    match digest {
        Digest::EmptyTicker => {
            eprintln!("{}", "Enter a ticker symbol (e.g., AAPL).".yellow());
        }
        Digest::NoNews { warnings } => {
            for w in warnings {
                eprintln!("{} {w}", "warning:".red());
            }
            eprintln!(
                "{}",
                "No news found for the selected period. Try another period or ticker.".yellow()
            );
        }
        Digest::Report {
            text,
            translated,
            warnings,
        } => {
            for w in warnings {
                eprintln!("{} {w}", "warning:".red());
            }
            if !translated {
                eprintln!("{}", "showing untranslated text".dimmed());
            }
            println!("{text}");
        }
    }
}
