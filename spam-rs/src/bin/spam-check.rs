//! CLI tool for checking messages and phone numbers for spam
//!
//! # Usage
//!
//! ```bash
//! # Classify a message
//! spam-check message "FREE prize!!! click here http://bit.ly/x"
//!
//! # Classify a phone number
//! spam-check number "+91 75967 55829"
//!
//! # JSON output, reproducible fallback verdicts
//! spam-check --json --seed 42 number 1234567890
//! ```

use clap::{Parser, Subcommand};
use spam_rs::spam::{MessageResult, NumberResult, RandomSource, SeededRandom, ThreadRandom};
use spam_rs::{logging, Config, DetectionService, SpamDetection};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "spam-check")]
#[command(about = "Classify text messages and phone numbers as spam", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Seed for the randomized number fallback
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a text message
    Message {
        /// Message text
        text: String,
    },
    /// Classify a phone number
    Number {
        /// Phone number, any formatting
        number: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    logging::init(&config.logging);

    let random: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    let service = DetectionService::from_config_with_random(&config, random)?;

    let outcome = match &cli.command {
        Commands::Message { text } => service
            .predict_message(text)
            .await
            .map(|result| render_message(&result, cli.json)),
        Commands::Number { number } => service
            .predict_number(number)
            .await
            .map(|result| render_number(&result, cli.json)),
    };

    match outcome {
        Ok(output) => {
            println!("{}", output?);
            Ok(())
        }
        Err(e) if e.is_invalid_input() => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn render_message(result: &MessageResult, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let mut out = format!(
        "{} ({:.0}%)\n{}\n",
        result.verdict(),
        result.confidence() * 100.0,
        result.explanation()
    );

    if !result.urls().is_empty() {
        out.push_str(&format!("\nURLs ({}):\n", result.url_count()));
        for url in result.urls() {
            out.push_str(&format!("  {}\n", url));
        }
    }
    if !result.phones().is_empty() {
        out.push_str(&format!("\nPhone numbers ({}):\n", result.phone_count()));
        for phone in result.phones() {
            out.push_str(&format!("  {}\n", phone));
        }
    }
    if !result.risk_factors().is_empty() {
        out.push_str("\nRisk factors:\n");
        for factor in result.risk_factors() {
            out.push_str(&format!("  - {}\n", factor));
        }
    }

    Ok(out.trim_end().to_string())
}

fn render_number(result: &NumberResult, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    Ok(format!(
        "{} ({:.0}%)\nNumber: {}\nSource: {}\n{}",
        result.verdict(),
        result.confidence() * 100.0,
        result.normalized_number(),
        result.source(),
        result.explanation()
    ))
}
