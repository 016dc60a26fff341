//! Command-line front end.
//!
//! Reads pasted item info text from a file or stdin, grades it, and
//! prints the summary line, the full report, a rendered export template,
//! or JSON.
//!
//! ```bash
//! # Summary for a Modulated Strip Miner II roll copied to a file
//! rollgrade roll.txt --item-type modulated
//!
//! # Full report from stdin, with debug logging
//! RUST_LOG=rollgrade=debug rollgrade --format report < roll.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rollgrade::format::render_template;
use rollgrade::{analyze_text, ItemType, RollAnalyzer, RollReport};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rollgrade", about = "Grade mutated strip miner rolls")]
#[command(version)]
struct Cli {
    /// File holding the pasted item info. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Tool variant the text describes.
    #[arg(short, long, value_enum, default_value_t = ItemTypeArg::Ore)]
    item_type: ItemTypeArg,

    /// Output rendering.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Export template, e.g. "{tier} {m3Pct}% {minerType}". Overrides --format.
    #[arg(short, long)]
    template: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ItemTypeArg {
    Ore,
    Modulated,
}

impl From<ItemTypeArg> for ItemType {
    fn from(arg: ItemTypeArg) -> Self {
        match arg {
            ItemTypeArg::Ore => ItemType::Ore,
            ItemTypeArg::Modulated => ItemType::Modulated,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Report,
    Json,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Grade `input` and render it as the command line asks.
fn run(cli: &Cli, input: &str) -> Result<String> {
    let item_type = ItemType::from(cli.item_type);
    let result = analyze_text(input, item_type)
        .with_context(|| format!("failed to analyze {item_type} roll"))?;

    let output = match (&cli.template, cli.format) {
        (Some(template), _) => render_template(template, &result)?,
        (None, OutputFormat::Summary) => result.summary(),
        (None, OutputFormat::Report) => {
            RollReport::new(&result, &RollAnalyzer::default())?.render()
        }
        (None, OutputFormat::Json) => {
            let report = RollReport::new(&result, &RollAnalyzer::default())?;
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        }
    };
    Ok(output.trim_end().to_string())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_ref())?;
    println!("{}", run(&cli, &text)?);
    Ok(())
}
