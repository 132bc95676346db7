use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use weekspend_core::Settings;
use weekspend_finance::{RunError, build_transactions, run};
use weekspend_ingest::{StatementRow, load_config, parse_netbank_csv};

mod sinks;

use sinks::DirectorySink;

#[derive(Parser, Debug)]
#[command(name = "weekspend", version, about = "Weekly spending reports from a bank statement export")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the statement and write one CSV report per week
    Report {
        /// Budget config (categories, weekly earning and rent)
        #[arg(long, default_value = "config.txt")]
        config: PathBuf,

        /// NetBank CSV export
        #[arg(long, default_value = "CSVData.csv")]
        csv: PathBuf,

        /// Directory the weekly reports are written to
        #[arg(long, default_value = "output")]
        out: PathBuf,

        /// Also print every report (same as "Print In Console: true")
        #[arg(long)]
        print: bool,
    },

    /// Show the category each transaction is assigned, without writing reports
    Classify {
        #[arg(long, default_value = "config.txt")]
        config: PathBuf,

        #[arg(long, default_value = "CSVData.csv")]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            config,
            csv,
            out,
            print,
        } => {
            let (settings, rows) = load_inputs(&config, &csv)?;
            let mut sink = DirectorySink::create(&out, print || settings.print_in_console)?;

            let summary = match run(&settings, &rows, &mut sink) {
                Ok(summary) => summary,
                Err(RunError::Uncategorized(e)) => {
                    println!("{e}");
                    bail!("{} uncategorized transaction(s)", e.descriptions.len());
                }
                Err(e) => {
                    return Err(anyhow::Error::from(e).context(format!("processing {}", csv.display())));
                }
            };

            for (week, error) in &summary.failed {
                println!("- File write error ({week}): {error}");
            }
            println!(
                "Done. {} weekly report(s) written to \"{}\".",
                summary.written.len(),
                sink.dir().display()
            );
        }

        Command::Classify { config, csv } => {
            let (settings, rows) = load_inputs(&config, &csv)?;
            classify(&settings, &rows).with_context(|| format!("processing {}", csv.display()))?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_inputs(config: &Path, csv: &Path) -> Result<(Settings, Vec<StatementRow>)> {
    if !config.exists() {
        bail!("config not found: {} (pass --config <path>)", config.display());
    }
    if !csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv.display());
    }

    let settings = load_config(config)?;
    let rows = parse_netbank_csv(csv).with_context(|| format!("parsing {}", csv.display()))?;
    tracing::info!(
        categories = settings.categories.len(),
        rows = rows.len(),
        "loaded inputs"
    );
    Ok((settings, rows))
}

fn classify(settings: &Settings, rows: &[StatementRow]) -> Result<()> {
    let rules = &settings.categories;
    let txns = build_transactions(rows, rules)?;

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for t in &txns {
        *counts.entry(t.category.index()).or_insert(0) += 1;
        println!(
            "{:>4} | {} | {:>10} | {:<16} | {}",
            t.row,
            t.date,
            t.amount.to_string(),
            rules.name_of(t.category),
            t.description
        );
    }

    println!("\nParsed {} transactions", txns.len());
    for category in rules.categories() {
        let count = counts.get(&category.id.index()).copied().unwrap_or(0);
        println!("- {}: {}", category.name, count);
    }
    Ok(())
}
