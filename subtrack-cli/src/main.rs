use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use subtrack_core::Transaction;
use subtrack_finance::SignPolicy;
use subtrack_ingest::{
    StatementExtractor, StatementSource, parse_manual_entries, parse_transactions_csv,
};
use tracing::info;

mod config;
mod logging;
mod output;
mod state;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SUBTRACK_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "subtrack",
    version,
    long_version = LONG_VERSION,
    about = "Track subscription spending from bank statements"
)]
struct Cli {
    /// Config file (default: ~/.subtrack/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement, flag subscriptions and compare spend to the budget
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Monthly budget (overrides the config file)
        #[arg(long)]
        budget: Option<Decimal>,

        /// Count only debits, as positive spend
        #[arg(long)]
        debits_as_spend: bool,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the classified transaction table to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Bank statement PDF
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// CSV with Date, Description, Amount columns
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Text file with one `Date, Description, Amount` per line (`-` for stdin)
    #[arg(long)]
    manual: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze {
            input,
            budget,
            debits_as_spend,
            json,
            export,
        } => {
            let mut cfg = config::load_config(cli.config.as_deref())?;
            if debits_as_spend {
                cfg.sign_policy = SignPolicy::DebitsAsSpend;
            }
            let budget = budget.unwrap_or(cfg.monthly_budget);

            let txns = load_transactions(&input, &cfg)?;
            let report = cfg.analyzer().analyze(&txns, budget);

            if let Some(path) = export.as_deref() {
                output::export_csv(&report.transactions, path)?;
                info!(path = %path.display(), rows = report.transactions.len(), "exported table");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", output::render_report(&report));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(cli.config.as_deref())?,
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn load_transactions(input: &InputArgs, cfg: &config::Config) -> Result<Vec<Transaction>> {
    let (source, txns) = if let Some(path) = &input.pdf {
        let pages = read_pdf(path)?;
        let extractor = StatementExtractor::new(cfg.line_parser())?;
        (StatementSource::Pdf, extractor.extract(&pages))
    } else if let Some(path) = &input.csv {
        (StatementSource::Csv, parse_transactions_csv(path)?)
    } else if let Some(path) = &input.manual {
        (StatementSource::Manual, parse_manual_entries(&read_manual(path)?))
    } else {
        bail!("pass one of --pdf, --csv or --manual");
    };

    info!(?source, transactions = txns.len(), "loaded transactions");
    Ok(txns)
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<Vec<String>> {
    subtrack_ingest::read_pdf_pages(path)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> Result<Vec<String>> {
    bail!(
        "cannot read {}: built without PDF support (enable the `pdf` feature)",
        path.display()
    )
}

fn read_manual(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
