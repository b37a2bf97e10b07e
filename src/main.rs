use billsplit::application::splitter::{BillSplitter, ShareOutcome};
use billsplit::config::SplitConfig;
use billsplit::domain::bill::{BillInput, BillUpdate, coerce_amount, coerce_headcount};
use billsplit::domain::currency::CurrencyCode;
use billsplit::domain::ports::{ClipboardBox, ShareTargetBox};
use billsplit::infrastructure::file::{FileClipboard, FileShareTarget, UnavailableShareTarget};
use billsplit::infrastructure::in_memory::InMemoryClipboard;
use billsplit::interfaces::csv::bill_reader::BillReader;
use billsplit::interfaces::csv::quote_writer::QuoteWriter;
use billsplit::logging::init_cli_logger;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Split a bill between friends", long_about = None)]
struct Cli {
    /// TOML file with `default_currency` and a `[rates]` table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a single bill
    Split(SplitArgs),
    /// Split every bill in a CSV file and print the results as CSV
    Batch {
        /// Input bills CSV file
        input: PathBuf,
    },
}

#[derive(Args)]
struct SplitArgs {
    /// Bill total before tax, tip and service charge
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    total: String,

    /// Number of people sharing the bill (at least 1)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    people: String,

    /// Tax in percent
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    tax: String,

    /// Tip in percent
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    tip: String,

    /// Add a 10% service charge
    #[arg(long)]
    service_charge: bool,

    /// Round each share up to a whole unit
    #[arg(long)]
    round_up: bool,

    /// Display currency (USD, EUR, GBP, JPY)
    #[arg(long)]
    currency: Option<String>,

    /// Print the full breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Copy the per-person amount to this file
    #[arg(long)]
    copy_to: Option<PathBuf>,

    /// Share the per-person amount, copying it if sharing is unavailable
    #[arg(long)]
    share: bool,

    /// Share by writing the message to this file
    #[arg(long)]
    share_to: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => SplitConfig::load(path).await.into_diagnostic()?,
        None => SplitConfig::default(),
    };

    match cli.command {
        Command::Split(args) => run_split(config, args).await,
        Command::Batch { input } => run_batch(config, input),
    }
}

async fn run_split(config: SplitConfig, args: SplitArgs) -> Result<()> {
    let currency = match &args.currency {
        Some(code) => code.parse::<CurrencyCode>().into_diagnostic()?,
        None => config.default_currency,
    };

    let bill = BillInput::default().apply_all([
        BillUpdate::SetTotal(coerce_amount(&args.total)),
        BillUpdate::SetHeadcount(coerce_headcount(&args.people)),
        BillUpdate::SetTaxPercent(coerce_amount(&args.tax)),
        BillUpdate::SetTipPercent(coerce_amount(&args.tip)),
        BillUpdate::SetServiceCharge(args.service_charge),
        BillUpdate::SetRoundUp(args.round_up),
        BillUpdate::SetCurrency(currency),
    ]);

    let clipboard: ClipboardBox = match &args.copy_to {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(InMemoryClipboard::new()),
    };
    let share_target: ShareTargetBox = match &args.share_to {
        Some(path) => Box::new(FileShareTarget::new(path)),
        None => Box::new(UnavailableShareTarget),
    };
    let splitter = BillSplitter::new(config.rates, clipboard, share_target);

    let quote = splitter.quote(&bill).into_diagnostic()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote).into_diagnostic()?);
    } else {
        println!("Each person pays: {}", quote.display);
    }

    if args.share {
        match splitter.share(&bill).await.into_diagnostic()? {
            ShareOutcome::Shared(message) => println!("Shared: {}", message.text),
            ShareOutcome::Copied(notice) => println!("{} {}", notice.title, notice.description),
        }
    } else if args.copy_to.is_some() {
        let notice = splitter.copy(&bill).into_diagnostic()?;
        println!("{} {}", notice.title, notice.description);
    }

    Ok(())
}

fn run_batch(config: SplitConfig, input: PathBuf) -> Result<()> {
    let splitter = BillSplitter::new(
        config.rates,
        Box::new(InMemoryClipboard::new()),
        Box::new(UnavailableShareTarget),
    );

    let file = File::open(input).into_diagnostic()?;
    let reader = BillReader::new(file).with_default_currency(config.default_currency);

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());
    for bill_result in reader.bills() {
        match bill_result.and_then(|bill| splitter.quote(&bill)) {
            Ok(quote) => writer.write_quote(&quote).into_diagnostic()?,
            Err(e) => eprintln!("Error reading bill: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
