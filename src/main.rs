use clap::Parser;
use earnings::{earnings::aggregate, parser::parse, report::write_report};

/// Summarize time and pay per day from an earnings CSV export.
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// CSV export with workDate, duration, payType and payout columns
    input: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let filename = Cli::parse().input;
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&filename)
        .map_err(|e| format!("opening earnings file `{}`: {}", filename, e))?;

    let earnings = aggregate(parse(rdr))?;

    write_report(&earnings, std::io::stdout().lock())?;
    Ok(())
}
