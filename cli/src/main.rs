//! Command-line front end for the auction fee engine
//!
//! Parses a bid amount and classification flags, runs one quote, and prints
//! the line-item breakdown as text or JSON.

use anyhow::{bail, Context};
use auction_fee_core_rs::{format_cents, FeeEngine, QuoteOptions, TitleType, VehicleType};
use clap::Parser;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "auction-fee",
    version,
    about = "Compute the total landed cost of a vehicle-auction bid."
)]
struct Cli {
    /// Bid amount in dollars (e.g. 1500 or 1500.75)
    amount: String,

    /// Vehicle title condition: salvage or clean
    #[arg(long, default_value = "salvage")]
    title: String,

    /// Vehicle weight class: light or heavy
    #[arg(long, default_value = "light")]
    vehicle: String,

    /// Apply the late-payment option
    #[arg(long)]
    late: bool,

    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let title: TitleType = cli
        .title
        .parse()
        .ok()
        .with_context(|| format!("unknown title type '{}' (expected salvage or clean)", cli.title))?;
    let vehicle: VehicleType = cli
        .vehicle
        .parse()
        .ok()
        .with_context(|| format!("unknown vehicle type '{}' (expected light or heavy)", cli.vehicle))?;

    let engine = FeeEngine::standard();
    let options = QuoteOptions {
        title_type: Some(title),
        vehicle_type: Some(vehicle),
        late_payment: cli.late,
    };

    let Some(breakdown) = engine.calculate_total(&cli.amount, &options) else {
        bail!("invalid bid amount '{}'", cli.amount);
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("Bid amount     ${:>12}", format_cents(breakdown.amount));
        println!("Buyer fee      ${:>12}", format_cents(breakdown.buyer_fee));
        println!("Internet fee   ${:>12}", format_cents(breakdown.internet_fee));
        println!("Gate fee       ${:>12}", format_cents(breakdown.gate_fee));
        println!("Env fee        ${:>12}", format_cents(breakdown.env_fee));
        println!("Title fee      ${:>12}", format_cents(breakdown.title_fee));
        println!("Broker fee     ${:>12}", format_cents(breakdown.broker_fee));
        println!("Total          ${:>12}", format_cents(breakdown.total));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
