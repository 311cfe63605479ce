//! Rolodex detail list builder
//!
//! Reads a contact snapshot as JSON and prints the ordered, collapsed detail
//! list a contact screen would render.
//!
//! Usage:
//!   rolodex --snapshot contact.json [--accounts accounts.json] [--pretty]
//!
//! Logs go to stderr; stdout carries only the JSON list.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rolodex_cli::{Overrides, render, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Build a contact detail list from a snapshot")]
struct Args {
    /// Contact snapshot JSON
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Account type registry JSON (built-in kinds only when omitted)
    #[arg(short, long)]
    accounts: Option<PathBuf>,

    /// Build options JSON
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Device cannot place calls
    #[arg(long)]
    no_calls: bool,

    /// Device cannot send text messages
    #[arg(long)]
    no_sms: bool,

    /// Device can place SIP calls
    #[arg(long)]
    sip: bool,

    /// Region for formatting numbers without a country code
    #[arg(long)]
    country_iso: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let overrides = Overrides {
        no_calls: args.no_calls,
        no_sms: args.no_sms,
        sip: args.sip,
        country_iso: args.country_iso,
    };
    let list = run(
        &args.snapshot,
        args.accounts.as_deref(),
        args.options.as_deref(),
        &overrides,
    )?;

    println!("{}", render(&list, args.pretty)?);
    Ok(())
}
