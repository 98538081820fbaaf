//! countrycodes — Command-line interface for countrycodes-core
//!
//! Usage examples
//! --------------
//!
//! - Show counts per assignment status
//!   $ countrycodes stats
//!
//! - Exact lookups (case-sensitive, like the library)
//!   $ countrycodes alpha2 DE
//!   $ countrycodes alpha3 DEU
//!   $ countrycodes name Germany
//!   $ countrycodes numeric 276
//!
//! - Name prefix search (case-insensitive)
//!   $ countrycodes search "united states"
//!
//! - Dialing code search, as JSON
//!   $ countrycodes --json dial +1
use clap::Parser;
use countrycodes_cli::args::{CliArgs, Commands};
use countrycodes_cli::render;
use countrycodes_core::{Assignment, CountryCode, CountrySearch, Registry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_one(record: Option<&CountryCode>, query: &str, json: bool) -> anyhow::Result<bool> {
    match record {
        Some(c) if json => println!("{}", render::to_json(c)?),
        Some(c) => println!("{}", render::record_details(c)),
        None => {
            eprintln!("No country found for: {query}");
            return Ok(false);
        }
    }
    Ok(true)
}

fn print_many(records: &[&CountryCode], query: &str, json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", render::to_json(records)?);
        return Ok(!records.is_empty());
    }
    if records.is_empty() {
        eprintln!("No country found for: {query}");
        return Ok(false);
    }
    for c in records {
        println!("{}", render::record_line(c));
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let registry = Registry::global();
    let json = args.json;
    debug!(command = ?args.command, json, "dispatching");

    let found = match args.command {
        Commands::Stats => {
            let stats = registry.stats();
            if json {
                println!("{}", render::to_json(&stats)?);
            } else {
                println!("{}", render::stats_text(&stats));
            }
            true
        }

        Commands::List { assignment } => {
            let records: Vec<&CountryCode> = match assignment {
                Some(status) => registry.by_assignment(status.parse::<Assignment>()?),
                None => registry.records().iter().collect(),
            };
            print_many(&records, "list", json)?
        }

        Commands::Alpha2 { code } => print_one(registry.get_by_alpha2(&code), &code, json)?,
        Commands::Alpha3 { code } => print_one(registry.get_by_alpha3(&code), &code, json)?,
        Commands::Name { name } => print_one(registry.get_by_name(&name), &name, json)?,
        Commands::Numeric { code } => {
            print_one(registry.get_by_numeric(code), &code.to_string(), json)?
        }
        Commands::Code { code } => print_one(registry.get_by_code(&code), &code, json)?,

        Commands::Search { prefix } => {
            print_many(&registry.find_by_name(&prefix), &prefix, json)?
        }
        Commands::Dial { prefix } => {
            print_many(&registry.find_by_dialing_code(&prefix), &prefix, json)?
        }
    };

    if !found {
        std::process::exit(1);
    }
    Ok(())
}
