use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for countrycodes
#[derive(Debug, Parser)]
#[command(
    name = "countrycodes",
    version,
    about = "Look up ISO-3166-1 country codes, names and dialing codes"
)]
pub struct CliArgs {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show record counts per assignment status
    Stats,

    /// List all records, optionally only one assignment status
    List {
        /// Assignment status (e.g. officially-assigned, transitionally-reserved)
        #[arg(short, long)]
        assignment: Option<String>,
    },

    /// Lookup by two-letter code (case-sensitive, e.g. DE)
    Alpha2 { code: String },

    /// Lookup by three-letter code (case-sensitive, e.g. DEU)
    Alpha3 { code: String },

    /// Lookup by exact English name (e.g. "Germany")
    Name { name: String },

    /// Lookup by numeric code (e.g. 276)
    #[command(allow_negative_numbers = true)]
    Numeric { code: i32 },

    /// Lookup by alpha-2, alpha-3 or numeric code, whichever fits
    Code { code: String },

    /// Find countries whose name starts with a prefix (case-insensitive)
    Search { prefix: String },

    /// Find countries by dialing code prefix (e.g. +1, 49)
    Dial { prefix: String },
}
