//! Command-line interface definitions for telejobs.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default tuned for telecom/voice-engineering searches,
//! so running the binary bare performs a useful search.

use clap::Parser;

/// Command-line arguments for the telejobs application.
///
/// The defaults reproduce the standing search this tool was built for:
/// senior voice-engineering roles around Ribbon SBC and Microsoft Teams
/// telephony, anywhere remote.
///
/// # Examples
///
/// ```sh
/// # Search with the default telecom keyword set
/// telejobs
///
/// # Narrow the search and export a CSV
/// telejobs -k "Ribbon SBC, SIP" -l London -o jobs.csv
///
/// # JSON for scripting
/// telejobs --json jobs.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Comma-separated search keywords
    #[arg(
        short,
        long,
        default_value = "Ribbon SBC, SIP, MS Teams Direct Routing, Operator Connect"
    )]
    pub keywords: String,

    /// Location to search in
    #[arg(short, long, default_value = "Remote")]
    pub location: String,

    /// Minimum years of experience, 0-20. Informational for now: the board
    /// URLs do not vary with it (FoundIt is pinned at 10 years and the
    /// LinkedIn link always targets senior roles)
    #[arg(short = 'e', long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(0..=20))]
    pub min_experience: u8,

    /// Write the aggregated results to a CSV file at this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the aggregated results to a JSON file at this path
    #[arg(long)]
    pub json: Option<String>,
}
