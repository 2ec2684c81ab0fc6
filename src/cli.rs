//! Command-line interface definitions and parsing.

use crate::printer::Direction;
use clap::Parser;
use std::path::PathBuf;

/// raceboard - ranked race-lap reports from lap logs and a driver roster
#[derive(Parser)]
#[command(name = "raceboard")]
#[command(
    about = "Ranked race-lap reports from start/end lap logs and a driver roster",
    version
)]
pub struct Args {
    /// Folder containing start.log, end.log and abbreviations.txt
    #[arg(long, value_name = "FOLDER")]
    pub files: PathBuf,

    /// Rank fastest lap first (default)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Reverse the rendered ranking
    #[arg(long)]
    pub desc: bool,

    /// Print one driver's detail instead of the report (exact name match)
    #[arg(long, value_name = "NAME")]
    pub driver: Option<String>,
}

/// Parsed CLI configuration
#[derive(Debug)]
pub struct Config {
    pub files: PathBuf,
    pub direction: Direction,
    pub driver: Option<String>,
}

impl Config {
    /// Fold raw CLI arguments into a configuration
    pub fn from_args(args: Args) -> Self {
        let direction = if args.desc {
            Direction::Descending
        } else {
            Direction::Ascending
        };

        Config {
            files: args.files,
            direction,
            driver: args.driver,
        }
    }
}
