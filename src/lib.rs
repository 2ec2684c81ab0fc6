//! # raceboard - race lap report generator
//!
//! A CLI tool that reads two lap logs (`start.log`, `end.log`) and a driver
//! roster (`abbreviations.txt`) from a data folder, joins them on the
//! 3-character driver abbreviation, and prints a ranked lap report or a
//! single driver's detail.
//!
//! ## Report layout
//!
//! - Drivers with a positive lap time, ranked ascending by elapsed time
//! - A dash divider as wide as the last ranked line
//! - A `possible errors in data:` section listing drivers whose recorded
//!   end time precedes their start time
//!
//! `--desc` reverses the rendered ranked block (divider first) without
//! re-sorting; `--driver <NAME>` prints one driver's detail instead.

pub mod app;
pub mod cli;
pub mod datetime;
pub mod error;
pub mod printer;
pub mod report;
pub mod roster;
pub mod timelog;
pub mod types;

pub use error::{Error, Result};
pub use printer::Direction;
pub use report::RaceReport;
pub use types::Driver;
