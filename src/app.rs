//! Main application logic and orchestration.

use crate::cli::Config;
use crate::error::Result;
use crate::printer::{write_driver_detail, write_report};
use crate::report::build_report;
use crate::roster::load_drivers;
use crate::types::Driver;
use std::io;

/// Main application runner
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the roster and print either the full report or one driver's
    /// detail to stdout
    pub fn run(&self) -> Result<()> {
        let drivers = load_drivers(&self.config.files)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, &drivers)
    }

    fn write<W: io::Write>(&self, writer: &mut W, drivers: &[Driver]) -> Result<()> {
        match &self.config.driver {
            Some(name) => {
                // first exact name match wins; no match prints nothing
                if let Some(driver) = drivers.iter().find(|d| d.name == *name) {
                    write_driver_detail(writer, driver)?;
                }
                Ok(())
            }
            None => {
                let report = build_report(drivers);
                write_report(writer, drivers, &report, self.config.direction)
            }
        }
    }
}
