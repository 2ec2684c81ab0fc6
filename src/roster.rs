//! Driver roster loading and joining against the lap logs.

use crate::error::{Error, Result};
use crate::timelog::read_timelog;
use crate::types::Driver;
use std::fs;
use std::path::Path;

/// Lap start log file name inside the data folder
pub const START_LOG: &str = "start.log";
/// Lap end log file name inside the data folder
pub const END_LOG: &str = "end.log";
/// Roster file name inside the data folder
pub const ROSTER_FILE: &str = "abbreviations.txt";

/// Load the driver roster from a data folder, joining each
/// `ABBR_Name_Company` line against both lap logs on the abbreviation.
///
/// Drivers are returned in roster-file order. A missing roster file is
/// reported to the user and yields an empty roster; a roster line with the
/// wrong shape or an abbreviation absent from either log aborts the run.
pub fn load_drivers(folder: &Path) -> Result<Vec<Driver>> {
    let start_times = read_timelog(&folder.join(START_LOG))?;
    let end_times = read_timelog(&folder.join(END_LOG))?;

    let roster_path = folder.join(ROSTER_FILE);
    let contents = match fs::read_to_string(&roster_path) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("There is no such file");
            return Ok(Vec::new());
        }
    };

    let mut drivers = Vec::new();
    for (number, raw) in contents.lines().enumerate() {
        let line = raw.trim_end();

        let fields: Vec<&str> = line.split('_').collect();
        let (abbreviation, name, company) = match fields.as_slice() {
            [abbreviation, name, company] => (*abbreviation, *name, *company),
            _ => {
                return Err(Error::Roster {
                    file: roster_path.display().to_string(),
                    line: number + 1,
                    message: format!(
                        "expected 3 underscore-delimited fields, got {}",
                        fields.len()
                    ),
                })
            }
        };

        let start_time = *start_times
            .get(abbreviation)
            .ok_or_else(|| Error::MissingKey {
                abbreviation: abbreviation.to_string(),
                log: START_LOG.to_string(),
            })?;
        let end_time = *end_times.get(abbreviation).ok_or_else(|| Error::MissingKey {
            abbreviation: abbreviation.to_string(),
            log: END_LOG.to_string(),
        })?;

        drivers.push(Driver {
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            start_time,
            end_time,
        });
    }

    log::debug!("loaded {} drivers from {}", drivers.len(), folder.display());
    Ok(drivers)
}
