//! Partitioning and ranking of driver records.

use crate::types::Driver;

/// Ranked lap report: drivers with a positive lap time sorted ascending,
/// plus the drivers whose recorded end precedes their start
#[derive(Debug, Clone)]
pub struct RaceReport {
    /// Drivers with `start_time < end_time`, ascending by elapsed time
    pub ranked: Vec<Driver>,
    /// Drivers with `start_time > end_time`, in roster order
    pub failed: Vec<Driver>,
}

/// Partition drivers into ranked and failed and sort the ranking.
///
/// Drivers whose start and end timestamps are equal land in neither list.
/// The sort is stable, so drivers with equal lap times keep roster order.
pub fn build_report(drivers: &[Driver]) -> RaceReport {
    let mut ranked = Vec::new();
    let mut failed = Vec::new();

    for driver in drivers {
        if driver.start_time < driver.end_time {
            ranked.push(driver.clone());
        } else if driver.start_time > driver.end_time {
            failed.push(driver.clone());
        }
    }

    ranked.sort_by_key(|driver| driver.elapsed());

    RaceReport { ranked, failed }
}
