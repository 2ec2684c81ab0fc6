//! Lap log parsing: `<3-char key><timestamp>` lines into a keyed map.

use crate::datetime::parse_timestamp;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

/// Read a lap log into a map from 3-character abbreviation to timestamp.
///
/// Blank lines are skipped. A file that cannot be read is reported to the
/// user and yields an empty map so the run can continue; a line whose
/// timestamp does not parse aborts the run.
pub fn read_timelog(path: &Path) -> Result<HashMap<String, NaiveDateTime>> {
    let mut entries = HashMap::new();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("There is no file named {}", path.display());
            return Ok(entries);
        }
    };

    for (number, raw) in contents.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let (key, timestamp) = split_key(line);
        let parsed = parse_timestamp(timestamp).map_err(|source| Error::Timestamp {
            file: path.display().to_string(),
            line: number + 1,
            source,
        })?;
        entries.insert(key.to_string(), parsed);
    }

    log::debug!("read {} timestamps from {}", entries.len(), path.display());
    Ok(entries)
}

/// Split a line into its 3-character key and the timestamp remainder.
/// Lines shorter than 4 characters leave an empty remainder, which fails
/// timestamp parsing upstream.
fn split_key(line: &str) -> (&str, &str) {
    match line.char_indices().nth(3) {
        Some((idx, _)) => line.split_at(idx),
        None => (line, ""),
    }
}
