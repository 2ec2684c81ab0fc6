//! Timestamp parsing and duration formatting utilities.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Fixed timestamp layout used by both lap logs: `2018-05-24_12:02:58.917000`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.f";

/// Parse a lap-log timestamp in the fixed `YYYY-MM-DD_HH:MM:SS.ffffff` layout
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::format::ParseError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`, appending the microsecond
/// part only when it is nonzero
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    let micros = ts.nanosecond() / 1_000;
    if micros == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", ts.format("%Y-%m-%d %H:%M:%S"), micros)
    }
}

/// Format an elapsed duration as `H:MM:SS`, appending the microsecond part
/// only when it is nonzero. Negative durations get a leading sign; hours
/// grow without a day component.
pub fn format_elapsed(elapsed: Duration) -> String {
    let negative = elapsed < Duration::zero();
    let magnitude = if negative { -elapsed } else { elapsed };

    let secs = magnitude.num_seconds();
    let micros = magnitude
        .num_microseconds()
        .map(|us| us - secs * 1_000_000)
        .unwrap_or(0);

    let mut out = format!(
        "{}{}:{:02}:{:02}",
        if negative { "-" } else { "" },
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    );
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
