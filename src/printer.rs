//! Plain-text rendering of the ranked report and single-driver detail.

use crate::datetime::{format_elapsed, format_timestamp};
use crate::error::Result;
use crate::report::RaceReport;
use crate::types::Driver;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Display direction for the ranked part of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fastest lap first (default)
    Ascending,
    /// Rendered lines reversed, divider first
    Descending,
}

/// Column widths shared by the ranked and failed sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub company: usize,
}

impl ColumnWidths {
    /// Measure the widest name and company across ALL drivers, so both
    /// report sections stay aligned even when their membership differs
    pub fn measure(drivers: &[Driver]) -> Self {
        Self {
            name: drivers.iter().map(|d| d.name.width()).max().unwrap_or(0),
            company: drivers.iter().map(|d| d.company.width()).max().unwrap_or(0),
        }
    }
}

/// Render the full report as display lines.
///
/// Ranked lines carry a 1-based rank right-aligned to two digits, followed
/// by a dash divider as wide as the last ranked line. Descending mode
/// reverses the already-rendered ranked block, divider included; it does
/// not re-sort. The failed section follows in roster order, unranked.
pub fn render_report(
    drivers: &[Driver],
    report: &RaceReport,
    direction: Direction,
) -> Vec<String> {
    let widths = ColumnWidths::measure(drivers);

    let mut lines: Vec<String> = report
        .ranked
        .iter()
        .enumerate()
        .map(|(index, driver)| {
            format!(
                "{:2}.{} | {} | {}",
                index + 1,
                pad(&driver.name, widths.name),
                pad(&driver.company, widths.company),
                format_elapsed(driver.elapsed()),
            )
        })
        .collect();

    let divider = "-".repeat(lines.last().map_or(0, |line| line.width()));
    lines.push(divider.clone());

    if direction == Direction::Descending {
        lines.reverse();
    }

    lines.push("possible errors in data:".to_string());
    lines.push(divider);
    for driver in &report.failed {
        lines.push(format!(
            "{} | {} | {}",
            pad(&driver.name, widths.name),
            pad(&driver.company, widths.company),
            format_elapsed(driver.elapsed()),
        ));
    }

    lines
}

/// Write the full report to the given stream
pub fn write_report<W: Write>(
    writer: &mut W,
    drivers: &[Driver],
    report: &RaceReport,
    direction: Direction,
) -> Result<()> {
    for line in render_report(drivers, report, direction) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Write one driver's full detail to the given stream
pub fn write_driver_detail<W: Write>(writer: &mut W, driver: &Driver) -> Result<()> {
    writeln!(
        writer,
        "Abbreviation: {}  Name: {}  Company: {} ",
        driver.abbreviation, driver.name, driver.company
    )?;
    writeln!(
        writer,
        "Start time: {}  End time: {}",
        format_timestamp(driver.start_time),
        format_timestamp(driver.end_time)
    )?;
    Ok(())
}

/// Left-align a value to the given display width
fn pad(value: &str, width: usize) -> String {
    let missing = width.saturating_sub(value.width());
    let mut out = String::with_capacity(value.len() + missing);
    out.push_str(value);
    out.extend(std::iter::repeat(' ').take(missing));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 5, 24)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn fixture() -> Vec<Driver> {
        vec![
            Driver {
                abbreviation: "AAA".to_string(),
                name: "Alpha".to_string(),
                company: "RED".to_string(),
                start_time: at(12, 0, 0),
                end_time: at(12, 1, 30),
            },
            Driver {
                abbreviation: "BBB".to_string(),
                name: "Bravo Two".to_string(),
                company: "GREEN".to_string(),
                start_time: at(12, 0, 0),
                end_time: at(12, 1, 20),
            },
            Driver {
                abbreviation: "CCC".to_string(),
                name: "Charlie".to_string(),
                company: "BLUEBIRD".to_string(),
                start_time: at(12, 2, 0),
                end_time: at(12, 1, 0),
            },
        ]
    }

    #[test]
    fn test_column_widths_cover_all_drivers() {
        let widths = ColumnWidths::measure(&fixture());
        // widest name is ranked, widest company is a failed entry
        assert_eq!(widths.name, "Bravo Two".len());
        assert_eq!(widths.company, "BLUEBIRD".len());
    }

    #[test]
    fn test_render_ascending() {
        let drivers = fixture();
        let report = build_report(&drivers);
        let lines = render_report(&drivers, &report, Direction::Ascending);

        assert_eq!(
            lines,
            vec![
                " 1.Bravo Two | GREEN    | 0:01:20".to_string(),
                " 2.Alpha     | RED      | 0:01:30".to_string(),
                "-".repeat(33),
                "possible errors in data:".to_string(),
                "-".repeat(33),
                "Charlie   | BLUEBIRD | -0:01:00".to_string(),
            ]
        );
    }

    #[test]
    fn test_divider_matches_last_ranked_line() {
        let drivers = fixture();
        let report = build_report(&drivers);
        let lines = render_report(&drivers, &report, Direction::Ascending);

        let last_ranked = &lines[report.ranked.len() - 1];
        let divider = &lines[report.ranked.len()];
        assert_eq!(divider.len(), last_ranked.len());
        assert!(divider.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_descending_reverses_rendered_lines() {
        let drivers = fixture();
        let report = build_report(&drivers);

        let asc = render_report(&drivers, &report, Direction::Ascending);
        let desc = render_report(&drivers, &report, Direction::Descending);

        // ranked block plus divider is reversed wholesale, divider first
        let block = report.ranked.len() + 1;
        let mut expected: Vec<String> = asc[..block].to_vec();
        expected.reverse();
        assert_eq!(&desc[..block], expected.as_slice());
        assert!(desc[0].chars().all(|c| c == '-'));

        // the error section is untouched
        assert_eq!(&desc[block..], &asc[block..]);
    }

    #[test]
    fn test_empty_roster_renders_empty_report() {
        let report = build_report(&[]);
        let lines = render_report(&[], &report, Direction::Ascending);
        assert_eq!(
            lines,
            vec![
                String::new(),
                "possible errors in data:".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_write_driver_detail() {
        let svf = Driver {
            abbreviation: "SVF".to_string(),
            name: "Sebastian Vettel".to_string(),
            company: "FERRARI".to_string(),
            start_time: NaiveDate::from_ymd_opt(2018, 5, 24)
                .unwrap()
                .and_hms_micro_opt(12, 2, 58, 917_000)
                .unwrap(),
            end_time: NaiveDate::from_ymd_opt(2018, 5, 24)
                .unwrap()
                .and_hms_micro_opt(12, 4, 3, 332_000)
                .unwrap(),
        };

        let mut out = Vec::new();
        write_driver_detail(&mut out, &svf).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Abbreviation: SVF  Name: Sebastian Vettel  Company: FERRARI \n\
             Start time: 2018-05-24 12:02:58.917000  End time: 2018-05-24 12:04:03.332000\n"
        );
    }

    #[test]
    fn test_pad_is_display_width_aware() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdef", 3), "abcdef");
        // combining-free accented name occupies one column per glyph
        assert_eq!(pad("Räikkönen", 11), "Räikkönen  ");
    }
}
