use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
};

/// Parse a raw-trace submission timestamp.
///
/// Supported formats:
/// - `"2023-05-01 08:26:53"` — space-separated date and time, the format
///   the raw traces use
/// - `"2023-05-01T08:26:53"` — ISO-8601
/// - `"2023-05-01"` — date only, read as midnight
///
/// # Examples
///
/// ```
/// use gtrace::utils::parse_submit_time;
///
/// let t = parse_submit_time("2023-05-01 08:26:53").unwrap();
/// assert_eq!(t.to_string(), "2023-05-01 08:26:53");
///
/// let midnight = parse_submit_time("2023-05-01").unwrap();
/// assert_eq!(midnight.to_string(), "2023-05-01 00:00:00");
/// ```
pub fn parse_submit_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("submit_time cannot be empty"));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .with_context(|| format!("Unrecognized submit_time format: {raw}"))
}

pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());
