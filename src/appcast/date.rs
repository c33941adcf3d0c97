use anyhow::{Context, Result};
use chrono::DateTime;

/// `strftime` pattern of the RFC 2822 dates used in `<pubDate>`.
const RFC2822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Converts an ISO 8601 timestamp such as `2024-02-05T12:34:56Z` to an
/// RFC 2822 date such as `Mon, 05 Feb 2024 12:34:56 +0000`.
///
/// A trailing `Z` is read as `+00:00`; explicit offsets are kept as given.
pub fn iso_to_rfc2822(iso: &str) -> Result<String> {
    let normalized = match iso.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => iso.to_string(),
    };

    let dt = DateTime::parse_from_rfc3339(&normalized)
        .with_context(|| format!("Invalid ISO 8601 timestamp '{}'", iso))?;

    Ok(dt.format(RFC2822_FORMAT).to_string())
}
