// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats the `scrapedAt` timestamp of a catalog in the given time zone.
///
/// Timestamps with an offset are converted to `tz`. Timestamps without one, as written by
/// the catalog fetcher, are taken as local time in `tz`. Anything unparsable is returned
/// verbatim.
pub fn format_scraped_at(raw: &str, tz: &TimeZone) -> String {
    match parse(raw, tz) {
        Some(zoned) => zoned.strftime(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(raw, "unparsable scrapedAt, showing it verbatim");
            raw.to_owned()
        }
    }
}

fn parse(raw: &str, tz: &TimeZone) -> Option<Zoned> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(tz.clone()));
    }

    raw.parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(tz.clone()).ok())
}
