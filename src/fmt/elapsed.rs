//! Durations for scope exit lines. Only the largest unit is kept: `{2m}`, not
//! `{2m 13s}`.

use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Abbreviated duration in its single largest unit (`3d`, `2h`, `5m`, `12s`), rounded down.
#[must_use]
pub fn elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= DAY {
        format!("{}d", secs / DAY)
    } else if secs >= HOUR {
        format!("{}h", secs / HOUR)
    } else if secs >= MINUTE {
        format!("{}m", secs / MINUTE)
    } else {
        format!("{secs}s")
    }
}
