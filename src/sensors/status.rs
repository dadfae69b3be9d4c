//! Liveness and relative-age strings for last-seen timestamps.
//!
//! Two variants of the same largest-unit bucketing: `liveness_status` treats
//! anything within the last 10 seconds as "Live" (used on analog sensor
//! cards), while `format_relative_time` has a sub-second "just now" case and
//! no "Live" special-case (used for discrete motion/vibration events).

use chrono::Utc;

/// Window within which a reading still counts as live.
const LIVE_WINDOW_MS: i64 = 10_000;

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Status string for an analog sensor's last reading.
///
/// No timestamp yet renders as "Live" (the loading state is not
/// distinguished from fresh data); otherwise the age in the largest
/// applicable unit.
pub fn liveness_status(last_seen: Option<i64>, now: i64) -> String {
    let Some(timestamp) = last_seen else {
        return "Live".to_string();
    };

    let elapsed = now - timestamp;
    if elapsed < LIVE_WINDOW_MS {
        return "Live".to_string();
    }

    let seconds = elapsed / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days} day{} ago", plural(days))
    } else if hours > 0 {
        format!("{hours} hour{} ago", plural(hours))
    } else if minutes > 0 {
        format!("{minutes} minute{} ago", plural(minutes))
    } else {
        format!("{seconds} second{} ago", plural(seconds))
    }
}

/// Relative age of a discrete event, e.g. "2 seconds ago".
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let seconds = (now - timestamp) / 1000;

    if seconds < 1 {
        return "just now".to_string();
    }
    if seconds < 60 {
        return format!("{seconds} second{} ago", plural(seconds));
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = hours / 24;
    format!("{days} day{} ago", plural(days))
}

/// [`liveness_status`] against the current wall clock.
pub fn liveness_status_now(last_seen: Option<i64>) -> String {
    liveness_status(last_seen, Utc::now().timestamp_millis())
}

/// [`format_relative_time`] against the current wall clock.
pub fn format_relative_time_now(timestamp: i64) -> String {
    format_relative_time(timestamp, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[rstest]
    #[case(500, "just now")]
    #[case(1_000, "1 second ago")]
    #[case(59_000, "59 seconds ago")]
    #[case(60_000, "1 minute ago")]
    #[case(59 * 60_000, "59 minutes ago")]
    #[case(60 * 60_000, "1 hour ago")]
    #[case(23 * 3_600_000, "23 hours ago")]
    #[case(24 * 3_600_000, "1 day ago")]
    #[case(3 * 86_400_000, "3 days ago")]
    fn test_relative_time_boundaries(#[case] age_ms: i64, #[case] expected: &str) {
        assert_eq!(format_relative_time(NOW - age_ms, NOW), expected);
    }

    #[rstest]
    #[case(0, "Live")]
    #[case(9_999, "Live")]
    #[case(10_000, "10 seconds ago")]
    #[case(59_000, "59 seconds ago")]
    #[case(61_000, "1 minute ago")]
    #[case(2 * 3_600_000, "2 hours ago")]
    #[case(26 * 3_600_000, "1 day ago")]
    fn test_liveness_boundaries(#[case] age_ms: i64, #[case] expected: &str) {
        assert_eq!(liveness_status(Some(NOW - age_ms), NOW), expected);
    }

    #[test]
    fn test_liveness_without_timestamp_is_live() {
        assert_eq!(liveness_status(None, NOW), "Live");
    }

    #[test]
    fn test_future_timestamps_do_not_panic() {
        assert_eq!(liveness_status(Some(NOW + 5_000), NOW), "Live");
        assert_eq!(format_relative_time(NOW + 5_000, NOW), "just now");
    }
}
