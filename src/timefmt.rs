// SPDX-License-Identifier: MPL-2.0
//! Relative-time labels for notification timestamps.
//!
//! Fixed pt-BR wording, matching the labels the backend's own templates use.
//! `time_ago` is deterministic over its two instants so the bucket boundaries
//! can be tested exactly; callers in the UI go through [`time_ago_from_now`].

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3600;
const DAY: i64 = 86_400;

/// Formats the elapsed time between `timestamp` and `now` as a short label.
///
/// Buckets: under a minute reads "Agora mesmo", then minutes, hours and
/// days, singular/plural aware. Timestamps in the future clamp to zero
/// elapsed seconds and read "Agora mesmo" as well.
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds().max(0);

    if elapsed < MINUTE {
        "Agora mesmo".to_string()
    } else if elapsed < HOUR {
        let minutes = elapsed / MINUTE;
        format!("há {} minuto{}", minutes, plural_suffix(minutes))
    } else if elapsed < DAY {
        let hours = elapsed / HOUR;
        format!("há {} hora{}", hours, plural_suffix(hours))
    } else {
        let days = elapsed / DAY;
        format!("há {} dia{}", days, plural_suffix(days))
    }
}

/// Formats the elapsed time between `timestamp` and the current instant.
#[must_use]
pub fn time_ago_from_now(timestamp: DateTime<Utc>) -> String {
    time_ago(timestamp, Utc::now())
}

fn plural_suffix(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .expect("valid fixture timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn under_a_minute_reads_just_now() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(30), reference);
        assert_eq!(label, "Agora mesmo");
    }

    #[test]
    fn ninety_seconds_reads_one_minute() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(90), reference);
        assert_eq!(label, "há 1 minuto");
    }

    #[test]
    fn two_hours_is_plural() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(7200), reference);
        assert_eq!(label, "há 2 horas");
    }

    #[test]
    fn two_days_is_plural() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(172_800), reference);
        assert_eq!(label, "há 2 dias");
    }

    #[test]
    fn exactly_one_minute_leaves_the_just_now_bucket() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(60), reference);
        assert_eq!(label, "há 1 minuto");
    }

    #[test]
    fn fifty_nine_minutes_stays_in_minutes() {
        let reference = now();
        let label = time_ago(reference - Duration::seconds(3599), reference);
        assert_eq!(label, "há 59 minutos");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let reference = now();
        let label = time_ago(reference + Duration::seconds(120), reference);
        assert_eq!(label, "Agora mesmo");
    }
}
