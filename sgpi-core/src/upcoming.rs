//! "Next upcoming event" selection and countdown arithmetic.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::record::Record;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse an event date as the sheet stores it.
///
/// Date-only values are midnight UTC; date-times without an offset are local
/// time. Anything else unparseable is `None`.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The date an event counts down to: `timerdate`, else `date`.
pub fn event_date(record: &Record) -> Option<DateTime<Utc>> {
    let timer = record.field("timerdate");
    let raw = if timer.trim().is_empty() {
        record.field("date")
    } else {
        timer
    };
    parse_event_date(&raw)
}

/// The earliest event strictly after `now`. Past and undated events are
/// skipped.
pub fn next_upcoming(records: &[Record], now: DateTime<Utc>) -> Option<&Record> {
    records
        .iter()
        .filter_map(|record| event_date(record).map(|date| (date, record)))
        .filter(|(date, _)| *date > now)
        .min_by_key(|(date, _)| *date)
        .map(|(_, record)| record)
}

/// Time left until an event, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Zero once `target` has passed.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Countdown::default();
        }

        Countdown {
            days: remaining / 86_400,
            hours: remaining / 3_600 % 24,
            minutes: remaining / 60 % 60,
            seconds: remaining % 60,
        }
    }

    /// `None` when the record has no usable date; the countdown is then not
    /// shown at all.
    pub fn for_record(record: &Record, now: DateTime<Utc>) -> Option<Self> {
        event_date(record).map(|target| Countdown::until(target, now))
    }

    pub fn is_zero(&self) -> bool {
        *self == Countdown::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(title: &str, date: &str, timerdate: &str) -> Record {
        Record::from_pairs([("title", title), ("date", date), ("timerdate", timerdate)])
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_supported_formats() {
        let midnight = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_event_date("2099-01-01"), Some(midnight));
        assert_eq!(parse_event_date("2099-01-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_event_date("January 1, 2099"), Some(midnight));
        assert_eq!(parse_event_date("1 Jan 2099"), Some(midnight));
        assert!(parse_event_date("2099-01-01T09:30").is_some());
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("   "), None);
        assert_eq!(parse_event_date("To be announced"), None);
        assert_eq!(parse_event_date("2099-13-40"), None);
    }

    #[test]
    fn picks_future_event_over_past() {
        let events = vec![
            event("Past CME", "2025-01-01", ""),
            event("Future conference", "2099-01-01", ""),
        ];
        let next = next_upcoming(&events, now()).expect("future event");
        assert_eq!(next.field("title"), "Future conference");
    }

    #[test]
    fn picks_earliest_future_event() {
        let events = vec![
            event("Later", "2099-05-01", ""),
            event("Sooner", "2098-05-01", ""),
            event("Undated", "TBA", ""),
        ];
        assert_eq!(next_upcoming(&events, now()).unwrap().field("title"), "Sooner");
    }

    #[test]
    fn timerdate_takes_precedence_over_date() {
        let events = vec![event("Moved", "2099-01-01", "2020-01-01")];
        assert!(next_upcoming(&events, now()).is_none());
    }

    #[test]
    fn nothing_when_all_past_or_unparseable() {
        let events = vec![
            event("Past", "2025-01-01", ""),
            event("Garbage", "soon", ""),
        ];
        assert!(next_upcoming(&events, now()).is_none());
        assert!(next_upcoming(&[], now()).is_none());
    }

    #[test]
    fn countdown_breaks_down_remaining_time() {
        let target = now() + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);
        assert_eq!(
            Countdown::until(target, now()),
            Countdown {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
    }

    #[test]
    fn countdown_stops_at_zero() {
        let target = now() - Duration::minutes(1);
        assert!(Countdown::until(target, now()).is_zero());
    }

    #[test]
    fn countdown_hidden_for_malformed_date() {
        assert_eq!(Countdown::for_record(&event("TBA", "", ""), now()), None);
        assert_eq!(Countdown::for_record(&event("Bad", "32/13/2099", ""), now()), None);
        assert!(Countdown::for_record(&event("Ok", "2099-01-01", ""), now()).is_some());
    }
}
