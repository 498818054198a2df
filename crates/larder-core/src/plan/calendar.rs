//! Day normalization and storage-key encoding
//!
//! In-memory plan keys are local start-of-day instants. Storage keys are the
//! UTC calendar date of that instant, formatted `YYYY-MM-DD`, and parsing a
//! storage key yields UTC midnight re-normalized to local start-of-day.
//! The two calendars differ away from UTC, so a save/load cycle moves an
//! entry to the previous local day there. Existing stored plans rely on this
//! encoding; `tests::test_round_trip_shifts_east_of_utc` pins it.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::constants::plan::STORAGE_DATE_FORMAT;

/// The ambient calendar used to decide where a day starts
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone> {
    tz: Tz,
}

impl Calendar<Local> {
    /// The system's local calendar
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Current instant in this calendar
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// First instant of the local day containing `instant`
    pub fn start_of_day<T: TimeZone>(&self, instant: &DateTime<T>) -> DateTime<Tz> {
        let local = instant.with_timezone(&self.tz);
        self.day(local.date_naive())
    }

    /// First instant of the given local date
    ///
    /// When midnight falls in a DST gap the first existing minute is used. A
    /// date the zone skips entirely starts where the following date does.
    pub fn day(&self, date: NaiveDate) -> DateTime<Tz> {
        let midnight = date.and_time(NaiveTime::MIN);
        (0..2 * 24 * 60)
            .find_map(|minutes| {
                self.tz
                    .from_local_datetime(&(midnight + TimeDelta::minutes(minutes)))
                    .earliest()
            })
            .unwrap_or_else(|| self.tz.from_utc_datetime(&midnight))
    }

    /// `count` consecutive day keys starting with the day containing `from`
    pub fn days_from<T: TimeZone>(&self, from: &DateTime<T>, count: u32) -> Vec<DateTime<Tz>> {
        let first = self.start_of_day(from).date_naive();
        (0..u64::from(count))
            .filter_map(|offset| first.checked_add_days(Days::new(offset)))
            .map(|date| self.day(date))
            .collect()
    }

    /// Storage key for the day containing `instant`: its UTC date
    pub fn storage_key<T: TimeZone>(&self, instant: &DateTime<T>) -> String {
        self.start_of_day(instant)
            .with_timezone(&Utc)
            .format(STORAGE_DATE_FORMAT)
            .to_string()
    }

    /// Day key for a stored `YYYY-MM-DD` string, read as UTC midnight
    pub fn parse_storage_key(&self, key: &str) -> Option<DateTime<Tz>> {
        let date = NaiveDate::parse_from_str(key, STORAGE_DATE_FORMAT).ok()?;
        let utc_midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        Some(self.start_of_day(&utc_midnight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_start_of_day_utc() {
        let calendar = Calendar::new(Utc);
        let day = calendar.start_of_day(&utc("2025-11-18T17:45:12Z"));
        assert_eq!(day, utc("2025-11-18T00:00:00Z"));
    }

    #[test]
    fn test_start_of_day_uses_local_date() {
        let calendar = Calendar::new(FixedOffset::east_opt(10 * 3600).unwrap());
        // 23:30 UTC is 09:30 the next morning at UTC+10
        let day = calendar.start_of_day(&utc("2025-03-10T23:30:00Z"));
        assert_eq!(day.date_naive(), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
        assert_eq!(day, utc("2025-03-10T14:00:00Z"));
    }

    #[test]
    fn test_storage_key_is_utc_date() {
        let calendar = Calendar::new(Utc);
        assert_eq!(calendar.storage_key(&utc("2025-01-05T08:00:00Z")), "2025-01-05");

        let east = Calendar::new(FixedOffset::east_opt(10 * 3600).unwrap());
        // Local midnight of 11 March at UTC+10 is still 10 March in UTC
        assert_eq!(east.storage_key(&utc("2025-03-10T23:30:00Z")), "2025-03-10");
    }

    #[test]
    fn test_parse_storage_key() {
        let calendar = Calendar::new(Utc);
        assert_eq!(
            calendar.parse_storage_key("2025-11-18"),
            Some(utc("2025-11-18T00:00:00Z"))
        );
        assert_eq!(calendar.parse_storage_key("18/11/2025"), None);
        assert_eq!(calendar.parse_storage_key(""), None);
    }

    #[test]
    fn test_round_trip_stable_at_utc() {
        let calendar = Calendar::new(Utc);
        let day = calendar.start_of_day(&utc("2025-06-01T12:00:00Z"));
        let key = calendar.storage_key(&day);
        assert_eq!(calendar.parse_storage_key(&key), Some(day));
    }

    #[test]
    fn test_round_trip_shifts_east_of_utc() {
        let calendar = Calendar::new(FixedOffset::east_opt(10 * 3600).unwrap());
        let day = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let key = calendar.storage_key(&day);
        assert_eq!(key, "2025-03-10");

        let reloaded = calendar.parse_storage_key(&key).unwrap();
        assert_eq!(
            reloaded.date_naive(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_round_trip_shifts_west_of_utc() {
        let calendar = Calendar::new(FixedOffset::west_opt(5 * 3600).unwrap());
        let day = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let key = calendar.storage_key(&day);
        assert_eq!(key, "2025-03-11");

        // UTC midnight of the 11th is still the evening of the 10th at UTC-5
        let reloaded = calendar.parse_storage_key(&key).unwrap();
        assert_eq!(
            reloaded.date_naive(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_days_from() {
        let calendar = Calendar::new(Utc);
        let days = calendar.days_from(&utc("2025-12-30T15:00:00Z"), 4);

        assert_eq!(days.len(), 4);
        assert_eq!(days[0], utc("2025-12-30T00:00:00Z"));
        assert_eq!(days[3], utc("2026-01-02T00:00:00Z"));
    }

    #[test]
    fn test_day_starts_after_dst_gap() {
        // Clocks in São Paulo jumped from 00:00 to 01:00 on 4 Nov 2018
        let calendar = Calendar::new(chrono_tz::America::Sao_Paulo);
        let day = calendar.day(NaiveDate::from_ymd_opt(2018, 11, 4).unwrap());

        assert_eq!(day, utc("2018-11-04T03:00:00Z"));
        assert_eq!(day.format("%H:%M %z").to_string(), "01:00 -0200");
        assert_eq!(calendar.start_of_day(&utc("2018-11-04T15:00:00Z")), day);
    }

    #[test]
    fn test_days_from_across_dst_gap() {
        let calendar = Calendar::new(chrono_tz::America::Sao_Paulo);
        let days = calendar.days_from(&utc("2018-11-03T15:00:00Z"), 3);

        assert_eq!(
            days,
            vec![
                utc("2018-11-03T03:00:00Z"),
                utc("2018-11-04T03:00:00Z"),
                utc("2018-11-05T02:00:00Z"),
            ]
        );
        assert_eq!(days[1].format("%H:%M").to_string(), "01:00");
        assert_eq!(days[2].format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn test_skipped_date_starts_with_next_day() {
        // Samoa skipped 30 Dec 2011 when it moved across the date line
        let calendar = Calendar::new(chrono_tz::Pacific::Apia);
        let skipped = calendar.day(NaiveDate::from_ymd_opt(2011, 12, 30).unwrap());
        let next = calendar.day(NaiveDate::from_ymd_opt(2011, 12, 31).unwrap());

        assert_eq!(next, utc("2011-12-30T10:00:00Z"));
        assert_eq!(skipped, next);
    }
}
