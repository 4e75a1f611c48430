//! UTC datetime without timezone dependencies.
//!
//! `DateTimeUtc` is the value behind `Date` attributes. It renders with
//! millisecond precision in the same ISO-8601 form script runtimes produce
//! (`2024-06-15T14:30:45.000Z`).
//!
//! # Examples
//!
//! ```
//! use jsxmark::utils::date::DateTimeUtc;
//!
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! assert_eq!(dt.to_iso_string(), "2024-06-15T14:30:45.000Z");
//!
//! let epoch = DateTimeUtc::from_unix_millis(0).unwrap();
//! assert_eq!(epoch.to_iso_string(), "1970-01-01T00:00:00.000Z");
//! ```

use anyhow::{Result, bail};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub const fn with_millisecond(mut self, millisecond: u16) -> Self {
        self.millisecond = millisecond;
        self
    }

    /// Parse from "YYYY-MM-DD", "YYYY-MM-DDTHH:MM:SSZ" or
    /// "YYYY-MM-DDTHH:MM:SS.sssZ".
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second, millisecond) = match bytes.len() {
            10 => (0, 0, 0, 0),
            20 | 24 if bytes[10] == b'T' && bytes[bytes.len() - 1] == b'Z' => {
                if bytes[13] != b':' || bytes[16] != b':' {
                    return None;
                }
                let millisecond = if bytes.len() == 24 {
                    if bytes[19] != b'.' {
                        return None;
                    }
                    parse_u16_digits(&bytes[20..23])?
                } else {
                    0
                };
                (
                    parse_u8(&bytes[11..13])?,
                    parse_u8(&bytes[14..16])?,
                    parse_u8(&bytes[17..19])?,
                    millisecond,
                )
            }
            _ => return None,
        };

        let dt = Self::new(year, month, day, hour, minute, second).with_millisecond(millisecond);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Convert milliseconds since the Unix epoch.
    ///
    /// Returns `None` for instants outside years 0000-9999.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Ranges checked below
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let of_day = millis.rem_euclid(MILLIS_PER_DAY);

        let (year, month, day) = civil_from_days(days);
        if !(0..=9999).contains(&year) {
            return None;
        }

        let secs = of_day / 1000;
        Some(
            Self::new(
                year as u16,
                month,
                day,
                (secs / 3600) as u8,
                (secs / 60 % 60) as u8,
                (secs % 60) as u8,
            )
            .with_millisecond((of_day % 1000) as u16),
        )
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        } = *self;

        if year > 9999 {
            bail!("year is invalid: {year}");
        }
        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if millisecond > 999 {
            bail!("millisecond is invalid: {millisecond}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as ISO 8601 with milliseconds.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub fn to_iso_string(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic Gregorian calendar.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    parse_u16_digits(bytes)
}

#[inline]
fn parse_u16_digits(bytes: &[u8]) -> Option<u16> {
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_iso_string() {
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);
        assert_eq!(dt.to_iso_string(), "2024-06-15T14:30:45.000Z");
        assert_eq!(
            dt.with_millisecond(7).to_iso_string(),
            "2024-06-15T14:30:45.007Z"
        );
    }

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-12-25").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 12, 25));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_with_millis() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45.123Z").unwrap();
        assert_eq!(dt.millisecond, 123);
        assert_eq!(dt.to_iso_string(), "2024-06-15T14:30:45.123Z");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("2024/06/15"), None);
        assert_eq!(DateTimeUtc::parse("2024-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45,123Z"), None);
        assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
    }

    #[test]
    fn test_from_unix_millis() {
        let epoch = DateTimeUtc::from_unix_millis(0).unwrap();
        assert_eq!(epoch, DateTimeUtc::from_ymd(1970, 1, 1));

        let dt = DateTimeUtc::from_unix_millis(1_718_461_845_123).unwrap();
        assert_eq!(dt.to_iso_string(), "2024-06-15T14:30:45.123Z");

        let leap = DateTimeUtc::from_unix_millis(951_782_400_000).unwrap();
        assert_eq!(leap, DateTimeUtc::from_ymd(2000, 2, 29));
    }

    #[test]
    fn test_from_unix_millis_before_epoch() {
        let dt = DateTimeUtc::from_unix_millis(-1).unwrap();
        assert_eq!(dt.to_iso_string(), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_from_unix_millis_out_of_range() {
        assert_eq!(DateTimeUtc::from_unix_millis(i64::MAX / 2), None);
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(DateTimeUtc::new(2024, 6, 0, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 0, 60).validate().is_err());
        assert!(
            DateTimeUtc::new(2024, 6, 15, 12, 0, 0)
                .with_millisecond(1000)
                .validate()
                .is_err()
        );
    }
}
