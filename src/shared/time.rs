use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

/// A non-negative span of whole minutes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Minutes(u32);

impl From<u32> for Minutes {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Minutes {
    pub const ZERO: Self = Self(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours.saturating_mul(60))
    }

    /// Rounds a fractional amount to the nearest whole minute.
    /// Negative, infinite and NaN amounts are `None`.
    pub fn from_fractional(minutes: f64) -> Option<Self> {
        if !minutes.is_finite() || minutes < 0.0 {
            return None;
        }
        Some(Self(minutes.round().min(f64::from(u32::MAX)) as u32))
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats as `1h 05min`, or `45min` below an hour.
    pub fn to_hm_string(&self) -> String {
        let h = self.0 / 60;
        let m = self.0 % 60;
        if h == 0 {
            format!("{m}min")
        } else {
            format!("{h}h {m:02}min")
        }
    }
}

impl Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hm_string())
    }
}

// Sums saturate at u32::MAX.
impl Add for Minutes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0)
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

// Stored durations come from free-form inputs: numbers with decimals,
// numeric strings, or junk.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseMinutes {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl LooseMinutes {
    fn into_minutes(self) -> Option<Minutes> {
        match self {
            LooseMinutes::Number(value) => Minutes::from_fractional(value),
            LooseMinutes::Text(value) => value
                .trim()
                .parse()
                .ok()
                .and_then(Minutes::from_fractional),
            LooseMinutes::Other(_) => None,
        }
    }
}

/// Reads an optional duration, mapping anything that is not a non-negative
/// number to `None`.
pub(crate) fn deserialize_loose_minutes<'de, D>(deserializer: D) -> Result<Option<Minutes>, D::Error>
where
    D: Deserializer<'de>,
{
    LooseMinutes::deserialize(deserializer).map(LooseMinutes::into_minutes)
}

/// Like [`deserialize_loose_minutes`], defaulting to zero.
pub(crate) fn deserialize_loose_minutes_or_zero<'de, D>(deserializer: D) -> Result<Minutes, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_loose_minutes(deserializer).map(Option::unwrap_or_default)
}

/// Point in time read from a legacy `arrivalTime`/`departureTime` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Accepts RFC 3339 (`2024-03-01T08:30:00-03:00`) and the offset-less forms
    /// produced by `datetime-local` inputs (`2024-03-01T08:30`, with or without
    /// seconds). Offset-less values are read as UTC, and a bare date
    /// (`2024-03-01`) as its midnight. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        const NAIVE_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Self(naive.and_utc()))
    }

    /// Parses an optional field, folding absent and malformed values together.
    pub fn parse_opt(value: Option<&str>) -> Option<Self> {
        value.and_then(Self::parse)
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Signed minutes from `self` to `later`, rounded to the nearest minute
    /// with halves going up (`-1.5` becomes `-1`).
    pub fn minutes_until(&self, later: &Self) -> i64 {
        let millis = later.as_millis() - self.as_millis();
        (millis as f64 / 60_000.0 + 0.5).floor() as i64
    }
}

#[test]
fn parse_rfc3339() {
    let a = Timestamp::parse("2024-03-01T08:30:00-03:00").unwrap();
    let b = Timestamp::parse("2024-03-01T11:30:00Z").unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_datetime_local() {
    let a = Timestamp::parse("2024-03-01T08:30").unwrap();
    let b = Timestamp::parse("2024-03-01T08:30:00").unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_bare_date() {
    let a = Timestamp::parse("2024-03-01").unwrap();
    let b = Timestamp::parse("2024-03-01T00:00").unwrap();
    assert_eq!(a, b);
    assert!(Timestamp::parse("2024-02-30").is_none());
}

#[test]
fn parse_garbage() {
    assert!(Timestamp::parse("amanhã cedo").is_none());
    assert!(Timestamp::parse("").is_none());
    assert!(Timestamp::parse_opt(None).is_none());
}

#[test]
fn minutes_until_rounds() {
    let a = Timestamp::parse("2024-03-01T08:00:00Z").unwrap();
    let b = Timestamp::parse("2024-03-01T09:30:40Z").unwrap();
    assert_eq!(a.minutes_until(&b), 91);
    assert_eq!(b.minutes_until(&a), -91);

    let c = Timestamp::parse("2024-03-01T08:01:30Z").unwrap();
    assert_eq!(c.minutes_until(&a), -1);
}

#[test]
fn minutes_sum_and_format() {
    let total: Minutes = [30, 45, 10].into_iter().map(Minutes::from).sum();
    assert_eq!(total.as_minutes(), 85);
    assert_eq!(total.to_hm_string(), "1h 25min");
    assert_eq!(Minutes::from(45).to_hm_string(), "45min");
}

#[test]
fn minutes_saturate() {
    let big = Minutes::from(u32::MAX);
    assert_eq!((big + Minutes::from(1)).as_minutes(), u32::MAX);
}

#[test]
fn minutes_from_hours_saturate() {
    assert_eq!(Minutes::from_hours(2).as_minutes(), 120);
    assert_eq!(Minutes::from_hours(u32::MAX).as_minutes(), u32::MAX);
}

#[test]
fn minutes_from_fractional() {
    assert_eq!(Minutes::from_fractional(12.5), Some(Minutes::from(13)));
    assert_eq!(Minutes::from_fractional(12.4), Some(Minutes::from(12)));
    assert_eq!(Minutes::from_fractional(0.0), Some(Minutes::ZERO));
    assert_eq!(Minutes::from_fractional(-1.0), None);
    assert_eq!(Minutes::from_fractional(f64::NAN), None);
}
