use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::IntErrorKind;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Rejection reasons of [`ClockTime::parse_strict`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(i64),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(i64),
}

/// Wall-clock time of day, kept as minutes since midnight in `0..1440`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Wraps any minute count (negative included) onto the 24h clock.
    pub fn from_minutes(minutes: i64) -> ClockTime {
        ClockTime(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub fn minutes(self) -> i64 {
        self.0 as i64
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parses `H:MM` / `HH:MM`, rejecting anything non-numeric or out of range.
    pub fn parse_strict(s: &str) -> Result<ClockTime, TimeError> {
        let (hours, minutes) = components(s)?;
        if !(0..=23).contains(&hours) {
            return Err(TimeError::HourOutOfRange(hours));
        }
        if !(0..=59).contains(&minutes) {
            return Err(TimeError::MinuteOutOfRange(minutes));
        }
        Ok(ClockTime((hours * 60 + minutes) as u16))
    }

    /// Never fails: hours clamp to 0-23, minutes to 0-59, an empty component
    /// counts as 0, and malformed input reads as midnight.
    pub fn parse(s: &str) -> ClockTime {
        match lenient_components(s) {
            Ok((hours, minutes)) => ClockTime((hours.clamp(0, 23) * 60 + minutes.clamp(0, 59)) as u16),
            Err(e) => {
                tracing::debug!(input = s, error = %e, "unparseable time, using 00:00");
                ClockTime::MIDNIGHT
            }
        }
    }
}

fn components(s: &str) -> Result<(i64, i64), TimeError> {
    let malformed = || TimeError::Malformed(s.to_string());
    let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
    let hours = number(hours).ok_or_else(malformed)?;
    let minutes = number(minutes).ok_or_else(malformed)?;
    Ok((hours, minutes))
}

fn lenient_components(s: &str) -> Result<(i64, i64), TimeError> {
    let malformed = || TimeError::Malformed(s.to_string());
    let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
    let or_zero = |part: &str| if part.trim().is_empty() { Some(0) } else { number(part) };
    let hours = or_zero(hours).ok_or_else(malformed)?;
    let minutes = or_zero(minutes).ok_or_else(malformed)?;
    Ok((hours, minutes))
}

/// Integers too long for `i64` saturate so that they still clamp.
fn number(part: &str) -> Option<i64> {
    match part.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ClockTime::parse(&raw))
    }
}

/// Final-sector block time as hours. Accepts `10`, `10.5` or `10:30`;
/// anything else is 0, which the wheels-up calculation treats as infeasible.
pub fn parse_block_hours(s: &str) -> f64 {
    let s = s.trim();
    if s.contains(':') {
        return lenient_components(s)
            .map(|(h, m)| h.max(0) as f64 + m.clamp(0, 59) as f64 / 60.0)
            .unwrap_or(0.0);
    }
    s.parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .map(|h| h.max(0.0))
        .unwrap_or(0.0)
}

/// `10.5` -> `10h 30m`, `9.0` -> `9h`.
pub fn format_hours(hours: f64) -> String {
    let total = (hours * 60.0).round().max(0.0) as i64;
    let (h, m) = (total / 60, total % 60);
    if m == 0 {
        format!("{}h", h)
    } else {
        format!("{}h {}m", h, m)
    }
}

pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
