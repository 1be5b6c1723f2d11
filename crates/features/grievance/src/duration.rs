//! `{days},{hours}` resolution durations.

use crate::error::GrievanceError;
use chrono::{DateTime, TimeDelta, Utc};
use ghub_domain::constants::{MAX_RESOLUTION_DAYS, MAX_RESOLUTION_HOURS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized resolution time: `days ∈ [0, 99)`, `hours ∈ [0, 24)`.
///
/// Ordering follows the total length (`days * 24 + hours`); since `hours` never reaches a full
/// day, the derived field-wise ordering is equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Duration {
    days: u8,
    hours: u8,
}

impl Duration {
    /// Hard fallback applied when nothing else in the configuration provides a value.
    pub const FALLBACK: Self = Self { days: 5, hours: 0 };

    /// Builds a duration from already-split components.
    ///
    /// # Errors
    /// Returns [`GrievanceError::InvalidDurationFormat`] when a component is out of range.
    pub fn new(days: i64, hours: i64) -> Result<Self, GrievanceError> {
        let days = u8::try_from(days)
            .ok()
            .filter(|d| *d < MAX_RESOLUTION_DAYS)
            .ok_or_else(|| out_of_range("days", days, MAX_RESOLUTION_DAYS))?;
        let hours = u8::try_from(hours)
            .ok()
            .filter(|h| *h < MAX_RESOLUTION_HOURS)
            .ok_or_else(|| out_of_range("hours", hours, MAX_RESOLUTION_HOURS))?;

        Ok(Self { days, hours })
    }

    /// Parses a `"{days},{hours}"` token. Whitespace around each component is ignored.
    ///
    /// # Errors
    /// Returns [`GrievanceError::InvalidDurationFormat`] unless the token holds exactly two
    /// integer components within range.
    pub fn parse(token: &str) -> Result<Self, GrievanceError> {
        let Some((days, hours)) = token.split_once(',').filter(|(_, h)| !h.contains(',')) else {
            return Err(GrievanceError::InvalidDurationFormat {
                message: format!("'{token}' is not of the form '{{days}},{{hours}}'").into(),
                context: None,
            });
        };

        Self::new(component(token, "days", days)?, component(token, "hours", hours)?)
    }

    #[must_use]
    pub const fn days(self) -> u8 {
        self.days
    }

    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[must_use]
    pub fn total_hours(self) -> u32 {
        u32::from(self.days) * 24 + u32::from(self.hours)
    }

    #[must_use]
    pub fn to_time_delta(self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.total_hours()))
    }

    /// Deadline for a ticket opened at `opened_at`. Saturates at the maximum representable instant.
    #[must_use]
    pub fn deadline_from(self, opened_at: DateTime<Utc>) -> DateTime<Utc> {
        opened_at.checked_add_signed(self.to_time_delta()).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

fn component(token: &str, field: &str, raw: &str) -> Result<i64, GrievanceError> {
    raw.trim().parse::<i64>().map_err(|e| GrievanceError::InvalidDurationFormat {
        message: format!("{field} component of '{token}' is not an integer: {e}").into(),
        context: None,
    })
}

fn out_of_range(field: &str, value: i64, bound: u8) -> GrievanceError {
    GrievanceError::InvalidDurationFormat {
        message: format!("{field} must be in [0, {bound}), got {value}").into(),
        context: None,
    }
}

impl FromStr for Duration {
    type Err = GrievanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Duration {
    type Error = GrievanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Duration> for String {
    fn from(value: Duration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.days, self.hours)
    }
}
