// Domain models - Core types and data structures

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Non-negative point on the source timeline, in seconds with sub-second precision
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct TimeCode {
    seconds: f64,
}

impl TimeCode {
    /// Start of the timeline
    pub const ZERO: TimeCode = TimeCode { seconds: 0.0 };

    /// Create a new TimeCode from seconds.
    ///
    /// Panics on negative or non-finite input; text from users goes through
    /// [`TimeCode::parse`], which reports those as errors instead.
    pub fn from_seconds(seconds: f64) -> Self {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "time code must be finite and non-negative, got {seconds}"
        );
        // folds -0.0 into 0.0 so ordering stays total
        Self {
            seconds: seconds + 0.0,
        }
    }

    /// Total seconds
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Parse `H:MM:SS[.fff]` or `MM:SS[.fff]`.
    ///
    /// Hours and minutes must be whole numbers, seconds may carry a fraction.
    /// Fields are not range-checked, so `0:90` is ninety seconds.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::parse(text, "time is empty"));
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        let (hours, minutes, seconds) = match parts.as_slice() {
            [minutes, seconds] => (
                0,
                parse_whole(text, minutes, "minutes")?,
                parse_seconds(text, seconds)?,
            ),
            [hours, minutes, seconds] => (
                parse_whole(text, hours, "hours")?,
                parse_whole(text, minutes, "minutes")?,
                parse_seconds(text, seconds)?,
            ),
            _ => {
                return Err(DomainError::parse(
                    text,
                    format!("expected 2 or 3 ':'-separated fields, found {}", parts.len()),
                ))
            }
        };

        let total = hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds;
        if !total.is_finite() {
            return Err(DomainError::parse(text, "time is too large"));
        }
        Ok(Self::from_seconds(total))
    }

    /// Format as HH:MM:SS.fff, rounded to the nearest millisecond
    pub fn format_hms(&self) -> String {
        let total_ms = (self.seconds * 1000.0).round() as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let milliseconds = total_ms % 1000;

        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
    }

    /// Render as plain seconds for filter arguments.
    ///
    /// Uses the shortest text that reads back as the same value, padded to at
    /// least three decimals, so distinct times never render alike.
    pub fn to_filter_value(&self) -> String {
        let mut rendered = self.seconds.to_string();
        let decimals = match rendered.find('.') {
            Some(dot) => rendered.len() - dot - 1,
            None => {
                rendered.push('.');
                0
            }
        };
        for _ in decimals..3 {
            rendered.push('0');
        }
        rendered
    }
}

fn parse_whole(input: &str, field: &str, name: &str) -> Result<u64, DomainError> {
    if field.starts_with('-') {
        return Err(DomainError::parse(input, format!("{} cannot be negative", name)));
    }
    field
        .parse::<u64>()
        .map_err(|_| DomainError::parse(input, format!("{} must be a whole number", name)))
}

fn parse_seconds(input: &str, field: &str) -> Result<f64, DomainError> {
    if field.starts_with('-') {
        return Err(DomainError::parse(input, "seconds cannot be negative"));
    }
    // f64::from_str also takes "inf", "NaN" and exponents
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(DomainError::parse(input, "seconds must be a number"));
    }
    let seconds = field
        .parse::<f64>()
        .map_err(|_| DomainError::parse(input, "seconds must be a number"))?;
    if !seconds.is_finite() {
        return Err(DomainError::parse(input, "seconds are too large"));
    }
    Ok(seconds)
}

impl PartialEq for TimeCode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeCode {}

impl PartialOrd for TimeCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.total_cmp(&other.seconds)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

/// Half-open range `[start, end)` of the source timeline to excise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovalInterval {
    start: TimeCode,
    end: TimeCode,
}

impl RemovalInterval {
    /// Create a new interval; zero-length and reversed ranges are rejected
    pub fn new(start: TimeCode, end: TimeCode) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::Range { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from text and build the interval
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, DomainError> {
        let start = TimeCode::parse(start_text)?;
        let end = TimeCode::parse(end_text)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> TimeCode {
        self.start
    }

    pub fn end(&self) -> TimeCode {
        self.end
    }

    /// Length of the removed range in seconds
    pub fn duration(&self) -> f64 {
        self.end.as_seconds() - self.start.as_seconds()
    }

    /// Half-open intersection test; touching intervals do not overlap
    pub fn overlaps(&self, other: &RemovalInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for RemovalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Stable handle for an interval held by an [`IntervalStore`](crate::domain::store::IntervalStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IntervalId(pub u64);

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Range of the source timeline that survives the edit.
///
/// `end == None` runs to the natural end of the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeepSegment {
    pub start: TimeCode,
    pub end: Option<TimeCode>,
}

impl KeepSegment {
    /// Bounded segment `[start, end)`
    pub fn bounded(start: TimeCode, end: TimeCode) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Segment from `start` to the end of the asset
    pub fn trailing(start: TimeCode) -> Self {
        Self { start, end: None }
    }

    pub fn is_trailing(&self) -> bool {
        self.end.is_none()
    }

    /// Check whether any part of this segment falls inside `interval`
    pub fn intersects(&self, interval: &RemovalInterval) -> bool {
        let before_end = self.start < interval.end();
        let after_start = match self.end {
            Some(end) => interval.start() < end,
            None => true,
        };
        before_end && after_start
    }
}

impl fmt::Display for KeepSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, end)", self.start),
        }
    }
}
