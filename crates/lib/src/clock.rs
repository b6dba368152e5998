//! Time provider abstraction and modification timestamps.
//!
//! This module provides a [`Clock`] trait that abstracts over time sources,
//! allowing production code to use real system time while tests can use
//! controllable mock time, and the [`Timestamp`] type stored in the
//! `lastUpdate` field of guides and content descriptors.
//!
//! # Example
//!
//! ```
//! use guidedoc::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let millis = clock.now_millis();
//! let stamp = clock.now();
//! assert!(stamp.as_str().ends_with('Z'));
//! ```

use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

#[cfg(any(test, feature = "testing"))]
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A time provider for getting current timestamps.
///
/// This trait abstracts over time sources to enable:
/// - Controllable time in tests (fixed starting point, manual advance)
/// - Monotonic timestamps within a single clock instance
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> u64;

    /// Returns the current time as a [`Timestamp`].
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now_millis())
    }
}

/// Production clock using real system time.
///
/// This is the default clock of [`Guide::new`](crate::Guide::new) and
/// [`Content::new`](crate::Content::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now())
    }
}

/// Test clock with auto-advancing time.
///
/// This clock auto-advances on each `now_millis()` call, providing monotonically
/// increasing timestamps. Use `hold()` to temporarily freeze the clock for tests
/// needing stable timestamps.
///
/// # Example
///
/// ```
/// use guidedoc::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1000);
/// let t1 = clock.now_millis();  // Returns 1000, then advances
/// let t2 = clock.now_millis();  // Returns next value
/// assert!(t2 > t1);
///
/// // Use hold() for stable timestamps
/// {
///     let _hold = clock.hold();
///     let a = clock.now_millis();
///     let b = clock.now_millis();
///     assert_eq!(a, b);  // Frozen
/// }
/// ```
#[cfg(any(test, feature = "testing"))]
pub struct FixedClock {
    state: Mutex<FixedClockState>,
}

#[cfg(any(test, feature = "testing"))]
struct FixedClockState {
    millis: u64,
    held: bool,
}

/// RAII guard that freezes a [`FixedClock`] while held.
///
/// The clock resumes auto-advancing when this guard is dropped.
#[cfg(any(test, feature = "testing"))]
pub struct ClockHold<'a>(&'a FixedClock);

#[cfg(any(test, feature = "testing"))]
impl Drop for ClockHold<'_> {
    fn drop(&mut self) {
        self.0.state().held = false;
    }
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a new fixed clock with the given initial time in milliseconds.
    pub fn new(millis: u64) -> Self {
        Self {
            state: Mutex::new(FixedClockState {
                millis,
                held: false,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FixedClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hold the clock, preventing auto-advance until the guard is dropped.
    pub fn hold(&self) -> ClockHold<'_> {
        self.state().held = true;
        ClockHold(self)
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: u64) {
        self.state().millis += ms;
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: u64) {
        self.state().millis = ms;
    }

    /// Get the current time without advancing (even if not held).
    pub fn get(&self) -> u64 {
        self.state().millis
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        let mut state = self.state();
        if state.held {
            state.millis
        } else {
            let t = state.millis;
            state.millis += 1;
            t
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1704067200000)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Debug for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("FixedClock")
            .field("millis", &state.millis)
            .field("held", &state.held)
            .finish()
    }
}

/// A point in time as stored in a `lastUpdate` field.
///
/// A timestamp keeps the text it was parsed from, so a loaded document prints
/// back exactly as it was read. Fresh timestamps render as RFC 3339 in UTC
/// with millisecond precision (`2024-01-01T00:00:00.000Z`).
///
/// Equality, ordering and hashing compare the instant, not the text:
///
/// ```
/// use guidedoc::Timestamp;
///
/// let a: Timestamp = "2019-03-01T10:15+01:00".parse().unwrap();
/// let b: Timestamp = "2019-03-01T09:15:00Z".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "2019-03-01T10:15+01:00");
/// ```
#[derive(Debug, Clone)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    text: String,
}

impl Timestamp {
    /// Parses an ISO-8601 date-time with offset.
    ///
    /// Accepts RFC 3339 and the shorter form without seconds
    /// (`2019-03-01T10:15+01:00`, `2019-03-01T10:15Z`).
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let instant = DateTime::parse_from_rfc3339(text)
            .or_else(|_| {
                let normalized = match text.strip_suffix('Z') {
                    Some(rest) => format!("{rest}+00:00"),
                    None => text.to_string(),
                };
                DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z")
            })
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: text.to_string(),
            })?;
        Ok(Self {
            instant,
            text: text.to_string(),
        })
    }

    /// Creates a timestamp from milliseconds since Unix epoch.
    ///
    /// Values beyond the representable range fall back to the epoch.
    pub fn from_millis(millis: u64) -> Self {
        let datetime = i64::try_from(millis)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default();
        Self::from_datetime(datetime)
    }

    /// Creates a timestamp from a UTC date-time.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self {
            text: datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant: datetime.fixed_offset(),
        }
    }

    /// Returns the instant with its original offset.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.instant
    }

    /// Returns the textual form stored in documents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns milliseconds since Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Timestamp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
