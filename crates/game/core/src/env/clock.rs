//! Clock oracle used to timestamp battle log entries.

/// Source of wall-clock timestamps in milliseconds since the Unix epoch.
pub trait ClockOracle: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by chrono.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl ClockOracle for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock frozen at a single instant. Handy for tests and replays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl ClockOracle for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
