//! Block anchors derived from the wall clock
//!
//! Anchors have the form `thm-<epoch-millis>`. Two items created within the
//! same millisecond receive the same anchor; the format is kept because
//! existing embeds depend on it.

use std::fmt;

/// Prefix shared by every generated anchor
pub const ANCHOR_PREFIX: &str = "thm";

/// Millisecond clock used to mint anchors
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Block identifier placed after the callout title and in the embed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn from_millis(millis: i64) -> Self {
        AnchorId(format!("{}-{}", ANCHOR_PREFIX, millis))
    }

    /// Mint an anchor from the clock's current reading
    pub fn generate(clock: &dyn Clock) -> Self {
        Self::from_millis(clock.now_millis())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
