//! Generation counter for transient highlights.
//!
//! A jump flashes the target range and schedules a clear after a delay.
//! A newer flash supersedes the pending clear of an older one: every flash
//! takes a fresh token and a clear only runs while its token is current.

/// Token identifying one flash request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlashToken(u64);

/// Monotonic flash generation.
#[derive(Debug, Clone, Default)]
pub struct FlashGeneration {
    current: u64,
}

impl FlashGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new flash, invalidating every earlier token.
    pub fn begin(&mut self) -> FlashToken {
        self.current += 1;
        FlashToken(self.current)
    }

    /// Check if a delayed clear for `token` should still run.
    pub fn should_clear(&self, token: FlashToken) -> bool {
        token.0 > 0 && token.0 == self.current
    }
}
