//! Button debounce handling.
//!
//! Two layers give one activation per physical press:
//!
//! - [`Debouncer`]: time-based rate limit. Reports a press at most once per
//!   [`DEBOUNCE_INTERVAL_MS`] while the line reads pressed. Polling while the
//!   button is held keeps producing activations every interval.
//! - [`latch_activation`]: one-shot latch owned by the caller. Set when an
//!   activation fires, cleared as soon as the line reads released (no debounce
//!   on release).
//!
//! Buttons are active-low with internal pull-ups, so callers pass
//! `is_low()` as `is_pressed`.

use crate::config::DEBOUNCE_INTERVAL_MS;

/// Per-button debounce timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    /// Timestamp of the last accepted activation (0 at boot).
    last_accepted_ms: u64,
}

impl Debouncer {
    /// Create a debouncer whose last activation is at t = 0.
    pub const fn new() -> Self { Self { last_accepted_ms: 0 } }

    /// Returns true if the button reads pressed and at least
    /// [`DEBOUNCE_INTERVAL_MS`] have passed since the last accepted activation.
    ///
    /// On acceptance `now_ms` becomes the new reference timestamp.
    pub fn poll(
        &mut self,
        is_pressed: bool,
        now_ms: u64,
    ) -> bool {
        if !is_pressed {
            return false;
        }

        if now_ms.saturating_sub(self.last_accepted_ms) < DEBOUNCE_INTERVAL_MS {
            return false;
        }

        self.last_accepted_ms = now_ms;
        true
    }

    #[cfg(test)]
    pub(crate) const fn last_accepted_ms(&self) -> u64 { self.last_accepted_ms }
}

/// Combine a debounced activation with the caller's latch flag.
///
/// Fires only when `debounced` is true and the latch is clear, then sets the
/// latch. The latch is cleared whenever the line reads released.
pub fn latch_activation(
    latch: &mut bool,
    debounced: bool,
    is_pressed: bool,
) -> bool {
    let fired = debounced && !*latch;
    if fired {
        *latch = true;
    }
    if !is_pressed {
        *latch = false;
    }
    fired
}

// =============================================================================
// Unit Tests
// =============================================================================
