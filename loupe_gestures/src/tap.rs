// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition with temporal tolerance.
//!
//! Touch input has no native click or double-click; this tracker derives them
//! from release timestamps. Two taps within the double-tap window recognize a
//! double; a trailing tap shortly after a recognized double is swallowed so a
//! fast triple-tap cannot fire two zoom toggles back to back.

/// Two taps within this window (ms) are recognized as a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Taps within this window (ms) after a recognized double are ignored.
pub const TAP_SUPPRESS_WINDOW_MS: u64 = 100;

/// Outcome of feeding one tap into a [`TapTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapRecognition {
    /// A lone tap; may become the first half of a double.
    Single,
    /// The second tap of a double.
    Double,
    /// A triple-tap artifact, to be discarded.
    Ignored,
}

/// Recognizes double taps from a stream of release timestamps.
///
/// Timestamps are caller-supplied milliseconds from any monotonic origin, in
/// the spirit of the rest of this crate: no clock is read internally, which
/// keeps recognition deterministic under test.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    last_tap_ms: Option<u64>,
    last_double_ms: Option<u64>,
}

impl TapTracker {
    /// Feeds one tap, returning what it amounts to.
    pub fn tap(&mut self, now_ms: u64) -> TapRecognition {
        if let Some(t) = self.last_double_ms
            && now_ms.saturating_sub(t) <= TAP_SUPPRESS_WINDOW_MS
        {
            return TapRecognition::Ignored;
        }
        if let Some(t) = self.last_tap_ms
            && now_ms.saturating_sub(t) <= DOUBLE_TAP_WINDOW_MS
        {
            self.last_tap_ms = None;
            self.last_double_ms = Some(now_ms);
            return TapRecognition::Double;
        }
        self.last_tap_ms = Some(now_ms);
        TapRecognition::Single
    }

    /// Forgets all tap history.
    ///
    /// Called when a gesture is cancelled, so a tap from before the
    /// cancellation cannot pair with one from after it.
    pub fn clear(&mut self) {
        self.last_tap_ms = None;
        self.last_double_ms = None;
    }
}
