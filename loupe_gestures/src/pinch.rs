// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch sessions: two-finger zoom state captured at gesture start.
//!
//! A pinch is interpreted against the moment both fingers were down: the
//! initial spread, the initial midpoint, and the transform at that instant.
//! Updates report the spread ratio and the current midpoint; the owner turns
//! those into a focal zoom that keeps the world point under the midpoint
//! stationary (and pans with the midpoint when both fingers translate).
//!
//! The session also snapshots the container frame at gesture start, so the
//! owner does not have to re-measure layout on every move event.

use kurbo::{Point, Rect, Vec2};

use crate::point_is_finite;

/// Spread below which a pinch is considered degenerate.
const MIN_PINCH_SPREAD: f64 = 1e-6;

/// One update of an active pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Current spread divided by the spread at gesture start.
    pub spread_ratio: f64,
    /// Current midpoint of the two fingers.
    pub midpoint: Point,
}

/// A two-finger pinch session.
#[derive(Clone, Copy, Debug)]
pub struct PinchSession<Id> {
    first: (Id, Point),
    second: (Id, Point),
    start_spread: f64,
    start_scale: f64,
    start_midpoint: Point,
    start_position: Vec2,
    frame: Rect,
}

impl<Id: Copy + PartialEq> PinchSession<Id> {
    /// Begins a pinch from two touch points.
    ///
    /// `scale` and `position` are the transform at gesture start; `frame` is
    /// the container rectangle, cached for the lifetime of the gesture.
    /// Returns `None` for a degenerate spread (coincident fingers), which
    /// would make every subsequent ratio meaningless.
    #[must_use]
    pub fn begin(
        first: (Id, Point),
        second: (Id, Point),
        scale: f64,
        position: Vec2,
        frame: Rect,
    ) -> Option<Self> {
        let spread = (second.1 - first.1).hypot();
        if !spread.is_finite() || spread < MIN_PINCH_SPREAD {
            return None;
        }
        Some(Self {
            first,
            second,
            start_spread: spread,
            start_scale: scale,
            start_midpoint: first.1.midpoint(second.1),
            start_position: position,
            frame,
        })
    }

    /// Returns `true` if `id` is one of the two session fingers.
    #[must_use]
    pub fn involves(&self, id: Id) -> bool {
        self.first.0 == id || self.second.0 == id
    }

    /// The spread at gesture start.
    #[must_use]
    pub fn start_spread(&self) -> f64 {
        self.start_spread
    }

    /// The scale at gesture start.
    #[must_use]
    pub fn start_scale(&self) -> f64 {
        self.start_scale
    }

    /// The finger midpoint at gesture start.
    #[must_use]
    pub fn start_midpoint(&self) -> Point {
        self.start_midpoint
    }

    /// The content position at gesture start.
    #[must_use]
    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// The container frame cached at gesture start.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Feeds a finger position into the session.
    ///
    /// Returns the current spread ratio and midpoint, or `None` when the id
    /// belongs to neither finger, the position is non-finite, or the fingers
    /// have collapsed onto each other (prior state is retained in all three
    /// cases).
    pub fn update(&mut self, id: Id, pos: Point) -> Option<PinchUpdate> {
        if !point_is_finite(pos) {
            return None;
        }
        let (mut first, mut second) = (self.first, self.second);
        if first.0 == id {
            first.1 = pos;
        } else if second.0 == id {
            second.1 = pos;
        } else {
            return None;
        }
        let spread = (second.1 - first.1).hypot();
        if !spread.is_finite() || spread < MIN_PINCH_SPREAD {
            return None;
        }
        self.first = first;
        self.second = second;
        Some(PinchUpdate {
            spread_ratio: spread / self.start_spread,
            midpoint: first.1.midpoint(second.1),
        })
    }

    /// Returns the finger that remains when `released` lifts, if it was one
    /// of the pair.
    #[must_use]
    pub fn survivor(&self, released: Id) -> Option<(Id, Point)> {
        if self.first.0 == released {
            Some(self.second)
        } else if self.second.0 == released {
            Some(self.first)
        } else {
            None
        }
    }
}
