// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe sessions: horizontal navigation gestures at rest.
//!
//! A swipe candidate tracks displacement silently — it has no visual side
//! effect while in flight — and is evaluated once, on release. A
//! predominantly horizontal displacement past the threshold resolves to a
//! navigation direction; anything else resolves to nothing.

use kurbo::{Point, Vec2};

use crate::{PointerSource, point_is_finite};

/// Navigation request resolved from a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// Advance to the next item (content swiped left).
    Next,
    /// Return to the previous item (content swiped right).
    Prev,
}

/// A single-pointer swipe candidate.
#[derive(Clone, Copy, Debug)]
pub struct SwipeSession<Id> {
    pointer: Id,
    source: PointerSource,
    origin: Point,
    last: Point,
}

impl<Id: Copy + PartialEq> SwipeSession<Id> {
    /// Starts a swipe candidate at the press position.
    #[must_use]
    pub fn new(pointer: Id, source: PointerSource, origin: Point) -> Self {
        Self {
            pointer,
            source,
            origin,
            last: origin,
        }
    }

    /// The pointer this session belongs to.
    #[must_use]
    pub fn pointer(&self) -> Id {
        self.pointer
    }

    /// The device class of the pointer.
    #[must_use]
    pub fn source(&self) -> PointerSource {
        self.source
    }

    /// Feeds a new pointer position into the session.
    ///
    /// Non-finite positions are dropped. There is no other effect until
    /// resolution; swipes are evaluated only on gesture end.
    pub fn update(&mut self, pos: Point) {
        if point_is_finite(pos) {
            self.last = pos;
        }
    }

    /// Total displacement from the press origin.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.last - self.origin
    }

    /// Resolves the completed gesture.
    ///
    /// Fires only when the horizontal displacement exceeds `threshold` AND
    /// exceeds the vertical displacement — a predominantly horizontal
    /// gesture. Leftward movement advances, rightward goes back.
    #[must_use]
    pub fn resolve(&self, threshold: f64) -> Option<NavDirection> {
        let d = self.displacement();
        if d.x.abs() > threshold && d.x.abs() > d.y.abs() {
            Some(if d.x < 0.0 {
                NavDirection::Next
            } else {
                NavDirection::Prev
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe_to(x: f64, y: f64) -> SwipeSession<u32> {
        let mut swipe = SwipeSession::new(1, PointerSource::Touch, Point::new(200.0, 200.0));
        swipe.update(Point::new(200.0 + x, 200.0 + y));
        swipe
    }

    #[test]
    fn leftward_past_threshold_resolves_next() {
        assert_eq!(swipe_to(-51.0, 0.0).resolve(50.0), Some(NavDirection::Next));
    }

    #[test]
    fn rightward_past_threshold_resolves_prev() {
        assert_eq!(swipe_to(51.0, 0.0).resolve(50.0), Some(NavDirection::Prev));
    }

    #[test]
    fn below_threshold_resolves_nothing() {
        assert_eq!(swipe_to(-50.0, 0.0).resolve(50.0), None);
        assert_eq!(swipe_to(49.0, 10.0).resolve(50.0), None);
    }

    #[test]
    fn predominantly_vertical_resolves_nothing() {
        assert_eq!(swipe_to(-60.0, 80.0).resolve(50.0), None);
        assert_eq!(swipe_to(-60.0, -80.0).resolve(50.0), None);
    }

    #[test]
    fn resolution_uses_the_latest_position() {
        let mut swipe: SwipeSession<u32> =
            SwipeSession::new(1, PointerSource::Touch, Point::new(0.0, 0.0));
        swipe.update(Point::new(-80.0, 0.0));
        swipe.update(Point::new(-10.0, 0.0));
        // The pointer came most of the way back before release.
        assert_eq!(swipe.resolve(50.0), None);
    }

    #[test]
    fn non_finite_positions_are_dropped() {
        let mut swipe = swipe_to(-60.0, 0.0);
        swipe.update(Point::new(f64::NAN, 0.0));
        assert_eq!(swipe.resolve(50.0), Some(NavDirection::Next));
    }

    #[test]
    fn displacement_is_from_origin() {
        assert_eq!(swipe_to(-60.0, 25.0).displacement(), Vec2::new(-60.0, 25.0));
    }
}
