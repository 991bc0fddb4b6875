// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: thresholded, grab-anchored content dragging.
//!
//! A session is created on pointer press and discarded on release. It stays a
//! *candidate* — producing no visible movement — until cumulative travel from
//! the press origin exceeds the device threshold. Once committed it yields an
//! absolute target position on every update, anchored so the content point
//! grabbed at press stays under the pointer, and it records that it dragged
//! so the release handler can suppress the click action exactly once.

use kurbo::{Point, Vec2};

use crate::{PointerSource, point_is_finite};

/// A single-pointer drag session.
#[derive(Clone, Copy, Debug)]
pub struct DragSession<Id> {
    pointer: Id,
    source: PointerSource,
    origin: Point,
    last: Point,
    grab_offset: Vec2,
    has_dragged: bool,
}

impl<Id: Copy + PartialEq> DragSession<Id> {
    /// Starts a drag session at the press position.
    ///
    /// `content_position` is the content offset at press time; the difference
    /// between it and the press position becomes the grab anchor, so drag
    /// targets are absolute rather than accumulated deltas.
    #[must_use]
    pub fn new(pointer: Id, source: PointerSource, origin: Point, content_position: Vec2) -> Self {
        Self {
            pointer,
            source,
            origin,
            last: origin,
            grab_offset: origin.to_vec2() - content_position,
            has_dragged: false,
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

    /// The press position.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The most recent pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Returns `true` once the session has committed to a visible drag.
    ///
    /// Release handlers read this to suppress the click action of a press
    /// that was really an aborted drag.
    #[must_use]
    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    /// Feeds a new pointer position into the session.
    ///
    /// Returns the target content position once cumulative travel from the
    /// origin exceeds `threshold`, and `None` while the session is still a
    /// candidate. Non-finite positions are dropped without touching state.
    pub fn update(&mut self, pos: Point, threshold: f64) -> Option<Vec2> {
        if !point_is_finite(pos) {
            return None;
        }
        self.last = pos;
        if !self.has_dragged && (pos - self.origin).hypot() <= threshold {
            return None;
        }
        self.has_dragged = true;
        Some(pos.to_vec2() - self.grab_offset)
    }
}
