// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gestures: session state managers for viewer interactions.
//!
//! This crate provides small, focused state managers for the interactions a
//! pan/zoom viewer has to keep apart. Each module handles one pattern that
//! requires stateful tracking across multiple events:
//!
//! - [`drag`]: thresholded drag sessions with an anchored grab offset
//! - [`pinch`]: two-finger pinch sessions captured at gesture start
//! - [`swipe`]: horizontal swipe candidates, resolved only on release
//! - [`tap`]: double-tap recognition with temporal tolerance
//!
//! ## Design Philosophy
//!
//! Each session is designed to be:
//!
//! - **Minimal and focused**: one interaction pattern per type
//! - **Stateful but simple**: just enough state captured at gesture start to
//!   interpret later events
//! - **Integration-friendly**: plain positions and millisecond timestamps in,
//!   plain data out; no event system or framework assumed
//! - **Generic**: pointer identity is an application-supplied `Id` type
//!
//! The exclusive-gesture rule of the viewer — at most one active gesture at
//! any instant — is enforced structurally by [`Gesture`]: sessions live as
//! payloads of the enum, so holding one means holding exactly one. Transition
//! policy (who preempts whom, what a release resolves to) lives in the layer
//! that owns the enum.
//!
//! ## Usage pattern
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_gestures::drag::DragSession;
//! use loupe_gestures::{Gesture, PointerSource};
//!
//! let mut gesture: Gesture<u32> = Gesture::Idle;
//! assert!(gesture.is_idle());
//!
//! // Pointer 7 pressed at (100, 100) with the content currently at rest.
//! gesture = Gesture::Drag(DragSession::new(
//!     7,
//!     PointerSource::Mouse,
//!     Point::new(100.0, 100.0),
//!     Vec2::ZERO,
//! ));
//!
//! // Movement below the threshold produces no visible drag...
//! if let Gesture::Drag(drag) = &mut gesture {
//!     assert_eq!(drag.update(Point::new(102.0, 101.0), 5.0), None);
//!     // ...while movement past it commits and yields the target position.
//!     let target = drag.update(Point::new(110.0, 104.0), 5.0).unwrap();
//!     assert_eq!(target, Vec2::new(10.0, 4.0));
//!     assert!(drag.has_dragged());
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod swipe;
pub mod tap;

use kurbo::Point;

use drag::DragSession;
use pinch::PinchSession;
use swipe::SwipeSession;

/// Device class of a pointer, selecting the drag commit threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse (or pen) input.
    Mouse,
    /// Direct touch input.
    Touch,
}

/// The exclusive gesture of a viewer: at most one is active at any instant.
///
/// Session data is carried as the enum payload, so a gesture change discards
/// the previous session by construction and a stale update can be rejected by
/// matching on the tag first.
#[derive(Clone, Debug)]
pub enum Gesture<Id> {
    /// No gesture in progress.
    Idle,
    /// A single-pointer drag (or drag candidate below its threshold).
    Drag(DragSession<Id>),
    /// A two-finger pinch.
    Pinch(PinchSession<Id>),
    /// A horizontal swipe candidate, resolved on release.
    Swipe(SwipeSession<Id>),
}

impl<Id> Gesture<Id> {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl<Id> Default for Gesture<Id> {
    fn default() -> Self {
        Self::Idle
    }
}

pub(crate) fn point_is_finite(pt: Point) -> bool {
    pt.x.is_finite() && pt.y.is_finite()
}
