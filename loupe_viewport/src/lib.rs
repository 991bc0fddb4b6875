// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewport: headless pan/zoom state for scalable content in a box.
//!
//! This crate provides the transform kernel of the Loupe viewer: a container
//! of known pixel size holds scalable content, and [`Viewport`] maintains the
//! live `(scale, position)` pair for it. It focuses on:
//! - Resolving partial options into an immutable [`ViewportConfig`] snapshot.
//! - Computing pannable bounds and clamping positions into them.
//! - Focal ("anchored") zoom that keeps a chosen world point stationary on
//!   screen while the scale changes.
//! - Coordinate conversion between container (screen) and content (world)
//!   space.
//!
//! It does **not** listen to input or drive animation. Callers are expected
//! to:
//! - Feed measured container/content sizes in whenever they change.
//! - Translate input gestures into [`Viewport`] operations at a higher layer
//!   (for example with `loupe_engine`).
//! - Read `scale()`/`position()` back to paint a `translate(…) scale(…)`
//!   transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_viewport::{Viewport, ViewportOptions};
//!
//! let mut view = Viewport::new(ViewportOptions::default().resolve());
//! view.set_container_size(Size::new(800.0, 600.0));
//! view.set_content_size(Size::new(800.0, 600.0));
//!
//! // Zoom in around the cursor; the content under it stays put.
//! view.zoom_about(Point::new(200.0, 150.0), 2.0);
//! assert_eq!(view.scale(), 2.0);
//!
//! // Pan, clamped to the pannable bounds for the current scale.
//! view.pan_by(Vec2::new(-40.0, 10.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform origin is the **center** of both boxes: content rests
//!   centered in the container and `position` is measured from that rest
//!   position. The same convention is applied to bounds, focal zoom and
//!   coordinate conversion.
//! - There is no error type. Operations on unmeasured or degenerate geometry
//!   are no-ops, and non-finite candidates are dropped before they can reach
//!   observable state.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod viewport;

pub use bounds::{PanBounds, is_finite, pan_bounds};
pub use config::{
    DEFAULT_BOUNDS_BUFFER, DEFAULT_CLICK_ZOOM_SCALE, DEFAULT_DRAG_THRESHOLD_MOUSE,
    DEFAULT_DRAG_THRESHOLD_TOUCH, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_ZOOM_SENSITIVITY, ViewportConfig, ViewportOptions,
};
pub use viewport::{Viewport, ViewportDebugInfo};
