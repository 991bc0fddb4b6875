// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Engine: gesture disambiguation from raw input into one viewport transform.
//!
//! [`ViewerEngine`] is the composition layer of the Loupe viewer. It owns a
//! [`Viewport`](loupe_viewport::Viewport) and the ephemeral gesture state,
//! consumes a raw pointer/keyboard input stream, and disambiguates concurrent
//! gestures — drag, pinch, swipe, click-to-zoom, keyboard zoom/pan — into a
//! single coherent `(scale, position)` pair. Hosts read back
//! `scale()`/`position()`/`is_dragging()` to paint a
//! `translate(…) scale(…)` transform, and an optional
//! [`CursorIcon`] for the container.
//!
//! ## Input surfaces
//!
//! There are two ways in, layered one on the other:
//!
//! - **`ui-events` adapter**: [`ViewerEngine::handle_pointer`] and
//!   [`ViewerEngine::handle_keyboard`] destructure
//!   [`ui_events::pointer::PointerEvent`] /
//!   [`ui_events::keyboard::KeyboardEvent`] and route them below. The
//!   returned [`EngineResponse::handled`] tells wrappers when to suppress the
//!   default behavior (page scroll under a zooming wheel, for instance).
//! - **Typed core**: [`ViewerEngine::pointer_down`],
//!   [`ViewerEngine::pointer_move`], [`ViewerEngine::pointer_up`],
//!   [`ViewerEngine::scroll_by`] and friends, generic over an opaque pointer
//!   id. Hosts that are not speaking `ui-events` (and tests) drive these
//!   directly.
//!
//! Timestamps are caller-supplied milliseconds from any monotonic origin;
//! the engine reads no clock, so double-tap windows and the 400 ms
//! transition flag are deterministic under test.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use loupe_engine::ViewerEngine;
//! use loupe_gestures::PointerSource;
//! use loupe_viewport::ViewportOptions;
//!
//! // Ids are host-chosen; tests and simple hosts can use integers.
//! let mut engine: ViewerEngine<u32> = ViewerEngine::new(ViewportOptions::default(), true);
//! engine.set_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
//! engine.set_content_size(Size::new(800.0, 600.0));
//!
//! // A wheel tick over the container center zooms about it.
//! engine.scroll_by(Vec2::new(0.0, -250.0), Point::new(400.0, 300.0));
//! assert_eq!(engine.scale(), 1.5);
//!
//! // Dragging past the threshold pans the content.
//! engine.pointer_down(1, PointerSource::Mouse, Point::new(400.0, 300.0), 0);
//! engine.pointer_move(1, Point::new(360.0, 300.0));
//! assert!(engine.is_dragging());
//! engine.pointer_up(1, Point::new(360.0, 300.0), 16);
//! ```
//!
//! ## Robustness
//!
//! The host input system may deliver events in any interleaving: a move after
//! its gesture ended, a release for a pointer the engine never saw, a window
//! blur mid-drag. Every handler checks the gesture tag and pointer identity
//! before applying anything, and [`ViewerEngine::cancel_gestures`] (wired to
//! `Cancel` events and window blur) unconditionally returns the machine to
//! idle with no residual dragging state.
//!
//! This crate is `no_std`.

#![no_std]

mod transition;

pub use transition::TRANSITION_MS;

use cursor_icon::CursorIcon;
use kurbo::{Point, Rect, Size, Vec2};
use loupe_gestures::drag::DragSession;
use loupe_gestures::pinch::{PinchSession, PinchUpdate};
use loupe_gestures::swipe::SwipeSession;
use loupe_gestures::tap::{TapRecognition, TapTracker};
use loupe_gestures::{Gesture, PointerSource};
use loupe_viewport::{Viewport, ViewportConfig, ViewportOptions};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::{
    PointerEvent, PointerGesture, PointerId, PointerScrollEvent, PointerType, PointerUpdate,
};

use transition::Transition;

pub use loupe_gestures::swipe::NavDirection;

/// Line-delta wheel events are normalized at this many pixels per line.
pub const LINE_SCROLL_PX: f64 = 20.0;

/// Fixed translation step for arrow-key panning, in container pixels.
pub const KEY_PAN_STEP: f64 = 50.0;

/// Multiplicative step for keyboard zoom in/out.
pub const KEY_ZOOM_STEP: f64 = 1.2;

/// Outcome of feeding one raw input event to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineResponse {
    /// The event drove the engine; wrappers should suppress its default.
    pub handled: bool,
    /// A completed swipe resolved to a navigation request.
    pub nav: Option<NavDirection>,
}

/// The viewer engine: viewport state plus gesture disambiguation.
///
/// One engine instance lives per mounted viewer. `Id` is the host's opaque
/// pointer identity; the `ui-events` adapter instantiates it with
/// `Option<PointerId>`.
#[derive(Clone, Debug)]
pub struct ViewerEngine<Id: Copy + PartialEq = Option<PointerId>> {
    viewport: Viewport,
    gesture: Gesture<Id>,
    touches: [Option<(Id, Point)>; 2],
    taps: TapTracker,
    transition: Transition,
    frame: Rect,
    zoom_enabled: bool,
    hovered: bool,
    focused: bool,
    now_ms: u64,
}

impl<Id: Copy + PartialEq> ViewerEngine<Id> {
    /// Creates an engine from partial options.
    ///
    /// `zoom_enabled` gates every zoom *gesture* (wheel, click/tap toggle,
    /// keyboard, pinch); the programmatic [`ViewerEngine::zoom_to`] stays
    /// available.
    #[must_use]
    pub fn new(options: ViewportOptions, zoom_enabled: bool) -> Self {
        Self {
            viewport: Viewport::new(options.resolve()),
            gesture: Gesture::Idle,
            touches: [None, None],
            taps: TapTracker::default(),
            transition: Transition::default(),
            frame: Rect::ZERO,
            zoom_enabled,
            hovered: false,
            focused: false,
            now_ms: 0,
        }
    }

    /// Re-resolves options into a fresh config snapshot.
    ///
    /// Scale and position are re-clamped into the new limits.
    pub fn set_options(&mut self, options: ViewportOptions) {
        self.viewport.set_config(options.resolve());
    }

    /// Read access to the owned viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// The current position, relative to the centered rest position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.viewport.position()
    }

    /// Returns `true` while a drag has committed past its threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(&self.gesture, Gesture::Drag(drag) if drag.has_dragged())
    }

    /// Returns `true` while an animated transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active(self.now_ms)
    }

    /// The cursor the container should show, if cursor management is on.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorIcon> {
        if !self.viewport.config().manage_cursor {
            return None;
        }
        Some(if self.is_dragging() {
            CursorIcon::Grabbing
        } else if !self.viewport.at_min_scale() {
            CursorIcon::Grab
        } else if self.zoom_enabled {
            CursorIcon::ZoomIn
        } else {
            CursorIcon::Default
        })
    }

    /// Whether zoom gestures are enabled.
    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Enables or disables zoom gestures.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom_enabled = enabled;
    }

    /// Host-tracked keyboard focus of the viewer.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Pointer-hover state, normally tracked from `Enter`/`Leave` events.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Returns `true` while keyboard shortcuts apply to this viewer.
    ///
    /// Shortcuts are scoped to a hovered or focused viewer so a page full of
    /// viewers does not hijack global keys. Hosts are expected not to forward
    /// keys originating inside text inputs or content-editable elements.
    #[must_use]
    pub fn keyboard_active(&self) -> bool {
        self.hovered || self.focused
    }

    /// The container frame last pushed by the host.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Updates the container frame (page coordinates).
    ///
    /// Also feeds the container size to the viewport, which re-clamps and
    /// re-centers as needed.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.viewport.set_container_size(frame.size());
    }

    /// Updates the measured content size (fired on load and resize).
    pub fn set_content_size(&mut self, size: Size) {
        self.viewport.set_content_size(size);
    }

    /// Observes the passage of time without any input.
    ///
    /// Hosts call this once per frame (or on a timer) so the transition flag
    /// expires even when no further input arrives.
    pub fn tick(&mut self, now_ms: u64) {
        self.observe_time(now_ms);
    }

    /// Begins a gesture for a pressed pointer.
    ///
    /// A second simultaneous touch promotes to a pinch, preempting whatever
    /// single-pointer gesture was in progress. A single press becomes a drag
    /// candidate while zoomed, or a swipe candidate at minimum scale when
    /// swipe navigation is enabled.
    pub fn pointer_down(&mut self, id: Id, source: PointerSource, pos: Point, now_ms: u64) {
        self.observe_time(now_ms);
        let local = self.to_local(pos);

        if source == PointerSource::Touch {
            self.track_touch(id, local);
            if let [Some(first), Some(second)] = self.touches {
                // Second finger down: promote to pinch unless one is already
                // running (a third finger changes nothing).
                if self.zoom_enabled
                    && !matches!(self.gesture, Gesture::Pinch(_))
                    && let Some(pinch) = PinchSession::begin(
                        first,
                        second,
                        self.viewport.scale(),
                        self.viewport.position(),
                        self.frame,
                    )
                {
                    self.gesture = Gesture::Pinch(pinch);
                }
                return;
            }
        }

        if matches!(self.gesture, Gesture::Pinch(_)) {
            return;
        }
        // A fresh press replaces any stale session outright; the window-level
        // release or blur that should have cleared it may have been lost.
        self.gesture = if self.viewport.at_min_scale() && self.viewport.config().enable_swipe {
            Gesture::Swipe(SwipeSession::new(id, source, local))
        } else {
            Gesture::Drag(DragSession::new(id, source, local, self.viewport.position()))
        };
    }

    /// Feeds a pointer movement into the active gesture.
    ///
    /// Returns `true` when the movement visibly drove the transform. Moves
    /// for unknown pointers, or arriving after the gesture ended, are
    /// ignored.
    pub fn pointer_move(&mut self, id: Id, pos: Point) -> bool {
        let local = self.to_local(pos);
        for slot in &mut self.touches {
            if let Some((tracked, point)) = slot
                && *tracked == id
            {
                *point = local;
            }
        }

        let config = *self.viewport.config();
        match &mut self.gesture {
            Gesture::Drag(drag) if drag.pointer() == id => {
                let threshold = drag_threshold(&config, drag.source());
                if let Some(target) = drag.update(local, threshold) {
                    self.viewport.pan_to(target);
                    true
                } else {
                    false
                }
            }
            Gesture::Pinch(pinch) => {
                let Some(update) = pinch.update(id, local) else {
                    return false;
                };
                let Some((scale, position)) = pinch_transform(pinch, update, &config) else {
                    return false;
                };
                self.viewport.set_transform(scale, position);
                true
            }
            Gesture::Swipe(swipe) if swipe.pointer() == id => {
                // Swipes track silently; resolution happens on release.
                swipe.update(local);
                false
            }
            _ => false,
        }
    }

    /// Ends the gesture a released pointer belongs to.
    ///
    /// Resolves swipes into a navigation request, taps and clicks into the
    /// click-zoom toggle, and downgrades a pinch to a drag re-anchored at the
    /// surviving finger.
    pub fn pointer_up(&mut self, id: Id, pos: Point, now_ms: u64) -> Option<NavDirection> {
        self.observe_time(now_ms);
        let local = self.to_local(pos);
        self.forget_touch(id);

        match core::mem::take(&mut self.gesture) {
            Gesture::Drag(drag) if drag.pointer() == id => {
                if !drag.has_dragged() {
                    self.click(drag.source(), local, now_ms);
                }
                None
            }
            Gesture::Pinch(pinch) => {
                match pinch.survivor(id) {
                    Some((survivor, at)) if !self.viewport.at_min_scale() => {
                        // Touch count dropped below two: the pinch session is
                        // gone, the remaining finger re-anchors as a drag.
                        self.gesture = Gesture::Drag(DragSession::new(
                            survivor,
                            PointerSource::Touch,
                            at,
                            self.viewport.position(),
                        ));
                    }
                    Some(_) => {}
                    // Some other pointer lifted; the pinch goes on.
                    None => self.gesture = Gesture::Pinch(pinch),
                }
                None
            }
            Gesture::Swipe(mut swipe) if swipe.pointer() == id => {
                swipe.update(local);
                let nav = swipe.resolve(self.viewport.config().swipe_threshold);
                if nav.is_none() {
                    let config = *self.viewport.config();
                    let threshold = drag_threshold(&config, swipe.source());
                    if swipe.displacement().hypot() <= threshold {
                        self.click(swipe.source(), local, now_ms);
                    }
                }
                nav
            }
            // The release belongs to a pointer the active session does not;
            // put the session back untouched.
            other => {
                self.gesture = other;
                None
            }
        }
    }

    /// Cancels any gesture in progress, discarding all session data.
    ///
    /// Wired to `Cancel` events and window blur; identical in effect to a
    /// normal gesture end minus the release actions, leaving no residual
    /// dragging state.
    pub fn cancel_gestures(&mut self) {
        self.gesture = Gesture::Idle;
        self.touches = [None, None];
        self.taps.clear();
    }

    /// The window lost focus: cancel gestures and drop keyboard scope.
    pub fn window_blur(&mut self) {
        self.cancel_gestures();
        self.focused = false;
        self.hovered = false;
    }

    /// Applies a normalized wheel delta (pixels) at a page-coordinate anchor.
    ///
    /// The sign of `delta.y` follows wheel conventions: negative (scroll up /
    /// forward) zooms in. Returns `true` when the viewer consumed the wheel,
    /// which it does whenever zooming is possible at all, so a page does not
    /// scroll underneath a pinned-at-limit viewer.
    pub fn scroll_by(&mut self, delta: Vec2, anchor: Point) -> bool {
        if !self.zoom_enabled || !self.viewport.is_measured() || !delta.y.is_finite() {
            return false;
        }
        let target = self.viewport.scale() - delta.y * self.viewport.config().zoom_sensitivity;
        self.viewport.zoom_about(self.to_local(anchor), target);
        true
    }

    /// Applies one step of a platform pinch gesture (trackpad) at an anchor.
    ///
    /// `delta` is the relative spread change of the step; the scale is
    /// multiplied by `1 + delta`.
    pub fn pinch_step(&mut self, delta: f64, anchor: Point) -> bool {
        if !self.zoom_enabled || !self.viewport.is_measured() || !delta.is_finite() {
            return false;
        }
        let target = self.viewport.scale() * (1.0 + delta);
        self.viewport.zoom_about(self.to_local(anchor), target);
        true
    }

    /// Pans by a fixed keyboard step, clamped into bounds.
    pub fn key_pan(&mut self, delta: Vec2) -> bool {
        if !self.viewport.is_measured() {
            return false;
        }
        self.viewport.pan_by(delta);
        true
    }

    /// Keyboard zoom in: one multiplicative step about the container center.
    pub fn key_zoom_in(&mut self) -> bool {
        self.key_zoom(KEY_ZOOM_STEP)
    }

    /// Keyboard zoom out: one multiplicative step about the container center.
    pub fn key_zoom_out(&mut self) -> bool {
        self.key_zoom(1.0 / KEY_ZOOM_STEP)
    }

    /// Animates back to the default view.
    ///
    /// Returns scale to the minimum, position to the centered rest position,
    /// clears any active gesture, and marks the transition. Idempotent; a
    /// reset while a transition is in flight leaves the transform alone.
    pub fn reset(&mut self, now_ms: u64) {
        self.observe_time(now_ms);
        self.cancel_gestures();
        if !self.transition.begin(self.now_ms) {
            return;
        }
        self.viewport.reset();
    }

    /// Programmatic focal zoom to arbitrary world coordinates.
    ///
    /// Centers the world point at `target_scale` (default: the click-zoom
    /// scale), implicitly clamped into the configured range. Marks the
    /// transition; a call while one is in flight is a no-op.
    pub fn zoom_to(&mut self, world: Point, target_scale: Option<f64>, now_ms: u64) {
        self.observe_time(now_ms);
        if !self.viewport.is_measured() {
            return;
        }
        if !self.transition.begin(self.now_ms) {
            return;
        }
        let target = target_scale.unwrap_or(self.viewport.config().click_zoom_scale);
        self.viewport.zoom_to_world(world, target);
    }

    fn key_zoom(&mut self, factor: f64) -> bool {
        if !self.zoom_enabled || !self.viewport.is_measured() {
            return false;
        }
        let target = self.viewport.scale() * factor;
        let center = self.viewport.container_center();
        self.viewport.zoom_about(center, target);
        true
    }

    fn click(&mut self, source: PointerSource, anchor: Point, now_ms: u64) {
        match source {
            PointerSource::Mouse => self.toggle_click_zoom(anchor, now_ms),
            // Touch has no native click; require a double tap so that plain
            // taps (and the tail of a triple tap) stay inert.
            PointerSource::Touch => {
                if self.taps.tap(now_ms) == TapRecognition::Double {
                    self.toggle_click_zoom(anchor, now_ms);
                }
            }
        }
    }

    fn toggle_click_zoom(&mut self, anchor: Point, now_ms: u64) {
        if !self.zoom_enabled || !self.viewport.is_measured() {
            return;
        }
        self.observe_time(now_ms);
        if !self.transition.begin(self.now_ms) {
            return;
        }
        if self.viewport.at_min_scale() {
            let target = self.viewport.config().click_zoom_scale;
            self.viewport.zoom_about(anchor, target);
        } else {
            self.viewport.reset();
        }
    }

    fn observe_time(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    fn to_local(&self, pos: Point) -> Point {
        pos - self.frame.origin().to_vec2()
    }

    fn track_touch(&mut self, id: Id, pos: Point) {
        for slot in &mut self.touches {
            if let Some((tracked, point)) = slot
                && *tracked == id
            {
                *point = pos;
                return;
            }
        }
        for slot in &mut self.touches {
            if slot.is_none() {
                *slot = Some((id, pos));
                return;
            }
        }
        // Both slots taken: a third finger is ignored.
    }

    fn forget_touch(&mut self, id: Id) {
        for slot in &mut self.touches {
            if let Some((tracked, _)) = slot
                && *tracked == id
            {
                *slot = None;
            }
        }
    }
}

impl ViewerEngine<Option<PointerId>> {
    /// Routes a raw `ui-events` pointer event into the engine.
    ///
    /// `now_ms` is the host's monotonic timestamp for the event, in
    /// milliseconds.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now_ms: u64) -> EngineResponse {
        match event {
            PointerEvent::Down(e) => {
                self.pointer_down(
                    e.pointer.pointer_id,
                    source_of(e.pointer.pointer_type),
                    e.state.logical_point(),
                    now_ms,
                );
                EngineResponse {
                    handled: true,
                    nav: None,
                }
            }
            PointerEvent::Move(PointerUpdate {
                pointer, current, ..
            }) => {
                let handled = self.pointer_move(pointer.pointer_id, current.logical_point());
                EngineResponse { handled, nav: None }
            }
            PointerEvent::Up(e) => {
                let nav = self.pointer_up(e.pointer.pointer_id, e.state.logical_point(), now_ms);
                EngineResponse { handled: true, nav }
            }
            PointerEvent::Scroll(e) => {
                let delta = resolve_scroll_delta(e, self.frame.size());
                let handled = self.scroll_by(delta, e.state.logical_point());
                EngineResponse { handled, nav: None }
            }
            PointerEvent::Gesture(e) => {
                if let PointerGesture::Pinch(delta) = &e.gesture {
                    let handled = self.pinch_step(f64::from(*delta), e.state.logical_point());
                    EngineResponse { handled, nav: None }
                } else {
                    EngineResponse::default()
                }
            }
            PointerEvent::Enter(_) => {
                self.hovered = true;
                EngineResponse::default()
            }
            PointerEvent::Leave(_) => {
                self.hovered = false;
                EngineResponse::default()
            }
            PointerEvent::Cancel(_) => {
                self.cancel_gestures();
                EngineResponse {
                    handled: true,
                    nav: None,
                }
            }
        }
    }

    /// Routes a raw `ui-events` keyboard event into the engine.
    ///
    /// Shortcuts apply only while the viewer is hovered or focused; see
    /// [`ViewerEngine::keyboard_active`]. Returns `true` when the key drove
    /// the engine.
    pub fn handle_keyboard(&mut self, event: &KeyboardEvent, now_ms: u64) -> bool {
        self.observe_time(now_ms);
        if !self.keyboard_active() || !event.state.is_down() {
            return false;
        }
        match &event.key {
            Key::Named(NamedKey::ArrowLeft) => self.key_pan(Vec2::new(KEY_PAN_STEP, 0.0)),
            Key::Named(NamedKey::ArrowRight) => self.key_pan(Vec2::new(-KEY_PAN_STEP, 0.0)),
            Key::Named(NamedKey::ArrowUp) => self.key_pan(Vec2::new(0.0, KEY_PAN_STEP)),
            Key::Named(NamedKey::ArrowDown) => self.key_pan(Vec2::new(0.0, -KEY_PAN_STEP)),
            Key::Named(NamedKey::Escape) => {
                self.reset(now_ms);
                true
            }
            Key::Character(c) => match c.as_str() {
                "+" | "=" => self.key_zoom_in(),
                "-" | "_" => self.key_zoom_out(),
                _ => false,
            },
            _ => false,
        }
    }
}

fn drag_threshold(config: &ViewportConfig, source: PointerSource) -> f64 {
    match source {
        PointerSource::Mouse => config.drag_threshold_mouse,
        PointerSource::Touch => config.drag_threshold_touch,
    }
}

/// Computes the transform for a pinch update from its session-start state.
///
/// The world point under the start midpoint stays pinned under the live
/// midpoint, so translating both fingers pans while spreading them zooms.
/// The container center comes from the frame cached at gesture start.
fn pinch_transform<Id: Copy + PartialEq>(
    session: &PinchSession<Id>,
    update: PinchUpdate,
    config: &ViewportConfig,
) -> Option<(f64, Vec2)> {
    if session.start_scale() <= 0.0 {
        return None;
    }
    let target = config.clamp_scale(session.start_scale() * update.spread_ratio);
    let frame = session.frame();
    let center = Point::new(frame.width() / 2.0, frame.height() / 2.0);
    let world =
        ((session.start_midpoint() - center) - session.start_position()) / session.start_scale();
    let position = (update.midpoint - center) - world * target;
    Some((target, position))
}

fn source_of(pointer_type: PointerType) -> PointerSource {
    match pointer_type {
        PointerType::Touch => PointerSource::Touch,
        _ => PointerSource::Mouse,
    }
}

fn resolve_scroll_delta(event: &PointerScrollEvent, page: Size) -> Vec2 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(event.state.scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => Vec2::new(
            f64::from(*x) * LINE_SCROLL_PX,
            f64::from(*y) * LINE_SCROLL_PX,
        ),
        ScrollDelta::PageDelta(x, y) => {
            Vec2::new(f64::from(*x) * page.width, f64::from(*y) * page.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ViewerEngine<u32> {
        let mut engine = ViewerEngine::new(ViewportOptions::default(), true);
        engine.set_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.set_content_size(Size::new(800.0, 600.0));
        engine
    }

    #[test]
    fn cursor_reflects_engine_state() {
        let mut engine = engine();
        assert_eq!(engine.cursor(), Some(CursorIcon::ZoomIn));

        engine.scroll_by(Vec2::new(0.0, -500.0), Point::new(400.0, 300.0));
        assert_eq!(engine.cursor(), Some(CursorIcon::Grab));

        engine.pointer_down(1, PointerSource::Mouse, Point::new(400.0, 300.0), 0);
        engine.pointer_move(1, Point::new(350.0, 300.0));
        assert_eq!(engine.cursor(), Some(CursorIcon::Grabbing));

        engine.pointer_up(1, Point::new(350.0, 300.0), 16);
        assert_eq!(engine.cursor(), Some(CursorIcon::Grab));
    }

    #[test]
    fn cursor_management_can_be_disabled() {
        let options = ViewportOptions {
            manage_cursor: Some(false),
            ..ViewportOptions::default()
        };
        let engine: ViewerEngine<u32> = ViewerEngine::new(options, true);
        assert_eq!(engine.cursor(), None);
    }

    #[test]
    fn zoom_disabled_cursor_is_default() {
        let mut engine: ViewerEngine<u32> = ViewerEngine::new(ViewportOptions::default(), false);
        engine.set_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.set_content_size(Size::new(800.0, 600.0));
        assert_eq!(engine.cursor(), Some(CursorIcon::Default));
    }

    #[test]
    fn keyboard_scope_tracks_hover_and_focus() {
        let mut engine = engine();
        assert!(!engine.keyboard_active());
        engine.set_hovered(true);
        assert!(engine.keyboard_active());
        engine.set_hovered(false);
        engine.set_focused(true);
        assert!(engine.keyboard_active());
        engine.window_blur();
        assert!(!engine.keyboard_active());
    }

    #[test]
    fn frame_origin_offsets_anchors() {
        let mut engine: ViewerEngine<u32> = ViewerEngine::new(ViewportOptions::default(), true);
        engine.set_frame(Rect::new(100.0, 50.0, 900.0, 650.0));
        engine.set_content_size(Size::new(800.0, 600.0));

        // Page point (500, 350) is the container center; zooming about it
        // keeps centered content centered.
        engine.scroll_by(Vec2::new(0.0, -250.0), Point::new(500.0, 350.0));
        assert_eq!(engine.scale(), 1.5);
        assert_eq!(engine.position(), Vec2::ZERO);
    }
}
