// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::{PanBounds, is_finite, pan_bounds};
use crate::config::ViewportConfig;

/// Tolerance below which a scale counts as the minimum scale.
const SCALE_EPSILON: f64 = 1e-9;

/// Pan/zoom state for scalable content centered in a container.
///
/// `Viewport` owns the authoritative `(scale, position)` pair. The transform
/// origin is the center of both boxes: at the rest position the content is
/// centered in the container, and `position` is the content's offset from
/// there in container pixels. A world point `w`, measured from the content
/// center in unscaled content pixels, is rendered at
/// `container_center + position + w * scale`.
///
/// Every mutating operation clamps the scale into the configured range and
/// the position into the pannable bounds for the resulting scale, so the
/// invariants hold at all observable times. Operations that depend on
/// measurement are no-ops until both boxes have been measured, and non-finite
/// candidates are dropped rather than committed.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    container: Size,
    content: Size,
    scale: f64,
    position: Vec2,
}

impl Viewport {
    /// Creates a new viewport with unmeasured boxes.
    ///
    /// The initial scale is clamped into the configured range; the initial
    /// position is clamped once both boxes are measured.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let initial_scale = if config.initial_scale.is_finite() {
            config.clamp_scale(config.initial_scale)
        } else {
            config.min_scale
        };
        let initial_position = if is_finite(config.initial_position) {
            config.initial_position
        } else {
            Vec2::ZERO
        };
        Self {
            config,
            container: Size::ZERO,
            content: Size::ZERO,
            scale: initial_scale,
            position: initial_position,
        }
    }

    /// Returns the active configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Replaces the configuration snapshot.
    ///
    /// The current scale and position are re-clamped into the new limits.
    pub fn set_config(&mut self, config: ViewportConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        self.scale = self.config.clamp_scale(self.scale);
        self.reclamp();
    }

    /// Returns the measured container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Returns the measured content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Sets the measured container size.
    ///
    /// Shrinking the container re-centers rather than leaving content
    /// stranded off-screen: the position is clamped into the new bounds, and
    /// snapped to rest while at minimum scale.
    pub fn set_container_size(&mut self, size: Size) {
        if self.container == size {
            return;
        }
        self.container = size;
        self.reclamp();
    }

    /// Sets the measured content size.
    ///
    /// Fired by hosts on content load and resize; re-clamps like
    /// [`Viewport::set_container_size`].
    pub fn set_content_size(&mut self, size: Size) {
        if self.content == size {
            return;
        }
        self.content = size;
        self.reclamp();
    }

    /// Returns `true` once both boxes have a positive measured size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.container.width > 0.0
            && self.container.height > 0.0
            && self.content.width > 0.0
            && self.content.height > 0.0
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current position, relative to the centered rest position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the configured minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.config.min_scale
    }

    /// Returns the configured maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale
    }

    /// Returns `true` while the scale sits at the configured minimum.
    #[must_use]
    pub fn at_min_scale(&self) -> bool {
        self.scale <= self.config.min_scale + SCALE_EPSILON
    }

    /// Returns the centered rest position.
    #[must_use]
    pub fn rest_position(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Returns the container center in container coordinates.
    #[must_use]
    pub fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    /// Returns the pannable bounds for the current scale.
    #[must_use]
    pub fn pan_bounds(&self) -> PanBounds {
        pan_bounds(
            self.scale,
            self.container,
            self.content,
            self.config.bounds_buffer,
        )
    }

    /// Translates the position by a delta, clamped into bounds.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan_to(self.position + delta);
    }

    /// Moves the position to an absolute offset, clamped into bounds.
    ///
    /// No-op while unmeasured or for a non-finite candidate.
    pub fn pan_to(&mut self, pos: Vec2) {
        if !self.is_measured() {
            return;
        }
        self.commit_position(pos);
    }

    /// Focal zoom: rescale while keeping the world point under `anchor` fixed.
    ///
    /// `anchor` is a container-coordinate point (for example the cursor, a
    /// pinch midpoint, or the container center for keyboard zoom). The world
    /// point currently rendered under it stays rendered under it after the
    /// scale change, up to bounds clamping. When the clamped target lands on
    /// the minimum scale, the position snaps back to rest instead of trusting
    /// accumulated floating-point drift.
    pub fn zoom_about(&mut self, anchor: Point, target_scale: f64) {
        if !self.is_measured() || !target_scale.is_finite() || self.scale <= 0.0 {
            return;
        }
        let target = self.config.clamp_scale(target_scale);
        if target <= self.config.min_scale + SCALE_EPSILON {
            self.scale = target;
            self.position = self.rest_position();
            return;
        }
        let from_center = anchor - self.container_center();
        let world = (from_center - self.position) / self.scale;
        let position = from_center - world * target;
        self.scale = target;
        self.commit_position(position);
    }

    /// Commits an externally-computed transform, with the usual clamping.
    ///
    /// Used by anchored pinch updates, which derive both values from state
    /// captured at gesture start rather than from the live transform.
    pub fn set_transform(&mut self, scale: f64, position: Vec2) {
        if !self.is_measured() || !scale.is_finite() {
            return;
        }
        let target = self.config.clamp_scale(scale);
        if target <= self.config.min_scale + SCALE_EPSILON {
            self.scale = target;
            self.position = self.rest_position();
            return;
        }
        self.scale = target;
        self.commit_position(position);
    }

    /// Focal zoom that centers an arbitrary world point in the container.
    ///
    /// `world` is measured from the content center in unscaled content
    /// pixels. The target scale is clamped; the centering position is then
    /// clamped into bounds like any other candidate.
    pub fn zoom_to_world(&mut self, world: Point, target_scale: f64) {
        if !self.is_measured() || !target_scale.is_finite() || !is_finite(world.to_vec2()) {
            return;
        }
        let target = self.config.clamp_scale(target_scale);
        if target <= self.config.min_scale + SCALE_EPSILON {
            self.scale = target;
            self.position = self.rest_position();
            return;
        }
        self.scale = target;
        self.commit_position(-world.to_vec2() * target);
    }

    /// Returns to the minimum scale and the centered rest position.
    ///
    /// Idempotent, and safe to call with unmeasured boxes.
    pub fn reset(&mut self) {
        self.scale = self.config.clamp_scale(self.config.min_scale);
        self.position = self.rest_position();
    }

    /// Converts a container-coordinate point into world coordinates.
    ///
    /// World coordinates are measured from the content center in unscaled
    /// content pixels.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        (((pt - self.container_center()) - self.position) / self.scale).to_point()
    }

    /// Converts a world-coordinate point into container coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.container_center() + self.position + pt.to_vec2() * self.scale
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            config: self.config,
            container: self.container,
            content: self.content,
            scale: self.scale,
            position: self.position,
            pan_bounds: self.pan_bounds(),
        }
    }

    fn reclamp(&mut self) {
        if !self.is_measured() {
            return;
        }
        if self.at_min_scale() {
            self.position = self.rest_position();
        } else {
            self.position = self.pan_bounds().clamp(self.position);
        }
    }

    fn commit_position(&mut self, pos: Vec2) {
        if !is_finite(pos) {
            return;
        }
        self.position = self.pan_bounds().clamp(pos);
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Active configuration snapshot.
    pub config: ViewportConfig,
    /// Measured container size.
    pub container: Size,
    /// Measured content size.
    pub content: Size,
    /// Current scale factor.
    pub scale: f64,
    /// Current position, from the centered rest position.
    pub position: Vec2,
    /// Pannable bounds for the current scale.
    pub pan_bounds: PanBounds,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Viewport;
    use crate::config::{ViewportConfig, ViewportOptions};

    fn measured(config: ViewportConfig) -> Viewport {
        let mut vp = Viewport::new(config);
        vp.set_container_size(Size::new(800.0, 600.0));
        vp.set_content_size(Size::new(800.0, 600.0));
        vp
    }

    fn assert_within_bounds(vp: &Viewport) {
        let bounds = vp.pan_bounds();
        assert!(
            bounds.contains(vp.position()),
            "position {:?} outside bounds {bounds:?}",
            vp.position()
        );
    }

    #[test]
    fn new_viewport_starts_at_min_scale_and_rest() {
        let vp = Viewport::new(ViewportConfig::default());
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.position(), Vec2::ZERO);
        assert!(!vp.is_measured());
        assert!(vp.at_min_scale());
    }

    #[test]
    fn out_of_range_initial_scale_is_clamped() {
        let config = ViewportOptions {
            initial_scale: Some(12.0),
            ..ViewportOptions::default()
        }
        .resolve();
        let vp = Viewport::new(config);
        assert_eq!(vp.scale(), 6.0);
    }

    #[test]
    fn operations_before_measurement_are_no_ops() {
        let mut vp = Viewport::new(ViewportConfig::default());
        vp.zoom_about(Point::new(100.0, 100.0), 3.0);
        assert_eq!(vp.scale(), 1.0);
        vp.pan_by(Vec2::new(50.0, 50.0));
        assert_eq!(vp.position(), Vec2::ZERO);
    }

    #[test]
    fn zoom_about_center_is_a_fixed_point_of_centered_content() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 1.5);
        assert_eq!(vp.scale(), 1.5);
        assert_eq!(vp.position(), Vec2::ZERO);
    }

    #[test]
    fn zoom_about_preserves_the_world_point_under_the_anchor() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        vp.pan_by(Vec2::new(-60.0, 45.0));

        let anchor = Point::new(250.0, 120.0);
        let before = vp.screen_to_world(anchor);
        vp.zoom_about(anchor, 3.0);
        let after = vp.screen_to_world(anchor);

        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
        assert_within_bounds(&vp);
    }

    #[test]
    fn zoom_back_to_min_snaps_to_rest() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(123.0, 456.0), 4.0);
        vp.pan_by(Vec2::new(200.0, -150.0));
        vp.zoom_about(Point::new(700.0, 20.0), 1.0);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.position(), Vec2::ZERO);
    }

    #[test]
    fn zoom_above_max_clamps_to_max() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 20.0);
        assert_eq!(vp.scale(), 6.0);
    }

    #[test]
    fn pan_is_clamped_to_buffer_at_min_scale() {
        let mut vp = measured(ViewportConfig::default());
        vp.pan_by(Vec2::new(1000.0, -1000.0));
        assert_eq!(vp.position(), Vec2::new(80.0, -80.0));
    }

    #[test]
    fn pan_range_grows_with_overflow() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        vp.pan_by(Vec2::new(10_000.0, 0.0));
        // Half of the 800 px horizontal overflow plus the 80 px buffer.
        assert_eq!(vp.position().x, 480.0);
    }

    #[test]
    fn non_finite_candidates_are_dropped() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        let position = vp.position();

        vp.pan_to(Vec2::new(f64::NAN, 0.0));
        assert_eq!(vp.position(), position);
        vp.pan_by(Vec2::new(f64::INFINITY, 0.0));
        assert_eq!(vp.position(), position);
        vp.zoom_about(Point::new(400.0, 300.0), f64::NAN);
        assert_eq!(vp.scale(), 2.0);
        vp.set_transform(f64::INFINITY, Vec2::ZERO);
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn shrinking_container_reclamps_position() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        vp.pan_by(Vec2::new(480.0, 0.0));
        assert_eq!(vp.position().x, 480.0);

        // A wider container leaves less overflow; the position must follow.
        vp.set_container_size(Size::new(1400.0, 600.0));
        assert_within_bounds(&vp);
        assert!(vp.position().x < 480.0);
    }

    #[test]
    fn resize_at_min_scale_recenters() {
        let mut vp = measured(ViewportConfig::default());
        vp.pan_by(Vec2::new(80.0, 80.0));
        vp.set_container_size(Size::new(500.0, 500.0));
        assert_eq!(vp.position(), Vec2::ZERO);
    }

    #[test]
    fn reset_returns_to_min_scale_and_rest_idempotently() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(100.0, 550.0), 5.0);
        vp.pan_by(Vec2::new(-300.0, 200.0));

        vp.reset();
        let first = (vp.scale(), vp.position());
        vp.reset();
        assert_eq!((vp.scale(), vp.position()), first);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.position(), Vec2::ZERO);
    }

    #[test]
    fn zoom_to_world_centers_the_requested_point() {
        let mut vp = measured(ViewportConfig::default());
        let world = Point::new(120.0, -90.0);
        vp.zoom_to_world(world, 2.0);
        assert_eq!(vp.scale(), 2.0);
        let on_screen = vp.world_to_screen(world);
        assert!((on_screen.x - 400.0).abs() < 1e-9);
        assert!((on_screen.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_to_world_near_the_edge_is_clamped() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_to_world(Point::new(390.0, 290.0), 2.0);
        assert_within_bounds(&vp);
    }

    #[test]
    fn screen_world_roundtrip() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(520.0, 220.0), 3.0);
        let screen = Point::new(333.0, 111.0);
        let back = vp.world_to_screen(vp.screen_to_world(screen));
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }

    #[test]
    fn set_config_reclamps_into_new_limits() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 5.0);
        let tighter = ViewportOptions {
            max_scale: Some(3.0),
            ..ViewportOptions::default()
        }
        .resolve();
        vp.set_config(tighter);
        assert_eq!(vp.scale(), 3.0);
        assert_within_bounds(&vp);
    }

    #[test]
    fn inverted_scale_range_collapses_clamping() {
        let config = ViewportOptions {
            min_scale: Some(5.0),
            max_scale: Some(2.0),
            initial_scale: Some(3.0),
            ..ViewportOptions::default()
        }
        .resolve();
        let mut vp = measured(config);
        // The inverted range makes clamping a pass-through.
        vp.set_transform(7.0, Vec2::ZERO);
        assert_eq!(vp.scale(), 7.0);
    }

    #[test]
    fn debug_info_reflects_current_state() {
        let mut vp = measured(ViewportConfig::default());
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        let info = vp.debug_info();
        assert_eq!(info.scale, 2.0);
        assert_eq!(info.container, Size::new(800.0, 600.0));
        assert_eq!(info.pan_bounds, vp.pan_bounds());
    }
}
