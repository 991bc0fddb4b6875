// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Default minimum scale factor.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;
/// Default maximum scale factor.
pub const DEFAULT_MAX_SCALE: f64 = 6.0;
/// Default wheel zoom sensitivity, in scale units per normalized delta pixel.
pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.002;
/// Default target scale for the click/double-tap zoom toggle.
pub const DEFAULT_CLICK_ZOOM_SCALE: f64 = 2.5;
/// Default movement (px) a mouse drag must travel before it commits.
pub const DEFAULT_DRAG_THRESHOLD_MOUSE: f64 = 5.0;
/// Default movement (px) a touch drag must travel before it commits.
pub const DEFAULT_DRAG_THRESHOLD_TOUCH: f64 = 10.0;
/// Default horizontal displacement (px) required to resolve a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
/// Default extra pan allowance (px) past the strict edge-to-edge limit.
pub const DEFAULT_BOUNDS_BUFFER: f64 = 80.0;

/// Partial viewport options, merged over the documented defaults.
///
/// Every field is optional; unset fields resolve to the `DEFAULT_*` constants
/// in this module. Resolution is a pure merge: out-of-range values (including
/// `min_scale > max_scale`) are accepted as configured and degrade downstream
/// clamping rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportOptions {
    /// Lower scale limit. Defaults to [`DEFAULT_MIN_SCALE`].
    pub min_scale: Option<f64>,
    /// Upper scale limit. Defaults to [`DEFAULT_MAX_SCALE`].
    pub max_scale: Option<f64>,
    /// Scale at construction. Defaults to the resolved `min_scale`.
    pub initial_scale: Option<f64>,
    /// Position at construction. Defaults to the centered rest position.
    pub initial_position: Option<Vec2>,
    /// Wheel zoom sensitivity. Defaults to [`DEFAULT_ZOOM_SENSITIVITY`].
    pub zoom_sensitivity: Option<f64>,
    /// Click/double-tap zoom target. Defaults to [`DEFAULT_CLICK_ZOOM_SCALE`].
    pub click_zoom_scale: Option<f64>,
    /// Mouse drag commit threshold. Defaults to [`DEFAULT_DRAG_THRESHOLD_MOUSE`].
    pub drag_threshold_mouse: Option<f64>,
    /// Touch drag commit threshold. Defaults to [`DEFAULT_DRAG_THRESHOLD_TOUCH`].
    pub drag_threshold_touch: Option<f64>,
    /// Swipe resolution threshold. Defaults to [`DEFAULT_SWIPE_THRESHOLD`].
    pub swipe_threshold: Option<f64>,
    /// Pan allowance past the strict limit. Defaults to [`DEFAULT_BOUNDS_BUFFER`].
    pub bounds_buffer: Option<f64>,
    /// Whether the engine reports a cursor for the container. Defaults to `true`.
    pub manage_cursor: Option<bool>,
    /// Whether horizontal swipes at rest resolve to navigation. Defaults to `true`.
    pub enable_swipe: Option<bool>,
}

impl ViewportOptions {
    /// Resolves these options into a full configuration snapshot.
    #[must_use]
    pub fn resolve(&self) -> ViewportConfig {
        let min_scale = self.min_scale.unwrap_or(DEFAULT_MIN_SCALE);
        ViewportConfig {
            min_scale,
            max_scale: self.max_scale.unwrap_or(DEFAULT_MAX_SCALE),
            initial_scale: self.initial_scale.unwrap_or(min_scale),
            initial_position: self.initial_position.unwrap_or(Vec2::ZERO),
            zoom_sensitivity: self.zoom_sensitivity.unwrap_or(DEFAULT_ZOOM_SENSITIVITY),
            click_zoom_scale: self.click_zoom_scale.unwrap_or(DEFAULT_CLICK_ZOOM_SCALE),
            drag_threshold_mouse: self
                .drag_threshold_mouse
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_MOUSE),
            drag_threshold_touch: self
                .drag_threshold_touch
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_TOUCH),
            swipe_threshold: self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD),
            bounds_buffer: self.bounds_buffer.unwrap_or(DEFAULT_BOUNDS_BUFFER),
            manage_cursor: self.manage_cursor.unwrap_or(true),
            enable_swipe: self.enable_swipe.unwrap_or(true),
        }
    }
}

/// Immutable, fully-populated viewport configuration.
///
/// Produced by [`ViewportOptions::resolve`] and replaced wholesale on any
/// option change, never mutated in place. `Copy + PartialEq` so consumers can
/// detect change with a plain comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Lower scale limit.
    pub min_scale: f64,
    /// Upper scale limit.
    pub max_scale: f64,
    /// Scale at construction.
    pub initial_scale: f64,
    /// Position at construction, from the centered rest position.
    pub initial_position: Vec2,
    /// Wheel zoom sensitivity, scale units per normalized delta pixel.
    pub zoom_sensitivity: f64,
    /// Target scale for the click/double-tap zoom toggle.
    pub click_zoom_scale: f64,
    /// Movement (px) a mouse drag must travel before it commits.
    pub drag_threshold_mouse: f64,
    /// Movement (px) a touch drag must travel before it commits.
    pub drag_threshold_touch: f64,
    /// Horizontal displacement (px) required to resolve a swipe.
    pub swipe_threshold: f64,
    /// Extra pan allowance (px) past the strict edge-to-edge limit.
    pub bounds_buffer: f64,
    /// Whether the engine reports a cursor for the container.
    pub manage_cursor: bool,
    /// Whether horizontal swipes at rest resolve to navigation.
    pub enable_swipe: bool,
}

impl ViewportConfig {
    /// Clamps a scale into the configured range.
    ///
    /// An inverted range (`min_scale > max_scale`) is accepted as configured;
    /// clamping is then a pass-through rather than a repair.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if self.min_scale <= self.max_scale {
            scale.clamp(self.min_scale, self.max_scale)
        } else {
            scale
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let config = ViewportOptions::default().resolve();
        assert_eq!(config.min_scale, DEFAULT_MIN_SCALE);
        assert_eq!(config.max_scale, DEFAULT_MAX_SCALE);
        assert_eq!(config.initial_scale, DEFAULT_MIN_SCALE);
        assert_eq!(config.initial_position, Vec2::ZERO);
        assert_eq!(config.zoom_sensitivity, DEFAULT_ZOOM_SENSITIVITY);
        assert_eq!(config.click_zoom_scale, DEFAULT_CLICK_ZOOM_SCALE);
        assert_eq!(config.drag_threshold_mouse, DEFAULT_DRAG_THRESHOLD_MOUSE);
        assert_eq!(config.drag_threshold_touch, DEFAULT_DRAG_THRESHOLD_TOUCH);
        assert_eq!(config.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(config.bounds_buffer, DEFAULT_BOUNDS_BUFFER);
        assert!(config.manage_cursor);
        assert!(config.enable_swipe);
    }

    #[test]
    fn set_fields_override_defaults() {
        let config = ViewportOptions {
            min_scale: Some(0.5),
            max_scale: Some(4.0),
            bounds_buffer: Some(0.0),
            enable_swipe: Some(false),
            ..ViewportOptions::default()
        }
        .resolve();
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.bounds_buffer, 0.0);
        assert!(!config.enable_swipe);
    }

    #[test]
    fn initial_scale_defaults_to_resolved_min() {
        let config = ViewportOptions {
            min_scale: Some(2.0),
            ..ViewportOptions::default()
        }
        .resolve();
        assert_eq!(config.initial_scale, 2.0);
    }

    #[test]
    fn resolve_is_a_pure_merge() {
        let options = ViewportOptions {
            max_scale: Some(3.0),
            ..ViewportOptions::default()
        };
        assert_eq!(options.resolve(), options.resolve());
    }

    #[test]
    fn inverted_scale_range_is_accepted() {
        let config = ViewportOptions {
            min_scale: Some(5.0),
            max_scale: Some(2.0),
            ..ViewportOptions::default()
        }
        .resolve();
        assert_eq!(config.min_scale, 5.0);
        assert_eq!(config.max_scale, 2.0);
        // Clamping degrades to a pass-through on the inverted range.
        assert_eq!(config.clamp_scale(3.5), 3.5);
    }

    #[test]
    fn clamp_scale_applies_on_a_proper_range() {
        let config = ViewportConfig::default();
        assert_eq!(config.clamp_scale(0.2), 1.0);
        assert_eq!(config.clamp_scale(9.0), 6.0);
        assert_eq!(config.clamp_scale(2.5), 2.5);
    }
}
