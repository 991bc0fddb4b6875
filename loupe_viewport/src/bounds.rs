// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Pannable range for a centered transform, symmetric around the rest position.
///
/// The position may travel up to `x_limit`/`y_limit` pixels away from the
/// centered rest position in either direction along each axis. Bounds are
/// rectangular; the axes are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanBounds {
    /// Maximum horizontal offset from the rest position, in container pixels.
    pub x_limit: f64,
    /// Maximum vertical offset from the rest position, in container pixels.
    pub y_limit: f64,
}

impl PanBounds {
    /// Clamps a position into these bounds, per axis.
    #[must_use]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(-self.x_limit, self.x_limit),
            pos.y.clamp(-self.y_limit, self.y_limit),
        )
    }

    /// Returns `true` if the position lies within these bounds.
    #[must_use]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x.abs() <= self.x_limit && pos.y.abs() <= self.y_limit
    }
}

/// Computes the pannable bounds for a scale and container/content box pair.
///
/// Per axis: while the scaled content fits inside the container the limit is
/// `buffer` alone, letting the user peek past the edge even when fully zoomed
/// out. Once the scaled content overflows the container, the limit grows to
/// half the overflow plus `buffer`, so a content edge can be dragged `buffer`
/// pixels past the container edge but no further.
#[must_use]
pub fn pan_bounds(scale: f64, container: Size, content: Size, buffer: f64) -> PanBounds {
    PanBounds {
        x_limit: axis_limit(scale, container.width, content.width, buffer),
        y_limit: axis_limit(scale, container.height, content.height, buffer),
    }
}

fn axis_limit(scale: f64, container: f64, content: f64, buffer: f64) -> f64 {
    let overflow = content * scale - container;
    let limit = if overflow <= 0.0 {
        buffer
    } else {
        overflow / 2.0 + buffer
    };
    // A negative buffer could push the limit below zero; an empty range would
    // make the per-axis clamp reverse its endpoints.
    limit.max(0.0)
}

/// Returns `true` if both components are finite.
///
/// Gesture handlers are required to drop non-finite candidates instead of
/// clamping them; `NaN.clamp(…)` would otherwise leak into visible state.
#[must_use]
pub fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fitting_container_pans_by_buffer_only() {
        let bounds = pan_bounds(1.0, Size::new(800.0, 600.0), Size::new(400.0, 300.0), 80.0);
        assert_eq!(bounds.x_limit, 80.0);
        assert_eq!(bounds.y_limit, 80.0);
    }

    #[test]
    fn content_exactly_container_sized_pans_by_buffer_only() {
        let bounds = pan_bounds(1.0, Size::new(800.0, 600.0), Size::new(800.0, 600.0), 80.0);
        assert_eq!(bounds.x_limit, 80.0);
        assert_eq!(bounds.y_limit, 80.0);
    }

    #[test]
    fn overflowing_content_pans_by_half_overflow_plus_buffer() {
        // 800x600 content at 2x inside an 800x600 container overflows by
        // 800x600; half of that plus the buffer on each axis.
        let bounds = pan_bounds(2.0, Size::new(800.0, 600.0), Size::new(800.0, 600.0), 80.0);
        assert_eq!(bounds.x_limit, 400.0 + 80.0);
        assert_eq!(bounds.y_limit, 300.0 + 80.0);
    }

    #[test]
    fn axes_are_independent() {
        // Wide content: overflows horizontally, fits vertically.
        let bounds = pan_bounds(1.0, Size::new(400.0, 400.0), Size::new(600.0, 200.0), 10.0);
        assert_eq!(bounds.x_limit, 100.0 + 10.0);
        assert_eq!(bounds.y_limit, 10.0);
    }

    #[test]
    fn clamp_is_per_axis() {
        let bounds = PanBounds {
            x_limit: 50.0,
            y_limit: 20.0,
        };
        let clamped = bounds.clamp(Vec2::new(75.0, -5.0));
        assert_eq!(clamped, Vec2::new(50.0, -5.0));
        let clamped = bounds.clamp(Vec2::new(-75.0, -35.0));
        assert_eq!(clamped, Vec2::new(-50.0, -20.0));
    }

    #[test]
    fn contains_matches_clamp() {
        let bounds = PanBounds {
            x_limit: 50.0,
            y_limit: 20.0,
        };
        let inside = Vec2::new(49.0, -20.0);
        assert!(bounds.contains(inside));
        assert_eq!(bounds.clamp(inside), inside);
        assert!(!bounds.contains(Vec2::new(51.0, 0.0)));
    }

    #[test]
    fn negative_buffer_never_produces_a_reversed_range() {
        let bounds = pan_bounds(1.0, Size::new(800.0, 600.0), Size::new(400.0, 300.0), -10.0);
        assert_eq!(bounds.x_limit, 0.0);
        assert_eq!(bounds.clamp(Vec2::new(30.0, -30.0)), Vec2::ZERO);
    }

    #[test]
    fn finite_check_rejects_nan_and_infinity() {
        assert!(is_finite(Vec2::new(1.0, -2.0)));
        assert!(!is_finite(Vec2::new(f64::NAN, 0.0)));
        assert!(!is_finite(Vec2::new(0.0, f64::INFINITY)));
        assert!(!is_finite(Vec2::new(f64::NEG_INFINITY, f64::NAN)));
    }
}
