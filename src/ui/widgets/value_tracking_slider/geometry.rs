// SPDX-License-Identifier: MPL-2.0
//! Track and thumb geometry.
//!
//! The thumb center travels between half a thumb width from either edge of
//! the widget bounds, so the thumb never leaves the widget.

use iced::{Point, Rectangle};
use std::ops::RangeInclusive;

/// Returns a range whose bounds are finite and ordered.
#[must_use]
pub fn normalize_range(range: RangeInclusive<f32>) -> RangeInclusive<f32> {
    let (start, end) = range.into_inner();
    let start = if start.is_finite() { start } else { 0.0 };
    let end = if end.is_finite() { end } else { start };
    if start <= end {
        start..=end
    } else {
        end..=start
    }
}

/// Clamps `value` into `range`; NaN maps to the range start.
#[must_use]
pub fn clamp_to_range(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

/// Position of `value` inside `range` in `[0, 1]`. A degenerate range yields 0.
#[must_use]
pub fn fraction(value: f32, range: &RangeInclusive<f32>) -> f32 {
    let (min, max) = (*range.start(), *range.end());
    if max <= min || value.is_nan() {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Geometry of a slider laid out inside `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub bounds: Rectangle,
    pub thumb_size: f32,
}

impl SliderGeometry {
    /// The thumb is shrunk to fit when the bounds are narrower than it.
    #[must_use]
    pub fn new(bounds: Rectangle, thumb_size: f32) -> Self {
        Self {
            bounds,
            thumb_size: thumb_size.max(0.0).min(bounds.width.max(0.0)),
        }
    }

    /// Horizontal span `(start, end)` travelled by the thumb center.
    #[must_use]
    pub fn track(&self) -> (f32, f32) {
        let half = self.thumb_size / 2.0;
        let start = self.bounds.x + half;
        let end = (self.bounds.x + self.bounds.width - half).max(start);
        (start, end)
    }

    /// Rail rectangle of the given thickness, vertically centered.
    #[must_use]
    pub fn rail(&self, thickness: f32) -> Rectangle {
        let (start, end) = self.track();
        Rectangle {
            x: start,
            y: self.center_y() - thickness / 2.0,
            width: end - start,
            height: thickness,
        }
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.bounds.y + self.bounds.height / 2.0
    }

    #[must_use]
    pub fn thumb_center_x(&self, value: f32, range: &RangeInclusive<f32>) -> f32 {
        let (start, end) = self.track();
        start + fraction(value, range) * (end - start)
    }

    /// Rectangle occupied by the thumb at `value`.
    #[must_use]
    pub fn thumb_rect(&self, value: f32, range: &RangeInclusive<f32>) -> Rectangle {
        let half = self.thumb_size / 2.0;
        Rectangle {
            x: self.thumb_center_x(value, range) - half,
            y: self.center_y() - half,
            width: self.thumb_size,
            height: self.thumb_size,
        }
    }

    /// Value under horizontal position `x`, clamped into `range`.
    #[must_use]
    pub fn value_at(&self, x: f32, range: &RangeInclusive<f32>) -> f32 {
        let (start, end) = self.track();
        let (min, max) = (*range.start(), *range.end());
        if end <= start || x <= start {
            return min;
        }
        if x >= end {
            return max;
        }
        let t = (x - start) / (end - start);
        clamp_to_range(min + t * (max - min), range)
    }

    #[must_use]
    pub fn thumb_contains(&self, point: Point, value: f32, range: &RangeInclusive<f32>) -> bool {
        self.thumb_rect(value, range).contains(point)
    }
}
