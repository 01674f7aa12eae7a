// SPDX-License-Identifier: MPL-2.0
//! Slider delegates used by the demo window.

use crate::ui::widgets::value_tracking_slider::{DefaultFormat, SliderDelegate};

/// Records twice the dragged value.
#[derive(Debug, Default)]
pub struct Doubling;

impl SliderDelegate for Doubling {
    fn convert_value(&self, value: f32) -> Option<f32> {
        Some(value * 2.0)
    }
}

/// Shows the value's position inside a range as a whole percentage.
#[derive(Debug)]
pub struct Percentage {
    min: f32,
    max: f32,
    format: DefaultFormat,
}

impl Percentage {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            format: DefaultFormat::default().with_precision(0),
        }
    }
}

impl SliderDelegate for Percentage {
    fn description_for_value(&self, value: f32) -> Option<String> {
        if self.max <= self.min {
            return None;
        }
        let percent = (value - self.min) / (self.max - self.min) * 100.0;
        Some(format!("{}%", self.format.format(percent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_converts_only() {
        assert_eq!(Doubling.convert_value(25.0), Some(50.0));
        assert_eq!(Doubling.description_for_value(25.0), None);
    }

    #[test]
    fn percentage_describes_position_in_range() {
        let delegate = Percentage::new(-50.0, 50.0);
        assert_eq!(delegate.description_for_value(0.0).as_deref(), Some("50%"));
        assert_eq!(delegate.description_for_value(50.0).as_deref(), Some("100%"));
        assert_eq!(delegate.convert_value(10.0), None);
    }

    #[test]
    fn percentage_of_empty_range_falls_back() {
        let delegate = Percentage::new(3.0, 3.0);
        assert_eq!(delegate.description_for_value(3.0), None);
    }
}
