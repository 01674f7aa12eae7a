// SPDX-License-Identifier: MPL-2.0
pub mod value_tracking_slider;

pub use value_tracking_slider::{value_tracking_slider, SliderDelegate, ValueTrackingSlider};
