// SPDX-License-Identifier: MPL-2.0
//! Optional value conversion and description hooks.
//!
//! Both hooks are optional: the default implementations return `None`, which
//! selects the built-in behavior (identity conversion, [`DefaultFormat`]).
//! The slider keeps only a [`Weak`](std::rc::Weak) reference to its delegate.

use super::format::DefaultFormat;
use super::geometry::clamp_to_range;
use std::ops::RangeInclusive;

/// Hooks a slider consults while the thumb is dragged.
pub trait SliderDelegate {
    /// Replaces a raw dragged value before the slider records it.
    ///
    /// Return `None` to keep the raw value.
    fn convert_value(&self, value: f32) -> Option<f32> {
        let _ = value;
        None
    }

    /// Text shown in the popup for `value`.
    ///
    /// Return `None` to use the slider's default format.
    fn description_for_value(&self, value: f32) -> Option<String> {
        let _ = value;
        None
    }
}

/// A recorded value together with its popup label.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValue {
    pub value: f32,
    pub label: String,
}

/// Passes `raw` through the delegate's conversion, if any.
///
/// Converted values are clamped back into `range`; non-finite results are
/// ignored.
#[must_use]
pub fn convert(
    raw: f32,
    range: &RangeInclusive<f32>,
    delegate: Option<&dyn SliderDelegate>,
) -> f32 {
    let converted = delegate
        .and_then(|delegate| delegate.convert_value(raw))
        .filter(|value| value.is_finite())
        .unwrap_or(raw);
    clamp_to_range(converted, range)
}

/// Label for `value`: the delegate's description, or `format`.
#[must_use]
pub fn describe(
    value: f32,
    delegate: Option<&dyn SliderDelegate>,
    format: &DefaultFormat,
) -> String {
    delegate
        .and_then(|delegate| delegate.description_for_value(value))
        .unwrap_or_else(|| format.format(value))
}

/// Full pipeline for a dragged value: convert, then describe.
#[must_use]
pub fn resolve(
    raw: f32,
    range: &RangeInclusive<f32>,
    delegate: Option<&dyn SliderDelegate>,
    format: &DefaultFormat,
) -> ResolvedValue {
    let value = convert(raw, range, delegate);
    ResolvedValue {
        value,
        label: describe(value, delegate, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubling;

    impl SliderDelegate for Doubling {
        fn convert_value(&self, value: f32) -> Option<f32> {
            Some(value * 2.0)
        }
    }

    struct Percent;

    impl SliderDelegate for Percent {
        fn description_for_value(&self, value: f32) -> Option<String> {
            Some(format!("{value:.0}%"))
        }
    }

    struct Silent;

    impl SliderDelegate for Silent {}

    struct Broken;

    impl SliderDelegate for Broken {
        fn convert_value(&self, _value: f32) -> Option<f32> {
            Some(f32::NAN)
        }
    }

    const RANGE: RangeInclusive<f32> = 0.0..=100.0;

    #[test]
    fn no_delegate_uses_default_format() {
        let format = DefaultFormat::default();
        for value in [0.0, 0.5, 12.25, 50.0, 99.99, 100.0] {
            let resolved = resolve(value, &RANGE, None, &format);
            assert_eq!(resolved.value, value);
            assert_eq!(resolved.label, format.format(value));
        }
    }

    #[test]
    fn conversion_feeds_value_and_label() {
        let resolved = resolve(25.0, &RANGE, Some(&Doubling), &DefaultFormat::default());
        assert_eq!(resolved.value, 50.0);
        assert_eq!(resolved.label, "50");
    }

    #[test]
    fn converted_value_is_clamped() {
        let resolved = resolve(80.0, &RANGE, Some(&Doubling), &DefaultFormat::default());
        assert_eq!(resolved.value, 100.0);
    }

    #[test]
    fn description_overrides_format() {
        let resolved = resolve(42.4, &RANGE, Some(&Percent), &DefaultFormat::default());
        assert_eq!(resolved.value, 42.4);
        assert_eq!(resolved.label, "42%");
    }

    #[test]
    fn delegate_without_hooks_behaves_like_none() {
        let format = DefaultFormat::default();
        assert_eq!(
            resolve(33.5, &RANGE, Some(&Silent), &format),
            resolve(33.5, &RANGE, None, &format)
        );
    }

    #[test]
    fn non_finite_conversion_is_ignored() {
        assert_eq!(convert(10.0, &RANGE, Some(&Broken)), 10.0);
    }
}
