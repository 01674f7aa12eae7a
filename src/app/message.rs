// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

/// Sliders hosted by the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    /// No delegate: default number format.
    Plain,
    /// Delegate doubles every dragged value.
    Doubled,
    /// Delegate renders the value as a percentage.
    Percent,
}

impl SliderId {
    pub const ALL: [SliderId; 3] = [SliderId::Plain, SliderId::Doubled, SliderId::Percent];

    /// i18n key of the slider's caption.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SliderId::Plain => "plain-slider-label",
            SliderId::Doubled => "doubling-slider-label",
            SliderId::Percent => "percent-slider-label",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A drag started on a slider.
    SliderPressed(SliderId),
    /// A slider recorded a new value while being dragged.
    SliderChanged(SliderId, f32),
    /// A drag ended or was cancelled.
    SliderReleased(SliderId),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VALUE_TRACKING_SLIDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
