// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting three value tracking sliders.
//!
//! The `App` struct owns the slider delegates (the widgets only hold weak
//! references to them), the localization bundle and the configured popup
//! appearance, and records the values the sliders publish.

pub mod delegates;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message, SliderId};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::value_tracking_slider::{
    clamp_to_range, describe, DefaultFormat, PopupMetrics, SliderDelegate,
};
use delegates::{Doubling, Percentage};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 460;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Last recorded state of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub value: f32,
    /// Value at the end of the most recent drag.
    pub released_at: Option<f32>,
    pub dragging: bool,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    range: RangeInclusive<f32>,
    format: DefaultFormat,
    metrics: PopupMetrics,
    plain: Reading,
    doubled: Reading,
    percent: Reading,
    doubling: Rc<dyn SliderDelegate>,
    percentage: Rc<dyn SliderDelegate>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("range", &self.range)
            .field("plain", &self.plain)
            .field("doubled", &self.doubled)
            .field("percent", &self.percent)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), &Config::default())
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads settings and translations, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "settings.toml ignored");
        }
        let i18n = I18n::new(flags.lang, &config);

        (Self::with_config(i18n, &config), Task::none())
    }

    /// Builds the state from already loaded settings.
    #[must_use]
    pub fn with_config(i18n: I18n, config: &Config) -> Self {
        let range = config.slider.range();
        let value = config.slider.initial_value();
        let format = config.slider.format(i18n.decimal_separator());
        let reading = Reading {
            value,
            ..Reading::default()
        };

        Self {
            theme_mode: config.general.theme_mode,
            percentage: Rc::new(Percentage::new(*range.start(), *range.end())),
            doubling: Rc::new(Doubling),
            range,
            format,
            metrics: config.popup.metrics(),
            plain: reading,
            doubled: reading,
            percent: reading,
            i18n,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderPressed(id) => {
                self.reading_mut(id).dragging = true;
            }
            Message::SliderChanged(id, value) => {
                let range = self.range.clone();
                let reading = self.reading_mut(id);
                reading.value = clamp_to_range(value, &range);
                reading.dragging = true;
            }
            Message::SliderReleased(id) => {
                let reading = self.reading_mut(id);
                reading.released_at = Some(reading.value);
                reading.dragging = false;
                tracing::info!(slider = ?id, value = reading.value, "slider released");
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn reading(&self, id: SliderId) -> &Reading {
        match id {
            SliderId::Plain => &self.plain,
            SliderId::Doubled => &self.doubled,
            SliderId::Percent => &self.percent,
        }
    }

    fn reading_mut(&mut self, id: SliderId) -> &mut Reading {
        match id {
            SliderId::Plain => &mut self.plain,
            SliderId::Doubled => &mut self.doubled,
            SliderId::Percent => &mut self.percent,
        }
    }

    /// Delegate attached to the given slider, if any.
    #[must_use]
    pub fn delegate(&self, id: SliderId) -> Option<&Rc<dyn SliderDelegate>> {
        match id {
            SliderId::Plain => None,
            SliderId::Doubled => Some(&self.doubling),
            SliderId::Percent => Some(&self.percentage),
        }
    }

    /// Label the popup would show for the slider's recorded value.
    #[must_use]
    pub fn describe(&self, id: SliderId) -> String {
        describe(
            self.reading(id).value,
            self.delegate(id).map(|delegate| &**delegate),
            &self.format,
        )
    }
}
