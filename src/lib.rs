// SPDX-License-Identifier: MPL-2.0
//! `value_tracking_slider` is an Iced slider widget that floats its current
//! value in a bubble above the thumb while it is being dragged.
//!
//! The widget lives in [`ui::widgets::value_tracking_slider`]. The rest of the
//! crate is a small demo application: Fluent translations, user preferences
//! stored in `settings.toml`, theming and logging.

#![doc(html_root_url = "https://docs.rs/value_tracking_slider/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
