// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the slider widget and the demo window.
//!
//! # Categories
//!
//! - **Slider**: Range, initial value and label precision
//! - **Popup**: Bubble metrics and fade-in timing

use crate::ui::design_tokens::{motion, radius, sizing, spacing, typography};

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Default lower bound of the slider range.
pub const DEFAULT_MIN: f32 = 0.0;

/// Default upper bound of the slider range.
pub const DEFAULT_MAX: f32 = 100.0;

/// Default initial slider value.
pub const DEFAULT_VALUE: f32 = 50.0;

/// Default number of fraction digits shown in the popup.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted precision; more digits than this only show float noise.
pub const MAX_PRECISION: usize = 6;

// ==========================================================================
// Popup Defaults
// ==========================================================================

/// Popup label font size in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = typography::POPUP_VALUE;

/// Smallest accepted popup font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest accepted popup font size.
pub const MAX_FONT_SIZE: f32 = 64.0;

/// Horizontal space between the label and the bubble edge.
pub const DEFAULT_PADDING_X: f32 = spacing::SM;

/// Vertical space between the label and the bubble edge.
pub const DEFAULT_PADDING_Y: f32 = spacing::XXS;

/// Bubble corner radius.
pub const DEFAULT_CORNER_RADIUS: f32 = radius::MD;

/// Width of the tail where it joins the bubble.
pub const DEFAULT_TAIL_WIDTH: f32 = sizing::POPUP_TAIL_WIDTH;

/// Height of the tail from the bubble to its tip.
pub const DEFAULT_TAIL_HEIGHT: f32 = sizing::POPUP_TAIL_HEIGHT;

/// Distance between the tail tip and the top of the thumb.
pub const DEFAULT_GAP: f32 = spacing::XXS;

/// Popup fade-in duration in milliseconds (0 disables the fade).
pub const DEFAULT_FADE_IN_MS: u64 = motion::POPUP_FADE_IN.as_millis() as u64;

/// Longest accepted fade-in duration in milliseconds.
pub const MAX_FADE_IN_MS: u64 = 2_000;
