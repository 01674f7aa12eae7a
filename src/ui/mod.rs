// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`widgets`] - The value tracking slider and its popup
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod widgets;
