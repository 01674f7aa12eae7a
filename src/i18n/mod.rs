// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the demo.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, embedded translation files and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded from `assets/i18n/`
//! - Locale-specific decimal separator for slider labels
//! - Fallback to default locale when translations are missing

pub mod fluent;
