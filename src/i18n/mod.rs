// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! This module holds the per-language string tables and the translator that
//! resolves message keys against them. It handles loading the embedded
//! translation tables, key lookup with fallback, placeholder substitution,
//! and applying translations to a document tree.
//!
//! # Features
//!
//! - Embedded per-language translation tables (`assets/i18n/*.toml`)
//! - Key lookup with fallback to the default-language table
//! - Literal `{name}` placeholder substitution
//! - Runtime language switching with persisted selection
//! - Change notifications for content the apply pass does not reach

pub mod catalog;
pub mod translator;
