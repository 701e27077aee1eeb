// SPDX-License-Identifier: MPL-2.0
//! `controlman_i18n` is the client-side localization layer of the ControlMan
//! service-management dashboard.
//!
//! It provides per-language string tables, message lookup with fallback and
//! placeholder interpolation, and an apply pass that rewrites marked
//! elements of a document tree. The owning application constructs one
//! [`i18n::translator::Translator`] at startup, applies it to the current
//! document, and switches languages through it; interested modules subscribe
//! to change notifications to refresh content the apply pass does not reach.

#![doc(html_root_url = "https://docs.rs/controlman_i18n/0.1.0")]

pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
