// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the clinic site.
//!
//! This module provides localization using the Fluent localization system.
//! Translation catalogs are embedded at compile time, one per supported
//! language code from the clinic dataset.
//!
//! # Features
//!
//! - Current-language seeding from the persisted preference or the
//!   configured default
//! - Runtime language switching with write-through persistence
//! - Synchronous change notification to registered subscribers
//! - Visible fallback to the raw key when a translation is missing

pub mod fluent;
