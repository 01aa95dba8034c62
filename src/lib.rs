// SPDX-License-Identifier: MPL-2.0
//! `clinic_core` is the configuration-driven content, localization, and
//! theming core of a white-label clinic website.
//!
//! One compiled-in dataset describes the clinic (branches, doctors,
//! treatments, themes, supported languages); two small state holders own the
//! runtime selections on top of it — the current language and the current
//! theme — and notify their subscribers synchronously on every change. Both
//! selections persist across sessions through a storage layer that degrades
//! to configured defaults when persistence is unavailable. The booking
//! module renders the outbound hand-offs (WhatsApp deep link, spreadsheet
//! intake POST) the site uses in place of server-side appointment storage.

pub mod booking;
pub mod clinic;
pub mod error;
pub mod i18n;
pub mod observe;
pub mod prefs;
pub mod theming;
