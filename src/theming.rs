// SPDX-License-Identifier: MPL-2.0
//! Theme selection and style-token publication.
//!
//! A theme is a named bundle of six opaque style tokens (see
//! [`crate::clinic::Theme`]). The manager owns the current selection and
//! republishes the complete token record to every subscriber whenever it
//! changes. Publication is synchronous and total: the committed [`Theme`]
//! value is swapped as one unit, so no consumer can observe a mixture of
//! two themes' tokens within a single change.

use crate::clinic::{Clinic, Theme};
use crate::error::{Error, Result};
use crate::observe::{Listeners, SubscriptionId};
use crate::prefs::{PreferenceStore, PREF_THEME};
use std::collections::HashMap;

/// Owns the current theme selection and the subscriber list.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    demo: Vec<String>,
    current_name: String,
    current: Theme,
    prefs: PreferenceStore,
    listeners: Listeners<Theme>,
}

impl ThemeManager {
    /// Builds the manager from a validated dataset.
    ///
    /// The initial selection is the persisted preference when it names a
    /// theme in the full mapping, otherwise the dataset's configured theme.
    /// Fails only when the seed theme is missing from the mapping, which
    /// [`Clinic::validate`] rules out at startup.
    pub fn new(clinic: &Clinic, prefs: PreferenceStore) -> Result<Self> {
        let current_name = startup_theme(clinic, &prefs);
        let current = clinic
            .theme(&current_name)
            .cloned()
            .ok_or_else(|| {
                Error::Config(format!(
                    "startup theme '{}' is not defined in the theme mapping",
                    current_name
                ))
            })?;

        Ok(Self {
            themes: clinic.themes.clone(),
            demo: clinic.color_themes_demo.clone(),
            current_name,
            current,
            prefs,
            listeners: Listeners::new(),
        })
    }

    /// The currently selected theme name.
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// The six-token record for the current selection.
    pub fn current_tokens(&self) -> &Theme {
        &self.current
    }

    /// Theme names exposed in the picker, order preserved as configured.
    ///
    /// This is the curated demo list, not the full mapping key set: the
    /// configuration may define themes that are valid but not
    /// user-selectable.
    pub fn available(&self) -> &[String] {
        &self.demo
    }

    /// Selects `name` as the current theme.
    ///
    /// Names absent from the full theme mapping are ignored without error
    /// and without a persistence write. A valid selection is committed as a
    /// whole token record, written through to the preference store, and
    /// then published to subscribers in one emit. Unlisted-but-defined
    /// names are accepted here even though the picker never offers them.
    pub fn set_theme(&mut self, name: &str) {
        let Some(theme) = self.themes.get(name) else {
            return;
        };
        self.current_name = name.to_string();
        self.current = theme.clone();
        self.prefs.save(PREF_THEME, name);
        self.listeners.emit(&self.current);
    }

    /// Registers a listener invoked with the full committed token record
    /// after every theme change.
    pub fn subscribe(&mut self, listener: impl Fn(&Theme) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }
}

fn startup_theme(clinic: &Clinic, prefs: &PreferenceStore) -> String {
    if let Some(saved) = prefs.load(PREF_THEME) {
        if clinic.themes.contains_key(&saved) {
            return saved;
        }
    }
    clinic.color_theme.clone()
}
