// SPDX-License-Identifier: MPL-2.0
use crate::clinic::Clinic;
use crate::observe::{Listeners, SubscriptionId};
use crate::prefs::{PreferenceStore, PREF_LANGUAGE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalog;

/// Resolves display strings for the currently selected language.
///
/// Exactly one language is selected at a time. The selection starts from the
/// persisted preference when it names a supported code, otherwise from the
/// dataset default, and changes only through [`Translator::set_language`].
pub struct Translator {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    available: Vec<String>,
    current: String,
    prefs: PreferenceStore,
    listeners: Listeners<String>,
}

impl Translator {
    pub fn new(clinic: &Clinic, prefs: PreferenceStore) -> Self {
        let mut bundles = HashMap::new();

        // Build bundles in the configured order; `available` keeps that
        // order for the language picker.
        for code in &clinic.languages_supported {
            let Ok(locale) = code.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Catalog::get(&format!("{code}.ftl")) {
                let res = FluentResource::try_new(
                    String::from_utf8_lossy(content.data.as_ref()).to_string(),
                )
                .expect("embedded catalog must parse");
                let mut bundle = FluentBundle::new(vec![locale]);
                bundle.add_resource(res).expect("embedded catalog must load");
                bundles.insert(code.clone(), bundle);
            }
        }

        let current = startup_language(clinic, &prefs);

        Self {
            bundles,
            available: clinic.languages_supported.clone(),
            current,
            prefs,
            listeners: Listeners::new(),
        }
    }

    /// The currently selected language code.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Supported language codes, order preserved as configured.
    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Returns the display string registered for `key` under the current
    /// language.
    ///
    /// Dotted keys (`clinic.name`) address a Fluent message attribute;
    /// undotted keys address the message value. A key with no registered
    /// translation resolves to the key string itself, so missing entries
    /// stay visible to content maintainers instead of rendering blank.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current) {
            let (id, attribute) = match key.split_once('.') {
                Some((id, attribute)) => (id, Some(attribute)),
                None => (key, None),
            };
            if let Some(msg) = bundle.get_message(id) {
                let pattern = match attribute {
                    Some(name) => msg.get_attribute(name).map(|attr| attr.value()),
                    None => msg.value(),
                };
                if let Some(pattern) = pattern {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        key.to_string()
    }

    /// Selects `code` as the current language.
    ///
    /// Unsupported codes are ignored without error; the pickers that call
    /// this are populated from [`Translator::available`], so the guard is
    /// defensive. A valid selection is committed, written through to the
    /// preference store, and then announced to subscribers.
    pub fn set_language(&mut self, code: &str) {
        if !self.available.iter().any(|supported| supported == code) {
            return;
        }
        self.current = code.to_string();
        self.prefs.save(PREF_LANGUAGE, code);
        self.listeners.emit(&self.current);
    }

    /// Registers a listener invoked with the new language code after every
    /// committed selection change.
    pub fn subscribe(&mut self, listener: impl Fn(&String) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }
}

fn startup_language(clinic: &Clinic, prefs: &PreferenceStore) -> String {
    if let Some(saved) = prefs.load(PREF_LANGUAGE) {
        if clinic.languages_supported.contains(&saved) {
            return saved;
        }
    }
    clinic.default_language.clone()
}
