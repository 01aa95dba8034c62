// SPDX-License-Identifier: MPL-2.0
//! Clinic schema and static dataset.
//!
//! The schema describes branches, doctors, treatments, themes, and supported
//! languages; one literal instance of it is compiled into the crate and
//! exposed through [`dataset`]. All of it is read-only for the life of the
//! process — the only mutable selection state (current language, current
//! theme) lives in the resolvers that consume this data.
//!
//! Lookups by identifier return `Option` rather than failing: every call
//! site has a UI fallback ("any available doctor", "general consultation"),
//! so an unknown id is an ordinary outcome, not a fault.

mod dataset;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// SEO metadata rendered into the document head by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seo {
    pub gsc_meta_tag: String,
    pub ga4_id: String,
}

/// One day-label with its ordered consultation slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    pub day: String,
    pub slots: Vec<String>,
}

/// A named bucket of offered procedures under one doctor.
///
/// Order is display-significant, and the same treatment may appear under
/// more than one doctor on purpose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// A practitioner record with schedule and treatment offerings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub qualifications: Vec<String>,
    pub reg_no: String,
    pub profile: String,
    pub timings: Vec<DaySchedule>,
    pub treatments: Vec<TreatmentCategory>,
}

impl Doctor {
    /// Flattens the treatment categories into `(category, item)` pairs,
    /// preserving the configured display order.
    pub fn all_treatments(&self) -> Vec<(&str, &str)> {
        self.treatments
            .iter()
            .flat_map(|category| {
                category
                    .items
                    .iter()
                    .map(move |item| (category.category.as_str(), item.as_str()))
            })
            .collect()
    }
}

/// One physical clinic location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phones: Vec<String>,
    pub map_url: String,
    pub timings: String,
    pub doctors: Vec<Doctor>,
}

impl Branch {
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }
}

/// A named bundle of six style tokens applied clinic-wide.
///
/// Values are opaque strings consumed verbatim by the presentation layer;
/// no color or font parsing happens anywhere in this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub danger: String,
    pub font: String,
}

impl Theme {
    /// The six style variables published to the rendering layer, named as
    /// the CSS custom properties the view markup consumes.
    pub fn style_variables(&self) -> [(&'static str, &str); 6] {
        [
            ("--color-primary", self.primary.as_str()),
            ("--color-secondary", self.secondary.as_str()),
            ("--color-background", self.background.as_str()),
            ("--color-text", self.text.as_str()),
            ("--color-danger", self.danger.as_str()),
            ("--font-family", self.font.as_str()),
        ]
    }
}

/// Root configuration value for one clinic deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clinic {
    pub seo: Seo,
    pub languages_supported: Vec<String>,
    pub default_language: String,
    pub color_theme: String,
    pub color_themes_demo: Vec<String>,
    pub themes: HashMap<String, Theme>,
    pub branches: Vec<Branch>,
}

impl Clinic {
    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.id == id)
    }

    /// Looks a doctor up across every branch.
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.branches.iter().find_map(|branch| branch.doctor(id))
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Startup assertion over the dataset invariants the type system cannot
    /// express. Call once before handing the dataset to the resolvers.
    pub fn validate(&self) -> Result<()> {
        if !self.languages_supported.contains(&self.default_language) {
            return Err(Error::Config(format!(
                "default language '{}' is not in the supported set",
                self.default_language
            )));
        }

        if !self.themes.contains_key(&self.color_theme) {
            return Err(Error::Config(format!(
                "active theme '{}' is not defined in the theme mapping",
                self.color_theme
            )));
        }

        for name in &self.color_themes_demo {
            if !self.themes.contains_key(name) {
                return Err(Error::Config(format!(
                    "demo theme '{}' is not defined in the theme mapping",
                    name
                )));
            }
        }

        for (name, theme) in &self.themes {
            for (variable, value) in theme.style_variables() {
                if value.is_empty() {
                    return Err(Error::Config(format!(
                        "theme '{}' has an empty token for {}",
                        name, variable
                    )));
                }
            }
        }

        let mut branch_ids = HashSet::new();
        for branch in &self.branches {
            if !branch_ids.insert(branch.id.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate branch id '{}'",
                    branch.id
                )));
            }

            if branch.phones.is_empty() {
                return Err(Error::Config(format!(
                    "branch '{}' has no phone numbers",
                    branch.id
                )));
            }

            let mut doctor_ids = HashSet::new();
            for doctor in &branch.doctors {
                if !doctor_ids.insert(doctor.id.as_str()) {
                    return Err(Error::Config(format!(
                        "duplicate doctor id '{}' in branch '{}'",
                        doctor.id, branch.id
                    )));
                }
            }
        }

        Ok(())
    }
}

static DATASET: OnceLock<Clinic> = OnceLock::new();

/// Returns the compiled-in clinic dataset, built on first access.
pub fn dataset() -> &'static Clinic {
    DATASET.get_or_init(dataset::advaith)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_passes_validation() {
        dataset().validate().expect("shipped dataset must be valid");
    }

    #[test]
    fn branch_lookup_by_known_id() {
        let clinic = dataset();
        let branch = clinic.branch("pragathi-nagar").expect("branch exists");
        assert!(branch.name.contains("Pragathi Nagar"));
        assert!(!branch.phones.is_empty());
    }

    #[test]
    fn branch_lookup_by_unknown_id_returns_none() {
        assert!(dataset().branch("no-such-branch").is_none());
    }

    #[test]
    fn doctor_lookup_searches_all_branches() {
        let clinic = dataset();
        let doctor = clinic.doctor("dr-jeevitha").expect("doctor exists");
        assert_eq!(doctor.name, "Dr. Jeevitha");
        assert!(clinic.doctor("dr-nobody").is_none());
    }

    #[test]
    fn all_treatments_preserves_category_order() {
        let clinic = dataset();
        let doctor = clinic.doctor("dr-jeevitha").expect("doctor exists");
        let treatments = doctor.all_treatments();

        // General Medicine items come before Women's Health items.
        let first_womens = treatments
            .iter()
            .position(|(category, _)| *category == "Women's Health")
            .expect("category present");
        assert!(treatments[..first_womens]
            .iter()
            .all(|(category, _)| *category == "General Medicine"));
        assert_eq!(treatments[first_womens].1, "PCOD");
    }

    #[test]
    fn style_variables_cover_all_six_tokens() {
        let clinic = dataset();
        let theme = clinic.theme("trust-light").expect("theme exists");
        let variables = theme.style_variables();
        assert_eq!(variables.len(), 6);
        assert_eq!(variables[0], ("--color-primary", "#007BFF"));
        assert_eq!(variables[5], ("--font-family", "Inter, sans-serif"));
    }

    #[test]
    fn validate_rejects_unsupported_default_language() {
        let mut clinic = dataset().clone();
        clinic.default_language = "fr".to_string();
        let err = clinic.validate().unwrap_err();
        assert!(format!("{}", err).contains("default language"));
    }

    #[test]
    fn validate_rejects_unknown_active_theme() {
        let mut clinic = dataset().clone();
        clinic.color_theme = "missing-theme".to_string();
        assert!(clinic.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_demo_theme() {
        let mut clinic = dataset().clone();
        clinic.color_themes_demo.push("phantom".to_string());
        assert!(clinic.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_theme_token() {
        let mut clinic = dataset().clone();
        clinic
            .themes
            .get_mut("trust-light")
            .expect("theme exists")
            .font
            .clear();
        let err = clinic.validate().unwrap_err();
        assert!(format!("{}", err).contains("--font-family"));
    }

    #[test]
    fn validate_rejects_duplicate_branch_ids() {
        let mut clinic = dataset().clone();
        let duplicate = clinic.branches[0].clone();
        clinic.branches.push(duplicate);
        assert!(clinic.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_doctor_ids_within_branch() {
        let mut clinic = dataset().clone();
        let duplicate = clinic.branches[0].doctors[0].clone();
        clinic.branches[0].doctors.push(duplicate);
        assert!(clinic.validate().is_err());
    }

    #[test]
    fn validate_rejects_branch_without_phones() {
        let mut clinic = dataset().clone();
        clinic.branches[0].phones.clear();
        assert!(clinic.validate().is_err());
    }
}
