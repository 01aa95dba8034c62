// SPDX-License-Identifier: MPL-2.0
//! The compiled-in Advaith Clinic dataset.

use super::{Branch, Clinic, DaySchedule, Doctor, Seo, Theme, TreatmentCategory};
use std::collections::HashMap;

pub(super) fn advaith() -> Clinic {
    Clinic {
        seo: Seo {
            gsc_meta_tag: "google-site-verification=XYZ...".to_string(),
            ga4_id: "G-XXXXXXXXXX".to_string(),
        },
        languages_supported: vec!["en".to_string(), "te".to_string(), "hi".to_string()],
        default_language: "en".to_string(),
        color_theme: "trust-light".to_string(),
        color_themes_demo: vec![
            "trust-light".to_string(),
            "healing-green".to_string(),
            "royal-care".to_string(),
        ],
        themes: HashMap::from([
            (
                "trust-light".to_string(),
                Theme {
                    primary: "#007BFF".to_string(),
                    secondary: "#F0F4F8".to_string(),
                    background: "#FFFFFF".to_string(),
                    text: "#1C1C1C".to_string(),
                    danger: "#DC3545".to_string(),
                    font: "Inter, sans-serif".to_string(),
                },
            ),
            (
                "healing-green".to_string(),
                Theme {
                    primary: "#43A047".to_string(),
                    secondary: "#E0F2F1".to_string(),
                    background: "#FFFFFF".to_string(),
                    text: "#2E7D32".to_string(),
                    danger: "#D32F2F".to_string(),
                    font: "Lato, sans-serif".to_string(),
                },
            ),
            (
                "royal-care".to_string(),
                Theme {
                    primary: "#1B1B3A".to_string(),
                    secondary: "#FFD700".to_string(),
                    background: "#FDFDFD".to_string(),
                    text: "#333333".to_string(),
                    danger: "#C0392B".to_string(),
                    font: "Playfair Display, serif".to_string(),
                },
            ),
        ]),
        branches: vec![Branch {
            id: "pragathi-nagar".to_string(),
            name: "Advaith Clinic – Pragathi Nagar".to_string(),
            address: "Plot No. 389, Pragathi Nagar, Hyderabad".to_string(),
            phones: vec!["+91 9705809090".to_string(), "+91 9640310581".to_string()],
            map_url: "https://maps.app.goo.gl/qZyn6nEBRKr5gxsZA".to_string(),
            timings: "9 AM – 9 PM".to_string(),
            doctors: vec![
                Doctor {
                    id: "dr-jeevitha".to_string(),
                    name: "Dr. Jeevitha".to_string(),
                    qualifications: vec!["MBBS".to_string(), "MD".to_string()],
                    reg_no: "92792".to_string(),
                    profile: "Specialist in General Medicine, Women's Health & Preventive Care"
                        .to_string(),
                    timings: vec![
                        DaySchedule {
                            day: "Monday to Saturday".to_string(),
                            slots: vec![
                                "9:00 AM – 1:00 PM".to_string(),
                                "5:00 PM – 8:00 PM".to_string(),
                            ],
                        },
                        DaySchedule {
                            day: "Sunday".to_string(),
                            slots: vec!["9:00 AM – 12:00 PM".to_string()],
                        },
                    ],
                    treatments: vec![
                        TreatmentCategory {
                            category: "General Medicine".to_string(),
                            items: vec![
                                "All Types Of Fever".to_string(),
                                "HyperTension".to_string(),
                                "Diabetes Mellitus".to_string(),
                                "Cardiac Disorder".to_string(),
                                "Stroke".to_string(),
                                "Thyroid Disorders".to_string(),
                                "Asthma: C.O.P.D".to_string(),
                                "URTI: LRTI".to_string(),
                                "Liver Disorders".to_string(),
                                "Pneumonia".to_string(),
                                "Renal Disorders".to_string(),
                            ],
                        },
                        TreatmentCategory {
                            category: "Women's Health".to_string(),
                            items: vec![
                                "PCOD".to_string(),
                                "Anaemia".to_string(),
                                "Menstrual Disorders".to_string(),
                                "Pregnancy Care etc.".to_string(),
                            ],
                        },
                    ],
                },
                Doctor {
                    id: "dr-raj".to_string(),
                    name: "Dr. P.M. Raj".to_string(),
                    qualifications: vec!["MBBS".to_string(), "MS".to_string()],
                    reg_no: "071322".to_string(),
                    profile: "Consultant Surgeon specializing in Laparoscopic & General Surgery"
                        .to_string(),
                    timings: vec![
                        DaySchedule {
                            day: "Monday to Saturday".to_string(),
                            slots: vec![
                                "10:00 AM – 2:00 PM".to_string(),
                                "6:00 PM – 9:00 PM".to_string(),
                            ],
                        },
                        DaySchedule {
                            day: "Sunday".to_string(),
                            slots: vec!["10:00 AM – 1:00 PM".to_string()],
                        },
                    ],
                    treatments: vec![TreatmentCategory {
                        category: "Surgical Treatments".to_string(),
                        items: vec![
                            "All Laparoscopic Procedures".to_string(),
                            "Hernia Hydrocele".to_string(),
                            "Fistula".to_string(),
                            "Family Planning Procedures".to_string(),
                            "Hemorrhoids Fissure".to_string(),
                            "Swellings".to_string(),
                            "Ulcer Dressings".to_string(),
                            "First Aid".to_string(),
                            "IV/IM injection".to_string(),
                            "Wound Dressing".to_string(),
                            "Nebulization".to_string(),
                            "X-Ray".to_string(),
                            "ECD".to_string(),
                            "Breast Disorders".to_string(),
                            "Suturing".to_string(),
                        ],
                    }],
                },
            ],
        }],
    }
}
