//! Export Data Preparer — applies privacy and display policy, producing a
//! render-ready copy of a ProfileRecord. Never mutates its input.

use serde::Deserialize;

use crate::extraction::rules::{anonymize_name, extract_city_from_address};
use crate::models::profile::{ExperienceEntry, ProfileRecord};
use crate::resources::contacts::ContactPerson;

/// Displayed tasks per experience entry are capped at this many when
/// `limit_tasks` is set.
pub const MAX_TASKS_SHOWN: usize = 5;

/// Per-export display toggles. Transient: they travel with the export
/// request and are never persisted back into the editable record.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExportOptions {
    #[serde(default)]
    pub limit_tasks: bool,
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            limit_tasks: false,
            show_summary: true,
        }
    }
}

/// A privacy-filtered, display-option-annotated derivative of a
/// ProfileRecord, used only for rendering and export.
#[derive(Debug, Clone)]
pub struct ExportRecord {
    pub record: ProfileRecord,
    pub options: ExportOptions,
    pub contact_person: Option<&'static ContactPerson>,
}

/// Builds an export copy of `record`.
///
/// Always applied, regardless of flags: email and phone are cleared, and the
/// street address is replaced by the city (derived from the address first if
/// the city is empty). With `anonymize`, the name is reduced to
/// "First L.".
pub fn prepare(
    record: &ProfileRecord,
    anonymize: bool,
    options: ExportOptions,
    contact_person: Option<&'static ContactPerson>,
) -> ExportRecord {
    let mut copy = record.clone();
    let personal = &mut copy.personal;

    personal.email.clear();
    personal.phone.clear();

    if personal.city.is_empty() && !personal.address.is_empty() {
        personal.city = extract_city_from_address(&personal.address);
    }
    personal.address = personal.city.clone();

    if anonymize {
        personal.name = anonymize_name(&personal.name);
    }

    ExportRecord {
        record: copy,
        options,
        contact_person,
    }
}

/// The tasks a renderer may display for one experience entry, honoring the
/// cap policy. Every renderer goes through this helper so the cap is applied
/// identically in HTML, PDF, and DOCX outputs.
pub fn visible_tasks(entry: &ExperienceEntry, limit_tasks: bool) -> &[String] {
    if limit_tasks && entry.tasks.len() > MAX_TASKS_SHOWN {
        &entry.tasks[..MAX_TASKS_SHOWN]
    } else {
        &entry.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Personal;
    use crate::resources::contacts::contact_by_id;

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            personal: Personal {
                name: "Max Mustermann".to_string(),
                email: "max@example.com".to_string(),
                phone: "+49 170 1234567".to_string(),
                address: "Musterstraße 123, 12345 Berlin, Deutschland".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_fields_always_cleared() {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        assert_eq!(export.record.personal.email, "");
        assert_eq!(export.record.personal.phone, "");
    }

    #[test]
    fn test_address_replaced_by_derived_city() {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        assert_eq!(export.record.personal.city, "Berlin");
        assert_eq!(export.record.personal.address, "Berlin");
    }

    #[test]
    fn test_existing_city_wins_over_address() {
        let mut record = sample_record();
        record.personal.city = "Köln".to_string();
        let export = prepare(&record, false, ExportOptions::default(), None);
        assert_eq!(export.record.personal.address, "Köln");
    }

    #[test]
    fn test_anonymize_flag() {
        let record = sample_record();
        let export = prepare(&record, true, ExportOptions::default(), None);
        assert_eq!(export.record.personal.name, "Max M.");

        let export = prepare(&record, false, ExportOptions::default(), None);
        assert_eq!(export.record.personal.name, "Max Mustermann");
    }

    #[test]
    fn test_input_record_is_never_mutated() {
        let record = sample_record();
        let before = record.clone();
        let _ = prepare(&record, true, ExportOptions::default(), None);
        assert_eq!(record, before);
    }

    #[test]
    fn test_contact_person_attached_to_copy() {
        let record = sample_record();
        let contact = contact_by_id("galdora", "galdora_1");
        let export = prepare(&record, false, ExportOptions::default(), contact);
        assert_eq!(export.contact_person.unwrap().name, "Alessandro Boehm");
    }

    #[test]
    fn test_visible_tasks_cap() {
        let entry = ExperienceEntry {
            tasks: (1..=7).map(|i| format!("Aufgabe {i}")).collect(),
            ..Default::default()
        };
        assert_eq!(visible_tasks(&entry, true).len(), 5);
        assert_eq!(visible_tasks(&entry, false).len(), 7);

        let short = ExperienceEntry {
            tasks: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(visible_tasks(&short, true).len(), 2);
    }

    #[test]
    fn test_export_options_defaults() {
        let options: ExportOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.limit_tasks);
        assert!(options.show_summary);
    }
}
