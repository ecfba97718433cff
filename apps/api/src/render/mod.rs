//! Template Renderer — maps an ExportRecord + company configuration +
//! template variant into a single self-contained HTML document.
//!
//! Section fragments are built in Rust and substituted into one of the two
//! fixed skeletons in `templates`. Empty sections are suppressed entirely,
//! heading included.

pub mod templates;

use std::fmt::Write as _;

use base64::Engine;
use tracing::warn;

use crate::errors::AppError;
use crate::export::prepare::{visible_tasks, ExportRecord};
use crate::export::TemplateVariant;
use crate::resources::companies::CompanyConfig;
use templates::{CLASSIC_TEMPLATE, MODERN_TEMPLATE};

/// Renders the profile into a self-contained HTML document. The only
/// external asset, the company logo, is inlined as a data URI; a missing
/// logo file degrades to no logo rather than an error.
pub fn render(
    export: &ExportRecord,
    company: &CompanyConfig,
    variant: TemplateVariant,
    asset_dir: &str,
) -> Result<String, AppError> {
    let record = &export.record;
    let name = escape_html(&record.personal.name);
    let logo_block = logo_block(company, asset_dir);

    let html = match variant {
        TemplateVariant::Modern => {
            let position_block = if record.personal.position.is_empty() {
                String::new()
            } else {
                format!(
                    "<div class=\"subtitle\">{}</div>",
                    escape_html(&record.personal.position)
                )
            };

            let sections = [
                experience_section(export, None),
                education_section(export, None),
                skills_section(export, None),
                certifications_section(export, None),
                languages_section(export, None),
            ]
            .concat();

            MODERN_TEMPLATE
                .replace("{name}", &name)
                .replace("{primary}", company.primary_color)
                .replace("{secondary}", company.secondary_color)
                .replace("{logo_block}", &logo_block)
                .replace("{position_block}", &position_block)
                .replace("{profile_band}", &profile_band(export))
                .replace("{sections}", &sections)
        }
        TemplateVariant::Classic => {
            let summary_block = if export.options.show_summary && !record.personal.summary.is_empty()
            {
                format!(
                    "<div class=\"summary\">{}</div>",
                    escape_html(&record.personal.summary)
                )
            } else {
                String::new()
            };

            // Classic numbers its non-empty sections sequentially.
            let mut counter = 0usize;
            let mut numbered = |builder: fn(&ExportRecord, Option<usize>) -> String,
                                export: &ExportRecord| {
                let next = counter + 1;
                let html = builder(export, Some(next));
                if !html.is_empty() {
                    counter = next;
                }
                html
            };

            let sections = [
                numbered(experience_section, export),
                numbered(education_section, export),
                numbered(skills_section, export),
                numbered(certifications_section, export),
                numbered(languages_section, export),
            ]
            .concat();

            CLASSIC_TEMPLATE
                .replace("{name}", &name)
                .replace("{primary}", company.primary_color)
                .replace("{secondary}", company.secondary_color)
                .replace("{logo_block}", &logo_block)
                .replace("{info_grid}", &info_grid(export))
                .replace("{summary_block}", &summary_block)
                .replace("{sections}", &sections)
        }
    };

    Ok(html)
}

/// Escapes text for safe embedding in HTML bodies and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn logo_block(company: &CompanyConfig, asset_dir: &str) -> String {
    let Some(path) = company.logo_path(asset_dir) else {
        return String::new();
    };
    match std::fs::read(&path) {
        Ok(bytes) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            format!(
                "<img src=\"data:image/png;base64,{encoded}\" alt=\"{} Logo\" class=\"company-logo\">",
                escape_html(company.name)
            )
        }
        Err(e) => {
            warn!("Logo asset {} not readable, omitting: {e}", path.display());
            String::new()
        }
    }
}

fn section_title(title: &str, number: Option<usize>) -> String {
    match number {
        Some(n) => format!("<h2 class=\"section-title\">{n}. {title}</h2>"),
        None => format!("<h2 class=\"section-title\">{title}</h2>"),
    }
}

fn date_range(start: &str, end: &str) -> String {
    if start.is_empty() && end.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"item-dates\">{} - {}</div>",
            escape_html(start),
            escape_html(end)
        )
    }
}

fn profile_band(export: &ExportRecord) -> String {
    let summary = &export.record.personal.summary;
    let show_summary = export.options.show_summary && !summary.is_empty();
    if !show_summary && export.contact_person.is_none() {
        return String::new();
    }

    let mut band = String::from("<div class=\"profile-band\">");
    if show_summary {
        let _ = write!(
            band,
            "<div class=\"summary\">{}</div>",
            escape_html(summary)
        );
    }
    if let Some(contact) = export.contact_person {
        let _ = write!(
            band,
            "<div class=\"contact-person\">Ihr Ansprechpartner: \
             <span class=\"contact-name\">{}</span> ({}) &middot; {} &middot; {}</div>",
            escape_html(contact.name),
            escape_html(contact.role),
            escape_html(contact.email),
            escape_html(contact.phone)
        );
    }
    band.push_str("</div>");
    band
}

fn info_grid(export: &ExportRecord) -> String {
    let personal = &export.record.personal;
    let cells = [
        ("Stadt", personal.city.as_str()),
        ("Geburtsjahr", personal.birth_year.as_str()),
        ("Position", personal.position.as_str()),
    ];
    let filled: String = cells
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| {
            format!(
                "<div class=\"info-cell\"><div class=\"info-label\">{label}</div>\
                 <div class=\"info-value\">{}</div></div>",
                escape_html(value)
            )
        })
        .collect();

    if filled.is_empty() {
        String::new()
    } else {
        format!("<div class=\"info-grid\">{filled}</div>")
    }
}

fn experience_section(export: &ExportRecord, number: Option<usize>) -> String {
    if export.record.experience.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">");
    html.push_str(&section_title("Berufserfahrung", number));
    for entry in &export.record.experience {
        let _ = write!(
            html,
            "<div class=\"experience-item\"><div class=\"item-header\"><div>\
             <div class=\"item-title\">{}</div><div class=\"item-company\">{}</div></div>{}</div>",
            escape_html(&entry.position),
            escape_html(&entry.company),
            date_range(&entry.start_date, &entry.end_date)
        );

        let tasks = visible_tasks(entry, export.options.limit_tasks);
        if !tasks.is_empty() {
            html.push_str("<ul class=\"task-list\">");
            for task in tasks {
                let _ = write!(html, "<li>{}</li>", escape_html(task));
            }
            html.push_str("</ul>");
        } else if !entry.description.is_empty() {
            // Legacy records carry a single description blob instead of tasks.
            let _ = write!(
                html,
                "<div class=\"item-description\">{}</div>",
                escape_html(&entry.description)
            );
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn education_section(export: &ExportRecord, number: Option<usize>) -> String {
    if export.record.education.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">");
    html.push_str(&section_title("Ausbildung &amp; Weiterbildung", number));
    for entry in &export.record.education {
        let _ = write!(
            html,
            "<div class=\"education-item\"><div class=\"item-header\"><div>\
             <div class=\"item-title\">{}</div><div class=\"item-company\">{}</div></div>{}</div>",
            escape_html(&entry.degree),
            escape_html(&entry.institution),
            date_range(&entry.start_date, &entry.end_date)
        );
        if !entry.description.is_empty() {
            let _ = write!(
                html,
                "<div class=\"item-description\">{}</div>",
                escape_html(&entry.description)
            );
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn skills_section(export: &ExportRecord, number: Option<usize>) -> String {
    if export.record.skills.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">");
    html.push_str(&section_title("Fähigkeiten &amp; Kompetenzen", number));
    html.push_str("<div class=\"skills-grid\">");
    for skill in &export.record.skills {
        let _ = write!(html, "<div class=\"skill-item\">{}</div>", escape_html(skill));
    }
    html.push_str("</div></div>");
    html
}

fn certifications_section(export: &ExportRecord, number: Option<usize>) -> String {
    if export.record.certifications.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">");
    html.push_str(&section_title("Zertifizierungen", number));
    for cert in &export.record.certifications {
        let _ = write!(
            html,
            "<div class=\"certification-item\"><div><div class=\"cert-name\">{}</div>\
             <div class=\"cert-issuer\">{}</div></div><div class=\"cert-date\">{}</div></div>",
            escape_html(&cert.name),
            escape_html(&cert.issuer),
            escape_html(&cert.date)
        );
    }
    html.push_str("</div>");
    html
}

fn languages_section(export: &ExportRecord, number: Option<usize>) -> String {
    if export.record.languages.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">");
    html.push_str(&section_title("Sprachen", number));
    for language in &export.record.languages {
        let _ = write!(
            html,
            "<div class=\"language-item\">{} &ndash; {}</div>",
            escape_html(&language.name),
            escape_html(&language.level)
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::prepare::{prepare, ExportOptions};
    use crate::models::profile::{
        Certification, EducationEntry, ExperienceEntry, Language, Personal, ProfileRecord,
    };
    use crate::resources::companies::company_config;
    use crate::resources::contacts::contact_by_id;

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            personal: Personal {
                name: "Max Mustermann".to_string(),
                position: "Softwareentwickler".to_string(),
                city: "Berlin".to_string(),
                birth_year: "1990".to_string(),
                summary: "Erfahrener Entwickler".to_string(),
                ..Default::default()
            },
            experience: vec![
                ExperienceEntry {
                    position: "Senior Developer".to_string(),
                    company: "ACME GmbH".to_string(),
                    start_date: "01/2020".to_string(),
                    end_date: "Heute".to_string(),
                    tasks: vec!["Backend".to_string(), "Code Reviews".to_string()],
                    ..Default::default()
                },
                ExperienceEntry {
                    position: "Developer".to_string(),
                    company: "Beispiel AG".to_string(),
                    start_date: "03/2016".to_string(),
                    end_date: "12/2019".to_string(),
                    tasks: vec!["Frontend".to_string()],
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry {
                degree: "B.Sc. Informatik".to_string(),
                institution: "TU Berlin".to_string(),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            certifications: vec![Certification {
                name: "AWS SAA".to_string(),
                issuer: "Amazon".to_string(),
                date: "05/2022".to_string(),
            }],
            languages: vec![Language {
                name: "Deutsch".to_string(),
                level: "Muttersprache".to_string(),
            }],
        }
    }

    fn render_sample(variant: TemplateVariant) -> String {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        render(&export, company_config("galdora"), variant, "no-assets").unwrap()
    }

    #[test]
    fn test_round_trip_experience_blocks_in_order() {
        let html = render_sample(TemplateVariant::Modern);
        assert_eq!(html.matches("class=\"experience-item\"").count(), 2);

        let first = html.find("Senior Developer").unwrap();
        let second = html.find("Beispiel AG").unwrap();
        assert!(first < second, "entries must keep stored order");
        assert!(html.contains("ACME GmbH"));
        assert!(html.contains("01/2020 - Heute"));
    }

    #[test]
    fn test_empty_sections_have_no_heading() {
        let mut record = sample_record();
        record.skills.clear();
        record.certifications.clear();
        record.languages.clear();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(!html.contains("Fähigkeiten"));
        assert!(!html.contains("Zertifizierungen"));
        assert!(!html.contains("Sprachen"));
        assert!(html.contains("Berufserfahrung"));
    }

    #[test]
    fn test_unknown_company_uses_default_colors() {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("acme"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(html.contains("#1e3a8a"));
        assert!(html.contains("#3b82f6"));
    }

    #[test]
    fn test_task_cap_in_html() {
        let mut record = sample_record();
        record.experience[0].tasks = (1..=7).map(|i| format!("Aufgabe {i}")).collect();
        let options = ExportOptions {
            limit_tasks: true,
            show_summary: true,
        };
        let export = prepare(&record, false, options, None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(html.contains("Aufgabe 5"));
        assert!(!html.contains("Aufgabe 6"));
    }

    #[test]
    fn test_legacy_description_renders_as_paragraph() {
        let mut record = sample_record();
        record.experience[0].tasks.clear();
        record.experience[0].description = "Allgemeine Beschreibung".to_string();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(html.contains("Allgemeine Beschreibung"));
        let item = &html[html.find("Senior Developer").unwrap()..html.find("Beispiel AG").unwrap()];
        assert!(!item.contains("<ul"), "legacy description must not be a list");
    }

    #[test]
    fn test_contact_person_rendered_only_if_present() {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(!html.contains("Ansprechpartner"));

        let contact = contact_by_id("galdora", "galdora_2");
        let export = prepare(&record, false, ExportOptions::default(), contact);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(html.contains("Kai Fischer"));
        assert!(html.contains("Teamleitung Recruiting"));
    }

    #[test]
    fn test_show_summary_toggle() {
        let record = sample_record();
        let options = ExportOptions {
            limit_tasks: false,
            show_summary: false,
        };
        let export = prepare(&record, false, options, None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(!html.contains("Erfahrener Entwickler"));
    }

    #[test]
    fn test_classic_numbers_nonempty_sections() {
        let mut record = sample_record();
        record.education.clear();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Classic,
            "no-assets",
        )
        .unwrap();
        assert!(html.contains("1. Berufserfahrung"));
        // Education is empty, so skills take its number.
        assert!(html.contains("2. Fähigkeiten"));
        assert!(!html.contains("Ausbildung"));
    }

    #[test]
    fn test_classic_info_grid() {
        let html = render_sample(TemplateVariant::Classic);
        assert!(html.contains("info-grid"));
        assert!(html.contains("Geburtsjahr"));
        assert!(html.contains("1990"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut record = sample_record();
        record.personal.name = "Max <script>alert(1)</script>".to_string();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let html = render(
            &export,
            company_config("galdora"),
            TemplateVariant::Modern,
            "no-assets",
        )
        .unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_html("\"quote'"), "&quot;quote&#39;");
    }
}
