//! DOCX Generator.
//!
//! Same split as the PDF side: `compose` produces the block list that the
//! tests assert on, `generate` turns it into a zip-packed document via
//! docx-rs. Page margins are 720 twips (0.5") on all sides.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, Start,
};

use crate::errors::AppError;
use crate::export::prepare::{visible_tasks, ExportRecord};
use crate::export::TemplateVariant;
use crate::resources::companies::CompanyConfig;

const PAGE_MARGIN_TWIPS: i32 = 720;
const BULLET_NUMBERING_ID: usize = 2;

// Run sizes are half-points.
const SIZE_TITLE: usize = 48;
const SIZE_SECTION: usize = 28;
const SIZE_ENTRY: usize = 24;
const SIZE_BODY: usize = 22;

/// One paragraph-level unit of the document, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocxBlock {
    /// Candidate name, centered, primary color.
    Title(String),
    /// Target position, centered.
    Subtitle(String),
    /// Section heading in the primary color.
    SectionHeading(String),
    /// Bold entry line, e.g. "Senior Developer bei ACME GmbH".
    EntryHeading(String),
    /// Italic date range line.
    Dates(String),
    /// One bulleted task line.
    Bullet(String),
    /// Bold lead followed by regular text on one line.
    LabeledLine { label: String, rest: String },
    /// Plain body text.
    Paragraph(String),
}

/// Flattens the export record into DOCX paragraphs. Unlike the PDF layout
/// this one carries a Zertifizierungen section.
pub fn compose(export: &ExportRecord, variant: TemplateVariant) -> Vec<DocxBlock> {
    let record = &export.record;
    let mut blocks = Vec::new();

    blocks.push(DocxBlock::Title(record.personal.name.clone()));
    if !record.personal.position.is_empty() {
        blocks.push(DocxBlock::Subtitle(record.personal.position.clone()));
    }
    if export.options.show_summary && !record.personal.summary.is_empty() {
        blocks.push(DocxBlock::Paragraph(record.personal.summary.clone()));
    }

    let mut section_no = 0usize;
    let mut heading = |title: &str| {
        section_no += 1;
        match variant {
            TemplateVariant::Classic => DocxBlock::SectionHeading(format!("{section_no}. {title}")),
            TemplateVariant::Modern => DocxBlock::SectionHeading(title.to_string()),
        }
    };

    if !record.experience.is_empty() {
        blocks.push(heading("Berufserfahrung"));
        for entry in &record.experience {
            blocks.push(DocxBlock::EntryHeading(entry_line(
                &entry.position,
                &entry.company,
            )));
            if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
                blocks.push(DocxBlock::Dates(format!(
                    "{} - {}",
                    entry.start_date, entry.end_date
                )));
            }
            let tasks = visible_tasks(entry, export.options.limit_tasks);
            if tasks.is_empty() {
                if !entry.description.is_empty() {
                    blocks.push(DocxBlock::Paragraph(entry.description.clone()));
                }
            } else {
                for task in tasks {
                    blocks.push(DocxBlock::Bullet(task.clone()));
                }
            }
        }
    }

    if !record.education.is_empty() {
        blocks.push(heading("Ausbildung & Weiterbildung"));
        for entry in &record.education {
            blocks.push(DocxBlock::EntryHeading(entry_line(
                &entry.degree,
                &entry.institution,
            )));
            if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
                blocks.push(DocxBlock::Dates(format!(
                    "{} - {}",
                    entry.start_date, entry.end_date
                )));
            }
            if !entry.description.is_empty() {
                blocks.push(DocxBlock::Paragraph(entry.description.clone()));
            }
        }
    }

    if !record.skills.is_empty() {
        blocks.push(heading("Fähigkeiten & Kompetenzen"));
        blocks.push(DocxBlock::Paragraph(record.skills.join(", ")));
    }

    if !record.certifications.is_empty() {
        blocks.push(heading("Zertifizierungen"));
        for cert in &record.certifications {
            let mut rest = String::new();
            if !cert.issuer.is_empty() {
                rest.push_str(&format!(", {}", cert.issuer));
            }
            if !cert.date.is_empty() {
                rest.push_str(&format!(" ({})", cert.date));
            }
            blocks.push(DocxBlock::LabeledLine {
                label: cert.name.clone(),
                rest,
            });
        }
    }

    if !record.languages.is_empty() {
        blocks.push(heading("Sprachen"));
        for language in &record.languages {
            blocks.push(DocxBlock::Paragraph(format!(
                "{} - {}",
                language.name, language.level
            )));
        }
    }

    blocks
}

fn entry_line(what: &str, with: &str) -> String {
    match (what.is_empty(), with.is_empty()) {
        (false, false) => format!("{what} bei {with}"),
        (false, true) => what.to_string(),
        (true, _) => with.to_string(),
    }
}

/// Renders the composed blocks into DOCX bytes.
pub fn generate(
    export: &ExportRecord,
    company: &CompanyConfig,
    variant: TemplateVariant,
) -> Result<Vec<u8>, AppError> {
    let blocks = compose(export, variant);
    render_blocks(&blocks, company)
}

fn render_blocks(blocks: &[DocxBlock], company: &CompanyConfig) -> Result<Vec<u8>, AppError> {
    let primary = company.primary_hex();

    let mut doc = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN_TWIPS)
                .bottom(PAGE_MARGIN_TWIPS)
                .left(PAGE_MARGIN_TWIPS)
                .right(PAGE_MARGIN_TWIPS),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            ),
        ))
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for block in blocks {
        let paragraph = match block {
            DocxBlock::Title(text) => Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(
                    Run::new()
                        .add_text(text.as_str())
                        .bold()
                        .size(SIZE_TITLE)
                        .color(primary),
                ),
            DocxBlock::Subtitle(text) => Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(text.as_str()).size(SIZE_BODY)),
            DocxBlock::SectionHeading(text) => Paragraph::new().add_run(
                Run::new()
                    .add_text(text.as_str())
                    .bold()
                    .size(SIZE_SECTION)
                    .color(primary),
            ),
            DocxBlock::EntryHeading(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()).bold().size(SIZE_ENTRY)),
            DocxBlock::Dates(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()).italic().size(SIZE_BODY)),
            DocxBlock::Bullet(text) => Paragraph::new()
                .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
                .add_run(Run::new().add_text(text.as_str()).size(SIZE_BODY)),
            DocxBlock::LabeledLine { label, rest } => Paragraph::new()
                .add_run(Run::new().add_text(label.as_str()).bold().size(SIZE_BODY))
                .add_run(Run::new().add_text(rest.as_str()).size(SIZE_BODY)),
            DocxBlock::Paragraph(text) => {
                Paragraph::new().add_run(Run::new().add_text(text.as_str()).size(SIZE_BODY))
            }
        };
        doc = doc.add_paragraph(paragraph);
    }

    let mut cursor = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Export(format!("DOCX packing failed: {e}")))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::prepare::{prepare, ExportOptions};
    use crate::models::profile::{
        Certification, EducationEntry, ExperienceEntry, Language, Personal, ProfileRecord,
    };

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            personal: Personal {
                name: "Max Mustermann".to_string(),
                position: "Softwareentwickler".to_string(),
                city: "Berlin".to_string(),
                summary: "Erfahrener Entwickler".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                position: "Senior Developer".to_string(),
                company: "ACME GmbH".to_string(),
                start_date: "01/2020".to_string(),
                end_date: "Heute".to_string(),
                tasks: vec!["Backend".to_string()],
                ..Default::default()
            }],
            education: vec![EducationEntry {
                degree: "B.Sc. Informatik".to_string(),
                institution: "TU Berlin".to_string(),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string()],
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

    fn compose_sample(variant: TemplateVariant) -> Vec<DocxBlock> {
        let record = sample_record();
        let export = prepare(&record, false, ExportOptions::default(), None);
        compose(&export, variant)
    }

    #[test]
    fn test_sections_include_certifications() {
        let blocks = compose_sample(TemplateVariant::Modern);
        let headings: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                DocxBlock::SectionHeading(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            [
                "Berufserfahrung",
                "Ausbildung & Weiterbildung",
                "Fähigkeiten & Kompetenzen",
                "Zertifizierungen",
                "Sprachen",
            ]
        );
    }

    #[test]
    fn test_certification_line_shape() {
        let blocks = compose_sample(TemplateVariant::Modern);
        assert!(blocks.contains(&DocxBlock::LabeledLine {
            label: "AWS SAA".to_string(),
            rest: ", Amazon (05/2022)".to_string(),
        }));
    }

    #[test]
    fn test_title_and_entry_blocks() {
        let blocks = compose_sample(TemplateVariant::Modern);
        assert_eq!(blocks[0], DocxBlock::Title("Max Mustermann".to_string()));
        assert!(blocks.contains(&DocxBlock::EntryHeading(
            "Senior Developer bei ACME GmbH".to_string()
        )));
        assert!(blocks.contains(&DocxBlock::Dates("01/2020 - Heute".to_string())));
        assert!(blocks.contains(&DocxBlock::Bullet("Backend".to_string())));
    }

    #[test]
    fn test_classic_numbers_sections() {
        let blocks = compose_sample(TemplateVariant::Classic);
        let headings: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                DocxBlock::SectionHeading(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings[0], "1. Berufserfahrung");
        assert_eq!(headings[4], "5. Sprachen");
    }

    #[test]
    fn test_task_cap_applies() {
        let mut record = sample_record();
        record.experience[0].tasks = (1..=7).map(|i| format!("Aufgabe {i}")).collect();
        let options = ExportOptions {
            limit_tasks: true,
            show_summary: true,
        };
        let export = prepare(&record, false, options, None);
        let blocks = compose(&export, TemplateVariant::Modern);
        let bullets = blocks
            .iter()
            .filter(|b| matches!(b, DocxBlock::Bullet(_)))
            .count();
        assert_eq!(bullets, 5);
    }

    #[test]
    fn test_empty_sections_skipped() {
        let mut record = sample_record();
        record.certifications.clear();
        record.languages.clear();
        let export = prepare(&record, false, ExportOptions::default(), None);
        let blocks = compose(&export, TemplateVariant::Modern);
        assert!(!blocks
            .iter()
            .any(|b| matches!(b, DocxBlock::SectionHeading(t) if t.contains("Zertifizierungen") || t.contains("Sprachen"))));
    }
}
