//! PDF Generator.
//!
//! Split in two stages so the layout logic stays testable without fonts on
//! disk: `compose` flattens the profile into a block list, `generate` feeds
//! that list through genpdf onto an A4 page with 20mm margins.

use genpdf::{elements, fonts, style, Alignment, Element as _, SimplePageDecorator};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;
use crate::export::prepare::{visible_tasks, ExportRecord};
use crate::export::TemplateVariant;
use crate::resources::companies::CompanyConfig;

/// One flowable unit of the final document, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfBlock {
    /// Company logo, centered. Carries the asset path resolved at compose
    /// time; the render stage drops it if the file is unreadable.
    Logo(String),
    /// Candidate name, centered, primary color.
    Title(String),
    /// Target position, centered, below the title.
    Subtitle(String),
    /// Section heading in the company primary color.
    SectionHeading(String),
    /// Bold entry line, e.g. "Senior Developer bei ACME GmbH".
    EntryHeading(String),
    /// Grey date range line.
    Dates(String),
    /// One bulleted task line.
    Bullet(String),
    /// Plain body text.
    Paragraph(String),
}

/// Flattens the export record into the block sequence of the document.
/// The classic variant numbers its non-empty sections; neither variant
/// emits a certifications section, matching the printed layout.
pub fn compose(
    export: &ExportRecord,
    company: &CompanyConfig,
    variant: TemplateVariant,
    asset_dir: &str,
) -> Vec<PdfBlock> {
    let record = &export.record;
    let mut blocks = Vec::new();

    if let Some(path) = company.logo_path(asset_dir) {
        if path.exists() {
            blocks.push(PdfBlock::Logo(path.to_string_lossy().into_owned()));
        } else {
            warn!("Logo asset {} not found, omitting", path.display());
        }
    }

    blocks.push(PdfBlock::Title(record.personal.name.clone()));
    if !record.personal.position.is_empty() {
        blocks.push(PdfBlock::Subtitle(record.personal.position.clone()));
    }
    if export.options.show_summary && !record.personal.summary.is_empty() {
        blocks.push(PdfBlock::Paragraph(record.personal.summary.clone()));
    }

    let mut section_no = 0usize;
    let mut heading = |title: &str| {
        section_no += 1;
        match variant {
            TemplateVariant::Classic => PdfBlock::SectionHeading(format!("{section_no}. {title}")),
            TemplateVariant::Modern => PdfBlock::SectionHeading(title.to_string()),
        }
    };

    if !record.experience.is_empty() {
        blocks.push(heading("Berufserfahrung"));
        for entry in &record.experience {
            blocks.push(PdfBlock::EntryHeading(entry_line(
                &entry.position,
                &entry.company,
            )));
            if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
                blocks.push(PdfBlock::Dates(format!(
                    "{} - {}",
                    entry.start_date, entry.end_date
                )));
            }
            let tasks = visible_tasks(entry, export.options.limit_tasks);
            if tasks.is_empty() {
                if !entry.description.is_empty() {
                    blocks.push(PdfBlock::Paragraph(entry.description.clone()));
                }
            } else {
                for task in tasks {
                    blocks.push(PdfBlock::Bullet(task.clone()));
                }
            }
        }
    }

    if !record.education.is_empty() {
        blocks.push(heading("Ausbildung & Weiterbildung"));
        for entry in &record.education {
            blocks.push(PdfBlock::EntryHeading(entry_line(
                &entry.degree,
                &entry.institution,
            )));
            if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
                blocks.push(PdfBlock::Dates(format!(
                    "{} - {}",
                    entry.start_date, entry.end_date
                )));
            }
            if !entry.description.is_empty() {
                blocks.push(PdfBlock::Paragraph(entry.description.clone()));
            }
        }
    }

    if !record.skills.is_empty() {
        blocks.push(heading("Fähigkeiten & Kompetenzen"));
        blocks.push(PdfBlock::Paragraph(record.skills.join(", ")));
    }

    if !record.languages.is_empty() {
        blocks.push(heading("Sprachen"));
        for language in &record.languages {
            blocks.push(PdfBlock::Paragraph(format!(
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

/// Renders the composed blocks into PDF bytes.
pub fn generate(
    export: &ExportRecord,
    company: &CompanyConfig,
    variant: TemplateVariant,
    config: &Config,
) -> Result<Vec<u8>, AppError> {
    let blocks = compose(export, company, variant, &config.asset_dir);
    render_blocks(&blocks, export, company, config)
}

fn render_blocks(
    blocks: &[PdfBlock],
    export: &ExportRecord,
    company: &CompanyConfig,
    config: &Config,
) -> Result<Vec<u8>, AppError> {
    let font_family = fonts::from_files(&config.font_dir, &config.font_family, None)
        .map_err(|e| AppError::render("fonts", format!("font family not loadable: {e}")))?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(format!("Profil {}", export.record.personal.name));
    doc.set_paper_size(genpdf::PaperSize::A4);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(20);
    doc.set_page_decorator(decorator);

    let (r, g, b) = company.primary_rgb();
    let primary = style::Color::Rgb(r, g, b);
    let grey = style::Color::Rgb(100, 100, 100);

    for block in blocks {
        match block {
            PdfBlock::Logo(path) => match elements::Image::from_path(path) {
                Ok(image) => {
                    doc.push(image.with_alignment(Alignment::Center));
                    doc.push(elements::Break::new(1));
                }
                Err(e) => warn!("Logo asset {path} not usable, omitting: {e}"),
            },
            PdfBlock::Title(text) => {
                doc.push(
                    elements::Paragraph::new(text.as_str())
                        .aligned(Alignment::Center)
                        .styled(style::Style::new().bold().with_font_size(22).with_color(primary)),
                );
            }
            PdfBlock::Subtitle(text) => {
                doc.push(
                    elements::Paragraph::new(text.as_str())
                        .aligned(Alignment::Center)
                        .styled(style::Style::new().with_font_size(13).with_color(grey)),
                );
                doc.push(elements::Break::new(1));
            }
            PdfBlock::SectionHeading(text) => {
                doc.push(elements::Break::new(1));
                doc.push(
                    elements::Paragraph::new(text.as_str())
                        .styled(style::Style::new().bold().with_font_size(14).with_color(primary)),
                );
            }
            PdfBlock::EntryHeading(text) => {
                doc.push(
                    elements::Paragraph::new(text.as_str())
                        .styled(style::Style::new().bold().with_font_size(11)),
                );
            }
            PdfBlock::Dates(text) => {
                doc.push(
                    elements::Paragraph::new(text.as_str())
                        .styled(style::Style::new().with_font_size(9).with_color(grey)),
                );
            }
            PdfBlock::Bullet(text) => {
                doc.push(
                    elements::Paragraph::new(format!("• {text}"))
                        .padded(genpdf::Margins::trbl(0, 0, 0, 5)),
                );
            }
            PdfBlock::Paragraph(text) => {
                doc.push(elements::Paragraph::new(text.as_str()));
            }
        }
    }

    let mut out = Vec::new();
    doc.render(&mut out)
        .map_err(|e| AppError::Export(format!("PDF serialization failed: {e}")))?;
    Ok(out)
}
