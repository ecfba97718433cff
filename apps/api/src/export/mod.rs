// Export pipeline: privacy/display preparation plus the two document
// composers. The PDF and DOCX composers are independent implementations of
// the same ExportRecord → artifact contract; their layout models differ too
// much to share one abstraction.

pub mod docx;
pub mod pdf;
pub mod prepare;

use serde::Deserialize;

/// One of the fixed, named visual layouts applied across HTML/PDF/DOCX
/// outputs where supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Modern,
    Classic,
}
