//! Structured Extractor — sends normalized CV text to the completion
//! endpoint and parses the response into a `ProfileRecord`.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::normalize::{self, FileKind};
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::extraction::rules::extract_city_from_address;
use crate::llm_client::prompts::IMAGE_TRANSCRIPTION_PROMPT;
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::profile::ProfileRecord;

/// Extracts a structured profile from normalized CV text.
///
/// The schema is asserted by prompt convention only; parsing is all-or-nothing
/// at the top level, while missing keys default at the serde boundary.
pub async fn extract(llm: &LlmClient, text: &str) -> Result<ProfileRecord, AppError> {
    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{cv_text}", text);
    let response = llm
        .complete(EXTRACTION_SYSTEM, &prompt)
        .await
        .map_err(map_llm_error)?;

    let json_text = strip_json_fences(&response);
    let mut record: ProfileRecord = serde_json::from_str(json_text).map_err(|e| {
        AppError::ExtractionParse(format!(
            "invalid JSON ({e}); response was {} bytes",
            response.len()
        ))
    })?;

    derive_city(&mut record);

    info!(
        "Extraction produced {} experience, {} education, {} skill entries",
        record.experience.len(),
        record.education.len(),
        record.skills.len()
    );

    Ok(record)
}

/// Runs the full extraction pipeline for an uploaded file: normalize to
/// text (locally for PDF/DOCX, via the vision model for images), then
/// structure the result.
pub async fn extract_from_file(
    llm: &LlmClient,
    bytes: &[u8],
    kind: FileKind,
) -> Result<ProfileRecord, AppError> {
    let text = match kind {
        FileKind::Pdf => normalize::extract_pdf_text(bytes)?,
        FileKind::Docx => normalize::extract_docx_text(bytes)?,
        FileKind::Jpeg | FileKind::Png => llm
            .complete_vision(IMAGE_TRANSCRIPTION_PROMPT, bytes, kind.mime())
            .await
            .map_err(map_llm_error)?,
    };

    extract(llm, &text).await
}

/// Fills `personal.city` from `personal.address` when the model left it empty.
fn derive_city(record: &mut ProfileRecord) {
    if record.personal.city.is_empty() && !record.personal.address.is_empty() {
        record.personal.city = extract_city_from_address(&record.personal.address);
    }
}

fn map_llm_error(e: LlmError) -> AppError {
    AppError::ExtractionService(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Personal;

    #[test]
    fn test_derive_city_from_address() {
        let mut record = ProfileRecord {
            personal: Personal {
                address: "Musterstraße 123, 12345 Berlin, Deutschland".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        derive_city(&mut record);
        assert_eq!(record.personal.city, "Berlin");
    }

    #[test]
    fn test_derive_city_keeps_existing_city() {
        let mut record = ProfileRecord {
            personal: Personal {
                city: "Köln".to_string(),
                address: "Hauptstr 1, 12345 Berlin".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        derive_city(&mut record);
        assert_eq!(record.personal.city, "Köln");
    }

    #[test]
    fn test_extraction_response_parses_into_record() {
        // A fenced response the way the model typically wraps it.
        let response = "```json\n{\"personal\": {\"name\": \"Max Mustermann\", \"city\": null}, \
                        \"experience\": [{\"position\": \"Dev\", \"company\": \"ACME\", \
                        \"tasks\": [\"Backend\", \"Reviews\"]}], \"skills\": [\"Rust\"]}\n```";
        let record: ProfileRecord =
            serde_json::from_str(strip_json_fences(response)).unwrap();
        assert_eq!(record.personal.name, "Max Mustermann");
        assert_eq!(record.personal.city, "");
        assert_eq!(record.experience[0].tasks.len(), 2);
        assert_eq!(record.skills, vec!["Rust".to_string()]);
    }
}
