//! Profile session handlers: upload/extract, manual entry, CRUD, preview
//! and document export.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::prepare::{prepare, ExportOptions};
use crate::export::{docx, pdf, TemplateVariant};
use crate::extraction::structured::extract_from_file;
use crate::extraction::FileKind;
use crate::models::profile::ProfileRecord;
use crate::render;
use crate::resources::companies::{company_config, CompanyConfig, COMPANIES};
use crate::resources::contacts::{contact_by_id, contacts_for, ContactPerson};
use crate::session::{Session, SessionStore};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct ManualProfileRequest {
    #[serde(default)]
    pub company: Option<String>,
}

/// Per-request export settings. Defaults apply field by field, so a partial
/// body like `{"anonymize": true}` is valid.
#[derive(Debug, Deserialize, Default)]
pub struct ExportRequest {
    #[serde(default)]
    pub template: TemplateVariant,
    #[serde(default)]
    pub anonymize: bool,
    #[serde(flatten)]
    pub options: ExportOptions,
    #[serde(default)]
    pub contact_id: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateResponse {
    pub session: Session,
    /// Required-field findings. Advisory: the update is stored either way.
    pub warnings: Vec<String>,
}

/// POST /api/v1/profiles
/// Multipart upload: `file` (the CV) and optional `company` (branding key).
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut company_key = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("File field is missing a filename".to_string())
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read file field: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("company") => {
                company_key = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read company: {e}")))?;
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;
    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(bytes.len()));
    }

    // Rejects unknown extensions before any model call.
    let kind = FileKind::from_filename(&filename)?;
    let company = company_config(&company_key);

    info!(
        filename = %filename,
        size = bytes.len(),
        company = company.key,
        "Extracting uploaded CV"
    );
    let profile = extract_from_file(&state.llm, &bytes, kind).await?;

    let session = Session::new(company.key.to_string(), profile, Some(filename));
    state.sessions.put(session.clone()).await;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/v1/profiles/manual
/// Opens a session around an empty record for hand-entered profiles.
pub async fn handle_create_manual(
    State(state): State<AppState>,
    body: Option<Json<ManualProfileRequest>>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let company = company_config(req.company.as_deref().unwrap_or(""));

    let session = Session::new(company.key.to_string(), ProfileRecord::default(), None);
    state.sessions.put(session.clone()).await;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(session))
}

/// PUT /api/v1/profiles/:id
/// Replaces the stored record. Validation findings come back as warnings;
/// incomplete records are stored anyway so editing can continue.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<ProfileRecord>,
) -> Result<Json<UpdateResponse>, AppError> {
    let warnings = profile.validation_errors();
    let session = state
        .sessions
        .update(id, profile)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(UpdateResponse { session, warnings }))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/profiles/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ExportRequest>>,
) -> Result<Html<String>, AppError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let session = load_session(&state, id).await?;
    let company = company_config(&session.company);
    let contact = resolve_contact(&session.company, req.contact_id.as_deref())?;

    let export = prepare(&session.profile, req.anonymize, req.options, contact);
    let html = render::render(&export, company, req.template, &state.config.asset_dir)?;
    Ok(Html(html))
}

/// POST /api/v1/profiles/:id/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ExportRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let session = load_session(&state, id).await?;
    let company = company_config(&session.company);
    let contact = resolve_contact(&session.company, req.contact_id.as_deref())?;

    let export = prepare(&session.profile, req.anonymize, req.options, contact);
    let bytes = pdf::generate(&export, company, req.template, &state.config)?;
    info!(session_id = %id, size = bytes.len(), "Generated PDF export");

    Ok(download_response(bytes, "application/pdf", company, "pdf"))
}

/// POST /api/v1/profiles/:id/export/docx
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ExportRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let session = load_session(&state, id).await?;
    let company = company_config(&session.company);
    let contact = resolve_contact(&session.company, req.contact_id.as_deref())?;

    let export = prepare(&session.profile, req.anonymize, req.options, contact);
    let bytes = docx::generate(&export, company, req.template)?;
    info!(session_id = %id, size = bytes.len(), "Generated DOCX export");

    Ok(download_response(
        bytes,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        company,
        "docx",
    ))
}

#[derive(Serialize)]
pub struct CompanyListResponse {
    pub companies: &'static [CompanyConfig],
}

/// GET /api/v1/companies
pub async fn handle_list_companies() -> Json<CompanyListResponse> {
    Json(CompanyListResponse {
        companies: COMPANIES,
    })
}

#[derive(Serialize)]
pub struct ContactListResponse {
    pub contacts: &'static [ContactPerson],
}

/// GET /api/v1/companies/:key/contacts
pub async fn handle_list_contacts(Path(key): Path<String>) -> Json<ContactListResponse> {
    Json(ContactListResponse {
        contacts: contacts_for(&key),
    })
}

async fn load_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn resolve_contact(
    company_key: &str,
    contact_id: Option<&str>,
) -> Result<Option<&'static ContactPerson>, AppError> {
    match contact_id {
        None => Ok(None),
        Some(id) => contact_by_id(company_key, id).map(Some).ok_or_else(|| {
            AppError::Validation(format!("Unknown contact '{id}' for company '{company_key}'"))
        }),
    }
}

fn download_response(
    bytes: Vec<u8>,
    content_type: &'static str,
    company: &CompanyConfig,
    extension: &str,
) -> impl IntoResponse {
    let filename = format!(
        "profile_{}_{}.{extension}",
        company.key,
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
}
