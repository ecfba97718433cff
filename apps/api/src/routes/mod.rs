pub mod health;
pub mod profiles;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profiles", post(profiles::handle_upload))
        .route(
            "/api/v1/profiles/manual",
            post(profiles::handle_create_manual),
        )
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile)
                .put(profiles::handle_update_profile)
                .delete(profiles::handle_delete_profile),
        )
        .route(
            "/api/v1/profiles/:id/preview",
            post(profiles::handle_preview),
        )
        .route(
            "/api/v1/profiles/:id/export/pdf",
            post(profiles::handle_export_pdf),
        )
        .route(
            "/api/v1/profiles/:id/export/docx",
            post(profiles::handle_export_docx),
        )
        .route("/api/v1/companies", get(profiles::handle_list_companies))
        .route(
            "/api/v1/companies/:key/contacts",
            get(profiles::handle_list_contacts),
        )
        .with_state(state)
}
