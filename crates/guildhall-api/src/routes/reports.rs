//! Routes for CSV report downloads.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};
use tracing::instrument;

use guildhall_reports::application::query_handlers;
use guildhall_reports::domain::report::{CSV_CONTENT_TYPE, Report};

use crate::error::ApiError;
use crate::state::AppState;

/// A report sent as a file attachment.
struct Attachment(Report);

impl IntoResponse for Attachment {
    fn into_response(self) -> Response {
        let headers = [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_owned()),
            (header::CONTENT_DISPOSITION, self.0.content_disposition()),
        ];
        (headers, self.0.body).into_response()
    }
}

/// GET /reports/guilds
#[instrument(skip(state))]
async fn guilds_report(State(state): State<AppState>) -> Result<Attachment, ApiError> {
    let report = query_handlers::render_guilds_report(&*state.roster).await?;
    Ok(Attachment(report))
}

/// GET /reports/characters
#[instrument(skip(state))]
async fn characters_report(State(state): State<AppState>) -> Result<Attachment, ApiError> {
    let report = query_handlers::render_characters_report(&*state.roster).await?;
    Ok(Attachment(report))
}

/// Returns the router for report downloads.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/guilds", get(guilds_report))
        .route("/reports/characters", get(characters_report))
}
