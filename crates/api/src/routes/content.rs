//! The content endpoints: read a slug's payload, replace it wholesale.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use site_content_core::{ContentPayload, ContentSlug};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/v1/content/{slug}",
        get(get_content).post(update_content),
    )
}

fn parse_slug(raw: &str) -> Result<ContentSlug, ApiError> {
    ContentSlug::parse(raw)
        .ok_or_else(|| ApiError::NotFound(format!("unknown content type '{raw}'")))
}

/// `GET /api/v1/content/{slug}` — the raw payload last persisted for the
/// slug. Absent records are a 404; clients treat any non-OK response as
/// "use the static default".
async fn get_content(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
) -> ApiResult<Json<Value>> {
    let slug = parse_slug(&raw_slug)?;

    match state.service().fetch_record(slug).await? {
        Some(record) => Ok(Json(json!({
            "success": true,
            "data": record.content,
            "updatedAt": record.updated_at,
        }))),
        None => Err(ApiError::NotFound(format!("no content stored for '{slug}'"))),
    }
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    content: Value,
}

/// `POST /api/v1/content/{slug}` — full-replace update from the editing
/// forms. The body's `content` must match the slug's registered shape.
async fn update_content(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
    Json(body): Json<UpdateRequest>,
) -> ApiResult<Json<Value>> {
    let slug = parse_slug(&raw_slug)?;

    let payload = ContentPayload::from_value(slug, body.content)
        .map_err(|err| ApiError::BadRequest(format!("malformed payload for '{slug}': {err}")))?;

    state.service().update(slug, payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Content updated successfully",
    })))
}
