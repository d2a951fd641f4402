use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::error::PortfolioError;
use crate::middleware::{JsonBody, PathParam, RequireAdmin};
use crate::router::PortfolioState;
use crate::types::{Created, PersonalInput, Updated};

/// GET /api/personal -> most recently created row, `{}` when none exists.
pub async fn get_personal(
    State(state): State<PortfolioState>,
) -> Result<Json<Value>, PortfolioError> {
    match state.storage.latest_personal().await? {
        Some(info) => Ok(Json(serde_json::to_value(info)?)),
        None => Ok(Json(json!({}))),
    }
}

pub async fn create_personal(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    JsonBody(input): JsonBody<PersonalInput>,
) -> Result<Json<Created<i64>>, PortfolioError> {
    input.validate()?;
    let id = state.storage.insert_personal(input).await?;
    Ok(Json(Created::new(id)))
}

pub async fn update_personal(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<i64>,
    JsonBody(input): JsonBody<PersonalInput>,
) -> Result<Json<Updated>, PortfolioError> {
    match state.storage.update_personal(id, input).await? {
        0 => Err(PortfolioError::NotFound("Personal info")),
        changes => Ok(Json(Updated::new(changes))),
    }
}
