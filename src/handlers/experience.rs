use axum::{Json, extract::State};

use crate::db::Experience;
use crate::error::PortfolioError;
use crate::middleware::{JsonBody, PathParam, RequireAdmin};
use crate::router::PortfolioState;
use crate::types::{Created, Deleted, ExperienceInput, Updated};

const RESOURCE: &str = "Experience";

pub async fn list_experience(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<Experience>>, PortfolioError> {
    Ok(Json(state.storage.list_experience().await?))
}

pub async fn create_experience(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    JsonBody(input): JsonBody<ExperienceInput>,
) -> Result<Json<Created<i64>>, PortfolioError> {
    input.validate()?;
    let id = state.storage.insert_experience(input).await?;
    Ok(Json(Created::new(id)))
}

pub async fn update_experience(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<i64>,
    JsonBody(input): JsonBody<ExperienceInput>,
) -> Result<Json<Updated>, PortfolioError> {
    match state.storage.update_experience(id, input).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        changes => Ok(Json(Updated::new(changes))),
    }
}

pub async fn delete_experience(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Deleted>, PortfolioError> {
    match state.storage.delete_experience(id).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        _ => Ok(Json(Deleted::new(RESOURCE))),
    }
}
