use axum::{Json, extract::State};

use crate::db::Project;
use crate::error::PortfolioError;
use crate::middleware::{JsonBody, PathParam, RequireAdmin};
use crate::router::PortfolioState;
use crate::types::{Created, Deleted, ProjectInput, Updated};

const RESOURCE: &str = "Project";

pub async fn list_projects(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<Project>>, PortfolioError> {
    Ok(Json(state.storage.list_projects().await?))
}

pub async fn get_project(
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<Project>, PortfolioError> {
    state
        .storage
        .get_project(&id)
        .await?
        .map(Json)
        .ok_or(PortfolioError::NotFound(RESOURCE))
}

/// POST /api/projects -> the id is supplied by the caller in the body.
pub async fn create_project(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Result<Json<Created<String>>, PortfolioError> {
    input.validate()?;
    let id = state.storage.insert_project(input).await?;
    Ok(Json(Created::new(id)))
}

pub async fn update_project(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<String>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Result<Json<Updated>, PortfolioError> {
    match state.storage.update_project(&id, input).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        changes => Ok(Json(Updated::new(changes))),
    }
}

pub async fn delete_project(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<Deleted>, PortfolioError> {
    match state.storage.delete_project(&id).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        _ => Ok(Json(Deleted::new(RESOURCE))),
    }
}
