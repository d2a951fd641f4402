use axum::{Json, extract::State};

use crate::db::Skill;
use crate::error::PortfolioError;
use crate::middleware::{JsonBody, PathParam, RequireAdmin};
use crate::router::PortfolioState;
use crate::types::{Created, Deleted, SkillInput, Updated};

const RESOURCE: &str = "Skill";

pub async fn list_skills(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<Skill>>, PortfolioError> {
    Ok(Json(state.storage.list_skills().await?))
}

pub async fn create_skill(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    JsonBody(input): JsonBody<SkillInput>,
) -> Result<Json<Created<i64>>, PortfolioError> {
    input.validate()?;
    let id = state.storage.insert_skill(input).await?;
    Ok(Json(Created::new(id)))
}

pub async fn update_skill(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<i64>,
    JsonBody(input): JsonBody<SkillInput>,
) -> Result<Json<Updated>, PortfolioError> {
    match state.storage.update_skill(id, input).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        changes => Ok(Json(Updated::new(changes))),
    }
}

pub async fn delete_skill(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Deleted>, PortfolioError> {
    match state.storage.delete_skill(id).await? {
        0 => Err(PortfolioError::NotFound(RESOURCE)),
        _ => Ok(Json(Deleted::new(RESOURCE))),
    }
}
