use std::collections::BTreeMap;

use axum::{Json, extract::State};
use tracing::debug;

use crate::error::PortfolioError;
use crate::middleware::{JsonBody, PathParam, RequireAdmin};
use crate::router::PortfolioState;
use crate::types::{Ack, SocialInput};

/// GET /api/social -> `{ "<platform>": "<url>", ... }`
pub async fn list_social(
    State(state): State<PortfolioState>,
) -> Result<Json<BTreeMap<String, Option<String>>>, PortfolioError> {
    Ok(Json(state.storage.social_map().await?))
}

/// PUT /api/social/{platform} -> insert, or overwrite the existing link.
pub async fn upsert_social(
    _admin: RequireAdmin,
    State(state): State<PortfolioState>,
    PathParam(platform): PathParam<String>,
    JsonBody(input): JsonBody<SocialInput>,
) -> Result<Json<Ack>, PortfolioError> {
    state.storage.upsert_social(&platform, input.url).await?;
    debug!(platform = %platform, "social link upserted");
    Ok(Json(Ack { success: true }))
}
