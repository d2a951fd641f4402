pub mod auth;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod social;

use axum::Json;

use crate::error::PortfolioError;
use crate::types::Health;

/// GET /api/health
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

pub async fn not_found() -> PortfolioError {
    PortfolioError::NotFound("Route")
}
