use axum::{Json, extract::State};
use tracing::info;

use crate::auth::{ADMIN_USER_ID, check_password};
use crate::error::PortfolioError;
use crate::middleware::JsonBody;
use crate::router::PortfolioState;
use crate::types::{LoginRequest, LoginResponse};

/// POST /api/auth/login -> bearer token when the password matches `ADMIN_PASSWORD`.
pub async fn login(
    State(state): State<PortfolioState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, PortfolioError> {
    check_password(body.password.as_deref(), &state.admin_password)?;
    let token = state.tokens.issue(ADMIN_USER_ID)?;
    info!("admin logged in");
    Ok(Json(LoginResponse {
        success: true,
        token,
        message: "Logged in successfully".to_string(),
    }))
}
