use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum PortfolioError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    BadRequest(String),

    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    DatabaseError(#[from] SqlxError),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A client-side call got a non-2xx response.
    #[error("{0}")]
    RequestFailed(&'static str),
}

impl PortfolioError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortfolioError::MissingFields(_) | PortfolioError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            PortfolioError::MissingToken
            | PortfolioError::InvalidToken
            | PortfolioError::InvalidPassword => StatusCode::UNAUTHORIZED,
            PortfolioError::NotFound(_) => StatusCode::NOT_FOUND,
            PortfolioError::DatabaseError(_)
            | PortfolioError::JsonError(_)
            | PortfolioError::TokenError(_)
            | PortfolioError::Reqwest(_)
            | PortfolioError::UrlParse(_)
            | PortfolioError::Io(_)
            | PortfolioError::RequestFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ApiErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Body of every error response: `{ "error": "<message>" }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
