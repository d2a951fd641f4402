use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::auth::{Claims, TokenService};
use crate::error::PortfolioError;

/// Ensure the inbound request carries a valid admin bearer token.
/// Accepts only `Authorization: Bearer <jwt>`; claims are not inspected
/// beyond signature and expiry.
pub fn ensure_authorized(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<Claims, PortfolioError> {
    let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
        return Err(PortfolioError::MissingToken);
    };
    tokens.verify(bearer.token())
}

/// Extractor guarding mutating routes. Being a `FromRequestParts`, it runs
/// before the JSON body is read and before any storage access.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Claims);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = PortfolioError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        ensure_authorized(&parts.headers, &tokens).map(Self)
    }
}
