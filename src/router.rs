use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::TokenService;
use crate::config::Config;
use crate::db::PortfolioStorage;
use crate::handlers::{self, auth, experience, personal, projects, skills, social};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct PortfolioState {
    pub storage: PortfolioStorage,
    pub tokens: TokenService,
    pub admin_password: Arc<str>,
}

impl PortfolioState {
    pub fn new(storage: PortfolioStorage, cfg: &Config) -> Self {
        Self {
            storage,
            tokens: TokenService::new(&cfg.jwt_secret),
            admin_password: Arc::from(cfg.admin_password.as_str()),
        }
    }
}

impl FromRef<PortfolioState> for TokenService {
    fn from_ref(state: &PortfolioState) -> Self {
        state.tokens.clone()
    }
}

/// Route table mounted under `/api`.
pub fn api_routes() -> Router<PortfolioState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/personal",
            get(personal::get_personal).post(personal::create_personal),
        )
        .route("/personal/{id}", put(personal::update_personal))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route(
            "/skills/{id}",
            put(skills::update_skill).delete(skills::delete_skill),
        )
        .route(
            "/experience",
            get(experience::list_experience).post(experience::create_experience),
        )
        .route(
            "/experience/{id}",
            put(experience::update_experience).delete(experience::delete_experience),
        )
        .route("/social", get(social::list_social))
        .route("/social/{platform}", put(social::upsert_social))
        .route("/health", get(handlers::health))
}

/// CORS for the single configured frontend origin, with credentials.
pub fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);
    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                origin = %frontend_url,
                error = %e,
                "unusable CORS origin; cross-origin requests will be refused"
            );
            layer
        }
    }
}

pub fn portfolio_router(state: PortfolioState, frontend_url: &str) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(cors_layer(frontend_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
