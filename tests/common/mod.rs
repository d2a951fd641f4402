#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use portfolio_api::{Config, PortfolioState, PortfolioStorage, portfolio_router};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const FRONTEND: &str = "http://localhost:8080";

pub struct TestApp {
    pub router: Router,
    pub storage: PortfolioStorage,
    pub cfg: Config,
    _dir: TempDir,
}

/// Router backed by a fresh temp-file database with the default password.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let cfg = Config {
        database_url: format!("sqlite:{}", dir.path().join("portfolio.db").display()),
        ..Config::default()
    };

    let storage = PortfolioStorage::connect(&cfg.database_url)
        .await
        .expect("failed to open database");
    storage.init_schema().await.expect("failed to init schema");

    let state = PortfolioState::new(storage.clone(), &cfg);
    let router = portfolio_router(state, &cfg.frontend_url);
    TestApp {
        router,
        storage,
        cfg,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let resp = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("request failed");

        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not JSON")
        };
        (status, value)
    }

    pub async fn login(&self) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/api/auth/login",
                None,
                Some(serde_json::json!({ "password": "admin123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().expect("token missing").to_string()
    }
}
