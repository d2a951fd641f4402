use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Environment variables consulted when building the runtime configuration.
const ENV_KEYS: &[&str] = &[
    "port",
    "frontend_url",
    "jwt_secret",
    "admin_password",
    "database_url",
    "loglevel",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Single origin allowed by CORS (the portfolio frontend).
    pub frontend_url: String,
    /// HMAC secret used to sign bearer tokens.
    pub jwt_secret: String,
    /// Shared secret accepted by `POST /api/auth/login`.
    pub admin_password: String,
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            frontend_url: "http://localhost:8080".to_string(),
            jwt_secret: "your-secret-key-change-in-production".to_string(),
            admin_password: "admin123".to_string(),
            database_url: "sqlite:portfolio.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `PORT`, `FRONTEND_URL`, `JWT_SECRET`,
    /// `ADMIN_PASSWORD`, `DATABASE_URL` and `LOGLEVEL`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(ENV_KEYS))
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
