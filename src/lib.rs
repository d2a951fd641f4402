pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod showcase;
pub mod types;

pub use api::PortfolioClient;
pub use config::Config;
pub use db::PortfolioStorage;
pub use error::PortfolioError;
pub use router::{PortfolioState, portfolio_router};
