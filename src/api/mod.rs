//! Typed HTTP client for the portfolio REST API.

pub mod portfolio_api;
pub mod token_store;

pub use portfolio_api::PortfolioClient;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
