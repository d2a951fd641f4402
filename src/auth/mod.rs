//! Shared-secret login and bearer token signing.

pub mod password;
pub mod token;

pub use password::check_password;
pub use token::{ADMIN_USER_ID, Claims, TokenService};
