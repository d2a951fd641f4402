pub mod auth;
pub mod json_body;
pub mod path_param;

pub use auth::RequireAdmin;
pub use json_body::JsonBody;
pub use path_param::PathParam;
