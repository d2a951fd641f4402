//! Request and response payloads shared by the HTTP handlers and the client.

pub mod requests;
pub mod responses;

pub use requests::{
    ExperienceInput, LoginRequest, PersonalInput, ProjectInput, SkillInput, SocialInput,
};
pub use responses::{Ack, Created, Deleted, Health, LoginResponse, Updated};
