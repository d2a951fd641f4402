use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub message: String,
}

/// Returned by create endpoints; `I` is the generated or caller-supplied key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Created<I> {
    pub success: bool,
    pub id: I,
}

impl<I> Created<I> {
    pub fn new(id: I) -> Self {
        Self { success: true, id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Updated {
    pub success: bool,
    pub changes: u64,
}

impl Updated {
    pub fn new(changes: u64) -> Self {
        Self {
            success: true,
            changes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deleted {
    pub success: bool,
    pub message: String,
}

impl Deleted {
    pub fn new(resource: &str) -> Self {
        Self {
            success: true,
            message: format!("{resource} deleted"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
    pub message: String,
}
