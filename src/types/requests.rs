use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Fails with every required field name when any of them is absent or empty.
fn require(fields: &[(&'static str, Option<&str>)]) -> Result<(), PortfolioError> {
    let any_missing = fields
        .iter()
        .any(|(_, value)| value.is_none_or(str::is_empty));
    if any_missing {
        return Err(PortfolioError::MissingFields(
            fields.iter().map(|(name, _)| *name).collect(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonalInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "resumeUrl")]
    pub resume_url: Option<String>,
}

impl PersonalInput {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require(&[
            ("name", self.name.as_deref()),
            ("title", self.title.as_deref()),
            ("email", self.email.as_deref()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectInput {
    /// Caller-chosen key; only read on create, the path wins on update.
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    #[serde(rename = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(rename = "githubUrl")]
    pub github_url: Option<String>,
}

impl ProjectInput {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require(&[
            ("id", self.id.as_deref()),
            ("title", self.title.as_deref()),
            ("description", self.description.as_deref()),
        ])
    }

    /// Tags as stored in the TEXT column; absent tags become `[]`.
    pub fn tags_json(&self) -> Result<String, PortfolioError> {
        let tags: &[String] = self.tags.as_deref().unwrap_or_default();
        Ok(serde_json::to_string(tags)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillInput {
    pub name: Option<String>,
    pub level: Option<i64>,
    pub category: Option<String>,
}

impl SkillInput {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require(&[
            ("name", self.name.as_deref()),
            ("category", self.category.as_deref()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

impl ExperienceInput {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require(&[
            ("title", self.title.as_deref()),
            ("company", self.company.as_deref()),
            ("period", self.period.as_deref()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialInput {
    pub url: Option<String>,
}
