use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Timestamps keep SQLite's `CURRENT_TIMESTAMP` text form on the wire.
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveDateTime::parse_from_str(&raw, FORMAT))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct PersonalInfo {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "resumeUrl")]
    #[sqlx(rename = "resumeUrl")]
    pub resume_url: Option<String>,
    #[serde(default, with = "sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Project row with `tags` already decoded from its JSON text column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    #[serde(rename = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(rename = "githubUrl")]
    pub github_url: Option<String>,
    #[serde(default, with = "sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: Option<i64>,
    pub category: String,
    #[serde(default, with = "sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
    #[serde(default, with = "sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SocialLink {
    pub platform: String,
    pub url: Option<String>,
}
