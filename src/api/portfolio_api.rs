use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::token_store::{MemoryTokenStore, TokenStore};
use crate::db::{Experience, PersonalInfo, Project, Skill};
use crate::error::PortfolioError;
use crate::types::{
    Ack, Created, Deleted, ExperienceInput, Health, LoginRequest, LoginResponse, PersonalInput,
    ProjectInput, SkillInput, SocialInput, Updated,
};

/// One method per (resource, operation) pair of the REST surface.
///
/// Any non-2xx status becomes [`PortfolioError::RequestFailed`] carrying a
/// fixed message for the operation; error bodies are not parsed. No retry,
/// no caching. The bearer token is attached whenever the store holds one.
#[derive(Clone)]
pub struct PortfolioClient {
    client: reqwest::Client,
    base: Url,
    tokens: Arc<dyn TokenStore>,
}

impl PortfolioClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str) -> Result<Self, PortfolioError> {
        Self::with_store(base_url, Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_store(
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, PortfolioError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base: Url::parse(base_url)?,
            tokens,
        })
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    pub fn set_token(&self, token: &str) -> Result<(), PortfolioError> {
        Ok(self.tokens.save(token)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, PortfolioError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, PortfolioError> {
        let url = self.endpoint(segments)?;
        let req = self.client.request(method, url);
        Ok(match self.tokens.load() {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        failure: &'static str,
    ) -> Result<T, PortfolioError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(status = %status, "{failure}");
            return Err(PortfolioError::RequestFailed(failure));
        }
        Ok(resp.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        failure: &'static str,
    ) -> Result<T, PortfolioError> {
        let req = self.request(Method::GET, segments)?;
        self.send(req, failure).await
    }

    async fn with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        failure: &'static str,
    ) -> Result<T, PortfolioError> {
        let req = self.request(method, segments)?.json(body);
        self.send(req, failure).await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        failure: &'static str,
    ) -> Result<T, PortfolioError> {
        let req = self.request(Method::DELETE, segments)?;
        self.send(req, failure).await
    }

    // ---- auth ----

    /// Exchange the admin password for a token and keep it in the store.
    pub async fn login(&self, password: &str) -> Result<LoginResponse, PortfolioError> {
        let body = LoginRequest {
            password: Some(password.to_string()),
        };
        let resp: LoginResponse = self
            .with_body(Method::POST, &["auth", "login"], &body, "Login failed")
            .await?;
        self.set_token(&resp.token)?;
        Ok(resp)
    }

    // ---- personal ----

    /// `None` when the server has no personal info yet (it answers `{}`).
    pub async fn get_personal(&self) -> Result<Option<PersonalInfo>, PortfolioError> {
        let value: Value = self
            .get(&["personal"], "Failed to fetch personal info")
            .await?;
        match value.as_object() {
            Some(obj) if obj.is_empty() => Ok(None),
            _ => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    pub async fn create_personal(
        &self,
        input: &PersonalInput,
    ) -> Result<Created<i64>, PortfolioError> {
        self.with_body(
            Method::POST,
            &["personal"],
            input,
            "Failed to create personal info",
        )
        .await
    }

    pub async fn update_personal(
        &self,
        id: i64,
        input: &PersonalInput,
    ) -> Result<Updated, PortfolioError> {
        self.with_body(
            Method::PUT,
            &["personal", &id.to_string()],
            input,
            "Failed to update personal info",
        )
        .await
    }

    // ---- projects ----

    pub async fn list_projects(&self) -> Result<Vec<Project>, PortfolioError> {
        self.get(&["projects"], "Failed to fetch projects").await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, PortfolioError> {
        self.get(&["projects", id], "Failed to fetch project").await
    }

    pub async fn create_project(
        &self,
        input: &ProjectInput,
    ) -> Result<Created<String>, PortfolioError> {
        self.with_body(
            Method::POST,
            &["projects"],
            input,
            "Failed to create project",
        )
        .await
    }

    pub async fn update_project(
        &self,
        id: &str,
        input: &ProjectInput,
    ) -> Result<Updated, PortfolioError> {
        self.with_body(
            Method::PUT,
            &["projects", id],
            input,
            "Failed to update project",
        )
        .await
    }

    pub async fn delete_project(&self, id: &str) -> Result<Deleted, PortfolioError> {
        self.delete(&["projects", id], "Failed to delete project")
            .await
    }

    // ---- skills ----

    pub async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioError> {
        self.get(&["skills"], "Failed to fetch skills").await
    }

    pub async fn create_skill(&self, input: &SkillInput) -> Result<Created<i64>, PortfolioError> {
        self.with_body(Method::POST, &["skills"], input, "Failed to create skill")
            .await
    }

    pub async fn update_skill(
        &self,
        id: i64,
        input: &SkillInput,
    ) -> Result<Updated, PortfolioError> {
        self.with_body(
            Method::PUT,
            &["skills", &id.to_string()],
            input,
            "Failed to update skill",
        )
        .await
    }

    pub async fn delete_skill(&self, id: i64) -> Result<Deleted, PortfolioError> {
        self.delete(&["skills", &id.to_string()], "Failed to delete skill")
            .await
    }

    // ---- experience ----

    pub async fn list_experience(&self) -> Result<Vec<Experience>, PortfolioError> {
        self.get(&["experience"], "Failed to fetch experience")
            .await
    }

    pub async fn create_experience(
        &self,
        input: &ExperienceInput,
    ) -> Result<Created<i64>, PortfolioError> {
        self.with_body(
            Method::POST,
            &["experience"],
            input,
            "Failed to create experience",
        )
        .await
    }

    pub async fn update_experience(
        &self,
        id: i64,
        input: &ExperienceInput,
    ) -> Result<Updated, PortfolioError> {
        self.with_body(
            Method::PUT,
            &["experience", &id.to_string()],
            input,
            "Failed to update experience",
        )
        .await
    }

    pub async fn delete_experience(&self, id: i64) -> Result<Deleted, PortfolioError> {
        self.delete(
            &["experience", &id.to_string()],
            "Failed to delete experience",
        )
        .await
    }

    // ---- social ----

    pub async fn social_links(&self) -> Result<BTreeMap<String, Option<String>>, PortfolioError> {
        self.get(&["social"], "Failed to fetch social links").await
    }

    pub async fn update_social(&self, platform: &str, url: &str) -> Result<Ack, PortfolioError> {
        let body = SocialInput {
            url: Some(url.to_string()),
        };
        self.with_body(
            Method::PUT,
            &["social", platform],
            &body,
            "Failed to update social link",
        )
        .await
    }

    pub async fn health(&self) -> Result<Health, PortfolioError> {
        self.get(&["health"], "Health check failed").await
    }
}
