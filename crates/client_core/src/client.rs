use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Experience, NewsItem, Project, ProjectCard, Skill},
    error::ApiError,
    protocol::Collection,
    theme::Theme,
};
use tracing::warn;

use crate::error::ClientError;

/// What a view shows for a request: a spinner, the data, or an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct PortfolioClient {
    http: Client,
    server_url: String,
}

impl PortfolioClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn experiences(&self) -> Result<Vec<Experience>, ClientError> {
        self.fetch(Collection::Experiences).await
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.fetch(Collection::Skills).await
    }

    pub async fn project_cards(&self) -> Result<Vec<ProjectCard>, ClientError> {
        self.fetch(Collection::ProjectCards).await
    }

    pub async fn news_items(&self) -> Result<Vec<NewsItem>, ClientError> {
        self.fetch(Collection::NewsItems).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ClientError> {
        self.fetch(Collection::Projects).await
    }

    pub async fn themes(&self) -> Result<Vec<Theme>, ClientError> {
        self.fetch(Collection::Themes).await
    }

    /// Raw JSON for any collection, for tooling that does not care about the
    /// record type.
    pub async fn fetch_value(&self, collection: Collection) -> Result<serde_json::Value, ClientError> {
        self.fetch_json(collection).await
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, ClientError> {
        self.fetch_json(collection).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, collection: Collection) -> Result<T, ClientError> {
        let url = format!("{}{}", self.server_url, collection.route());
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            warn!(%url, status = status.as_u16(), %message, "portfolio request failed");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
