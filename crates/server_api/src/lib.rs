use std::sync::Arc;

use shared::{
    domain::{Experience, NewsItem, Project, ProjectCard, Skill},
    error::ApiError,
    protocol::Collection,
    theme::Theme,
};
use storage::PortfolioStore;
use tracing::error;

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Arc<dyn PortfolioStore>,
}

impl ApiContext {
    pub fn new(storage: impl PortfolioStore + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

pub async fn list_experiences(ctx: &ApiContext) -> Result<Vec<Experience>, ApiError> {
    ctx.storage
        .experiences()
        .await
        .map_err(|e| fetch_failed(Collection::Experiences, e))
}

pub async fn list_skills(ctx: &ApiContext) -> Result<Vec<Skill>, ApiError> {
    ctx.storage
        .skills()
        .await
        .map_err(|e| fetch_failed(Collection::Skills, e))
}

pub async fn list_project_cards(ctx: &ApiContext) -> Result<Vec<ProjectCard>, ApiError> {
    ctx.storage
        .project_cards()
        .await
        .map_err(|e| fetch_failed(Collection::ProjectCards, e))
}

pub async fn list_news_items(ctx: &ApiContext) -> Result<Vec<NewsItem>, ApiError> {
    ctx.storage
        .news_items()
        .await
        .map_err(|e| fetch_failed(Collection::NewsItems, e))
}

pub async fn list_projects(ctx: &ApiContext) -> Result<Vec<Project>, ApiError> {
    ctx.storage
        .projects()
        .await
        .map_err(|e| fetch_failed(Collection::Projects, e))
}

pub async fn list_themes(ctx: &ApiContext) -> Result<Vec<Theme>, ApiError> {
    ctx.storage
        .themes()
        .await
        .map_err(|e| fetch_failed(Collection::Themes, e))
}

pub async fn health(ctx: &ApiContext) -> Result<(), ApiError> {
    ctx.storage.health_check().await.map_err(|e| {
        error!(error = %e, "store health check failed");
        ApiError::new("store unavailable")
    })
}

/// Logs the cause and collapses it into the generic per-collection message.
fn fetch_failed(collection: Collection, cause: anyhow::Error) -> ApiError {
    error!(collection = collection.label(), error = %cause, "failed to read collection");
    ApiError::fetch_failed(collection.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use storage::MemStorage;

    struct BrokenStore;

    #[async_trait]
    impl PortfolioStore for BrokenStore {
        async fn experiences(&self) -> Result<Vec<Experience>> {
            Err(anyhow!("disk on fire"))
        }
        async fn skills(&self) -> Result<Vec<Skill>> {
            Err(anyhow!("disk on fire"))
        }
        async fn project_cards(&self) -> Result<Vec<ProjectCard>> {
            Err(anyhow!("disk on fire"))
        }
        async fn news_items(&self) -> Result<Vec<NewsItem>> {
            Err(anyhow!("disk on fire"))
        }
        async fn projects(&self) -> Result<Vec<Project>> {
            Err(anyhow!("disk on fire"))
        }
        async fn themes(&self) -> Result<Vec<Theme>> {
            Err(anyhow!("disk on fire"))
        }
        async fn health_check(&self) -> Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    #[tokio::test]
    async fn lists_seeded_collections() {
        let ctx = ApiContext::new(MemStorage::seeded());
        assert_eq!(list_experiences(&ctx).await.expect("experiences").len(), 3);
        assert_eq!(list_skills(&ctx).await.expect("skills").len(), 6);
        assert_eq!(list_project_cards(&ctx).await.expect("cards").len(), 6);
        assert_eq!(list_news_items(&ctx).await.expect("news").len(), 4);
        assert_eq!(list_projects(&ctx).await.expect("projects").len(), 5);
        assert_eq!(list_themes(&ctx).await.expect("themes").len(), 5);
        health(&ctx).await.expect("healthy");
    }

    #[tokio::test]
    async fn store_failures_become_generic_messages() {
        let ctx = ApiContext::new(BrokenStore);
        let err = list_project_cards(&ctx).await.expect_err("should fail");
        assert_eq!(err.error, "Failed to fetch project cards");
        let err = list_news_items(&ctx).await.expect_err("should fail");
        assert_eq!(err.error, "Failed to fetch news items");
        let err = list_experiences(&ctx).await.expect_err("should fail");
        assert!(!err.error.contains("disk"));
        assert!(health(&ctx).await.is_err());
    }
}
