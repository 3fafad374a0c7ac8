use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use shared::{
    domain::{
        Experience, ExperienceId, NewsItem, NewsItemId, Project, ProjectCard, ProjectCardId,
        ProjectId, Skill, SkillCategory, SkillId,
    },
    theme::{default_themes, Theme},
};

mod seed;

/// Read-only provider of the portfolio collections. Every collection is an
/// order-preserving sequence; nothing is written at runtime.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn experiences(&self) -> Result<Vec<Experience>>;
    async fn skills(&self) -> Result<Vec<Skill>>;
    async fn project_cards(&self) -> Result<Vec<ProjectCard>>;
    async fn news_items(&self) -> Result<Vec<NewsItem>>;
    async fn projects(&self) -> Result<Vec<Project>>;
    async fn themes(&self) -> Result<Vec<Theme>>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub experiences: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub project_cards: Vec<ProjectCard>,
    pub news_items: Vec<NewsItem>,
    pub projects: Vec<Project>,
    pub themes: Vec<Theme>,
}

/// In-memory store. Clones share the same immutable collections.
#[derive(Debug, Clone)]
pub struct MemStorage {
    data: Arc<Collections>,
}

impl MemStorage {
    pub fn new(collections: Collections) -> Self {
        Self {
            data: Arc::new(collections),
        }
    }

    pub fn empty() -> Self {
        Self::new(Collections::default())
    }

    /// Store holding the published portfolio content.
    pub fn seeded() -> Self {
        Self::new(Collections {
            experiences: seed::experiences(),
            skills: seed::skills(),
            project_cards: seed::project_cards(),
            news_items: seed::news_items(),
            projects: seed::projects(),
            themes: default_themes(),
        })
    }

    pub fn collections(&self) -> &Collections {
        &self.data
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PortfolioStore for MemStorage {
    async fn experiences(&self) -> Result<Vec<Experience>> {
        Ok(self.data.experiences.clone())
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        Ok(self.data.skills.clone())
    }

    async fn project_cards(&self) -> Result<Vec<ProjectCard>> {
        Ok(self.data.project_cards.clone())
    }

    async fn news_items(&self) -> Result<Vec<NewsItem>> {
        Ok(self.data.news_items.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.data.projects.clone())
    }

    async fn themes(&self) -> Result<Vec<Theme>> {
        Ok(self.data.themes.clone())
    }
}

fn experience(
    id: i64,
    company: &str,
    role: &str,
    period: &str,
    rating: u8,
    highlights: [&str; 3],
) -> Experience {
    Experience {
        id: ExperienceId(id),
        company: company.to_string(),
        role: role.to_string(),
        period: period.to_string(),
        rating,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        image_url: None,
        index: usize::try_from(id - 1).unwrap_or_default(),
    }
}

fn skill(id: i64, name: &str, rating: u8, category: SkillCategory) -> Skill {
    Skill {
        id: SkillId(id),
        name: name.to_string(),
        rating,
        category,
    }
}

fn project_card(id: i64, title: &str, metric: &str, color: &str, icon: &str) -> ProjectCard {
    ProjectCard {
        id: ProjectCardId(id),
        title: title.to_string(),
        metric: metric.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

fn news_item(id: i64, title: &str, description: &str, detail: &str, color: &str) -> NewsItem {
    NewsItem {
        id: NewsItemId(id),
        title: title.to_string(),
        description: description.to_string(),
        detail: detail.to_string(),
        color: color.to_string(),
    }
}

fn project(id: i64, name: &str, period: &str, link: &str) -> Project {
    Project {
        id: ProjectId(id),
        name: name.to_string(),
        period: period.to_string(),
        link: link.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
