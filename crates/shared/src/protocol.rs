//! Route table shared by the server and the HTTP client.

pub const EXPERIENCES_ROUTE: &str = "/api/experiences";
pub const SKILLS_ROUTE: &str = "/api/skills";
pub const PROJECT_CARDS_ROUTE: &str = "/api/project-cards";
pub const NEWS_ITEMS_ROUTE: &str = "/api/news-items";
pub const PROJECTS_ROUTE: &str = "/api/projects";
pub const THEMES_ROUTE: &str = "/api/themes";
pub const HEALTH_ROUTE: &str = "/healthz";

/// Collections exposed by the API, in route-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Experiences,
    Skills,
    ProjectCards,
    NewsItems,
    Projects,
    Themes,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Experiences,
        Collection::Skills,
        Collection::ProjectCards,
        Collection::NewsItems,
        Collection::Projects,
        Collection::Themes,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Collection::Experiences => EXPERIENCES_ROUTE,
            Collection::Skills => SKILLS_ROUTE,
            Collection::ProjectCards => PROJECT_CARDS_ROUTE,
            Collection::NewsItems => NEWS_ITEMS_ROUTE,
            Collection::Projects => PROJECTS_ROUTE,
            Collection::Themes => THEMES_ROUTE,
        }
    }

    /// Human name used in the generic failure message.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Experiences => "experiences",
            Collection::Skills => "skills",
            Collection::ProjectCards => "project cards",
            Collection::NewsItems => "news items",
            Collection::Projects => "projects",
            Collection::Themes => "themes",
        }
    }
}
