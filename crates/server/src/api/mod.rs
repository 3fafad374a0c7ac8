use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use shared::{
    domain::{Experience, NewsItem, Project, ProjectCard, Skill},
    error::ApiError,
    theme::Theme,
};

use crate::app_state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn internal(error: ApiError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
}

pub(crate) async fn healthz(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, (StatusCode, Json<ApiError>)> {
    server_api::health(&state.api).await.map_err(internal)?;
    Ok("ok")
}

pub(crate) async fn experiences(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Experience>> {
    server_api::list_experiences(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

pub(crate) async fn skills(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Skill>> {
    server_api::list_skills(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

pub(crate) async fn project_cards(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<ProjectCard>> {
    server_api::list_project_cards(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

pub(crate) async fn news_items(State(state): State<Arc<AppState>>) -> ApiResult<Vec<NewsItem>> {
    server_api::list_news_items(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

pub(crate) async fn projects(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Project>> {
    server_api::list_projects(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

pub(crate) async fn themes(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Theme>> {
    server_api::list_themes(&state.api)
        .await
        .map(Json)
        .map_err(internal)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
