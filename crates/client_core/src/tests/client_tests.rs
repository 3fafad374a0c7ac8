use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use shared::domain::{SkillCategory, SkillId};
use tokio::net::TcpListener;

async fn skills_handler() -> Json<Vec<Skill>> {
    Json(vec![
        Skill {
            id: SkillId(1),
            name: "React".into(),
            rating: 93,
            category: SkillCategory::Frontend,
        },
        Skill {
            id: SkillId(5),
            name: "Node.js".into(),
            rating: 85,
            category: SkillCategory::Backend,
        },
    ])
}

async fn failing_handler() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::fetch_failed("projects")),
    )
}

async fn plain_failure() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "upstream down")
}

async fn spawn_portfolio_server() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new()
        .route("/api/skills", get(skills_handler))
        .route("/api/projects", get(failing_handler))
        .route("/api/news-items", get(plain_failure));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn fetches_skills_in_server_order() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    assert!(!client.server_url().ends_with('/'));
    let skills = client.skills().await.expect("skills");
    let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["React", "Node.js"]);
}

#[tokio::test]
async fn server_error_body_is_surfaced() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    match client.projects().await {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch projects");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_text() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    let err = client.news_items().await.expect_err("should fail");
    assert!(err.to_string().contains("502"), "{err}");
}

#[tokio::test]
async fn missing_route_is_a_server_error() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    let err = client.experiences().await.expect_err("should fail");
    assert!(matches!(err, ClientError::Server { status: 404, .. }));
}

#[tokio::test]
async fn load_state_tracks_outcome() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    let mut state: LoadState<Vec<Skill>> = LoadState::default();
    assert!(state.is_loading());

    state = LoadState::from_result(client.skills().await);
    assert_eq!(state.ready().map(Vec::len), Some(2));

    let failed: LoadState<Vec<Project>> = LoadState::from_result(client.projects().await);
    assert!(matches!(failed, LoadState::Failed(ref m) if m.contains("Failed to fetch projects")));
}

#[tokio::test]
async fn fetch_value_returns_raw_json() {
    let client = PortfolioClient::new(spawn_portfolio_server().await);
    let value = client.fetch_value(Collection::Skills).await.expect("value");
    assert_eq!(value[1]["category"], "backend");
}
