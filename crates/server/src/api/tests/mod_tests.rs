use super::*;
use server_api::ApiContext;
use storage::{Collections, MemStorage};

fn state_with(storage: MemStorage) -> State<Arc<AppState>> {
    State(Arc::new(AppState {
        api: ApiContext::new(storage),
        static_dir: None,
    }))
}

#[tokio::test]
async fn experiences_handler_returns_store_order() {
    let Json(records) = experiences(state_with(MemStorage::seeded()))
        .await
        .expect("experiences");
    let companies: Vec<_> = records.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, ["AngelOne", "Innovaccer", "Internshala"]);
}

#[tokio::test]
async fn handlers_return_empty_arrays_for_empty_collections() {
    let storage = MemStorage::new(Collections::default());
    let Json(cards) = project_cards(state_with(storage.clone()))
        .await
        .expect("cards");
    assert!(cards.is_empty());
    let Json(items) = news_items(state_with(storage)).await.expect("news");
    assert!(items.is_empty());
}

#[tokio::test]
async fn healthz_handler_reports_ok() {
    let body = healthz(state_with(MemStorage::empty())).await.expect("health");
    assert_eq!(body, "ok");
}

#[test]
fn internal_maps_to_500_with_body() {
    let (status, Json(body)) = internal(ApiError::fetch_failed("projects"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to fetch projects");
}
