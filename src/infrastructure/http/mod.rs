//! HTTP routes: page shell, catalog page API and sprite files

mod page_routes;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::application::services::SPRITE_URL_PREFIX;
use crate::infrastructure::state::AppState;

const PAGE_SHELL: &str = include_str!("page.html");

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pages", post(page_routes::open_page))
        .route(
            "/api/pages/{page_id}",
            get(page_routes::get_page).delete(page_routes::close_page),
        )
        .route(
            "/api/pages/{page_id}/cards/{number}",
            get(page_routes::get_card),
        )
        .route(
            "/api/pages/{page_id}/cards/{number}/flip",
            post(page_routes::flip_card),
        )
        .route(
            "/api/pages/{page_id}/cards/{number}/sprite-failure",
            post(page_routes::report_sprite_failure),
        )
        .route(
            "/api/pages/{page_id}/cards/{number}/card-image-failure",
            post(page_routes::report_card_image_failure),
        )
}

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let sprites = ServeDir::new(&state.config.sprites_dir);

    Router::new()
        .route("/", get(page_shell))
        .route("/health", get(health_check))
        .merge(create_routes())
        .nest_service(SPRITE_URL_PREFIX, sprites)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn page_shell() -> Html<&'static str> {
    Html(PAGE_SHELL)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use axum::{
        body::Body,
        extract::State,
        http::{Request, StatusCode},
        Json,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    async fn fake_card_api(State(calls): State<Arc<AtomicUsize>>) -> Json<Value> {
        calls.fetch_add(1, Ordering::SeqCst);
        Json(serde_json::json!({
            "data": [
                {"rarity": "Uncommon", "images": {"large": "https://images.example/uncommon.png"}},
                {"rarity": "Ultra Rare", "images": {"small": "https://images.example/ultra.png"}}
            ]
        }))
    }

    async fn spawn_fake_card_api(calls: Arc<AtomicUsize>) -> String {
        let app = Router::new()
            .route("/v2/cards", get(fake_card_api))
            .with_state(calls);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{}/v2/cards", addr)
    }

    fn data_dir(creatures: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cardex-http-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        if let Some(creatures) = creatures {
            std::fs::write(dir.join("pokemon.json"), creatures).unwrap();
        }
        dir
    }

    async fn test_app(creatures: Option<&str>) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let dir = data_dir(creatures);
        let config = AppConfig {
            data_dir: dir.clone(),
            sprites_dir: dir,
            card_search_base_url: spawn_fake_card_api(calls.clone()).await,
            page_retention_minutes: 60,
            server_port: 0,
        };
        (build_router(Arc::new(AppState::new(config))), calls)
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        send_request(
            app,
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send_request(
            app,
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    const STARTERS: &str = r#"[
        {"number": 1, "name": "Bulbasaur"},
        {"number": 7, "name": "Squirtle"},
        {"number": 32, "name": "Nidoran♂"}
    ]"#;

    #[tokio::test]
    async fn test_health_and_shell() {
        let (app, _) = test_app(Some(STARTERS)).await;

        let (status, body) = send(&app, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));

        let (status, body) = send(&app, "GET", "/").await;
        assert_eq!(status, StatusCode::OK);
        let shell = body.as_str().unwrap();
        assert!(shell.contains("pokemon-grid"));
        assert!(shell.contains("JSON.stringify({ attempt })"));
        assert!(shell.contains("setTimeout(() => poll(number), 1000)"));
    }

    #[tokio::test]
    async fn test_open_page_renders_all_cards_without_lookup() {
        let (app, _) = test_app(Some(STARTERS)).await;

        let (status, page) = send(&app, "POST", "/api/pages").await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(page.get("error").is_none());
        let cards = page["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1]["label"], "#007");
        assert_eq!(cards[1]["sprite_url"], "/sprites/0007_squirtle.png");
    }

    #[tokio::test]
    async fn test_open_page_with_missing_catalog() {
        let (app, _) = test_app(None).await;

        let (status, page) = send(&app, "POST", "/api/pages").await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(page["error"], "Error loading Pokemon data");
        assert!(page["cards"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flip_resolves_card_once() {
        let (app, calls) = test_app(Some(STARTERS)).await;
        let (_, page) = send(&app, "POST", "/api/pages").await;
        let page_id = page["page_id"].as_str().unwrap().to_string();
        let flip = format!("/api/pages/{}/cards/7/flip", page_id);

        let (status, card) = send(&app, "POST", &flip).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(card["flip"], "flipped");

        let card_url = format!("/api/pages/{}/cards/7", page_id);
        let card = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let (_, card) = send(&app, "GET", &card_url).await;
                if card["back"]["state"] != "loading" {
                    return card;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();
        assert_eq!(card["back"]["state"], "resolved");
        assert_eq!(card["back"]["image_url"], "https://images.example/ultra.png");

        send(&app, "POST", &flip).await;
        let (_, card) = send(&app, "POST", &flip).await;
        assert_eq!(card["flip"], "flipped");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sprite_failure_sequence() {
        let (app, _) = test_app(Some(STARTERS)).await;
        let (_, page) = send(&app, "POST", "/api/pages").await;
        let url = format!(
            "/api/pages/{}/cards/32/sprite-failure",
            page["page_id"].as_str().unwrap()
        );

        let primary = serde_json::json!({"attempt": "primary"});

        let (_, first) = send_json(&app, &url, primary.clone()).await;
        assert_eq!(first["outcome"]["action"], "retry");
        assert_eq!(first["outcome"]["url"], "/sprites/0032_nidoran-m.png");

        let (_, stale) = send_json(&app, &url, primary).await;
        assert_eq!(stale["outcome"]["action"], "ignored");
        assert_eq!(stale["card"]["sprite_state"], "alternate");
        assert_eq!(stale["card"]["sprite_url"], "/sprites/0032_nidoran-m.png");

        let (_, second) = send_json(&app, &url, serde_json::json!({"attempt": "alternate"})).await;
        assert_eq!(second["outcome"]["action"], "errored");
        assert_eq!(second["card"]["sprite_state"], "errored");
    }

    #[tokio::test]
    async fn test_sprite_failure_requires_attempt() {
        let (app, _) = test_app(Some(STARTERS)).await;
        let (_, page) = send(&app, "POST", "/api/pages").await;
        let url = format!(
            "/api/pages/{}/cards/32/sprite-failure",
            page["page_id"].as_str().unwrap()
        );

        let (status, _) = send(&app, "POST", &url).await;
        assert!(status.is_client_error());

        let card_url = format!("/api/pages/{}/cards/32", page["page_id"].as_str().unwrap());
        let (_, card) = send(&app, "GET", &card_url).await;
        assert_eq!(card["sprite_state"], "primary");
    }

    #[tokio::test]
    async fn test_unknown_and_invalid_ids() {
        let (app, _) = test_app(Some(STARTERS)).await;
        let (_, page) = send(&app, "POST", "/api/pages").await;
        let page_id = page["page_id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, "GET", "/api/pages/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown = format!("/api/pages/{}", uuid::Uuid::new_v4());
        let (status, _) = send(&app, "GET", &unknown).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "POST", &format!("/api/pages/{}/cards/0/flip", page_id)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "POST", &format!("/api/pages/{}/cards/25/flip", page_id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_close_page() {
        let (app, _) = test_app(Some(STARTERS)).await;
        let (_, page) = send(&app, "POST", "/api/pages").await;
        let url = format!("/api/pages/{}", page["page_id"].as_str().unwrap());

        let (status, _) = send(&app, "DELETE", &url).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &url).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &url).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
