use super::*;
use crate::config::ServerConfig;
use axum::Router;
use axum::routing::get;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(url: &str) -> AppState {
    let url = url.to_owned();
    let config = ServerConfig::from_lookup(move |key| match key {
        "PORTAL_BACKEND_URL" => Some(url.clone()),
        "PORTAL_ANON_KEY" => Some("anon-123".to_owned()),
        "PORTAL_HEALTH_TIMEOUT_SECS" => Some("2".to_owned()),
        _ => None,
    })
    .unwrap();
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn backend_health_ok_when_backend_answers() {
    let url = serve(Router::new().route(
        "/auth/v1/health",
        get(|headers: axum::http::HeaderMap| async move {
            if headers.get("apikey").is_some_and(|v| v == "anon-123") {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            }
        }),
    ))
    .await;

    let (status, Json(body)) = backend_health(State(state_for(&url))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, BackendHealth { status: "ok".to_owned(), error: None });
}

#[tokio::test]
async fn backend_health_reports_backend_status() {
    let url = serve(Router::new().route("/auth/v1/health", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))).await;

    let (status, Json(body)) = backend_health(State(state_for(&url))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.status, "unavailable");
    assert_eq!(body.error.as_deref(), Some("backend responded 503"));
}

#[tokio::test]
async fn backend_health_reports_unreachable_backend() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, Json(body)) = backend_health(State(state_for(&format!("http://{addr}")))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.error.is_some());
}

#[test]
fn backend_health_omits_absent_error() {
    let json = serde_json::to_value(BackendHealth { status: "ok".to_owned(), error: None }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}
