//! Shared helpers for route flow tests: a one-endpoint mock backend and
//! request builders for driving the router with `tower::ServiceExt`.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::config::Config;
use crate::state::AppState;

/// A spawned mock backend endpoint.
#[derive(Clone)]
pub struct MockBackend {
    /// Base URL of the mock backend.
    pub url: String,
    /// Decoded bodies of the requests received, in order.
    pub captured: Arc<Mutex<Vec<Value>>>,
    /// Number of requests received.
    pub hits: Arc<AtomicUsize>,
}

#[derive(Clone)]
struct MockServerState {
    captured: Arc<Mutex<Vec<Value>>>,
    hits: Arc<AtomicUsize>,
    response: Value,
}

async fn capture_json(
    State(state): State<MockServerState>,
    body: String,
) -> Json<Value> {
    state.hits.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.captured.lock().unwrap().push(parsed);
    Json(state.response.clone())
}

async fn capture_multipart(
    State(state): State<MockServerState>,
    mut multipart: Multipart,
) -> Json<Value> {
    state.hits.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let mut fields = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, Value::String(value));
    }
    state.captured.lock().unwrap().push(Value::Object(fields));
    Json(state.response.clone())
}

async fn spawn(path: &'static str, multipart: bool, response: Value) -> MockBackend {
    static NO_PROXY: std::sync::Once = std::sync::Once::new();
    NO_PROXY.call_once(|| std::env::set_var("NO_PROXY", "127.0.0.1,localhost"));
    let state = MockServerState {
        captured: Arc::new(Mutex::new(Vec::new())),
        hits: Arc::new(AtomicUsize::new(0)),
        response,
    };
    let backend = MockBackend {
        url: String::new(),
        captured: state.captured.clone(),
        hits: state.hits.clone(),
    };
    let handler = if multipart {
        post(capture_multipart)
    } else {
        post(capture_json)
    };
    let app = Router::new().route(path, handler).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    MockBackend {
        url: format!("http://{addr}"),
        ..backend
    }
}

/// Spawn a mock backend serving one JSON endpoint.
pub async fn spawn_json_backend(path: &'static str, response: Value) -> MockBackend {
    spawn(path, false, response).await
}

/// Spawn a mock backend serving one multipart endpoint.
pub async fn spawn_multipart_backend(path: &'static str, response: Value) -> MockBackend {
    spawn(path, true, response).await
}

/// Application state pointed at the given backend URL.
pub fn test_state(backend_url: &str) -> AppState {
    AppState::new(Config {
        bind_addr: String::new(),
        backend_url: backend_url.trim_end_matches('/').to_string(),
        site_name: "SmartChef".to_string(),
        csrf_token: "test-token".to_string(),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

/// Drive a GET request through the router.
pub async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Drive an urlencoded form POST through the router.
pub async fn post_form(app: Router, path: &str, pairs: &[(&str, &str)]) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(form_encode(pairs)))
        .unwrap();
    send(app, request).await
}

/// Drive a multipart form POST through the router.
pub async fn post_multipart(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
) -> (StatusCode, String) {
    let boundary = "smartchef-test-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Encode form pairs the way a browser would.
fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn urlencode(value: &str) -> String {
    let mut out = String::new();
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
