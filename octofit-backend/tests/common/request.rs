// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

/// JSONボディ付きのHTTPリクエストを作成
pub fn json_request<T: Serialize>(method: &str, uri: &str, body: &T) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let body_json = serde_json::to_string(body).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body_json))
        .unwrap()
}

/// ボディなしのHTTPリクエストを作成
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// リクエストを送り、ステータスとJSONボディを返す（空ボディは Null）
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).to_string()));
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request("GET", uri)).await
}

pub async fn post<T: Serialize>(app: &Router, uri: &str, body: &T) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put<T: Serialize>(app: &Router, uri: &str, body: &T) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, body)).await
}

pub async fn patch<T: Serialize>(app: &Router, uri: &str, body: &T) -> (StatusCode, Value) {
    send(app, json_request("PATCH", uri, body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request("DELETE", uri)).await
}
