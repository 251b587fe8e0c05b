use axum::body::Body;
use axum::http::Request;
use client::routes::{AccessLevel, ROUTES};
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("storefront").build()
}

async fn fetch(path: &str) -> (StatusCode, String) {
    let request = Request::get(path).body(Body::empty()).unwrap();
    let response = app(test_options()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn status_of(path: &str) -> StatusCode {
    fetch(path).await.0
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn every_table_route_is_server_rendered() {
    for route in ROUTES {
        let path = route.href("1");
        assert_eq!(status_of(&path).await, StatusCode::OK, "{}", route.name);
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    assert_eq!(status_of("/definitely-not-a-page").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_pages_render_no_content_on_the_server() {
    for route in ROUTES.iter().filter(|r| r.access != AccessLevel::Public) {
        let (status, body) = fetch(&route.href("1")).await;
        assert_eq!(status, StatusCode::OK, "{}", route.name);
        assert!(!body.contains("page__title"), "{} rendered before the guard ran", route.name);
    }
}

#[tokio::test]
async fn public_pages_render_content_on_the_server() {
    for route in ROUTES.iter().filter(|r| r.access == AccessLevel::Public) {
        let (_, body) = fetch(&route.href("1")).await;
        assert!(body.contains("page__title"), "{} missing page content", route.name);
    }
}
