mod common;

use axum::http::{StatusCode, header};
use common::{TestApp, parse_body};

#[tokio::test]
async fn demo_figures_without_catalog() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/api/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["derived"], false);
    assert_eq!(body["summary"]["totalMonthlySessions"], 222);
    assert_eq!(body["summary"]["mostActiveMonth"], "Mai");
    assert_eq!(body["monthly"].as_array().unwrap().len(), 12);
    assert_eq!(body["goals"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn figures_follow_the_catalog() {
    let app = TestApp::new();
    app.get_json("/api/admin/classes").await;

    let (_, body) = app.get_json("/api/statistics").await;
    assert_eq!(body["derived"], true);

    let values: Vec<u64> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["value"].as_u64().unwrap())
        .collect();
    assert_eq!(values, vec![33, 17, 33, 17]);
    assert_eq!(body["pie"].as_array().unwrap().len(), 4);
    assert_eq!(body["activity"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn category_chart_is_svg() {
    let app = TestApp::new();

    let res = app.request("GET", "/api/statistics/categories.svg", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "image/svg+xml");

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let svg = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<path"));

    // JSON helper copes with the empty body of a 404
    let missing = app.request("GET", "/api/statistics/missing", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(parse_body(missing).await.is_null());
}
