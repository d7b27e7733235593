//! Drives the full router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use labsite_web::router::build_router;
use labsite_web::state::AppState;

fn app() -> Router {
    build_router(AppState::demo().expect("demo state"))
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

#[tokio::test]
async fn homepage_renders_all_cards() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"card pub-card\"").count(), 3);
    assert_eq!(html.matches("class=\"card person-card\"").count(), 4);
    assert!(html.contains("data-complete=\"true\""));
}

#[tokio::test]
async fn homepage_applies_query_filters() {
    let (status, html) = get("/?q=2d&year=All&role=PhD").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"card pub-card\"").count(), 1);
    assert!(html.contains("data-key=\"3\""));
    assert_eq!(html.matches("class=\"card person-card\"").count(), 1);
    assert!(html.contains("data-key=\"C. Student\""));
    assert!(html.contains("value=\"2d\""));
}

#[tokio::test]
async fn homepage_shows_placeholder_for_no_matches() {
    let (status, html) = get("/?q=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p class=\"muted\">No publications match your filter.</p>"));
    assert_eq!(html.matches("class=\"card pub-card\"").count(), 0);
}

#[tokio::test]
async fn homepage_rejects_unknown_year() {
    let (status, body) = get_json("/?year=recent").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid year: recent");
}

#[tokio::test]
async fn api_publications_filters_by_year_and_text() {
    let (status, body) = get_json("/api/publications?q=JANA&year=2014").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["year"], "2014");
    assert_eq!(body["items"][0]["id"], "2");
    assert_eq!(body["items"][0]["doi"], "10.xxxx/xxxxx");
}

#[tokio::test]
async fn api_publications_defaults_to_everything() {
    let (status, body) = get_json("/api/publications").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["items"]
        .as_array()
        .expect("items")
        .iter()
        .map(|p| p["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(body["year"], "All");
}

#[tokio::test]
async fn api_year_options_descending() {
    let (status, body) = get_json("/api/publications/years").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["All", "2018", "2014", "2009"]));
}

#[tokio::test]
async fn api_people_by_role() {
    let (status, body) = get_json("/api/people?role=Alumni").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Alumni");
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "D. Alum");
    assert_eq!(body["items"][0]["year"], 2024);

    let (_, everyone) = get_json("/api/people?role=All").await;
    assert_eq!(everyone["total"], 4);
}

#[tokio::test]
async fn api_people_rejects_unknown_role() {
    let (status, body) = get_json("/api/people?role=Dean").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown role: Dean");
}

#[tokio::test]
async fn api_courses_and_research_in_order() {
    let (_, courses) = get_json("/api/courses").await;
    assert_eq!(courses[0]["code"], "PHYS 6xx");
    assert_eq!(courses[1]["code"], "PHYS 7xx");

    let (_, research) = get_json("/api/research").await;
    assert_eq!(research.as_array().expect("areas").len(), 4);
    assert_eq!(research[0]["title"], "Condensed-Matter Physics");
}

#[tokio::test]
async fn static_assets_and_health() {
    let (status, css) = get("/static/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains(".pub-card") || css.contains(".card"));

    let (status, js) = get("/static/js/filter.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(js.contains("data-complete") || js.contains("dataset.complete"));

    let (status, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, body) = get_json("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no route for /nope");
}

#[tokio::test]
async fn public_dir_serves_files_and_json_404() {
    let public = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(public.path().join("img")).expect("mkdir");
    std::fs::write(public.path().join("img/pi.jpg"), b"jpeg").expect("write");

    let mut state = AppState::demo().expect("demo state");
    state.public_dir = Some(public.path().to_path_buf());
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/img/pi.jpg").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert_eq!(&bytes[..], b"jpeg");

    let response = app
        .oneshot(Request::builder().uri("/img/missing.jpg").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["error"], "no route for /img/missing.jpg");
}

#[tokio::test]
async fn homepage_keeps_unlisted_year_selected() {
    let (status, html) = get("/?year=1999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<option value=\"1999\" selected>1999</option>"));
    assert_eq!(html.matches(" selected>").count(), 1);
    assert!(html.contains("<p class=\"muted\">No publications match your filter.</p>"));
}
