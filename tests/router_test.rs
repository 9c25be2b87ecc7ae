use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use launch_dash::data::model::{LaunchDataset, LaunchRecord, Outcome};
use launch_dash::DashboardApp;

fn make_app() -> DashboardApp {
    let dataset = LaunchDataset::from_records(vec![
        LaunchRecord::new("CCAFS", 5000.0, Outcome::Success, "v1.0"),
        LaunchRecord::new("KSC", 3000.0, Outcome::Failure, "v1.1"),
        LaunchRecord::new("CCAFS", 8000.0, Outcome::Success, "v1.1"),
    ])
    .expect("non-empty dataset");
    DashboardApp::new(dataset)
}

async fn get(app: &DashboardApp, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &DashboardApp, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn index_serves_layout_with_initial_charts() {
    let app = make_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("SpaceX Launch Records Dashboard"));
    assert!(page.contains(r#"<option value="KSC">KSC</option>"#));
    assert!(page.contains(r#"id="payload-slider-low""#));
    assert!(page.contains("<svg"));
}

#[tokio::test]
async fn pie_endpoint_all_sites() {
    let app = make_app();
    let fig = get_json(&app, "/api/pie?site=ALL&low=0&high=6000").await;

    assert_eq!(fig["title"], "Total Success Launches for All Sites");
    let slices = fig["slices"].as_array().unwrap();
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0]["label"], "CCAFS");
    assert_eq!(slices[0]["count"], 1);
    assert!(fig["svg"].as_str().unwrap().starts_with("<svg"));
}

#[tokio::test]
async fn pie_endpoint_single_site() {
    let app = make_app();
    let fig = get_json(&app, "/api/pie?site=CCAFS&low=0&high=10000").await;

    assert_eq!(fig["title"], "Total Success and Failure Launches for site CCAFS");
    let total: u64 = fig["slices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 2);
}

#[tokio::test]
async fn scatter_endpoint_projects_each_row() {
    let app = make_app();
    let fig = get_json(&app, "/api/scatter?site=ALL&low=0&high=6000").await;

    assert_eq!(fig["title"], "Payload vs. Outcome for All Sites");
    let points = fig["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["payload_mass_kg"], 5000.0);
    assert_eq!(points[0]["class"], 1);
    assert_eq!(points[1]["booster_version_category"], "v1.1");
}

#[tokio::test]
async fn missing_query_uses_initial_selection() {
    let app = make_app();
    let fig = get_json(&app, "/api/scatter").await;
    assert_eq!(fig["points"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn reversed_range_is_normalized() {
    let app = make_app();
    let forward = get_json(&app, "/api/pie?site=ALL&low=2000&high=9000").await;
    let reversed = get_json(&app, "/api/pie?site=ALL&low=9000&high=2000").await;
    assert_eq!(forward, reversed);
}

#[tokio::test]
async fn empty_selection_is_not_an_error() {
    let app = make_app();
    let fig = get_json(&app, "/api/pie?site=VAFB&low=0&high=10000").await;
    assert!(fig["slices"].as_array().unwrap().is_empty());
    assert!(fig["svg"].as_str().unwrap().contains("No data"));
}

#[tokio::test]
async fn blank_site_is_a_site_not_all() {
    let app = make_app();
    let fig = get_json(&app, "/api/pie?site=&low=0&high=10000").await;
    assert!(fig["slices"].as_array().unwrap().is_empty());
    assert_eq!(fig["title"], "Total Success and Failure Launches for site ");
}

#[tokio::test]
async fn bad_query_and_unknown_route() {
    let app = make_app();
    let (status, _) = get(&app, "/api/pie?low=heavy").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/telemetry").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
