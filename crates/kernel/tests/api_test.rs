#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Cross-cutting API integration tests: banner, info, health, metadata
//! discovery, namespace/organization lookups, diagnosis search, and the
//! JSON 404 fallback.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn root_banner() {
    let app = TestApp::new();
    let res = app.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], json!("Data Federation REST API"));
    assert_eq!(res.body["health"], json!("/health"));
}

#[tokio::test]
async fn info_reports_server_and_data_layer() {
    let app = TestApp::new();
    let res = app.get("/api/v1/info").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["server"]["environment"], json!("test"));
    assert!(res.body["server"]["time"].is_string());
    assert_eq!(res.body["data"]["version"], json!("seed-1.0.0"));
}

#[tokio::test]
async fn health_reports_redis_not_configured() {
    let app = TestApp::new();
    let res = app.get("/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], json!("healthy"));
    assert_eq!(
        res.body["services"]["redis"]["status"],
        json!("not_configured")
    );
}

#[tokio::test]
async fn liveness_and_readiness_probes() {
    let app = TestApp::new();

    let res = app.get("/health/liveness").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], json!("alive"));

    let res = app.get("/health/readiness").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], json!("ready"));
}

#[tokio::test]
async fn metadata_field_discovery() {
    let app = TestApp::new();

    let res = app.get("/api/v1/metadata/fields/subject").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body["fields"],
        json!(["sex", "race", "ethnicity", "vital_status"])
    );

    let res = app.get("/api/v1/metadata/fields/sample").await;
    assert_eq!(
        res.body["fields"],
        json!(["disease_phase", "tissue_type", "tumor_classification", "diagnosis"])
    );

    let res = app.get("/api/v1/metadata/fields/file").await;
    assert_eq!(res.body["fields"], json!(["type"]));
}

#[tokio::test]
async fn namespace_list_and_lookup() {
    let app = TestApp::new();

    let res = app.get("/api/v1/namespace").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 2);

    let res = app.get("/api/v1/namespace/ExampleOrg/StudyA").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["metadata"]["study_id"], json!("STUDY_A"));

    let res = app.get("/api/v1/namespace/ExampleOrg/StudyZ").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error()["kind"], json!("NotFound"));
    assert_eq!(res.error()["entity"], json!("Namespace"));
}

#[tokio::test]
async fn organization_list_and_lookup() {
    let app = TestApp::new();

    let res = app.get("/api/v1/organization").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 2);

    let res = app.get("/api/v1/organization/Treehouse").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["metadata"]["description"], json!("UCSC Treehouse"));

    let res = app.get("/api/v1/organization/NoSuchOrg").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error()["kind"], json!("NotFound"));
    assert_eq!(res.error()["id"], json!("NoSuchOrg"));
}

#[tokio::test]
async fn sample_diagnosis_search() {
    let app = TestApp::new();
    let res = app.get("/api/v1/sample-diagnosis?search=leuk").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["pagination"]["total"], json!(1));
    assert_eq!(res.body["data"][0]["diagnosis"], json!("Leukemia"));
    // The search term must survive into pagination links.
    assert!(res.link.unwrap().contains("search=leuk"));
}

#[tokio::test]
async fn subject_diagnosis_search_is_paginated() {
    let app = TestApp::new();
    let res = app
        .get("/api/v1/subject-diagnosis?search=o&page=2&per_page=1")
        .await;

    // "o" matches Lymphoma and Neuroblastoma carriers.
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["pagination"]["total"], json!(2));
    assert_eq!(res.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(res.body["data"][0]["name"], json!("SUBJ003"));
}

#[tokio::test]
async fn diagnosis_search_requires_term() {
    let app = TestApp::new();

    let res = app.get("/api/v1/sample-diagnosis").await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.error()["kind"], json!("InvalidParameters"));
    assert_eq!(res.error()["parameters"], json!(["search"]));

    let res = app.get("/api/v1/subject-diagnosis?search=").await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_gets_json_not_found() {
    let app = TestApp::new();
    let res = app.get("/api/v1/nonexistent").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error()["kind"], json!("NotFound"));
    assert_eq!(res.error()["entity"], json!("Route"));
    assert_eq!(res.error()["id"], json!("/api/v1/nonexistent"));
}
