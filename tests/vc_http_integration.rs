//! Integration tests for the VC portfolio endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{app, get, post, FOUNDER, VC};

async fn add_company(app: &axum::Router, body: Value) -> String {
    let (status, body) = post(app, "/api/vc/companies", VC, body).await;
    assert_eq!(status, StatusCode::CREATED);
    body["company"]["id"].as_str().unwrap().to_string()
}

fn ids(bucket: &Value) -> Vec<&str> {
    bucket
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn first_read_opens_an_empty_portfolio() {
    let app = app();

    let (status, body) = get(&app, "/api/vc/portfolio", VC).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["portfolio"]["vc_user_id"], "vc-1");
    assert_eq!(body["portfolio"]["companies"], json!([]));
    assert_eq!(body["portfolio"]["pipeline"]["applicants"], json!([]));
    assert_eq!(body["portfolio"]["pipeline"]["dueDiligence"], json!([]));
}

#[tokio::test]
async fn added_company_lands_in_applicants() {
    let app = app();

    let id = add_company(&app, json!({"id": "acme", "name": "Acme", "stage": "Seed"})).await;
    assert_eq!(id, "acme");

    let (status, body) = get(&app, "/api/vc/pipeline", VC).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["pipeline"]["applicants"]), vec!["acme"]);
    assert!(body["pipeline"]["applicants"][0]["movedAt"].is_string());
}

#[tokio::test]
async fn company_without_id_gets_one() {
    let app = app();

    let id = add_company(&app, json!({"name": "Nameless"})).await;

    assert!(!id.is_empty());
}

#[tokio::test]
async fn moving_a_company_transfers_it_between_buckets() {
    let app = app();
    add_company(&app, json!({"id": "acme", "name": "Acme"})).await;

    let (status, body) = post(
        &app,
        "/api/vc/pipeline/move",
        VC,
        json!({"companyId": "acme", "fromStage": "applicants", "toStage": "underReview"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Company moved successfully");
    assert!(ids(&body["pipeline"]["applicants"]).is_empty());
    assert_eq!(ids(&body["pipeline"]["underReview"]), vec!["acme"]);
}

#[tokio::test]
async fn moving_from_the_wrong_bucket_is_not_found() {
    let app = app();
    add_company(&app, json!({"id": "acme"})).await;

    let (status, _) = post(
        &app,
        "/api/vc/pipeline/move",
        VC,
        json!({"companyId": "acme", "fromStage": "dueDiligence", "toStage": "invested"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/api/vc/pipeline", VC).await;
    assert_eq!(ids(&body["pipeline"]["applicants"]), vec!["acme"]);
    assert!(ids(&body["pipeline"]["invested"]).is_empty());
}

#[tokio::test]
async fn unknown_stage_is_a_bad_request() {
    let app = app();
    add_company(&app, json!({"id": "acme"})).await;

    let (status, body) = post(
        &app,
        "/api/vc/pipeline/move",
        VC,
        json!({"companyId": "acme", "fromStage": "applicants", "toStage": "closed"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn analytics_summarize_companies() {
    let app = app();

    let (status, body) = get(&app, "/api/vc/analytics", VC).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analytics"]["totalCompanies"], 0);
    assert_eq!(body["analytics"]["averageHealthScore"], 0.0);

    add_company(
        &app,
        json!({"id": "a", "stage": "Seed", "investment": 100000.0, "healthScore": 80.0}),
    )
    .await;
    add_company(&app, json!({"id": "b", "investment": 50000.0, "healthScore": 60.0})).await;

    let (_, body) = get(&app, "/api/vc/analytics", VC).await;
    let analytics = &body["analytics"];
    assert_eq!(analytics["totalCompanies"], 2);
    assert_eq!(analytics["totalInvested"], 150000.0);
    assert_eq!(analytics["averageHealthScore"], 70.0);
    assert_eq!(analytics["stageDistribution"]["Seed"], 1);
    assert_eq!(analytics["stageDistribution"]["unknown"], 1);
}

#[tokio::test]
async fn insights_are_generated_and_stored_on_the_company() {
    let app = app();
    add_company(
        &app,
        json!({"id": "acme", "name": "Acme", "stage": "Series A", "metrics": {"revenue": 120000}}),
    )
    .await;

    let (status, body) = get(&app, "/api/vc/ai-insights/acme", VC).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["aiInsights"].is_null());

    let (status, body) = post(&app, "/api/vc/ai-insights/acme", VC, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["aiInsights"]["healthScore"].is_number());
    assert_eq!(body["company"]["name"], "Acme");

    let (_, body) = get(&app, "/api/vc/ai-insights/acme", VC).await;
    assert!(body["aiInsights"].is_object());
    assert!(body["company"]["aiInsights"].is_object());
}

#[tokio::test]
async fn insights_for_unknown_company_are_not_found() {
    let app = app();

    let (status, _) = get(&app, "/api/vc/ai-insights/ghost", VC).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    add_company(&app, json!({"id": "acme"})).await;
    let (status, _) = post(&app, "/api/vc/ai-insights/ghost", VC, json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vc_routes_reject_founders() {
    let app = app();

    for uri in ["/api/vc/portfolio", "/api/vc/pipeline", "/api/vc/analytics"] {
        let (status, _) = get(&app, uri, FOUNDER).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{}", uri);
    }
}
