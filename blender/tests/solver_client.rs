//! HTTP client tests against a wiremock solver

mod common;

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blender::{OptimizationClient, RealOptimizationClient, RequestBuilder, RequestError};
use common::fixtures::{feasible_body, infeasible_body};
use common::helpers::{client_for, unreachable_url};
use shared::{Algorithm, AxisToggle, OptimizationParams, OptimizationRequest, TargetSelection, demo_inventory};

fn demo_request() -> OptimizationRequest {
    RequestBuilder::build(
        &demo_inventory(),
        &TargetSelection::default(),
        &OptimizationParams::default(),
        Algorithm::Hybrid,
    )
    .unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/v1/optimize"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_decodes_feasible_answer() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(feasible_body())).await;

    let result = client_for(&server).optimize(demo_request()).await.unwrap();

    assert!(result.feasible);
    assert_eq!(result.status.as_deref(), Some("OPTIMAL"));
    assert_eq!(result.composition["B1"], 0.6);
    assert_eq!(result.weight_distribution["B2"], 40.0);
    assert_eq!(result.similarity_score, 88.5);
    assert!(result.was_relaxed());
    assert_eq!(result.relaxation_trace.as_deref(), Some("relaxed flavorTolerance 0.5 -> 1.0"));
}

#[tokio::test]
async fn test_posts_json_with_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/optimize"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feasible_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut selection = TargetSelection::default();
    selection.bitter = AxisToggle::off();
    let request = RequestBuilder::build(
        &demo_inventory(),
        &selection,
        &OptimizationParams::default(),
        Algorithm::Hybrid,
    )
    .unwrap();

    client_for(&server).optimize(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();

    assert_eq!(body["algorithm"], "HYBRID");
    assert_eq!(body["target"]["mode"], "BALANCED");
    assert_eq!(body["target"]["targetAcid"], 5.5);
    assert_eq!(body["target"]["targetBitter"], -1);
    assert_eq!(body["target"]["minRatio"], 0.05);
    assert_eq!(body["batches"][0]["availableStock"], 1000.0);
    assert_eq!(body["batches"][0]["daysToExpiry"], 50);
    assert!(body["batches"][0].get("stock").is_none());
    assert_eq!(body["params"]["priceTolerance"], 5000.0);
}

#[tokio::test]
async fn test_decodes_infeasible_answer_without_maps() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(infeasible_body())).await;

    let result = client_for(&server).optimize(demo_request()).await.unwrap();

    assert!(!result.feasible);
    assert_eq!(result.status.as_deref(), Some("INFEASIBLE"));
    assert!(result.composition.is_empty());
    assert!(result.weight_distribution.is_empty());
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500).set_body_string("solver exploded")).await;

    let err = client_for(&server).optimize(demo_request()).await.unwrap_err();

    assert_eq!(
        err,
        RequestError::Status {
            status: 500,
            body: "solver exploded".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("{\"feasible\": tru")).await;

    let err = client_for(&server).optimize(demo_request()).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode { .. }));
}

#[tokio::test]
async fn test_body_without_feasible_is_decode_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("{\"status\": \"OPTIMAL\"}")).await;

    let err = client_for(&server).optimize(demo_request()).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_solver_is_transport_error() {
    let client = RealOptimizationClient::new(unreachable_url());

    let err = client.optimize(demo_request()).await.unwrap_err();
    assert!(matches!(err, RequestError::Transport { .. }));
}
