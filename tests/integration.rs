//! End-to-end tests for the settlement API.
//!
//! This test suite drives the router the way a client would and covers:
//! - Forward settlement at and below the legal minimum
//! - Reimbursement categories and their per-day placement
//! - Equipment rental and the vendor settlement
//! - Inverse settlement, with and without a search
//! - Output stability
//! - Error cases, including out-of-range inputs

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use performer_settlement::api::{AppState, create_router};
use performer_settlement::config::ConfigLoader;
use performer_settlement::models::{BEST_EFFORT_WARNING, MINIMUM_WAGE_WARNING};

const GROSS_TO_NET: &str = "/api/v1/simulations/gross-to-net";
const NET_TO_GROSS: &str = "/api/v1/simulations/net-to-gross";

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_raw(uri: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = post_raw(uri, &body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn categories(day: &Value) -> Vec<&str> {
    day["concepts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect()
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Forward settlement
// =============================================================================

#[tokio::test]
async fn test_minimum_day_breakdown() {
    let (status, json) = post(GROSS_TO_NET, json!({"principal_amount": 75.0})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["warnings"], json!([]));
    assert_close(&json["computed_parameters"]["gross_used"], 75.0);
    assert_close(&json["computed_parameters"]["net_received"], 49.25);

    let totals = &json["primary_breakdown"]["totals"];
    assert_close(&totals["gross"], 75.0);
    assert_close(&totals["commission"], 3.75);
    assert_close(&totals["cost"], 71.25);
    assert_close(&totals["social_security"], 21.0);
    assert_close(&totals["income_tax"], 1.01);
    assert_close(&totals["net"], 49.25);

    let per_day = json["primary_breakdown"]["per_day"].as_array().unwrap();
    assert_eq!(per_day.len(), 1);
    assert_eq!(categories(&per_day[0]), vec!["wage"]);

    assert_eq!(json["secondary_breakdown"]["applies"], false);
    assert!(json["secondary_breakdown"]["totals"].is_null());
}

#[tokio::test]
async fn test_gross_below_minimum_is_raised_with_warning() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 100.0, "work_days": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["warnings"], json!([MINIMUM_WAGE_WARNING]));
    assert_close(&json["computed_parameters"]["gross_used"], 150.0);
    assert_close(&json["computed_parameters"]["net_received"], 98.49);
}

#[tokio::test]
async fn test_reimbursements_spread_over_days() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({
            "principal_amount": 1000,
            "work_days": 3,
            "total_mileage": 100,
            "per_diem_days": 2,
            "per_diem_kind": "national"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let per_day = json["primary_breakdown"]["per_day"].as_array().unwrap();
    assert_eq!(per_day.len(), 3);
    assert_eq!(categories(&per_day[0]), vec!["wage", "mileage", "per_diem"]);
    assert_eq!(categories(&per_day[1]), vec!["wage", "mileage", "per_diem"]);
    assert_eq!(categories(&per_day[2]), vec!["wage", "mileage"]);

    let mileage = &per_day[0]["concepts"][1];
    assert_close(&mileage["gross"], 27.37);
    assert_close(&mileage["commission"], 1.37);
    assert_close(&mileage["net"], 26.0);
    assert!(mileage.get("social_security").is_none());
    assert!(mileage.get("income_tax").is_none());

    // residual 636.7428 on top of the last day's minimum
    assert_close(&per_day[2]["concepts"][0]["gross"], 711.74);
    assert_close(&per_day[0]["concepts"][0]["gross"], 75.0);

    assert_close(&json["primary_breakdown"]["totals"]["gross"], 1000.0);
}

#[tokio::test]
async fn test_justified_expenses_paid_as_lump() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 175, "justified_expenses": 100}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let expenses = &json["primary_breakdown"]["justified_expenses"];
    assert_close(&expenses["gross"], 100.0);
    assert_close(&expenses["commission"], 5.0);
    assert_close(&expenses["taxable_base"], 95.0);
    assert_close(&expenses["net"], 95.0);
    assert_close(&json["primary_breakdown"]["totals"]["net"], 144.25);
    assert_close(&json["computed_parameters"]["net_received"], 144.25);
}

#[tokio::test]
async fn test_justified_expenses_zero_when_not_requested() {
    let (_, json) = post(GROSS_TO_NET, json!({"principal_amount": 500})).await;

    let expenses = &json["primary_breakdown"]["justified_expenses"];
    assert_close(&expenses["gross"], 0.0);
    assert_close(&expenses["net"], 0.0);
}

// =============================================================================
// Equipment rental
// =============================================================================

#[tokio::test]
async fn test_rental_settled_through_vendor() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({
            "principal_amount": 275,
            "equipment_rental": [{"equipment_id": "speakers", "quantity": 2}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let concepts = &json["primary_breakdown"]["per_day"][0]["concepts"];
    assert_eq!(concepts[1]["category"], "equipment_rental");
    assert_eq!(concepts[1]["net"], "via-secondary");
    assert_close(&concepts[1]["gross"], 200.0);

    // rental is excluded from the primary net
    assert_close(&json["primary_breakdown"]["totals"]["gross"], 275.0);
    assert_close(&json["primary_breakdown"]["totals"]["net"], 49.25);

    let secondary = &json["secondary_breakdown"];
    assert_eq!(secondary["applies"], true);
    assert_close(&secondary["totals"]["allocated_amount"], 200.0);
    assert_close(&secondary["totals"]["net_basis"], 190.0);
    assert_close(&secondary["totals"]["commission"], 9.5);
    assert_close(&secondary["totals"]["taxable_base"], 180.5);
    assert_close(&secondary["totals"]["tax"], 12.64);
    assert_close(&secondary["totals"]["net"], 167.87);

    let detail = &secondary["totals"]["equipment_detail"][0];
    assert_eq!(detail["name"], "Speakers");
    assert_eq!(detail["quantity"], 2);
    assert_close(&detail["unit_price"], 105.2632);
    assert_close(&detail["subtotal"], 210.53);

    assert_close(&json["computed_parameters"]["net_received"], 217.11);
}

#[tokio::test]
async fn test_rental_not_applied_when_budget_is_exhausted() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({
            "principal_amount": 75,
            "equipment_rental": [{"equipment_id": "microphone"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["secondary_breakdown"]["applies"], false);
    assert_eq!(
        categories(&json["primary_breakdown"]["per_day"][0]),
        vec!["wage"]
    );
}

// =============================================================================
// Inverse settlement
// =============================================================================

#[tokio::test]
async fn test_target_below_floor_returns_minimum() {
    let (status, json) = post(NET_TO_GROSS, json!({"principal_amount": 10})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["warnings"], json!([MINIMUM_WAGE_WARNING]));
    assert_close(&json["computed_parameters"]["gross_used"], 75.0);
    assert_close(&json["computed_parameters"]["net_received"], 49.25);
}

#[tokio::test]
async fn test_target_net_is_reached() {
    let (status, json) = post(
        NET_TO_GROSS,
        json!({"principal_amount": 300, "work_days": 2, "total_mileage": 50}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let warnings = json["warnings"].as_array().unwrap();
    assert!(!warnings.iter().any(|w| w == MINIMUM_WAGE_WARNING));
    assert!(!warnings.iter().any(|w| w == BEST_EFFORT_WARNING));

    let net = json["computed_parameters"]["net_received"].as_f64().unwrap();
    assert!((net - 300.0).abs() <= 0.01, "net {}", net);
}

#[tokio::test]
async fn test_inverse_matches_forward() {
    let (_, forward) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 400, "income_tax_rate": 12}),
    )
    .await;
    let target = forward["computed_parameters"]["net_received"].clone();

    let (_, inverse) = post(
        NET_TO_GROSS,
        json!({"principal_amount": target, "income_tax_rate": 12}),
    )
    .await;

    let gross = inverse["computed_parameters"]["gross_used"].as_f64().unwrap();
    assert!((gross - 400.0).abs() < 0.05, "gross {}", gross);
}

// =============================================================================
// Output stability
// =============================================================================

#[tokio::test]
async fn test_forward_output_is_byte_identical() {
    let body = json!({
        "principal_amount": 2345.67,
        "work_days": 4,
        "income_tax_rate": 15,
        "total_mileage": 320,
        "per_diem_days": 3,
        "per_diem_kind": "overnight_national",
        "justified_expenses": 80,
        "equipment_rental": [
            {"equipment_id": "electric_guitar"},
            {"equipment_id": "cables", "quantity": 3}
        ]
    });

    let (first_status, first) = post_raw(GROSS_TO_NET, &body).await;
    let (second_status, second) = post_raw(GROSS_TO_NET, &body).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_zero_work_days_rejected() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 500, "work_days": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("work_days"));
}

#[tokio::test]
async fn test_negative_mileage_rejected() {
    let (status, json) = post(
        NET_TO_GROSS,
        json!({"principal_amount": 500, "total_mileage": -5}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_equipment_rejected() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({
            "principal_amount": 500,
            "equipment_rental": [{"equipment_id": "theremin"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNKNOWN_EQUIPMENT");
    assert!(json["message"].as_str().unwrap().contains("theremin"));
}

#[tokio::test]
async fn test_zero_quantity_rejected() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({
            "principal_amount": 500,
            "equipment_rental": [{"equipment_id": "microphone", "quantity": 0}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_principal_rejected() {
    for uri in [GROSS_TO_NET, NET_TO_GROSS] {
        let (status, json) = post(
            uri,
            json!({"principal_amount": "30000000000000000000000000000"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("principal_amount"));
    }
}

#[tokio::test]
async fn test_oversized_mileage_rejected() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 500, "total_mileage": "30000000000000000000000000000"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("total_mileage"));
}

#[tokio::test]
async fn test_work_days_beyond_a_year_rejected() {
    let (status, json) = post(
        GROSS_TO_NET,
        json!({"principal_amount": 500, "work_days": 4_294_967_295u32}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("work_days"));
}

#[tokio::test]
async fn test_largest_accepted_request_settles() {
    let (status, json) = post(
        NET_TO_GROSS,
        json!({
            "principal_amount": 1_000_000_000_000u64,
            "work_days": 366,
            "income_tax_rate": 45,
            "total_mileage": 1_000_000_000_000u64,
            "justified_expenses": 1_000_000_000_000u64
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let per_day = json["primary_breakdown"]["per_day"].as_array().unwrap();
    assert_eq!(per_day.len(), 366);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/simulations/unknown")
                .header("Content-Type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
