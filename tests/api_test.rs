//! End-to-end tests for the HTTP facade.
//!
//! Each test starts the full router on an ephemeral port and drives it with
//! a real HTTP client. No external services are needed.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use glowtrack::config::AppConfig;
use glowtrack::models::date_range::DateRangeKey;
use glowtrack::AppState;

/// Spin up the router on a random port, returning the base URL and a handle
/// to stop the server.
async fn start_server() -> (String, tokio::task::JoinHandle<()>) {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        frontend_url: "http://localhost:5173".to_string(),
        request_body_limit_bytes: 64 * 1024,
        default_date_range: DateRangeKey::Last30Days,
    };
    let app = glowtrack::routes::router(AppState { config });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (base_url, handle)
}

/// Helper: extract `data` from the API envelope, panic with message on error.
fn extract_data(body: &Value) -> &Value {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        panic!(
            "API error: {} / {}",
            err["code"].as_str().unwrap_or("?"),
            err["message"].as_str().unwrap_or("?"),
        );
    }
    body.get("data").expect("missing 'data' field")
}

/// A week of logs ending 2025-03-09 with 3 AM + 2 PM products every day and
/// only the morning routine done.
fn morning_only_week() -> Value {
    let am = json!([
        { "name": "Cleanser", "step": 1, "category": "Cleanser" },
        { "name": "Serum", "step": 2, "category": "Serum" },
        { "name": "Sunscreen", "step": 3, "category": "SPF" }
    ]);
    let pm = json!([
        { "name": "Cleanser", "step": 1, "category": "Cleanser" },
        { "name": "Retinol", "step": 2, "category": "Treatment" }
    ]);
    let mut routine = serde_json::Map::new();
    for day in [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ] {
        routine.insert(day.to_string(), json!({ "AM": am, "PM": pm }));
    }

    let mut progress = serde_json::Map::new();
    for d in 3..=9 {
        progress.insert(
            format!("2025-03-{d:02}"),
            json!({ "AM": { "Cleanser": "completed", "Serum": "completed", "Sunscreen": "completed" },
                    "PM": { "Retinol": "skipped" } }),
        );
    }
    progress.insert(
        "2024-12-25".to_string(),
        json!({ "AM": { "Cleanser": "completed" }, "PM": { "Retinol": "completed" } }),
    );

    json!({
        "routine": routine,
        "progress": progress,
        "goals": [
            { "id": 1, "title": "Clear skin", "target": "90%", "progress": 140 },
            { "id": 2, "title": "Hydration", "target": "Optimal", "progress": 45 }
        ],
        "skinConcerns": ["acne"]
    })
}

#[tokio::test]
async fn health_endpoints() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health/live")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");

    let body: Value = client
        .get(format!("{base}/health/ready"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);
    assert_eq!(data["status"], "ok");
    assert_eq!(data["default_date_range"], "30days");
}

#[tokio::test]
async fn dashboard_aggregates_posted_document() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!(
            "{base}/api/v1/progress/dashboard?range=7days&today=2025-03-09"
        ))
        .json(&morning_only_week())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);

    let metrics = data["progressMetrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 4);
    assert_eq!(metrics[0]["title"], "Routine Consistency");
    assert_eq!(metrics[0]["value"], "60%");
    assert_eq!(metrics[0]["changeType"], "positive");

    let series = data["routineScoreData"].as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[0]["date"], "Mar 3");
    assert_eq!(series[0]["value"], 6.0);
    assert_eq!(data["skinConcernData"].as_array().unwrap().len(), 7);

    // Calendar includes the December entry outside the window.
    assert_eq!(data["adherenceData"]["2024-12-25"]["completion"], 100);
    assert_eq!(data["adherenceData"]["2025-03-09"]["completion"], 50);
    assert_eq!(data["adherenceData"].as_object().unwrap().len(), 8);

    assert_eq!(data["goalsData"][0]["progress"], 100.0);
    assert_eq!(data["goalsData"][0]["status"], "completed");
    assert_eq!(data["goalsData"][1]["status"], "on-track");
    assert_eq!(data["goalSummary"]["completed"], 1);

    let insights = data["insightsData"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[1]["actionButtons"][0]["actionId"], "set_reminder");
}

#[tokio::test]
async fn dashboard_with_empty_document_uses_default_range() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/progress/dashboard?today=2025-03-09"))
        .json(&json!({ "routine": [] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);

    assert_eq!(data["routineScoreData"].as_array().unwrap().len(), 30);
    assert!(data["routineScoreData"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["value"].is_null()));
    assert_eq!(data["progressMetrics"][1]["value"], "N/A");
    assert_eq!(data["insightsData"][0]["id"], "no-data");
}

#[tokio::test]
async fn unknown_range_is_rejected() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/v1/progress/dashboard?range=6months"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn checklist_orders_steps() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/progress/checklist?date=2025-03-09"))
        .json(&morning_only_week())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);

    assert_eq!(data["weekday"], "Sunday");
    assert_eq!(data["AM"][0]["name"], "Cleanser");
    assert_eq!(data["AM"][2]["state"], "completed");
    assert_eq!(data["PM"][1]["state"], "skipped");
    assert_eq!(data["completed"], 3);
    assert_eq!(data["total"], 5);
}

#[tokio::test]
async fn check_in_twice_conflicts() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/check-in?today=2025-05-01"))
        .json(&json!({ "lastCheckIn": "2025-04-30", "checkInStreak": 2, "totalCheckIns": 5, "points": 40 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);
    assert_eq!(data["patch"]["checkInStreak"], 3);
    assert_eq!(data["patch"]["totalCheckIns"], 6);
    assert_eq!(data["patch"]["points"], 50);
    assert_eq!(data["patch"]["lastCheckIn"], "2025-05-01");
    assert!(data["reminder"].as_str().is_some());

    let resp = client
        .post(format!("{base}/api/v1/check-in?today=2025-05-01"))
        .json(&json!({ "lastCheckIn": "2025-05-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn points_and_goals() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/points/award"))
        .json(&json!({ "action": "derma_scan_completed", "currentPoints": 20 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["points"], 120);

    let body: Value = client
        .post(format!("{base}/api/v1/goals"))
        .json(&json!({
            "goals": [{ "id": 1, "title": "Acne", "target": "90%", "progress": 10 }],
            "goal": { "id": 1, "title": "Acne", "target": "95%", "progress": 30, "deadline": "2025-06-30" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let goals = extract_data(&body).as_array().unwrap().clone();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["target"], "95%");
    assert_eq!(goals[0]["deadline"], "2025-06-30");

    let resp = client
        .post(format!("{base}/api/v1/goals"))
        .json(&json!({
            "goal": { "title": "", "target": "x", "progress": 10, "deadline": "2025-06-30" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/api/v1/nope")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn cors_allows_configured_frontend() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client
        .get(format!("{base}/health/live"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn malformed_input_uses_error_envelope() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/v1/progress/dashboard"))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["data"].is_null());
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = client
        .post(format!("{base}/api/v1/check-in?today=yesterday"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = client
        .post(format!("{base}/api/v1/points/award"))
        .json(&json!({ "currentPoints": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn dashboard_without_today_uses_current_date() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/progress/dashboard?range=7days"))
        .json(&morning_only_week())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = extract_data(&body);
    assert_eq!(data["routineScoreData"].as_array().unwrap().len(), 7);
    assert_eq!(data["skinConcernData"].as_array().unwrap().len(), 7);
}
