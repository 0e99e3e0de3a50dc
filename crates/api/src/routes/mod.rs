//! Route handlers for the REST API.

pub mod goals;
pub mod health;
pub mod plans;
pub mod users;

use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// Acknowledgement body for deletes.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Users
        .route("/api/users", get(users::list_users).post(users::save_user))
        .route(
            "/api/users/:id",
            get(users::get_user).delete(users::delete_user),
        )
        // Goals
        .route("/api/goals", post(goals::save_goals))
        .route(
            "/api/goals/:user_id",
            get(goals::get_goals).delete(goals::delete_goals),
        )
        // Plans
        .route("/api/plans", post(plans::save_plan))
        .route(
            "/api/plans/:user_id",
            get(plans::get_plan).delete(plans::delete_plan),
        )
        .route("/api/plans/:user_id/generate", post(plans::regenerate_plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use database::Database;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        router().with_state(AppState::new(db, Some(7)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        dispatch(app, request).await
    }

    async fn send_raw(app: &Router, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        dispatch(app, request).await
    }

    async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn alice() -> Value {
        json!({
            "id": "alice",
            "name": "Alice",
            "age": 34,
            "weight": 62.0,
            "height": 168.0,
            "healthConditions": null
        })
    }

    fn scenario_goals() -> Value {
        json!({
            "userId": "alice",
            "dailyCalories": 2000,
            "exerciseMinutes": 30,
            "waterIntake": 2.5,
            "medicines": [{"name": "Vitamin D", "dosage": "1 tablet", "timing": "morning"}]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = test_app().await;

        let (status, saved) = send(&app, "POST", "/api/users", Some(alice())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["name"], "Alice");
        assert!(saved["createdAt"].as_str().is_some_and(|s| !s.is_empty()));

        let (_, fetched) = send(&app, "GET", "/api/users/alice", None).await;
        assert_eq!(fetched["id"], "alice");

        let (_, listed) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let (status, deleted) = send(&app, "DELETE", "/api/users/alice", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, json!({"success": true}));

        let (status, missing) = send(&app, "GET", "/api/users/alice", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(missing, Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_user_rejected() {
        let app = test_app().await;
        let mut user = alice();
        user["weight"] = json!(5);

        let (status, body) = send(&app, "POST", "/api/users", Some(user)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("weight"));
    }

    #[tokio::test]
    async fn test_delete_unknown_user_is_404() {
        let app = test_app().await;
        let (status, _) = send(&app, "DELETE", "/api/users/ghost", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_goals_generates_plan() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;

        let (status, saved) = send(&app, "POST", "/api/goals", Some(scenario_goals())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["goals"]["dailyCalories"], 2000);

        let days = saved["plan"]["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "Monday");
        assert_eq!(days[0]["exercise"], "30 min brisk walk + 15 min core workout");
        assert_eq!(days[0]["medicines"]["morning"], json!(["Vitamin D (1 tablet)"]));
        assert_eq!(days[6]["day"], "Sunday");

        let (_, stored) = send(&app, "GET", "/api/plans/alice", None).await;
        assert_eq!(stored, saved["plan"]);

        let (_, goals) = send(&app, "GET", "/api/goals/alice", None).await;
        assert_eq!(goals["waterIntake"], 2.5);
    }

    #[tokio::test]
    async fn test_goals_out_of_range() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;

        let mut goals = scenario_goals();
        goals["exerciseMinutes"] = json!(200);

        let (status, body) = send(&app, "POST", "/api/goals", Some(goals)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("exerciseMinutes"));
    }

    #[tokio::test]
    async fn test_goals_unknown_timing() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;

        let mut goals = scenario_goals();
        goals["medicines"][0]["timing"] = json!("brunch");

        let (status, body) = send(&app, "POST", "/api/goals", Some(goals)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown medicine timing: brunch");
    }

    #[tokio::test]
    async fn test_goals_for_unknown_user() {
        let app = test_app().await;
        let (status, _) = send(&app, "POST", "/api/goals", Some(scenario_goals())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_regenerate_plan() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;

        let (status, _) = send(&app, "POST", "/api/plans/alice/generate", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app, "POST", "/api/goals", Some(scenario_goals())).await;
        let (status, plan) = send(&app, "POST", "/api/plans/alice/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plan["userId"], "alice");
        assert_eq!(plan["days"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn test_save_incomplete_plan_rejected() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;
        let (_, saved) = send(&app, "POST", "/api/goals", Some(scenario_goals())).await;

        let mut plan = saved["plan"].clone();
        plan["days"].as_array_mut().unwrap().truncate(3);

        let (status, body) = send(&app, "POST", "/api/plans", Some(plan)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "weekly plan must contain 7 days, found 3");
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;
        send(&app, "POST", "/api/goals", Some(scenario_goals())).await;

        send(&app, "DELETE", "/api/users/alice", None).await;

        let (_, goals) = send(&app, "GET", "/api/goals/alice", None).await;
        let (_, plan) = send(&app, "GET", "/api/plans/alice", None).await;
        assert_eq!(goals, Value::Null);
        assert_eq!(plan, Value::Null);
    }

    #[tokio::test]
    async fn test_delete_goals_and_plan() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;
        send(&app, "POST", "/api/goals", Some(scenario_goals())).await;

        let (_, body) = send(&app, "DELETE", "/api/goals/alice", None).await;
        assert_eq!(body["success"], true);
        let (_, body) = send(&app, "DELETE", "/api/plans/alice", None).await;
        assert_eq!(body["success"], true);

        let (_, plan) = send(&app, "GET", "/api/plans/alice", None).await;
        assert_eq!(plan, Value::Null);
    }

    #[tokio::test]
    async fn test_user_missing_field_is_json_400() {
        let app = test_app().await;
        let mut user = alice();
        user.as_object_mut().unwrap().remove("age");

        let (status, body) = send(&app, "POST", "/api/users", Some(user)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("age")));
    }

    #[tokio::test]
    async fn test_goals_invalid_json_is_json_400() {
        let app = test_app().await;
        let (status, body) = send_raw(&app, "/api/goals", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_plan_missing_generated_at_is_json_400() {
        let app = test_app().await;
        send(&app, "POST", "/api/users", Some(alice())).await;
        let (_, saved) = send(&app, "POST", "/api/goals", Some(scenario_goals())).await;

        let mut plan = saved["plan"].clone();
        plan.as_object_mut().unwrap().remove("generatedAt");

        let (status, body) = send(&app, "POST", "/api/plans", Some(plan)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("generatedAt")));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_json_400() {
        let app = test_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/users")
            .body(Body::from(alice().to_string()))
            .unwrap();

        let (status, body) = dispatch(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
