//! Static informational endpoints.
//!
//! Pure constants with no logic; kept for interface compatibility with the
//! service this one replaces.

use axum::Json;
use serde_json::{Value, json};

/// GET /
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/users
pub async fn list_users() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Alice", "role": "Engineer"},
        {"id": 2, "name": "Bob", "role": "Analyst"},
        {"id": 3, "name": "Carol", "role": "Manager"},
    ]))
}

/// GET /api/reports
pub async fn list_reports() -> Json<Value> {
    Json(json!([
        {"id": 101, "title": "Q4 Analysis", "status": "published"},
        {"id": 102, "title": "2026 Forecast", "status": "draft"},
    ]))
}
