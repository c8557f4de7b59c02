use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    uptime_seconds: u64,
    database: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Response {
    let database = match sqlx::query("SELECT 1").execute(state.db().pool()).await {
        Ok(_) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "health check database ping failed");
            "unavailable"
        }
    };

    Json(HealthStatus {
        status: "ok",
        uptime_seconds: state.uptime_seconds(),
        database,
    })
    .into_response()
}

pub async fn live() -> StatusCode {
    StatusCode::OK
}
