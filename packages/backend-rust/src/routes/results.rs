use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::response::AppError;
use crate::services::results::{self, CreateResultInput, ResultError};
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedResult {
    id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CleanupSummary {
    deleted: u64,
}

pub async fn list_results(State(state): State<AppState>) -> Result<Response, AppError> {
    let results = results::list_results(state.db()).await.map_err(db_error)?;
    Ok(Json(SuccessResponse {
        success: true,
        data: results,
    })
    .into_response())
}

pub async fn save_result(
    State(state): State<AppState>,
    Json(input): Json<CreateResultInput>,
) -> Result<Response, AppError> {
    let id = match results::save_result(state.db(), input).await {
        Ok(id) => id,
        Err(ResultError::UnknownGameType(game_type)) => {
            return Err(AppError::validation(format!(
                "Loại trò chơi không hợp lệ: {game_type}"
            )));
        }
        Err(ResultError::Db(err)) => return Err(db_error(err)),
    };
    Ok(Json(SuccessResponse {
        success: true,
        data: SavedResult { id },
    })
    .into_response())
}

pub async fn cleanup(State(state): State<AppState>) -> Result<Response, AppError> {
    let deleted = results::cleanup_results(state.db())
        .await
        .map_err(db_error)?;
    tracing::info!(deleted, "cleaned up old game results");
    Ok(Json(SuccessResponse {
        success: true,
        data: CleanupSummary { deleted },
    })
    .into_response())
}

fn db_error(err: sqlx::Error) -> AppError {
    tracing::warn!(error = %err, "game result query failed");
    AppError::internal(err.to_string())
}
