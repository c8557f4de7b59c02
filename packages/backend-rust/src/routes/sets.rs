use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::response::AppError;
use crate::services::sets::{self, CreateSetInput, SetError};
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedSet {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeletedSet {
    deleted: u64,
}

pub async fn list_sets(State(state): State<AppState>) -> Result<Response, AppError> {
    let sets = sets::list_sets(state.db()).await.map_err(db_error)?;
    Ok(Json(SuccessResponse {
        success: true,
        data: sets,
    })
    .into_response())
}

pub async fn create_set(
    State(state): State<AppState>,
    Json(input): Json<CreateSetInput>,
) -> Result<Response, AppError> {
    let id = match sets::create_set(state.db(), input).await {
        Ok(id) => id,
        Err(SetError::InvalidWord) => {
            return Err(AppError::validation("Mỗi từ cần có từ và nghĩa"));
        }
        Err(SetError::Db(err)) => return Err(db_error(err)),
    };
    Ok(Json(SuccessResponse {
        success: true,
        data: CreatedSet { id },
    })
    .into_response())
}

pub async fn delete_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let deleted = sets::delete_set(state.db(), &id).await.map_err(db_error)?;
    if deleted == 0 {
        return Err(AppError::not_found("Bộ từ vựng không tồn tại"));
    }
    Ok(Json(SuccessResponse {
        success: true,
        data: DeletedSet { deleted },
    })
    .into_response())
}

fn db_error(err: sqlx::Error) -> AppError {
    tracing::warn!(error = %err, "vocab set query failed");
    AppError::internal(err.to_string())
}
