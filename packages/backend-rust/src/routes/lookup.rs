use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::services::lookup;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Deserialize)]
pub struct LookupRequest {
    word: String,
}

pub async fn lookup_word(Json(request): Json<LookupRequest>) -> Result<Response, AppError> {
    if request.word.trim().is_empty() {
        return Err(AppError::validation("Thiếu từ cần tra"));
    }
    Ok(Json(SuccessResponse {
        success: true,
        data: lookup::lookup(&request.word),
    })
    .into_response())
}
