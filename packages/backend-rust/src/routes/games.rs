//! Drill-mode metadata for the games dashboard.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tuvung_engine::DrillMode;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
struct GameInfo {
    #[serde(rename = "type")]
    game_type: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn metadata(mode: DrillMode) -> GameInfo {
    let (label, icon) = match mode {
        DrillMode::Quiz => ("Trắc nghiệm", "fa-circle-question"),
        DrillMode::Memory => ("Ghép thẻ", "fa-table-cells"),
        DrillMode::SentenceFill => ("Điền từ", "fa-pen-nib"),
        DrillMode::Scramble => ("Sắp xếp từ", "fa-spell-check"),
        DrillMode::Flashcard => ("Lật thẻ", "fa-layer-group"),
    };
    GameInfo {
        game_type: mode.slug(),
        label,
        icon,
    }
}

pub async fn list_games() -> Response {
    let games: Vec<GameInfo> = DrillMode::ALL.into_iter().map(metadata).collect();
    Json(SuccessResponse {
        success: true,
        data: games,
    })
    .into_response()
}
