use axum::Router;

use tuvung_backend_rust::db::Database;

pub async fn create_test_app() -> Router {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    tuvung_backend_rust::create_app(db)
}
