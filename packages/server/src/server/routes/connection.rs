use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ConnectionTestResponse {
    message: &'static str,
}

/// Connectivity check used by the front end; does not touch the database.
pub async fn connection_test_handler() -> Json<ConnectionTestResponse> {
    Json(ConnectionTestResponse {
        message: "Backend connected!",
    })
}
