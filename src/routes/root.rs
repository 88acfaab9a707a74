//! Root Endpoint

use axum::Json;
use serde::Serialize;

/// 환영 메시지 응답
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to my ToDo App".to_string(),
    })
}
