use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: String,
    pub status_code: u16,
    pub timestamp: String,
    pub message: Option<String>,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    with_status("success", data, None)
}

/// A handled failure: the body still carries data, the status stays 200.
pub fn failed<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<ApiResponse<T>>) {
    with_status("error", data, Some(message.to_string()))
}

fn with_status<T: Serialize>(
    status: &str,
    data: T,
    message: Option<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    let meta = ResponseMeta {
        status: status.to_string(),
        status_code: StatusCode::OK.as_u16(),
        timestamp: Utc::now().to_rfc3339(),
        message,
    };

    (
        StatusCode::OK,
        Json(ApiResponse {
            data,
            meta,
        }),
    )
}
