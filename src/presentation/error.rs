// HTTP error responses
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid date parameter `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_response() {
        let response = ApiError::InvalidDate("yesterday".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
