//! Mapping of analysis errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sentimento_core::{model::ApiResponse, SentimentoError};

/// Error returned by API handlers. Always rendered as `{success:false, error}`.
#[derive(Debug)]
pub struct ApiError(pub SentimentoError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<SentimentoError> for ApiError {
    fn from(err: SentimentoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiResponse::failure(self.0.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(SentimentoError::validation("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(SentimentoError::config("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError(SentimentoError::upstream("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError(anyhow::anyhow!("x").into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
