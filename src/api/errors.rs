use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pagination::PaginationError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: u16,
    detail: String,
}

#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    /// The context is logged; clients only ever see a generic message.
    Internal(String),
}

impl ApiError {
    /// Log the underlying error with context and return an `Internal` variant.
    pub(crate) fn internal(err: impl std::fmt::Display, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Internal(context.to_string())
    }

    /// Invalid requests are the caller's fault; every other pagination failure is ours.
    pub(crate) fn pagination(err: PaginationError, context: &str) -> Self {
        match err {
            PaginationError::InvalidRequest(message) => Self::BadRequest(message),
            other => Self::internal(other, context),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                let status = StatusCode::BAD_REQUEST;
                (status, Json(ErrorResponse { status: status.as_u16(), detail: message }))
                    .into_response()
            }
            ApiError::Internal(context) => {
                tracing::debug!(context = %context, "responding with internal server error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    Json(ErrorResponse {
                        status: status.as_u16(),
                        detail: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn invalid_request_maps_to_bad_request() {
        let err = ApiError::pagination(
            PaginationError::InvalidRequest("cannot order by 'secret'".to_string()),
            "Failed to list blog posts",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "cannot order by 'secret'");
    }

    #[tokio::test]
    async fn data_source_failure_hides_details() {
        let err = ApiError::pagination(
            PaginationError::DataSource(sqlx::Error::PoolTimedOut),
            "Failed to list blog posts",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["status"], 500);
        assert_eq!(json["detail"], "Internal server error");
    }

    #[test]
    fn mapping_and_statement_failures_are_internal() {
        let mapping = ApiError::pagination(
            PaginationError::Mapping(sqlx::Error::ColumnNotFound("title".to_string())),
            "ctx",
        );
        let statement =
            ApiError::pagination(PaginationError::StatementBuild("bad table".to_string()), "ctx");
        assert!(matches!(mapping, ApiError::Internal(_)));
        assert!(matches!(statement, ApiError::Internal(_)));
    }
}
