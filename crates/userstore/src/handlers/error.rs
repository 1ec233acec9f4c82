use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use userstore_core::storage::{repository_error_to_status_code, RepositoryError};
use userstore_core::user::{MessageResponse, UserError, ValidationErrorResponse};

/// Handler error. Domain errors are recovered by downcasting when the
/// response is built.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(user_error) = self.0.downcast_ref::<UserError>() {
            tracing::warn!(error = %user_error, "Rejected invalid payload");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::from(user_error)),
            )
                .into_response();
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            let status = match rejection {
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    StatusCode::BAD_REQUEST
                }
                other => other.status(),
            };
            tracing::warn!(status = %status, error = %rejection, "Rejected request body");
            return (status, Json(MessageResponse::new(rejection.body_text()))).into_response();
        }

        let (status, message) = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    repo_error.to_string(),
                )
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        }

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
