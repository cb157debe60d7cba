use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A vote referenced a choice id that does not exist.
    #[error("Choice not found")]
    ChoiceNotFound,

    /// Poll creation with an empty question or fewer than two options.
    #[error("Минимум два варианта")]
    TooFewOptions,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ChoiceNotFound => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            AppError::TooFewOptions => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AppError::Database(_) | AppError::Template(_) => {
                error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn choice_not_found_is_404() {
        let response = AppError::ChoiceNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, "Choice not found");
    }

    #[tokio::test]
    async fn too_few_options_is_400() {
        let response = AppError::TooFewOptions.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Минимум два варианта");
    }

    #[tokio::test]
    async fn store_failures_are_opaque_500s() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, "Internal server error");
    }
}
