use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use glossario::{generate::GenerateError, resolver::ResolveError, store::StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("termo não encontrado")]
    NotFound,

    #[error("geração indisponível: {0}")]
    Generation(#[from] GenerateError),

    #[error("armazenamento não configurado")]
    StoreUnconfigured,

    #[error("falha no armazenamento: {0}")]
    Store(#[from] StoreError),
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound => AppError::NotFound,
            ResolveError::Generation(inner) => AppError::Generation(inner),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Generation { .. } => StatusCode::BAD_GATEWAY,
            AppError::StoreUnconfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store { .. } => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StoreUnconfigured.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Generation(GenerateError::EmptyResponse)
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
