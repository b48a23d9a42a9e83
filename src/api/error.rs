use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{error::CatalogError, render};

/// Error returned by the page handlers.
///
/// Every failure ends up here and is rendered as an error page with a status
/// matching its cause.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Catalog(CatalogError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Catalog(err) => match err {
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
                CatalogError::Upstream { status: 400, .. } => StatusCode::BAD_REQUEST,
                CatalogError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                CatalogError::Credential(_) => StatusCode::SERVICE_UNAVAILABLE,
                CatalogError::Upstream { .. } | CatalogError::Transport(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
        }
    }

    /// Text shown to the user. Internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Catalog(err) => match err {
                CatalogError::NotFound(_) => "Nothing was found here.".to_string(),
                CatalogError::InvalidQuery(msg) => msg.clone(),
                CatalogError::Upstream { status: 400, message } => message.clone(),
                CatalogError::Timeout(_) => "The music catalog took too long to answer.".to_string(),
                CatalogError::Credential(_) => {
                    "The music catalog is unavailable right now.".to_string()
                }
                CatalogError::Upstream { .. } | CatalogError::Transport(_) => {
                    "The music catalog returned an error.".to_string()
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::BadRequest(msg) => tracing::warn!(%status, "{msg}"),
            AppError::Catalog(err) if status.is_server_error() => {
                tracing::error!(%status, error = %err, "catalog request failed")
            }
            AppError::Catalog(err) => tracing::warn!(%status, error = %err, "catalog request failed"),
        }

        let body = render::error_page(status.as_u16(), &self.public_message());
        (status, Html(body)).into_response()
    }
}
