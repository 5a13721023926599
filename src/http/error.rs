//! Mapping from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::{ErrorKind, PopError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub struct HttpApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl HttpApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                message: message.into(),
                kind: ErrorKind::InvalidInput,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> ErrorKind {
        self.body.kind
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound | ErrorKind::NoData => StatusCode::NOT_FOUND,
        ErrorKind::InvalidName | ErrorKind::AlreadyExists | ErrorKind::InvalidInput => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<PopError> for HttpApiError {
    fn from(err: PopError) -> Self {
        let kind = err.kind();
        let message = match kind {
            // IO and serde details stay in the log
            ErrorKind::StoreFailure => {
                tracing::error!("Store failure: {}", err);
                "Internal store failure".to_string()
            }
            _ => err.to_string(),
        };
        Self {
            status: status_for(kind),
            body: ErrorBody { message, kind },
        }
    }
}

impl IntoResponse for HttpApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<Json<T>, HttpApiError>;
