//! HTTP mapping for `datagen` errors.
//!
//! Each handler wraps the library error with the operation it came from so
//! internal failures can be reported with an operation-specific message while
//! the underlying cause is only logged.
//!
//! | `ErrorKind` | Status |
//! | ----------- | ------ |
//! | `NotFound`  | 404    |
//! | `BadInput`  | 400    |
//! | `Internal`  | 500    |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datagen::ErrorKind;
use serde::{Deserialize, Serialize};

/// Error returned by the file handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("File generation failed: {0}")]
    Generate(#[source] datagen::Error),

    #[error("File processing failed: {0}")]
    Process(#[source] datagen::Error),
}

/// JSON body returned on error.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    pub const fn source_error(&self) -> &datagen::Error {
        match self {
            Self::Generate(e) | Self::Process(e) => e,
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self.source_error().kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadInput => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match (self, self.source_error().kind()) {
            (Self::Generate(_), ErrorKind::Internal) => "File generation failed".to_string(),
            (Self::Process(_), ErrorKind::Internal) => "File processing failed".to_string(),
            (_, _) => self.source_error().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        #[cfg(feature = "tracing")]
        {
            if status.is_server_error() {
                tracing::error!("{}", self);
            } else {
                tracing::warn!("{}", self);
            }
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
