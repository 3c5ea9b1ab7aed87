use crate::models::ErrorBody;
use crate::store::StoreError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "Entry not found.")]
    NotFound,
    #[display(fmt = "{}", _0)]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// What the client gets to see. Storage details stay in the log.
    fn public_message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound => "Entry not found.",
            ApiError::Store(StoreError::Read(_) | StoreError::Parse(_)) => {
                "Unable to read data file."
            }
            ApiError::Store(StoreError::Write(_) | StoreError::Encode(_)) => {
                "Unable to write data file."
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(e) = self {
            tracing::error!(error = %e, "Data file access failed");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.public_message()))
    }
}
