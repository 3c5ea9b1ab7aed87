use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by every successful mutation.
#[derive(Debug, Serialize, ToSchema)]
pub struct Ack {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Entry added successfully!")]
    pub message: String,
}

impl Ack {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Entry not found.")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
