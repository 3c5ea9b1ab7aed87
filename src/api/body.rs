use crate::error::ApiError;
use actix_web::{HttpMessage, HttpRequest};
use serde_json::{Map, Value};

/// Decodes a request body the way a strict JSON body parser does.
///
/// - Not declared as JSON: the body is ignored and treated as `{}`.
/// - Declared as JSON but empty: `{}`.
/// - Otherwise it must parse, and the top level must be an object or array.
///
/// The shape of the decoded value is never checked beyond that.
pub fn decode_json(req: &HttpRequest, bytes: &[u8]) -> Result<Value, ApiError> {
    if !is_json(req) || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(ApiError::BadRequest(
            "Request body must be a JSON object or array".to_string(),
        )),
    }
}

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.type_() == "application"
                && (mime.subtype() == "json" || mime.suffix().is_some_and(|s| s == "json"))
        }
        _ => false,
    }
}
