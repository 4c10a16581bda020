//! Validated Body Extractor
//!
//! Accepts `application/json` and `application/x-www-form-urlencoded` bodies,
//! each with its own size limit, then runs `validator` on the result.

use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FailedToBufferBody},
        FromRef, FromRequest, Request,
    },
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, FieldError};

/// Maximum accepted body size per content type, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimits {
    pub json: usize,
    pub form: usize,
}

impl FromRef<AppState> for BodyLimits {
    fn from_ref(state: &AppState) -> Self {
        Self {
            json: state.config.api.json_limit,
            form: state.config.api.form_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

impl BodyKind {
    fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
            Some(Self::Json)
        } else if mime == "application/x-www-form-urlencoded" {
            Some(Self::Form)
        } else {
            None
        }
    }
}

/// Body extractor that deserializes and validates `T`.
///
/// Field-level failures, whether a value of the wrong type or a failed
/// validation rule, become `ApiError::Validation`. Bodies that cannot be parsed
/// at all become `ApiError::BadRequest`, oversized ones `ApiError::PayloadTooLarge`.
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    BodyLimits: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let limits = BodyLimits::from_ref(state);

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let kind = BodyKind::from_content_type(&content_type).ok_or_else(|| {
            ApiError::UnsupportedMediaType(if content_type.is_empty() {
                "missing Content-Type header".to_string()
            } else {
                content_type.clone()
            })
        })?;

        let limit = match kind {
            BodyKind::Json => limits.json,
            BodyKind::Form => limits.form,
        };

        let declared_length = req
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());
        if declared_length.is_some_and(|len| len > limit) {
            return Err(ApiError::PayloadTooLarge { limit });
        }

        // Buffered under the router-wide DefaultBodyLimit, then checked against this kind's limit
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| match rejection {
            BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
                ApiError::PayloadTooLarge { limit }
            }
            other => ApiError::BadRequest(other.body_text()),
        })?;
        if bytes.len() > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }

        let value: T = match kind {
            BodyKind::Json => deserialize_json(&bytes)?,
            BodyKind::Form => deserialize_form(&bytes)?,
        };

        value.validate()?;

        Ok(ValidatedBody(value))
    }
}

fn deserialize_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        let inner = e.into_inner();
        if inner.is_data() {
            field_error(path, &inner)
        } else {
            ApiError::BadRequest(format!("Malformed JSON body: {inner}"))
        }
    })?;
    deserializer
        .end()
        .map_err(|e| ApiError::BadRequest(format!("Malformed JSON body: {e}")))?;
    Ok(value)
}

fn deserialize_form<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let deserializer = serde_urlencoded::Deserializer::new(form_urlencoded::parse(bytes));
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        field_error(path, e.inner())
    })
}

/// Errors at the document root describe the body as a whole, not a field
fn field_error(path: String, err: &impl std::fmt::Display) -> ApiError {
    if path == "." {
        ApiError::BadRequest(format!("Invalid request body: {err}"))
    } else {
        ApiError::Validation(vec![FieldError {
            message: format!("{path} has an invalid value: {err}"),
            field: path,
        }])
    }
}
