use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use walletgen_core::GenerateError;

/// Errors returned by the HTTP handlers.
///
/// Tool failures are upstream faults and map to 502/504; an unknown symbol
/// or an unreadable body is the caller's fault.
#[derive(Debug)]
pub enum ApiError {
    Generate(GenerateError),
    Body(JsonRejection),
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(rejection) => rejection.status(),
            Self::Generate(GenerateError::InvalidSymbol(_)) => StatusCode::BAD_REQUEST,
            Self::Generate(GenerateError::GenerationTimeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            Self::Generate(
                GenerateError::ToolUnavailable(_)
                | GenerateError::GenerationFailed { .. }
                | GenerateError::MalformedOutput(_),
            ) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Body(rejection) => json!({ "detail": rejection.body_text() }),
            Self::Generate(GenerateError::InvalidSymbol(_)) => json!({ "detail": "Invalid symbol" }),
            Self::Generate(err) => {
                tracing::error!(kind = err.kind(), error = %err, "Wallet generation request failed");
                let detail = match err {
                    GenerateError::ToolUnavailable(_) => "Wallet generation tool unavailable",
                    GenerateError::MalformedOutput(_) => "Wallet generation returned malformed output",
                    GenerateError::GenerationTimeout(_) => "Wallet generation timed out",
                    _ => "Wallet generation failed",
                };
                json!({ "detail": detail, "kind": err.kind() })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (GenerateError::InvalidSymbol("X".into()), StatusCode::BAD_REQUEST),
            (
                GenerateError::GenerationFailed { exit_code: Some(1) },
                StatusCode::BAD_GATEWAY,
            ),
            (
                GenerateError::MalformedOutput(
                    serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
                ),
                StatusCode::BAD_GATEWAY,
            ),
            (
                GenerateError::ToolUnavailable(std::io::ErrorKind::NotFound.into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                GenerateError::GenerationTimeout(Duration::from_secs(1)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
