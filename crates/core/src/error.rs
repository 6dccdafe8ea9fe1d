use std::time::Duration;

/// Errors that can occur while validating a symbol and generating a wallet.
///
/// Display strings never include the tool's stderr.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("Wallet tool could not be started: {0}")]
    ToolUnavailable(#[source] std::io::Error),
    #[error("Wallet tool exited with {}", describe_exit(.exit_code))]
    GenerationFailed { exit_code: Option<i32> },
    #[error("Wallet tool output is not valid JSON: {0}")]
    MalformedOutput(#[source] serde_json::Error),
    #[error("Wallet tool did not finish within {0:?}")]
    GenerationTimeout(Duration),
}

impl GenerateError {
    /// Stable machine-readable name for the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSymbol(_) => "invalid_symbol",
            Self::ToolUnavailable(_) => "tool_unavailable",
            Self::GenerationFailed { .. } => "generation_failed",
            Self::MalformedOutput(_) => "malformed_output",
            Self::GenerationTimeout(_) => "generation_timeout",
        }
    }

    /// True when the caller supplied bad input, false for upstream/tool faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidSymbol(_))
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no exit status (killed by a signal or output lost)".to_string(),
    }
}
