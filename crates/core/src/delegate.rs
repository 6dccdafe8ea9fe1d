use crate::error::GenerateError;
use crate::executor::{CommandExecutor, ExecError};
use crate::registry::{validate_symbol, CryptocurrencyDescriptor, Registry};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

/// Longest slice of stderr copied into the log line.
const STDERR_LOG_LIMIT: usize = 512;

/// Validates symbols and hands wallet generation to the external tool.
///
/// Holds no per-request state: every call spawns its own process and nothing
/// from a previous run is reused.
#[derive(Clone)]
pub struct WalletGenerator {
    executor: Arc<dyn CommandExecutor>,
    registry: Registry,
    tool: String,
}

impl WalletGenerator {
    pub fn new(executor: Arc<dyn CommandExecutor>, registry: Registry, tool: impl Into<String>) -> Self {
        Self {
            executor,
            registry,
            tool: tool.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Validate `symbol`, then run the tool for it.
    ///
    /// Unknown symbols are rejected before any process is spawned.
    pub async fn generate(&self, symbol: &str) -> Result<Value, GenerateError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("generate_wallet", %request_id, symbol);

        async {
            let descriptor = validate_symbol(&self.registry, symbol).inspect_err(|_| {
                tracing::info!("Rejected unknown symbol");
            })?;
            self.delegate(descriptor).await
        }
        .instrument(span)
        .await
    }

    /// Run `<tool> generate -s <symbol>` and parse its stdout as JSON.
    ///
    /// Takes a descriptor so only registry-resolved symbols reach argv.
    pub async fn delegate(&self, descriptor: &CryptocurrencyDescriptor) -> Result<Value, GenerateError> {
        let args = ["generate", "-s", descriptor.symbol];

        let output = self
            .executor
            .run(&self.tool, &args)
            .await
            .map_err(|e| match e {
                ExecError::Spawn(io) => {
                    tracing::error!(tool = %self.tool, error = %io, "Wallet tool could not be started");
                    GenerateError::ToolUnavailable(io)
                }
                ExecError::Wait(io) => {
                    tracing::error!(tool = %self.tool, error = %io, "Lost wallet tool output");
                    GenerateError::GenerationFailed { exit_code: None }
                }
                ExecError::TimedOut(after) => GenerateError::GenerationTimeout(after),
            })?;

        if !output.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                exit_code = ?output.exit_code,
                stderr = %truncate(stderr.trim(), STDERR_LOG_LIMIT),
                "Wallet tool failed"
            );
            return Err(GenerateError::GenerationFailed {
                exit_code: output.exit_code,
            });
        }

        // Raw bytes: invalid UTF-8 is malformed, never repaired.
        let wallet: Value = serde_json::from_slice(output.stdout.trim_ascii()).map_err(|e| {
            tracing::warn!(error = %e, bytes = output.stdout.len(), "Wallet tool output is not JSON");
            GenerateError::MalformedOutput(e)
        })?;

        tracing::info!(coin_type = descriptor.coin_type, "Wallet generated");
        Ok(wallet)
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
