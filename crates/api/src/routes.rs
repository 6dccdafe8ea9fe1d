use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_check))
        // Registry
        .route("/cryptocurrencies", get(list_cryptocurrencies))
        // Wallets
        .route("/generate", post(generate_wallet))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

async fn list_cryptocurrencies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let list: Vec<_> = state.generator.registry().all().collect();
    Json(list)
}

// ---------------------------------------------------------------------------
// Wallets
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SymbolRequest {
    symbol: String,
}

async fn generate_wallet(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SymbolRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = body?;
    let wallet = state.generator.generate(&req.symbol).await?;
    Ok(Json(wallet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tower::ServiceExt;
    use walletgen_core::{CommandExecutor, CommandOutput, ExecError, Registry, WalletGenerator};

    enum Reply {
        Exit(i32, &'static str, &'static str),
        TimedOut,
    }

    struct SpyExecutor {
        reply: Reply,
        invocations: AtomicUsize,
        last_args: Mutex<Vec<String>>,
    }

    impl SpyExecutor {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                invocations: AtomicUsize::new(0),
                last_args: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CommandExecutor for SpyExecutor {
        async fn run(&self, _program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = args.iter().map(|a| a.to_string()).collect();
            match self.reply {
                Reply::Exit(code, stdout, stderr) => Ok(CommandOutput {
                    exit_code: Some(code),
                    stdout: stdout.as_bytes().to_vec(),
                    stderr: stderr.as_bytes().to_vec(),
                }),
                Reply::TimedOut => Err(ExecError::TimedOut(Duration::from_secs(30))),
            }
        }
    }

    fn app(spy: Arc<SpyExecutor>) -> Router {
        let generator = WalletGenerator::new(spy, Registry::builtin(), "hdwallet");
        build_router(AppState::new(generator))
    }

    async fn post_generate(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const WALLET: &str = r#"{"mnemonic": "abandon abandon about", "address": "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"}"#;

    #[tokio::test]
    async fn test_health_check() {
        let response = app(SpyExecutor::new(Reply::Exit(0, WALLET, "")))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_cryptocurrencies() {
        let response = app(SpyExecutor::new(Reply::Exit(0, WALLET, "")))
            .oneshot(
                Request::builder()
                    .uri("/cryptocurrencies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: Value = serde_json::from_slice(&bytes).unwrap();
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), Registry::builtin().len());
        assert!(list.iter().any(|c| c["symbol"] == "BTC"));
    }

    #[tokio::test]
    async fn test_generate_success_returns_tool_output() {
        let spy = SpyExecutor::new(Reply::Exit(0, WALLET, ""));
        let (status, body) = post_generate(app(spy.clone()), json!({"symbol": "ETH"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::from_str::<Value>(WALLET).unwrap());
        assert_eq!(spy.invocations.load(Ordering::SeqCst), 1);
        assert_eq!(*spy.last_args.lock().unwrap(), vec!["generate", "-s", "ETH"]);
    }

    #[tokio::test]
    async fn test_generate_invalid_symbol_is_400_without_spawn() {
        let spy = SpyExecutor::new(Reply::Exit(0, WALLET, ""));
        for symbol in ["NOTACOIN", "eth", "", "BTC; rm -rf /", "$(reboot)"] {
            let (status, body) = post_generate(app(spy.clone()), json!({ "symbol": symbol })).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"detail": "Invalid symbol"}));
        }
        assert_eq!(spy.invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_bad_body_is_json_detail() {
        let spy = SpyExecutor::new(Reply::Exit(0, WALLET, ""));
        for body in [json!({}), json!({"symbol": 42}), json!("BTC")] {
            let (status, body) = post_generate(app(spy.clone()), body).await;
            assert!(status.is_client_error());
            assert!(body["detail"].is_string());
        }
        assert_eq!(spy.invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_without_json_content_type_is_json_detail() {
        let response = app(SpyExecutor::new(Reply::Exit(0, WALLET, "")))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .body(Body::from(r#"{"symbol": "BTC"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_generate_tool_failure_hides_stderr() {
        let spy = SpyExecutor::new(Reply::Exit(2, "", "Traceback (most recent call last): KeyError"));
        let (status, body) = post_generate(app(spy), json!({"symbol": "BTC"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["kind"], "generation_failed");
        assert!(!body.to_string().contains("Traceback"));
    }

    #[tokio::test]
    async fn test_generate_malformed_output_is_distinct() {
        let spy = SpyExecutor::new(Reply::Exit(0, "not-json", ""));
        let (status, body) = post_generate(app(spy), json!({"symbol": "BTC"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["kind"], "malformed_output");
    }

    #[tokio::test]
    async fn test_generate_timeout_is_504() {
        let spy = SpyExecutor::new(Reply::TimedOut);
        let (status, body) = post_generate(app(spy), json!({"symbol": "BTC"})).await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["kind"], "generation_timeout");
    }

    #[tokio::test]
    async fn test_repeated_requests_spawn_independently() {
        let spy = SpyExecutor::new(Reply::Exit(0, WALLET, ""));
        let router = app(spy.clone());

        let (first, _) = post_generate(router.clone(), json!({"symbol": "LTC"})).await;
        let (second, _) = post_generate(router, json!({"symbol": "LTC"})).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_eq!(spy.invocations.load(Ordering::SeqCst), 2);
    }
}
