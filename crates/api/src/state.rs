use walletgen_core::WalletGenerator;

/// Shared application state accessible by all route handlers.
///
/// Read-only after construction; requests share nothing mutable.
pub struct AppState {
    pub generator: WalletGenerator,
}

impl AppState {
    pub fn new(generator: WalletGenerator) -> Self {
        Self { generator }
    }
}
