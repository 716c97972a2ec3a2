//! Provider selection and the outbound model call.
//!
//! The gateway owns an ordered list of configured provider strategies and
//! always calls the first one. Selection happens once, at construction,
//! from credential well-formedness — a missing or placeholder key means
//! the provider is simply never instantiated, so an unconfigured gateway
//! reports [`GatewayError::Unavailable`] without touching the network.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::GatewayConfig;
use crate::credentials::{resolve_dashscope_key, resolve_openai_key, Credentials};

use super::dashscope::DashScopeProvider;
use super::openai::OpenAiProvider;
use super::{ChatProvider, ChatRequest, GatewayError};

/// Ordered-strategy model gateway.
#[derive(Clone)]
pub struct ModelGateway {
    providers: Vec<Arc<dyn ChatProvider>>,
    timeout: Duration,
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ModelGateway {
    /// Build the strategy list from available credentials.
    ///
    /// Order: OpenAI when its key is well-formed, then DashScope. The
    /// first configured provider serves all calls.
    pub fn from_credentials(credentials: &Credentials, config: &GatewayConfig) -> Self {
        let mut providers: Vec<Arc<dyn ChatProvider>> = Vec::new();
        if let Some(key) = resolve_openai_key(credentials) {
            providers.push(Arc::new(OpenAiProvider::new(&config.openai, key)));
        }
        if let Some(key) = resolve_dashscope_key(credentials) {
            providers.push(Arc::new(DashScopeProvider::new(&config.dashscope, key)));
        }

        match providers.first() {
            Some(provider) => {
                debug!(provider = provider.name(), model = provider.model(), "model gateway ready")
            }
            None => debug!("no provider credentials; gateway unavailable"),
        }

        Self {
            providers,
            timeout: config.request_timeout(),
        }
    }

    /// Create a gateway backed by explicit providers for integration tests.
    #[doc(hidden)]
    pub fn with_providers(providers: Vec<Arc<dyn ChatProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    /// Whether at least one provider is configured.
    pub fn is_configured(&self) -> bool {
        !self.providers.is_empty()
    }

    /// The provider that will serve calls, if any.
    pub fn active_provider(&self) -> Option<&dyn ChatProvider> {
        self.providers.first().map(|provider| provider.as_ref())
    }

    /// Send the request to the first configured provider, bounded by the
    /// configured timeout. No retry: one failure is enough to trigger the
    /// caller's fallback, and auth failures must never be retried.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] when no provider is
    /// configured (before any network activity), [`GatewayError::Timeout`]
    /// on expiry, or the provider's own error.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        let provider = self.providers.first().ok_or(GatewayError::Unavailable)?;
        match tokio::time::timeout(self.timeout, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(self.timeout.as_secs())),
        }
    }
}
