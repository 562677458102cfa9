// Application state shared with every handler

use std::sync::Arc;
use axum::extract::FromRef;

use crate::config::environment::EnvironmentVariables;
use crate::services::PingServiceProvider;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub ping_service: PingServiceProvider,
}

impl AppState {
    /// Wires services for the given configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        let ping_service: PingServiceProvider =
            PingServiceProvider::new(environment.ping_service_scope);

        tracing::info!(
            "Ping service registered with {} scope",
            ping_service.scope()
        );

        Self {
            environment: Arc::new(environment),
            ping_service,
        }
    }

    /// Builds state from the process environment (and .env outside production)
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
        Ok(Self::new(environment.clone()))
    }

    pub fn ping_service(&self) -> &PingServiceProvider {
        &self.ping_service
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentVariables::default())
    }
}

impl FromRef<AppState> for PingServiceProvider {
    fn from_ref(state: &AppState) -> Self {
        state.ping_service.clone()
    }
}
