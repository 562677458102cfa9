// Ping service and the provider that hands it out to requests

use std::{
    fmt,
    str::FromStr,
    sync::{Arc, PoisonError, RwLock},
};
use thiserror::Error;

/// Payload returned by a healthy ping
pub const PONG: &str = "Pong!";

/// Failure raised by [`PingService::ping`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PingError {
    /// A failure injected through [`PingService::configure_failure`]
    #[error("{0}")]
    Configured(String),
}

/// A service that either answers "Pong!" or fails with a custom message.
///
/// Stands in for any application service that can fail deep inside a request.
/// The failure message is set from tests; nothing on the HTTP surface can set it.
#[derive(Debug, Default)]
pub struct PingService {
    failure_message: RwLock<Option<String>>,
}

impl PingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `ping` fail with `message` until it is reconfigured
    pub fn configure_failure(&self, message: impl Into<String>) {
        let message: String = message.into();
        tracing::debug!("Ping service configured to fail with {:?}", message);

        *self
            .failure_message
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(message);
    }

    pub fn ping(&self) -> Result<&'static str, PingError> {
        let guard = self
            .failure_message
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match guard.as_ref() {
            Some(message) => Err(PingError::Configured(message.clone())),
            None => Ok(PONG),
        }
    }
}

/// Lifetime of the [`PingService`] instance a request sees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceScope {
    /// One instance for the whole application; configured failures leak across requests
    #[default]
    Shared,
    /// A fresh, unconfigured instance for every request
    PerRequest,
}

impl ServiceScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceScope::Shared => "shared",
            ServiceScope::PerRequest => "per-request",
        }
    }
}

impl fmt::Display for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service scope `{0}`, expected `shared` or `per-request`")]
pub struct ParseServiceScopeError(String);

impl FromStr for ServiceScope {
    type Err = ParseServiceScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" | "singleton" => Ok(ServiceScope::Shared),
            "per-request" | "per_request" | "request" => Ok(ServiceScope::PerRequest),
            _ => Err(ParseServiceScopeError(s.to_string())),
        }
    }
}

/// Resolves the [`PingService`] for each request according to its [`ServiceScope`]
#[derive(Debug, Clone)]
pub struct PingServiceProvider {
    scope: ServiceScope,
    shared: Arc<PingService>,
}

impl PingServiceProvider {
    pub fn new(scope: ServiceScope) -> Self {
        Self {
            scope,
            shared: Arc::new(PingService::new()),
        }
    }

    pub fn scope(&self) -> ServiceScope {
        self.scope
    }

    /// The application-lifetime instance. Tests configure failures through it.
    pub fn shared(&self) -> &PingService {
        &self.shared
    }

    /// Returns the instance a single request should use
    pub fn resolve(&self) -> Arc<PingService> {
        match self.scope {
            ServiceScope::Shared => Arc::clone(&self.shared),
            ServiceScope::PerRequest => Arc::new(PingService::new()),
        }
    }
}

impl Default for PingServiceProvider {
    fn default() -> Self {
        Self::new(ServiceScope::default())
    }
}
