// Start of file: /src/services/mod.rs

/*
    * Application services injected into handlers through AppState.
*/

pub mod ping_service;

pub use ping_service::{PingError, PingService, PingServiceProvider, ServiceScope, PONG};

// End of file: /src/services/mod.rs
