// Start of file: src/main.rs

use ping_demo_api::core::{logging, server};
use ping_demo_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    server::run(state).await
}

// End of file: src/main.rs
