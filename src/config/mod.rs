// Start of file: /src/config/mod.rs

/*
* Configuration loaded from the environment, and the AppState built from it
* that wires services into the handlers.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
