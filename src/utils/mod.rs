// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting request plumbing: the pipeline's failure type,
    * the adapters feeding it, and the middleware that reports it.
*/

pub mod error_handler;
pub mod response_handler;

pub use error_handler::{handle_global_error, handle_panic, AppError};
pub use response_handler::error_translation;

// End of file: /src/utils/mod.rs
