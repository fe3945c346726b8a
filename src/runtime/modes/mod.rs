//! Mode routing
//!
//! - Server mode (HTTP server, default)
//! - CLI mode (offline prediction and config helpers)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
