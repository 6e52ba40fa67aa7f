//! The main entry point for the debug log server.
mod app;
mod console;
mod types;
mod web;

use anyhow::Result;

/// The main function of the application.
///
/// Parses the port from the command line, binds the listener and prints
/// received debug logs until interrupted.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
