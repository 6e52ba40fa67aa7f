pub mod args;
mod setup;

pub use args::AppArgs;

use crate::console::Console;
use crate::web;
use anyhow::Result;
use std::sync::Arc;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    setup::configure_logging();

    let listener = web::bind(args.port).await?;
    let port = listener.local_addr().map_or(args.port, |addr| addr.port());
    setup::print_start_banner(port);

    web::serve(listener, Arc::new(Console::stdout())).await?;

    println!("\n🛑 Debug server stopped");
    Ok(())
}
