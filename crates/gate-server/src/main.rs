//! Gate server standalone binary.

use clap::Parser;
use gate_server::{cli, ServerArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();
    cli::run(args).await?;
    Ok(())
}
