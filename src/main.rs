use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

use think_tool::{ThinkToolConfig, ThinkToolService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr for MCP compatibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ThinkToolConfig::load()?;
    config.validate()?;

    tracing::info!(
        "Starting Think Tool MCP Server with {} transport...",
        config.server.transport
    );

    let service = ThinkToolService::with_empty_log(config);
    let server_name = service.config().server.name.clone();

    // Start the MCP server on stdio transport
    let server = service.serve(stdio()).await?;

    tracing::info!("{} MCP server ready for connections", server_name);

    // This keeps the server running until the transport closes
    server.waiting().await?;

    tracing::info!("Think Tool MCP server shutting down");
    Ok(())
}
