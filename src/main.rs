use clap::Parser;
use framework_docs_mcp::cli::Cli;
use framework_docs_mcp::{DocsServer, Library, LibraryConfig};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    framework_docs_mcp::tracing::init();

    let cli = Cli::parse();
    let config = LibraryConfig::load(cli.config.as_deref(), cli.docs_root.as_deref())?;

    tracing::info!(
        "Starting framework-docs-mcp (docs root: {})",
        config.docs_root.display()
    );

    let library = Library::from_config(&config);
    if library.is_empty() {
        tracing::warn!(
            "No framework directories found under {}",
            config.docs_root.display()
        );
    }

    let server = DocsServer::new(library);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
