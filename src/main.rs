use anyhow::Context as _;
use archdoc_mcp::server::KnowledgeServer;
use archdoc_mcp::state::KnowledgeState;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "archdoc-mcp")]
#[command(about = "Architecture documentation knowledge server for AI assistants", long_about = None)]
struct Cli {
    /// Path to the documentation corpus root
    #[arg(short, long, default_value = "docs")]
    corpus: String,
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    archdoc_mcp::tracing::init();

    let cli = Cli::parse();
    let root = PathBuf::from(expand_tilde(&cli.corpus).as_ref());

    // A corpus that cannot be scanned at all is fatal; the server refuses
    // to start rather than serving an empty index.
    let state = KnowledgeState::build(&root)
        .with_context(|| format!("failed to index corpus at {}", root.display()))?;

    tracing::info!("starting archdoc-mcp MCP server");

    let server = KnowledgeServer::new(Arc::new(state));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
