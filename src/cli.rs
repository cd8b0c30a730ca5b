use crate::config::{CONFIG_ENV, DOCS_ROOT_ENV};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "framework-docs-mcp")]
#[command(about = "Serve local framework documentation to AI assistants over MCP", long_about = None)]
pub struct Cli {
    /// TOML file describing the docs root and framework table
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Directory containing one subdirectory per framework
    #[arg(short, long, env = DOCS_ROOT_ENV)]
    pub docs_root: Option<String>,
}
