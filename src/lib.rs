//! Keyword search and browsing over local framework documentation, served over MCP.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod library;
pub mod resource;
pub mod schema;
pub mod search;
pub mod sections;
pub mod server;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, Document};
pub use config::{KnownFramework, LibraryConfig};
pub use detect::detect_framework;
pub use error::DocsError;
pub use library::{Framework, Library};
pub use resource::ResourceUri;
pub use search::{SearchHit, SearchOutcome, SmartSearch, path_priority, search, smart_search};
pub use server::DocsServer;
