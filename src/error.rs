//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for framework-docs-mcp plumbing.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` where I/O happens.
pub type Result<T> = anyhow::Result<T>;

/// Domain errors raised while answering a documentation request.
///
/// The `Unknown*` variants are recoverable: tool handlers turn them into a readable
/// message pointing at the matching discovery tool. The rest fail the operation.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Framework '{name}' not found. Use list_frameworks to see available frameworks.")]
    UnknownFramework { name: String },

    #[error("Resource '{uri}' not found. Use list_resources to see available documents.")]
    UnknownResource { uri: String },

    #[error(
        "Section '{section}' not found in framework '{framework}'. Use list_sections to see available sections."
    )]
    UnknownSection { framework: String, section: String },

    #[error(
        "File '{path}' not found in framework '{framework}'. Use list_sections or search_docs to locate documents."
    )]
    UnknownFile { framework: String, path: String },

    #[error("Unsupported resource identifier '{uri}': expected framework-docs:///<framework>/<path>")]
    UnsupportedIdentifier { uri: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocsError {
    /// Whether this error names a missing entity rather than a failed operation.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownFramework { .. }
                | Self::UnknownResource { .. }
                | Self::UnknownSection { .. }
                | Self::UnknownFile { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_are_recoverable() {
        let err = DocsError::UnknownSection {
            framework: "laravel".to_string(),
            section: "modules".to_string(),
        };
        assert!(err.is_not_found());
        let message = err.to_string();
        assert!(message.contains("laravel"));
        assert!(message.contains("modules"));
        assert!(message.contains("list_sections"));
    }

    #[test]
    fn unsupported_identifier_is_a_hard_failure() {
        let err = DocsError::UnsupportedIdentifier {
            uri: "file:///etc/passwd".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("file:///etc/passwd"));
    }
}
