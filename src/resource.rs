//! `framework-docs:///` resource identifiers.

use crate::catalog::Document;
use crate::error::DocsError;
use std::fmt;

/// Scheme prefix of every document resource.
pub const RESOURCE_SCHEME: &str = "framework-docs:///";

/// MIME type reported for document resources.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// A parsed `framework-docs:///<framework>/<relative>` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    pub framework: String,
    pub relative: String,
}

impl ResourceUri {
    pub fn for_document(doc: &Document) -> Self {
        Self {
            framework: doc.framework().to_string(),
            relative: doc.relative_path().to_string(),
        }
    }

    /// Parse an identifier.
    ///
    /// Any other scheme is [`DocsError::UnsupportedIdentifier`]. A recognised scheme
    /// without both a framework and a path is [`DocsError::UnknownResource`].
    pub fn parse(uri: &str) -> Result<Self, DocsError> {
        let rest = uri
            .strip_prefix(RESOURCE_SCHEME)
            .ok_or_else(|| DocsError::UnsupportedIdentifier {
                uri: uri.to_string(),
            })?;

        match rest.split_once('/') {
            Some((framework, relative)) if !framework.is_empty() && !relative.is_empty() => {
                Ok(Self {
                    framework: framework.to_string(),
                    relative: relative.to_string(),
                })
            }
            _ => Err(DocsError::UnknownResource {
                uri: uri.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", RESOURCE_SCHEME, self.framework, self.relative)
    }
}
