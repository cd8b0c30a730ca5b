//! Document catalog: a per-request snapshot of every markdown file in the library.
//!
//! Catalogs hold paths only. Content is read on demand so every read reflects the
//! filesystem at the time of the read.

use crate::error::DocsError;
use crate::library::{Framework, Library};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Suffix identifying documentation files.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// One markdown file within a framework's corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    framework: String,
    /// `framework/relative/path.md`, always forward-slash separated.
    logical_path: String,
    location: PathBuf,
}

impl Document {
    pub fn new(
        framework: impl Into<String>,
        relative: &str,
        location: impl Into<PathBuf>,
    ) -> Self {
        let framework = framework.into();
        let logical_path = format!("{}/{}", framework, relative);
        Self {
            framework,
            logical_path,
            location: location.into(),
        }
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    /// Backing file on disk.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Path within the framework, without the framework prefix.
    pub fn relative_path(&self) -> &str {
        &self.logical_path[self.framework.len() + 1..]
    }

    /// First path segment of the relative path, if the document is nested.
    pub fn section(&self) -> Option<&str> {
        self.relative_path()
            .split_once('/')
            .map(|(section, _)| section)
    }

    /// Read the document's current content.
    pub fn read(&self) -> Result<String, DocsError> {
        let bytes = std::fs::read(&self.location).map_err(|source| DocsError::Io {
            path: self.location.clone(),
            source,
        })?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}

/// Snapshot of the library's documents, in walk order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    /// Walk every framework root and collect its markdown files.
    ///
    /// A root that is missing or unreadable contributes no documents; the other roots
    /// are still walked.
    pub fn build(library: &Library) -> Self {
        let documents: Vec<Document> = library.frameworks().iter().flat_map(walk_root).collect();
        debug!(
            "Catalog built: {} documents across {} frameworks",
            documents.len(),
            library.frameworks().len()
        );
        Self { documents }
    }

    pub const fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents owned by `framework`, in walk order.
    pub fn for_framework<'a>(&'a self, framework: &str) -> impl Iterator<Item = &'a Document> {
        self.documents
            .iter()
            .filter(move |doc| doc.framework == framework)
    }

    /// Look up a document by framework and relative path.
    pub fn find(&self, framework: &str, relative: &str) -> Option<&Document> {
        let relative = relative.trim_start_matches('/');
        self.for_framework(framework)
            .find(|doc| doc.relative_path() == relative)
    }

    /// Document count per framework, in library order. Empty frameworks report zero.
    pub fn counts<'a>(&self, library: &'a Library) -> Vec<(&'a str, usize)> {
        library
            .names()
            .map(|name| (name, self.for_framework(name).count()))
            .collect()
    }
}

fn walk_root(framework: &Framework) -> Vec<Document> {
    let root = framework.root();
    let mut documents = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        // Linked files count; linked directories are never descended into.
        let is_file = entry
            .file_type()
            .is_some_and(|t| t.is_file() || (t.is_symlink() && entry.path().is_file()));
        let is_markdown = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MARKDOWN_SUFFIX));
        if !is_file || !is_markdown {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(relative) = logical_relative(relative) else {
            warn!("Skipping non UTF-8 path {}", entry.path().display());
            continue;
        };

        documents.push(Document::new(
            framework.name(),
            &relative,
            entry.path().to_path_buf(),
        ));
    }

    documents
}

/// Join path components with `/`, independent of the platform separator.
fn logical_relative(path: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            _ => return None,
        }
    }
    Some(segments.join("/"))
}
