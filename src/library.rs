//! The set of documentation corpora served by this process.

use crate::config::LibraryConfig;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One named documentation corpus rooted at a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framework {
    name: String,
    root: PathBuf,
    keywords: Vec<String>,
}

impl Framework {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, keywords: Vec<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Detection keywords, lower-case, in configured order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Ordered, immutable list of frameworks.
///
/// Built once at startup. Order is configuration order and drives detection precedence.
#[derive(Debug, Clone, Default)]
pub struct Library {
    frameworks: Vec<Framework>,
}

impl Library {
    /// Build from configuration, dropping frameworks whose root directory is missing.
    pub fn from_config(config: &LibraryConfig) -> Self {
        let frameworks = config
            .frameworks
            .iter()
            .filter_map(|entry| {
                let root = config.docs_root.join(entry.dir());
                if root.is_dir() {
                    Some(Framework::new(&entry.name, root, entry.keywords.clone()))
                } else {
                    warn!(
                        "Skipping framework '{}': {} is not a directory",
                        entry.name,
                        root.display()
                    );
                    None
                }
            })
            .collect::<Vec<_>>();

        info!(
            "Loaded {} framework(s) from {}",
            frameworks.len(),
            config.docs_root.display()
        );

        Self { frameworks }
    }

    /// Build from an explicit list, without checking the filesystem.
    pub const fn new(frameworks: Vec<Framework>) -> Self {
        Self { frameworks }
    }

    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }

    pub fn get(&self, name: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().map(Framework::name)
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}
