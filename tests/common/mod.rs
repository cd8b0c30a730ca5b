//! Shared test fixtures and utilities for integration tests.
//!
//! Every test gets its own temporary documentation root, so catalogs built in one test
//! never see files from another.
//!
//! # Available Fixtures
//!
//! - `docs_library`: a small corpus with laravel, tailwind and twill documentation
//!
//! [`TempWorkspace`] provides the temp directory abstraction for tests that lay out
//! their own corpus.

use framework_docs_mcp::{Library, LibraryConfig};
use rstest::fixture;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory for test isolation.
///
/// Cleaned up automatically when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    temp: TempDir,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Creates a directory (and all parent directories) within this workspace.
    pub fn create_dir(&self, path: &str) {
        let full_path = self.path().join(path);
        std::fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("Failed to create directory '{}': {}", path, e));
    }

    /// Creates a file with the given content. Parent directories are created as needed.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Removes a file from this workspace.
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path().join(path))
            .unwrap_or_else(|e| panic!("Failed to remove file '{}': {}", path, e));
    }

    /// Library over this workspace using the built-in framework table.
    pub fn library(&self) -> Library {
        Library::from_config(&LibraryConfig::with_docs_root(self.path()))
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A documentation corpus on disk plus the library serving it.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct DocsLibrary {
    pub workspace: TempWorkspace,
    pub library: Library,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl DocsLibrary {
    /// Rebuild the library, e.g. after adding a framework directory.
    pub fn reload(&mut self) {
        self.library = self.workspace.library();
    }
}

/// Small corpus: laravel (nested sections), tailwind (flat), twill (one section).
///
/// next and inertia have no directory, so they are not part of the library.
#[fixture]
pub fn docs_library() -> DocsLibrary {
    framework_docs_mcp::tracing::init_for_tests();

    let workspace = TempWorkspace::new();

    workspace.create_file(
        "laravel/index.md",
        "# Laravel\n\nLaravel is a web application framework.\n",
    );
    workspace.create_file(
        "laravel/getting-started.md",
        "# Getting Started\n\nInstall Laravel, then configure auth scaffolding.\n",
    );
    workspace.create_file(
        "laravel/forms/1.md",
        "# Forms\n\nProtect forms with auth middleware and CSRF tokens.\n",
    );
    workspace.create_file(
        "laravel/routing/basics.md",
        "# Routing\n\nDefine routes in routes/web.php. Route middleware runs before controllers.\n",
    );
    workspace.create_file(
        "laravel/routing/groups.md",
        "# Route Groups\n\nGroups share middleware and prefixes.\n",
    );
    workspace.create_file("laravel/notes.txt", "auth notes that are not markdown");

    workspace.create_file(
        "tailwind/index.md",
        "# Tailwind CSS\n\nA utility-first CSS framework.\n",
    );
    workspace.create_file(
        "tailwind/flexbox.md",
        "# Flexbox\n\nUse flex utilities to build layouts. Combine with middleware? No.\n",
    );

    workspace.create_file(
        "twill/modules/blocks.md",
        "# Blocks\n\nThe block editor composes pages from blocks.\n",
    );

    let library = workspace.library();
    DocsLibrary { workspace, library }
}
