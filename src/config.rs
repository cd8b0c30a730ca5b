//! Startup configuration: where the documentation lives and which frameworks it covers.
//!
//! Configuration resolves once, before the server starts, from an optional TOML file,
//! the `FRAMEWORK_DOCS_ROOT` environment variable, and built-in defaults.

use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Default documentation root, relative to the working directory.
pub const DEFAULT_DOCS_ROOT: &str = "repo";

/// Environment variable overriding the documentation root.
pub const DOCS_ROOT_ENV: &str = "FRAMEWORK_DOCS_ROOT";

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "FRAMEWORK_DOCS_CONFIG";

/// Frameworks shipped in the default documentation repository.
///
/// Declaration order is detection precedence: the first framework with a matching
/// keyword wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFramework {
    Twill,
    Laravel,
    Next,
    Inertia,
    Tailwind,
}

impl KnownFramework {
    pub const ALL: [Self; 5] = [
        Self::Twill,
        Self::Laravel,
        Self::Next,
        Self::Inertia,
        Self::Tailwind,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Twill => "twill",
            Self::Laravel => "laravel",
            Self::Next => "next",
            Self::Inertia => "inertia",
            Self::Tailwind => "tailwind",
        }
    }

    /// Detection keywords, lower-case, checked in order.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Twill => &["twill", "block editor", "repeater", "cms module"],
            Self::Laravel => &[
                "laravel",
                "eloquent",
                "artisan",
                "blade",
                "migration",
                "middleware",
            ],
            Self::Next => &[
                "next.js",
                "nextjs",
                "app router",
                "server component",
                "getserversideprops",
            ],
            Self::Inertia => &["inertia", "usepage", "useform"],
            Self::Tailwind => &["tailwind", "utility class", "utility-first"],
        }
    }
}

/// One framework entry as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameworkEntry {
    pub name: String,
    /// Directory relative to the docs root; defaults to `name`.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FrameworkEntry {
    fn from_known(known: KnownFramework) -> Self {
        Self {
            name: known.name().to_string(),
            dir: None,
            keywords: known.keywords().iter().map(ToString::to_string).collect(),
        }
    }

    /// Directory name under the docs root.
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(&self.name)
    }
}

/// Resolved library configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub docs_root: PathBuf,
    pub frameworks: Vec<FrameworkEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    docs_root: Option<String>,
    #[serde(default)]
    frameworks: Vec<FrameworkEntry>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from(DEFAULT_DOCS_ROOT),
            frameworks: KnownFramework::ALL
                .into_iter()
                .map(FrameworkEntry::from_known)
                .collect(),
        }
    }
}

impl LibraryConfig {
    /// Built-in framework table rooted at `docs_root`.
    pub fn with_docs_root(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }

    /// Resolve configuration from an optional file plus an optional root override.
    ///
    /// Precedence for the docs root: `docs_root_override`, then the file, then the default.
    pub fn load(config_path: Option<&Path>, docs_root_override: Option<&str>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(root) = docs_root_override {
            config.docs_root = PathBuf::from(expand_tilde(root).into_owned());
        }

        Ok(config)
    }

    /// Read a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text. Missing keys fall back to the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::default();

        if let Some(root) = file.docs_root {
            config.docs_root = PathBuf::from(expand_tilde(&root).into_owned());
        }
        if !file.frameworks.is_empty() {
            config.frameworks = file
                .frameworks
                .into_iter()
                .map(|mut entry| {
                    entry.keywords = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
                    entry
                })
                .collect();
        }

        Ok(config)
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
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
