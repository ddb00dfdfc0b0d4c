//! Named template sources
//!
//! A library maps template names to template text. It starts with the
//! built-in templates and can be extended from a TOML manifest:
//!
//! ```toml
//! fallback = "house"
//!
//! [templates]
//! hut = "hut.tpl"
//! ```
//!
//! Manifest paths are resolved relative to the manifest file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Name used when a lookup misses
pub const DEFAULT_FALLBACK: &str = "house";

const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    ("house", include_str!("../templates/house.tpl")),
    ("pen", include_str!("../templates/pen.tpl")),
    ("tower", include_str!("../templates/tower.tpl")),
];

/// Errors that can occur when loading or querying a library
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse library manifest: {0}")]
    Manifest(#[from] toml::de::Error),
    #[error("template '{requested}' not found and fallback '{fallback}' is missing")]
    NotFound { requested: String, fallback: String },
}

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
struct TomlManifest {
    fallback: Option<String>,
    #[serde(default)]
    templates: BTreeMap<String, PathBuf>,
}

/// A set of named template sources with a fallback name
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: BTreeMap<String, String>,
    fallback: String,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateLibrary {
    /// An empty library; lookups fail until templates are added
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// The templates shipped with the crate
    pub fn builtin() -> Self {
        let mut library = Self::empty();
        for (name, source) in BUILTIN_TEMPLATES {
            library.insert(name, source);
        }
        library
    }

    /// Built-in templates plus those listed in a manifest file
    pub fn from_file(path: &Path) -> Result<Self, LibraryError> {
        let content = read(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::builtin().extended_from_str(&content, base_dir)
    }

    /// Add the templates of a manifest, resolving paths against `base_dir`
    pub fn extended_from_str(mut self, content: &str, base_dir: &Path) -> Result<Self, LibraryError> {
        let manifest: TomlManifest = toml::from_str(content)?;
        if let Some(fallback) = manifest.fallback {
            self.fallback = fallback;
        }
        for (name, file) in manifest.templates {
            let source = read(&base_dir.join(file))?;
            self.insert(name, source);
        }
        Ok(self)
    }

    /// Add or replace a template
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    /// Set the name used when a lookup misses
    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback = name.into();
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Source text for `name`, or for the fallback when `name` is unknown
    ///
    /// Returns the name that was actually resolved along with its text.
    pub fn source_of<'a>(&'a self, name: &'a str) -> Result<(&'a str, &'a str), LibraryError> {
        if let Some(source) = self.templates.get(name) {
            return Ok((name, source.as_str()));
        }
        match self.templates.get(&self.fallback) {
            Some(source) => {
                log::info!(
                    "template '{}' not found, using '{}'",
                    name,
                    self.fallback
                );
                Ok((self.fallback.as_str(), source.as_str()))
            }
            None => Err(LibraryError::NotFound {
                requested: name.to_string(),
                fallback: self.fallback.clone(),
            }),
        }
    }
}

fn read(path: &Path) -> Result<String, LibraryError> {
    std::fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
