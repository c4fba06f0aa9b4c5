//! The [`EnvFile`] loader: a resolved env file and its parsed mapping.
//!
//! An `EnvFile` binds to one path at construction time and never re-resolves
//! it. The mapping is built in a single all-or-nothing pass; a failed
//! [`reload`](EnvFile::reload) leaves the previous mapping untouched, so
//! callers can keep using the last-good configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::discover::{self, DEFAULT_HINT};
use crate::error::{EnvError, Result};
use crate::parser;

/// Attribute names that resolve to the loader's own fields rather than to
/// mapping entries. Checked before the mapping so a loaded key can never
/// shadow loader state.
const INTRINSIC_ATTRS: [&str; 2] = ["path", "values"];

/// The result of an attribute lookup on an [`EnvFile`].
///
/// Intrinsic fields and mapping entries share one attribute namespace, so
/// the lookup distinguishes what kind of thing a name resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum Attr<'a> {
    /// The intrinsic `path` field: the resolved file path.
    Path(&'a Path),
    /// The intrinsic `values` field: the whole mapping.
    Values(&'a HashMap<String, String>),
    /// A value from the mapping.
    Value(&'a str),
}

/// A loaded env file: the resolved path plus its key/value mapping.
#[derive(Debug, Clone)]
pub struct EnvFile {
    /// The resolved file path, fixed at construction.
    path: PathBuf,
    /// The parsed mapping. Later duplicate keys overwrite earlier ones.
    values: HashMap<String, String>,
    /// Keys in first-occurrence file order.
    key_order: Vec<String>,
}

impl EnvFile {
    /// Locate an env file under the current directory using the default
    /// `.env` hint and load it.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotFound`] if no file matches, or a load error
    /// (see [`from_path`](EnvFile::from_path)) if parsing fails.
    pub fn discover_default() -> Result<Self> {
        Self::discover_in(Path::new("."), DEFAULT_HINT)
    }

    /// Locate an env file under the current directory by filename hint and
    /// load it.
    ///
    /// # Errors
    ///
    /// Same as [`discover_default`](EnvFile::discover_default).
    pub fn discover(hint: &str) -> Result<Self> {
        Self::discover_in(Path::new("."), hint)
    }

    /// Locate an env file under `root` by filename hint and load it.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotFound`] if no file under `root` matches the
    /// hint, or a load error if the matched file cannot be read or parsed.
    pub fn discover_in(root: &Path, hint: &str) -> Result<Self> {
        let path = discover::discover(root, hint)?;
        Self::from_path(path)
    }

    /// Load an env file from an explicit path, skipping discovery.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Load`] wrapping [`EnvError::Read`] if the file
    /// cannot be read, or wrapping [`EnvError::InvalidLine`] if any line is
    /// malformed.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (values, key_order) = load_mapping(&path)?;
        tracing::debug!(path = %path.display(), entries = values.len(), "loaded env file");
        Ok(Self {
            path,
            values,
            key_order,
        })
    }

    /// The resolved file path this loader is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full mapping.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up the value for `key`.
    ///
    /// Only true absence fails; an empty-string value would be returned as a
    /// value, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::KeyNotFound`] if `key` is not in the mapping.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| EnvError::KeyNotFound(key.to_string()))
    }

    /// Resolve an attribute name to an intrinsic field or a mapping entry.
    ///
    /// The intrinsic names `path` and `values` take precedence over mapping
    /// entries of the same name; a shadowed entry stays reachable through
    /// [`get`](EnvFile::get). Any other name resolves against the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::AttributeNotFound`] if `name` is neither
    /// intrinsic nor a loaded key.
    pub fn attr(&self, name: &str) -> Result<Attr<'_>> {
        match name {
            "path" => Ok(Attr::Path(&self.path)),
            "values" => Ok(Attr::Values(&self.values)),
            _ => self
                .values
                .get(name)
                .map(|v| Attr::Value(v.as_str()))
                .ok_or_else(|| EnvError::AttributeNotFound(name.to_string())),
        }
    }

    /// All resolvable attribute names: the intrinsic fields followed by
    /// every loaded key in file order.
    pub fn attr_names(&self) -> Vec<&str> {
        INTRINSIC_ATTRS
            .iter()
            .copied()
            .chain(self.key_order.iter().map(String::as_str))
            .collect()
    }

    /// Loaded keys in first-occurrence file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.key_order.iter().map(String::as_str)
    }

    /// Key/value entries in first-occurrence file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_order
            .iter()
            .filter_map(|k| self.values.get(k).map(|v| (k.as_str(), v.as_str())))
    }

    /// Re-read and re-parse the bound file, replacing the mapping wholesale.
    ///
    /// The attribute view is computed from the mapping at lookup time, so a
    /// successful reload is immediately visible through [`attr`] and
    /// [`attr_names`] with no separate re-sync step.
    ///
    /// [`attr`]: EnvFile::attr
    /// [`attr_names`]: EnvFile::attr_names
    ///
    /// Returns the refreshed mapping.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Load`] on read or parse failure. The previous
    /// mapping is kept in that case.
    pub fn reload(&mut self) -> Result<&HashMap<String, String>> {
        let (values, key_order) = load_mapping(&self.path)?;
        tracing::debug!(path = %self.path.display(), entries = values.len(), "reloaded env file");
        self.values = values;
        self.key_order = key_order;
        Ok(&self.values)
    }
}

/// Read and parse `path` into a mapping plus first-occurrence key order.
///
/// The file is opened, fully read, and closed within this call. Later
/// duplicate keys overwrite the value but keep the earlier position.
fn load_mapping(path: &Path) -> Result<(HashMap<String, String>, Vec<String>)> {
    let text = std::fs::read_to_string(path).map_err(|source| EnvError::Load {
        path: path.to_path_buf(),
        source: Box::new(EnvError::Read {
            path: path.to_path_buf(),
            source,
        }),
    })?;

    let pairs = parser::parse_str(&text).map_err(|source| EnvError::Load {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    let mut values = HashMap::with_capacity(pairs.len());
    let mut key_order = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if values.insert(key.clone(), value).is_none() {
            key_order.push(key);
        }
    }
    Ok((values, key_order))
}
