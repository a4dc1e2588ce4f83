use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use url::{form_urlencoded, Origin, Url};

use super::PreferenceStore;
use crate::error::StoreError;

/// File-backed store holding a flat JSON object of string entries.
///
/// Every read goes to disk, so a value written by one process is visible to
/// the next load. Writes replace the file through a sibling temp file.
///
/// # Example
///
/// ```rust
/// use themeswitch::{FileStore, PreferenceStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileStore::new(dir.path().join("prefs.json"));
/// store.set("theme", "dark").unwrap();
///
/// let reopened = FileStore::new(dir.path().join("prefs.json"));
/// assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at an explicit path. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store for `origin` inside the user's data directory.
    ///
    /// Each origin gets its own file, so preferences never leak between sites.
    pub fn for_origin(origin: &str) -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "themeswitch")
            .ok_or(StoreError::NoDataDir)?;
        Ok(Self::in_dir(dirs.data_dir(), origin))
    }

    /// Opens the store for `origin` under `dir`.
    pub fn in_dir(dir: &Path, origin: &str) -> Self {
        Self::new(dir.join("origins").join(origin_file_name(origin)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), key, value, "persisted preference");
        Ok(())
    }
}

/// Maps an origin such as `https://example.com:8080` to a file name.
///
/// URL origins are normalized first (lowercase scheme and host, default port
/// dropped) so that equivalent spellings share a file. The result is
/// percent-encoded, so distinct origins never collide.
fn origin_file_name(origin: &str) -> String {
    let canonical = match Url::parse(origin) {
        Ok(url) => match url.origin() {
            tuple @ Origin::Tuple(..) => tuple.ascii_serialization(),
            Origin::Opaque(_) => url.as_str().to_string(),
        },
        Err(_) => origin.to_ascii_lowercase(),
    };
    let mut name = String::new();
    for piece in form_urlencoded::byte_serialize(canonical.as_bytes()) {
        name.push_str(&piece.replace('*', "%2A"));
    }
    if name.starts_with('.') {
        name.replace_range(..1, "%2E");
    }
    name.push_str(".json");
    name
}
