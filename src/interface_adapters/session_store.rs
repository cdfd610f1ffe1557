use crate::domain::{SessionError, SessionStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// Key the access token is stored under, per origin.
pub const TOKEN_KEY: &str = "access_token";

// In-memory token slot. Clones share the same slot.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    token: Arc<Mutex<Option<String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut slot = self.token.lock().map_err(|_| SessionError::Unavailable)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, SessionError> {
        let slot = self.token.lock().map_err(|_| SessionError::Unavailable)?;
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.token.lock().map_err(|_| SessionError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

// On-disk layout: one key-value table per API origin.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    origins: BTreeMap<String, BTreeMap<String, String>>,
}

// TOML-file backed token storage, scoped to one API origin.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    origin: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, origin: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: origin.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<SessionFile>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        toml::from_str(&raw)
            .map(Some)
            .map_err(|err| SessionError::Malformed(err.to_string()))
    }

    // Writers start over from an empty file when the current one is corrupt.
    fn load_for_write(&self) -> Result<Option<SessionFile>, SessionError> {
        match self.load() {
            Err(SessionError::Malformed(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "session file is malformed, replacing it."
                );
                Ok(Some(SessionFile::default()))
            }
            other => other,
        }
    }

    // Writes a sibling temp file readable only by the owner, then renames it
    // over the session file so readers never see a partial write.
    fn store(&self, file: &SessionFile) -> Result<(), SessionError> {
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let raw =
            toml::to_string_pretty(file).map_err(|err| SessionError::Malformed(err.to_string()))?;

        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        staged.write_all(raw.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut file = self.load_for_write()?.unwrap_or_default();
        file.origins
            .entry(self.origin.clone())
            .or_default()
            .insert(TOKEN_KEY.to_string(), token.to_string());
        self.store(&file)?;

        tracing::debug!(path = %self.path.display(), origin = %self.origin, "access token saved.");
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, SessionError> {
        let Some(file) = self.load()? else {
            return Ok(None);
        };

        Ok(file
            .origins
            .get(&self.origin)
            .and_then(|entries| entries.get(TOKEN_KEY))
            .cloned())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut file = match self.load() {
            Ok(Some(file)) => file,
            Ok(None) => return Ok(()),
            // Nothing in a corrupt file can be trusted, so it is reset.
            Err(SessionError::Malformed(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "session file is malformed, resetting it."
                );
                return self.store(&SessionFile::default());
            }
            Err(err) => return Err(err),
        };

        let Some(entries) = file.origins.get_mut(&self.origin) else {
            return Ok(());
        };
        entries.remove(TOKEN_KEY);
        if entries.is_empty() {
            file.origins.remove(&self.origin);
        }
        self.store(&file)?;

        tracing::debug!(path = %self.path.display(), origin = %self.origin, "access token cleared.");
        Ok(())
    }
}
