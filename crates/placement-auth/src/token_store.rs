//! Persistence for the backend session token.
//!
//! The system store keeps the token in the OS keychain and falls back to a
//! `0600` file at `~/.placement/session`. `PLACEMENT_AUTH__TOKEN` overrides
//! whatever is stored. The memory store never touches disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "placement-cli";
const KEYRING_USER: &str = "session-token";
const SESSION_FILE_NAME: &str = "session";
pub const TOKEN_ENV_VAR: &str = "PLACEMENT_AUTH__TOKEN";

/// Where the current token came from, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    Keyring,
    File,
    Memory,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Keyring => "keyring",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug)]
pub enum TokenStore {
    /// Env override, then OS keychain, then `~/.placement/session`.
    System,
    /// A single token file at the given path.
    File(PathBuf),
    /// Process memory only.
    Memory(Mutex<Option<String>>),
}

impl TokenStore {
    #[must_use]
    pub const fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// A store that keeps the token for this process only.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::Memory(Mutex::new(None))
    }

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if neither keyring nor file storage works.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        match self {
            Self::System => {
                if store_keyring(token) {
                    return Ok(());
                }
                store_file(&session_path()?, token)
            }
            Self::File(path) => store_file(path, token),
            Self::Memory(slot) => {
                let mut guard = slot
                    .lock()
                    .map_err(|_| AuthError::TokenStore("token slot poisoned".into()))?;
                *guard = Some(token.to_string());
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(token, _)| token)
    }

    #[must_use]
    pub fn source(&self) -> Option<TokenSource> {
        self.load_with_source().map(|(_, source)| source)
    }

    fn load_with_source(&self) -> Option<(String, TokenSource)> {
        match self {
            Self::System => {
                if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
                    && !token.trim().is_empty()
                {
                    return Some((token.trim().to_string(), TokenSource::Env));
                }
                if let Some(token) = load_keyring() {
                    return Some((token, TokenSource::Keyring));
                }
                let path = session_path().ok()?;
                load_file(&path).map(|token| (token, TokenSource::File))
            }
            Self::File(path) => load_file(path).map(|token| (token, TokenSource::File)),
            Self::Memory(slot) => slot
                .lock()
                .ok()
                .and_then(|guard| guard.clone())
                .map(|token| (token, TokenSource::Memory)),
        }
    }

    /// Remove the stored token. Missing tokens are not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the session file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        match self {
            Self::System => {
                if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
                    let _ = entry.delete_credential();
                }
                delete_file(&session_path()?)
            }
            Self::File(path) => delete_file(path),
            Self::Memory(slot) => {
                if let Ok(mut guard) = slot.lock() {
                    *guard = None;
                }
                Ok(())
            }
        }
    }
}

/// Keyring service name. `PLACEMENT_KEYRING_SERVICE` overrides it so test
/// runs stay away from real credentials.
fn keyring_service() -> String {
    std::env::var("PLACEMENT_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Write to the keychain and read it back; a keychain that does not persist
/// counts as unavailable.
fn store_keyring(token: &str) -> bool {
    let entry = match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => entry,
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            return false;
        }
    };
    if let Err(error) = entry.set_password(token) {
        tracing::warn!(%error, "keyring store failed; falling back to file");
        return false;
    }
    load_keyring().as_deref() == Some(token)
}

fn load_keyring() -> Option<String> {
    keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .ok()?
        .get_password()
        .ok()
        .filter(|token| !token.is_empty())
}

fn session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".placement").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStore("home directory not found; cannot store session".into())
        })
}

fn store_file(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, token)
        .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn session_path_is_under_home() {
        let path = session_path().expect("should resolve");
        assert!(path.ends_with(".placement/session"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = TokenStore::file(tmp.path().join("nested").join("session"));

        store.store("jwt_abc123").expect("store");
        assert_eq!(store.load().as_deref(), Some("jwt_abc123"));
        assert_eq!(store.source(), Some(TokenSource::File));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(tmp.path().join("nested").join("session"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.delete().expect("delete");
        assert_eq!(store.load(), None);
        store.delete().expect("second delete is a no-op");
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session");
        std::fs::write(&path, "   \n  ").expect("write");
        assert_eq!(TokenStore::file(path).load(), None);
    }

    #[test]
    fn memory_store_never_touches_disk() {
        let store = TokenStore::disabled();
        assert_eq!(store.load(), None);
        store.store("t1").unwrap();
        assert_eq!(store.load().as_deref(), Some("t1"));
        assert_eq!(store.source(), Some(TokenSource::Memory));
        store.delete().unwrap();
        assert_eq!(store.source(), None);
    }
}
