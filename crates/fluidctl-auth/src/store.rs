//! File-backed bearer token store.
//!
//! The token lives at `~/.fluidstack/token` as a raw string. The directory
//! is created mode 0700 and the file written mode 0600 before any token
//! bytes touch disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AuthError, Result};

const TOKEN_DIR: &str = ".fluidstack";
const TOKEN_FILE: &str = "token";

/// File-backed store holding the raw bearer token string.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the default location, `~/.fluidstack/token`.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AuthError::HomeDirUnavailable)?;

        Ok(Self {
            path: home.join(TOKEN_DIR).join(TOKEN_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached token, if any. A missing file is not an error.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AuthError::StoreUnreadable {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    /// Write the token, creating the store directory first. Overwrites any
    /// previous token in place.
    pub fn write(&self, token: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            create_dir_restricted(dir).map_err(|source| AuthError::PersistFailed {
                path: self.path.clone(),
                source,
            })?;
        }

        write_file_restricted(&self.path, token.as_bytes()).map_err(|source| {
            AuthError::PersistFailed {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[cfg(unix)]
fn create_dir_restricted(dir: &Path) -> io::Result<()> {
    use std::fs::DirBuilder;
    use std::os::unix::fs::DirBuilderExt;

    DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_dir_restricted(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_file_restricted(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_file_restricted(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("token"));

        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("token"));

        store.write("tok-123").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("tok-123"));

        // Overwrites in place.
        store.write("tok-456").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("tok-456"));
    }

    #[test]
    fn read_trims_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  tok-123\n").unwrap();

        let store = TokenStore::at(path);
        assert_eq!(store.read().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn unreadable_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the token path fails to read for a reason other
        // than "does not exist".
        let store = TokenStore::at(dir.path());

        assert!(matches!(
            store.read(),
            Err(AuthError::StoreUnreadable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn store_is_created_with_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("sub").join("token"));
        store.write("tok-123").unwrap();

        let file_mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);

        let dir_mode = fs::metadata(store.path().parent().unwrap())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(dir_mode & 0o777, 0o700);
    }
}
