//! Durable bearer token storage
//!
//! A single file holding the token string, so a new process can resume the
//! session without re-authenticating.

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted token; a missing or empty file yields `None`
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Remove the persisted token; removing an absent file is a no-op
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("token"));

        assert!(file.load().is_none());

        file.save("abc123").unwrap();
        assert_eq!(file.load().as_deref(), Some("abc123"));

        file.clear().unwrap();
        assert!(file.load().is_none());

        // Clearing again must not error
        file.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("nested").join("dir").join("token"));

        file.save("tok").unwrap();
        assert_eq!(file.load().as_deref(), Some("tok"));
    }

    #[test]
    fn test_whitespace_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("token"));

        file.save("  \n").unwrap();
        assert!(file.load().is_none());
    }
}
