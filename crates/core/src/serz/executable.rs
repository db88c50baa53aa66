//! Locating the serz executable.

use std::path::{Path, PathBuf};

use super::error::SerzError;

/// File name looked up when the configured path is a directory.
pub const SERZ_EXE_NAME: &str = "serz.exe";

/// Resolves the configured serz path to an executable file.
///
/// The configured value may point at the executable itself or at the
/// directory containing `serz.exe`. Empty or missing paths are rejected.
pub fn resolve_executable(configured: &str) -> Result<PathBuf, SerzError> {
    let path = Path::new(configured);
    if configured.is_empty() || !path.exists() {
        return Err(SerzError::path_not_found(path));
    }

    if path.is_dir() {
        let exe = path.join(SERZ_EXE_NAME);
        if !exe.exists() {
            return Err(SerzError::path_not_found(exe));
        }
        return Ok(exe);
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serz::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_directory_with_serz_exe() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("serz.exe");
        std::fs::write(&exe, b"").unwrap();

        let resolved = resolve_executable(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(resolved, exe);
    }

    #[test]
    fn test_directory_without_serz_exe() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("SerzTool.exe"), b"").unwrap();

        let err = resolve_executable(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SerzPathInvalid);
        assert!(err.message().contains("serz.exe"));
    }

    #[test]
    fn test_direct_file_path_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("custom-serz.exe");
        std::fs::write(&exe, b"").unwrap();

        let resolved = resolve_executable(exe.to_str().unwrap()).unwrap();
        assert_eq!(resolved, exe);
    }

    #[test]
    fn test_nonexistent_path() {
        let err = resolve_executable("/definitely/not/here/serz.exe").unwrap_err();
        assert!(matches!(err, SerzError::SerzPathInvalid { .. }));
    }

    #[test]
    fn test_empty_path() {
        let err = resolve_executable("").unwrap_err();
        assert!(matches!(err, SerzError::SerzPathInvalid { .. }));
        assert_eq!(err.message(), "Path \"\" does not exist.");
    }
}
