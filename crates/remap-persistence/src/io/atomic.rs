use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Write `bytes` to `path` through a sibling temp file and a rename, so a
/// crash never leaves a half-written target behind.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name).to_path_buf();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| PersistenceError::io("create directory", parent, e))?;
    }

    let mut file =
        File::create(&temp_path).map_err(|e| PersistenceError::io("create", &temp_path, e))?;
    file.write_all(bytes)
        .map_err(|e| PersistenceError::io("write", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| PersistenceError::io("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), %cleanup, "failed to remove temp file");
        }
        PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("taken.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inside"), b"x").unwrap();

        let result = write_atomic(&target, b"[]");

        assert!(matches!(
            result,
            Err(PersistenceError::AtomicWriteFailed { .. })
        ));
        assert!(!dir.path().join("taken.json.tmp").exists());
    }

    #[test]
    fn writes_and_replaces_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("out.json");
        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");
        assert!(!dir.path().join("nested").join("out.json.tmp").exists());
    }
}
