//! Plain text file helpers shared by the store and the repository.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Reads a file, returning `None` if it does not exist.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Creates the parent directory of `path` if needed.
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

/// Replaces the file content using temp file + rename.
///
/// Readers see either the old or the new content, never a partial write.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content).map_err(|e| Error::io(&temp_path, e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Appends lines to the file, creating it if needed.
pub fn append_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    ensure_parent(path)?;

    let mut buf = String::new();
    for line in lines {
        buf.push_str(line.as_ref());
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(buf.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    debug!(path = %path.display(), lines = lines.len(), "appended lines");
    Ok(())
}

/// Rewrites the file keeping only lines for which `keep` returns true.
///
/// A missing file is left missing. Returns the number of lines dropped; the
/// file is only rewritten when that is non-zero.
pub fn retain_lines<F>(path: &Path, mut keep: F) -> Result<usize>
where
    F: FnMut(&str) -> bool,
{
    let Some(content) = read_if_exists(path)? else {
        return Ok(0);
    };

    let mut kept = String::with_capacity(content.len());
    let mut dropped = 0;
    for line in content.lines() {
        if keep(line) {
            kept.push_str(line);
            kept.push('\n');
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        atomic_write(path, &kept)?;
        debug!(path = %path.display(), dropped, "removed lines");
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_if_exists(&temp.path().join("nope.cfg")).unwrap(), None);
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("csgo").join("cfg").join("main.cfg");

        append_lines(&path, &["one", "two"]).unwrap();
        append_lines(&path, &["three"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.cfg");

        atomic_write(&path, "old\n").unwrap();
        atomic_write(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!temp.path().join("table.cfg.tmp").exists());
    }

    #[test]
    fn test_atomic_write_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.cfg");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let err = atomic_write(&path, "new\n").unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(!temp.path().join("table.cfg.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_retain_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.cfg");
        append_lines(&path, &["keep a", "drop b", "keep c"]).unwrap();

        let dropped = retain_lines(&path, |line| !line.contains("drop")).unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep a\nkeep c\n");

        // Missing file stays missing
        let missing = temp.path().join("missing.cfg");
        assert_eq!(retain_lines(&missing, |_| false).unwrap(), 0);
        assert!(!missing.exists());
    }
}
