//! Reading the student list and writing the report.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Read the whole input document as UTF-8.
pub fn read_roster(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "roster read");
    Ok(contents)
}

/// Atomically write the report (temp file + rename).
///
/// The temp file sits next to `path` so the rename stays on one filesystem.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_path_for(path);
    debug!(path = %path.display(), tmp = %tmp_path.display(), "writing report");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let result = fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp report {}", tmp_path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("replace report {}", path.display()))
        });
    if result.is_err()
        && let Err(err) = fs::remove_file(&tmp_path)
    {
        debug!(tmp = %tmp_path.display(), error = %err, "temp report not removed");
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_names_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("input.txt");
        let err = read_roster(&path).unwrap_err();
        assert!(err.to_string().contains("input.txt"));
    }

    #[test]
    fn write_replaces_existing_report() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("output.txt");
        fs::write(&path, "old contents\n").expect("seed");

        write_report(&path, "new contents\n").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "new contents\n");
        assert!(!temp.path().join("output.txt.tmp").exists());
    }

    #[test]
    fn write_overwrites_stale_temp_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("output.txt");
        fs::write(temp.path().join("output.txt.tmp"), "partial").expect("seed tmp");

        write_report(&path, "report\n").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "report\n");
        assert!(!temp.path().join("output.txt.tmp").exists());
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("reports").join("output.txt");
        write_report(&path, "x\n").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "x\n");
    }

    #[test]
    fn write_into_directory_path_fails_without_leaving_temp() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("occupied");
        fs::create_dir_all(path.join("child")).expect("dir");

        assert!(write_report(&path, "x\n").is_err());
        assert!(!temp.path().join("occupied.tmp").exists());
        assert!(path.is_dir());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_temp_write_removes_temp_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("output.txt");
        let tmp_path = temp.path().join("output.txt.tmp");
        // Writes through this link hit ENOSPC.
        std::os::unix::fs::symlink("/dev/full", &tmp_path).expect("symlink");

        let err = write_report(&path, "report\n").unwrap_err();

        assert!(format!("{err:#}").contains("write temp report"));
        assert!(fs::symlink_metadata(&tmp_path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("out/output.txt")),
            PathBuf::from("out/output.txt.tmp")
        );
    }
}
