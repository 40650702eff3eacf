//! Filesystem helpers for project mode.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find the most recently modified `.dar` under `root`.
pub fn find_newest_dar(root: &Path) -> Option<PathBuf> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("dar") {
            continue;
        }
        let Some(mtime) = entry.metadata().ok().and_then(|m| m.modified().ok()) else {
            continue;
        };
        let newer = newest.as_ref().map_or(true, |(best, _)| mtime > *best);
        if newer {
            newest = Some((mtime, entry.path().to_path_buf()));
        }
    }
    newest.map(|(_, path)| path)
}

/// Run `daml build` in the project directory. A missing `daml` executable
/// is tolerated (the scan proceeds against whatever DARs already exist);
/// a failing build is surfaced.
pub fn build_project(project: &Path) -> std::io::Result<()> {
    debug!(project = %project.display(), "running daml build");
    match Command::new("daml").arg("build").current_dir(project).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(std::io::Error::other(format!(
            "daml build failed with {}",
            status
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("daml executable not found; skipping build");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_newest_dar() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join(".daml").join("dist");
        std::fs::create_dir_all(&dist).unwrap();
        let old = dist.join("old.dar");
        let new = dist.join("new.dar");
        std::fs::write(&old, b"old").unwrap();
        std::fs::write(&new, b"new").unwrap();
        let earlier = SystemTime::now() - std::time::Duration::from_secs(3600);
        let file = std::fs::File::options().write(true).open(&old).unwrap();
        file.set_modified(earlier).unwrap();

        assert_eq!(find_newest_dar(tmp.path()), Some(new));
    }

    #[test]
    fn test_no_dar_returns_none() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("readme.md"), b"x").unwrap();
        assert_eq!(find_newest_dar(tmp.path()), None);
    }
}
