//! DAR container extraction.
//!
//! A DAR is a zip archive; the scanner consumes every entry whose name ends
//! in `.dalf`. All container bounds are enforced here, before any payload
//! byte is interpreted: container size, entry count, cumulative declared
//! uncompressed size, and per-entry size. Reads stop one byte past the
//! per-entry bound so a zip entry lying about its size is caught instead of
//! inflated.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::lf::error::LfError;
use crate::lf::limits::DecodeLimits;

/// One payload blob pulled out of the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DalfEntry {
    /// Path of the entry inside the archive.
    pub path: String,
    pub raw: Vec<u8>,
}

/// Extract all `.dalf` entries from the container at `path`.
pub fn extract_dalf_entries(
    path: &Path,
    limits: &DecodeLimits,
) -> Result<Vec<DalfEntry>, LfError> {
    let meta = fs::metadata(path)?;
    if meta.len() > limits.max_dar_bytes {
        return Err(LfError::InputLimit(format!(
            "DAR size {} exceeds limit {}",
            meta.len(),
            limits.max_dar_bytes
        )));
    }

    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| LfError::MalformedArchive(format!("unreadable zip: {}", e)))?;

    if archive.len() > limits.max_dar_entries {
        return Err(LfError::InputLimit(format!(
            "DAR entry count {} exceeds limit {}",
            archive.len(),
            limits.max_dar_entries
        )));
    }

    let mut declared_total: u64 = 0;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| LfError::MalformedArchive(format!("unreadable zip entry: {}", e)))?;
        declared_total = declared_total.saturating_add(entry.size());
    }
    if declared_total > limits.max_dar_uncompressed_bytes {
        return Err(LfError::InputLimit(format!(
            "DAR uncompressed size {} exceeds limit {}",
            declared_total, limits.max_dar_uncompressed_bytes
        )));
    }

    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| LfError::MalformedArchive(format!("unreadable zip entry: {}", e)))?;
        let name = entry.name().to_string();
        if !name.ends_with(".dalf") {
            continue;
        }
        if entry.size() > limits.max_dalf_bytes {
            return Err(LfError::InputLimit(format!(
                "dalf entry {} declares {} bytes, limit {}",
                name,
                entry.size(),
                limits.max_dalf_bytes
            )));
        }

        // One byte past the limit detects declared-size lies (zip bombs).
        let mut raw = Vec::new();
        entry
            .by_ref()
            .take(limits.max_dalf_bytes + 1)
            .read_to_end(&mut raw)
            .map_err(|e| LfError::MalformedArchive(format!("read failed for {}: {}", name, e)))?;
        if raw.len() as u64 > limits.max_dalf_bytes {
            return Err(LfError::InputLimit(format!(
                "dalf entry {} exceeds limit {}",
                name, limits.max_dalf_bytes
            )));
        }

        debug!(entry = %name, bytes = raw.len(), "extracted dalf entry");
        entries.push(DalfEntry { path: name, raw });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_dar(dir: &TempDir, name: &str, entries: &[(&str, &[u8])]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = fs::File::create(&path).unwrap();
        let mut zf = zip::ZipWriter::new(file);
        for (entry_name, data) in entries {
            zf.start_file(*entry_name, SimpleFileOptions::default()).unwrap();
            zf.write_all(data).unwrap();
        }
        zf.finish().unwrap();
        path
    }

    #[test]
    fn test_extracts_only_dalf_entries() {
        let tmp = TempDir::new().unwrap();
        let dar = write_dar(
            &tmp,
            "a.dar",
            &[("pkg.dalf", b"abc"), ("META-INF/MANIFEST.MF", b"x")],
        );
        let entries = extract_dalf_entries(&dar, &DecodeLimits::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "pkg.dalf");
        assert_eq!(entries[0].raw, b"abc");
    }

    #[test]
    fn test_rejects_oversized_entry() {
        let tmp = TempDir::new().unwrap();
        let dar = write_dar(&tmp, "big.dar", &[("big.dalf", &[b'x'; 64])]);
        let limits = DecodeLimits {
            max_dalf_bytes: 16,
            ..DecodeLimits::default()
        };
        let err = extract_dalf_entries(&dar, &limits).unwrap_err();
        assert!(matches!(err, LfError::InputLimit(_)));
    }

    #[test]
    fn test_rejects_entry_count() {
        let tmp = TempDir::new().unwrap();
        let dar = write_dar(&tmp, "many.dar", &[("a.dalf", b"a"), ("b.dalf", b"b")]);
        let limits = DecodeLimits {
            max_dar_entries: 1,
            ..DecodeLimits::default()
        };
        assert!(matches!(
            extract_dalf_entries(&dar, &limits).unwrap_err(),
            LfError::InputLimit(_)
        ));
    }

    #[test]
    fn test_rejects_cumulative_uncompressed_size() {
        let tmp = TempDir::new().unwrap();
        let dar = write_dar(
            &tmp,
            "sum.dar",
            &[("a.dalf", &[b'a'; 32]), ("b.dalf", &[b'b'; 32])],
        );
        let limits = DecodeLimits {
            max_dar_uncompressed_bytes: 48,
            ..DecodeLimits::default()
        };
        assert!(matches!(
            extract_dalf_entries(&dar, &limits).unwrap_err(),
            LfError::InputLimit(_)
        ));
    }

    #[test]
    fn test_rejects_garbage_container() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not.dar");
        fs::write(&path, b"this is not a zip").unwrap();
        assert!(matches!(
            extract_dalf_entries(&path, &DecodeLimits::default()).unwrap_err(),
            LfError::MalformedArchive(_)
        ));
    }
}
