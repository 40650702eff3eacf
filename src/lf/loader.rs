//! One-call entry point: DAR path in, lowered [`Program`] out.

use std::path::Path;

use crate::ir::Program;
use crate::lf::archive::extract_dalf_entries;
use crate::lf::decoder::decode_dalf;
use crate::lf::error::LfError;
use crate::lf::limits::DecodeLimits;
use crate::lower::lower_packages;

/// Extract, decode and lower every payload in the DAR at `path`.
pub fn load_program(path: &Path, limits: &DecodeLimits) -> Result<Program, LfError> {
    let entries = extract_dalf_entries(path, limits)?;
    if entries.is_empty() {
        return Err(LfError::MalformedArchive(
            "no .dalf entries found in DAR".to_string(),
        ));
    }
    let mut packages = Vec::with_capacity(entries.len());
    for entry in &entries {
        packages.push(decode_dalf(entry, limits)?);
    }
    Ok(lower_packages(&packages))
}
