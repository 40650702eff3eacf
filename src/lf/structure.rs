//! Wire-structure bounds.
//!
//! The node-count and nesting-depth limits are enforced before the typed
//! parse by walking the raw protobuf wire format: every length-delimited
//! field that itself scans cleanly as a message counts as a node and one
//! level of depth. A string whose bytes happen to look like a message only
//! over-counts, which is acceptable for a denial-of-service bound, the
//! sole purpose of this check.

use crate::lf::error::LfError;
use crate::lf::limits::DecodeLimits;

/// Verify that `bytes` stays within the configured node and depth bounds.
pub fn check_structure(bytes: &[u8], limits: &DecodeLimits) -> Result<(), LfError> {
    let mut nodes: usize = 0;
    scan_message(bytes, 1, &mut nodes, limits)?;
    Ok(())
}

/// Returns `Ok(true)` if `buf` scans as a well-formed message, `Ok(false)`
/// if it is a leaf (string/bytes), and an error if a bound was exceeded.
fn scan_message(
    buf: &[u8],
    depth: usize,
    nodes: &mut usize,
    limits: &DecodeLimits,
) -> Result<bool, LfError> {
    if depth > limits.max_proto_depth {
        return Err(LfError::StructureLimit(format!(
            "nesting depth exceeds limit {}",
            limits.max_proto_depth
        )));
    }

    let mut pos = 0usize;
    while pos < buf.len() {
        let Some((key, next)) = read_varint(buf, pos) else {
            return Ok(false);
        };
        pos = next;
        let field = key >> 3;
        let wire_type = key & 0x7;
        if field == 0 {
            return Ok(false);
        }
        match wire_type {
            // varint
            0 => {
                let Some((_, next)) = read_varint(buf, pos) else {
                    return Ok(false);
                };
                pos = next;
            }
            // fixed64
            1 => {
                if pos + 8 > buf.len() {
                    return Ok(false);
                }
                pos += 8;
            }
            // length-delimited: possibly a nested message
            2 => {
                let Some((len, next)) = read_varint(buf, pos) else {
                    return Ok(false);
                };
                pos = next;
                let len = len as usize;
                if pos.checked_add(len).map_or(true, |end| end > buf.len()) {
                    return Ok(false);
                }
                let sub = &buf[pos..pos + len];
                if scan_message(sub, depth + 1, nodes, limits)? {
                    *nodes += 1;
                    if *nodes > limits.max_proto_nodes {
                        return Err(LfError::StructureLimit(format!(
                            "node count exceeds limit {}",
                            limits.max_proto_nodes
                        )));
                    }
                }
                pos += len;
            }
            // fixed32
            5 => {
                if pos + 4 > buf.len() {
                    return Ok(false);
                }
                pos += 4;
            }
            // group wire types and reserved values: not a message
            _ => return Ok(false),
        }
    }
    Ok(true)
}

fn read_varint(buf: &[u8], mut pos: usize) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift = 0u32;
    loop {
        let byte = *buf.get(pos)?;
        pos += 1;
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Some((value, pos));
        }
        shift += 7;
        if shift >= 64 {
            return None;
        }
    }
}
