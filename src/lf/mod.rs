//! Untrusted-input layer: DAR container, payload envelopes, wire schemas,
//! decode limits and name resolution.

pub mod archive;
pub mod compat;
pub mod decoder;
pub mod error;
pub mod limits;
pub mod loader;
pub mod proto;
pub mod resolve;
pub mod structure;

pub use archive::{extract_dalf_entries, DalfEntry};
pub use compat::{supported_versions, LfVersion};
pub use decoder::{decode_dalf, LfPackage, PackageBody};
pub use error::LfError;
pub use limits::DecodeLimits;
pub use loader::load_program;
