//! Report writers: JSON findings array and SARIF 2.1.0.

pub mod json;
pub mod sarif;

pub use json::emit_json;
pub use sarif::{emit_sarif, SarifContext};
