//! # daml-sast
//!
//! Static application security testing for Daml archives. Decode once,
//! scan everything.
//!
//! Given a DAR (a signed zip of compiled smart-contract packages), the
//! scanner decodes the contained payloads, lowers both wire dialects into a
//! single language-agnostic IR, walks that IR with a set of security rules,
//! and emits machine-readable findings as JSON or SARIF 2.1.0.
//!
//! ## Pipeline
//!
//! - [`lf`]: untrusted-input layer for zip extraction under hard limits,
//!   envelope verification, the two wire schemas, version compatibility,
//!   and interned-name resolution
//! - [`lower`]: dialect-specific lowering into the IR of [`ir`]
//! - [`analysis`]: pure analyses (lifecycle summaries, party-set
//!   inference)
//! - [`rules`] + [`walker`] + [`engine`]: the rule framework, the
//!   deterministic traversal, and finding finalization
//! - [`report`]: JSON and SARIF writers
//! - [`config`] / [`baseline`] / [`suppress`]: CI plumbing
//!
//! ## Library quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use daml_sast::lf::{load_program, DecodeLimits};
//! use daml_sast::engine::run;
//! use daml_sast::rules::registry::registry;
//!
//! let program = load_program(Path::new("app.dar"), &DecodeLimits::default())?;
//! let findings = run(&registry(), &program);
//! for finding in &findings {
//!     println!("{}: {}", finding.id, finding.message);
//! }
//! # Ok::<(), daml_sast::lf::LfError>(())
//! ```
//!
//! ## CLI
//!
//! ```bash
//! daml-sast scan --dar app.dar --format sarif --out report.sarif
//! daml-sast scan --project . --ci --baseline baseline.json
//! ```

pub mod analysis;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod engine;
pub mod fingerprint;
pub mod fs_utils;
pub mod ir;
pub mod lf;
pub mod lower;
pub mod model;
pub mod report;
pub mod rules;
pub mod suppress;
pub mod walker;

pub use engine::run;
pub use fingerprint::compute_fingerprint;
pub use ir::Program;
pub use lf::{load_program, DecodeLimits, LfError};
pub use model::{Confidence, Evidence, Finding, Severity};
