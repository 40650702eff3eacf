//! Hand-maintained wire-format schemas.
//!
//! Three message families: the outer envelope ([`daml_lf`]), the dialect-1
//! package schema ([`daml_lf1`]) and the dialect-2 package schema
//! ([`daml_lf2`]). The schemas are written as `prost` derive structs rather
//! than generated at build time, so the exact wire surface the scanner
//! accepts is reviewable source. Fields the scanner does not consume are
//! omitted; `prost` skips unknown fields, so the omissions do not affect
//! decoding.

pub mod daml_lf;
pub mod daml_lf1;
pub mod daml_lf2;
