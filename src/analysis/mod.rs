//! Pure analyses over IR expressions. Analyses never fail; they degrade to
//! "unknown" and let rules decide what to do with that.

pub mod lifecycle;
pub mod party;

pub use lifecycle::{collect_update_ops, UpdateOp, UpdateOpKind};
pub use party::{infer_party_set, PartySet};
