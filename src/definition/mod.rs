/// Content view definition domain layer: lookups, membership changes, errors.
pub mod errors;
pub mod lookup;
pub mod membership;

pub use errors::ActionError;
pub use lookup::{resolve_definition, resolve_view};
pub use membership::{MembershipChange, apply_change};
