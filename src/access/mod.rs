//! Who may see what on a movie.
//!
//! Everything here is pure: callers fetch the caller's ledger rows and the
//! movie's notes, and these functions decide. Nothing is cached or stored,
//! so a role change is visible on the very next request.

pub mod category;
pub mod role;
pub mod visibility;

pub use category::{allowed_categories, can_author};
pub use role::{Role, RoleGrant, RoleSet};
pub use visibility::{can_view, visible_notes, VisibleNote};
