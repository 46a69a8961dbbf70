//! Board operations
//!
//! Each user action on the board lives in its own file as an
//! `impl TaskBoard` block.

pub mod add;
pub mod delete;
pub mod deliverables;
pub mod edit;
pub mod toggle;
