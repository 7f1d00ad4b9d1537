//! Domain model for submitted projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by every list projection.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are immutable once created; there is no update or delete path.

pub mod project;
