//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the driven ports.
//!
//! - `InMemoryStateStore` implements `StateStore`
//! - `AllowList` implements `RoleResolver` and owns role assignment

pub mod allow_list;
pub mod state_store;

pub use allow_list::*;
pub use state_store::*;
