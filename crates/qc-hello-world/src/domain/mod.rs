//! # Domain Layer (Inner Hexagon)
//!
//! Roles, call context, greeting storage layout and hashing helpers.
//! NO I/O, NO async. State is reached only through the `StateStore` port.

pub mod entities;
pub mod greeting;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use greeting::*;
pub use services::*;
pub use value_objects::*;
