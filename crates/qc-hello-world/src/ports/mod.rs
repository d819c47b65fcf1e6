//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the module and the execution engine.
//!
//! - **Driving Ports (Inbound)**: `StatefulModule`, `Configurator`
//! - **Driven Ports (Outbound)**: `StateStore`, `RoleResolver`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
