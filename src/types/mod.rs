//! Core data types and structures

pub mod addresses;
pub mod pools;
pub mod actions;
pub mod arbitrage;
pub mod hooks;

pub use addresses::*;
pub use pools::*;
pub use actions::*;
pub use arbitrage::*;
pub use hooks::*;
