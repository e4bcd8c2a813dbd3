//! Error types and message extraction

pub mod scaffold_error;
pub mod message;

pub use scaffold_error::*;
pub use message::*;
