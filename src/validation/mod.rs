//! Pre-query validation for swap, join and exit requests

pub mod pool_state;
pub mod requests;

pub use pool_state::*;
pub use requests::*;
