//! Query → approve → execute workflows for swaps, joins and exits

pub mod context;
pub mod approvals;
pub mod receipt;
pub mod swap;
pub mod join;
pub mod exit;
pub mod workflow;

pub use context::*;
pub use approvals::*;
pub use receipt::*;
pub use swap::*;
pub use join::*;
pub use exit::*;
pub use workflow::*;
