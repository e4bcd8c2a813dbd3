//! Network providers and remote data sources

pub mod providers;
pub mod hooks_catalog;

pub use providers::*;
pub use hooks_catalog::*;
