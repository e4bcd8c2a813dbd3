//! Pool data reading

pub mod tokens;
pub mod reader;
pub mod convert;

pub use tokens::*;
pub use reader::*;
pub use convert::*;
