//! Configuration management for the scaffold

pub mod settings;
pub mod deployments;

pub use settings::*;
pub use deployments::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::load();
}
