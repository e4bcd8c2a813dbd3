//! Two-venue arbitrage harness

pub mod venues;
pub mod router_venue;
pub mod bot;

pub use venues::*;
pub use router_venue::*;
pub use bot::*;
