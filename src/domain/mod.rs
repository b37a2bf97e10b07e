//! Domain layer: bill state, currencies, the split arithmetic and the ports
//! the application talks to.

pub mod bill;
pub mod currency;
pub mod ports;
pub mod split;
