// Domain layer: calendar models and the ports the checker depends on.

pub mod model;
pub mod ports;
