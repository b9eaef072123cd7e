// Domain layer: wire model, static lookup data and ports (interfaces).

pub mod locations;
pub mod model;
pub mod ports;
