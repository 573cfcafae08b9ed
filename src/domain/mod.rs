// Domain layer: rate data model and the config port.

pub mod model;
pub mod ports;
