// Domain layer: core models, the classification services and ports (interfaces).
// No I/O happens in here.

pub mod model;
pub mod ports;
pub mod services;
pub mod tier;
