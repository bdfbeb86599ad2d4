// Domain layer: the record model and the ports the core depends on. No
// dependencies beyond std and serde.

pub mod model;
pub mod ports;
