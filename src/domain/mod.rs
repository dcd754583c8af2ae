// Domain layer: the outcome model and the service port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
