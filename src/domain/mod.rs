// Domain layer: the hero entity and the ports the service is injected with.

pub mod model;
pub mod ports;
