// Domain layer: catalog models, response envelopes and the query port.

pub mod model;
pub mod ports;
