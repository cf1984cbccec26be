// Domain layer: row access, request/response models. No I/O.

pub mod model;
pub mod ports;
pub mod request;
