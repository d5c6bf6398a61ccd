// Domain layer: data model and ports (interfaces) for the UI collaborator.

pub mod model;
pub mod ports;
