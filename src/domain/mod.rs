// Domain layer: catalog and quotation models plus the ports the exporter is
// written against.

pub mod model;
pub mod ports;
