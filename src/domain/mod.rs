// Domain layer: the typed set model and the ports the check battery
// consumes (suffix oracle, HTTP probe). No IO happens here.

pub mod model;
pub mod ports;
