// Adapters layer: concrete implementations of the domain ports (live
// HTTP probe, public suffix list, ICANN registry file).

pub mod probe;
pub mod suffixes;

pub use probe::ReqwestProbe;
pub use suffixes::{load_icann_domains, PublicSuffixes};
