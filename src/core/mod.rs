pub mod checks;
pub mod diff;
pub mod loader;
pub mod parser;
pub mod schema;

pub use crate::domain::model::{Diagnostic, ErrorLog, RuleId, RwsSet, SetsMap};
pub use crate::domain::ports::{ProbeResponse, SiteProbe, SuffixProvider};
pub use crate::utils::error::Result;
