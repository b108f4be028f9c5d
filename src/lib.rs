pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{load_icann_domains, PublicSuffixes, ReqwestProbe};
pub use crate::core::checks::RwsChecker;
pub use crate::core::diff::{find_diff_sets, select_primaries};
pub use crate::core::loader::load_sets;
pub use crate::core::parser::parse_sets_json;
pub use crate::core::schema::validate_document;
pub use crate::domain::model::{Diagnostic, ErrorLog, RuleId, RwsSet, SetsMap, WELL_KNOWN};
pub use crate::domain::ports::{ProbeResponse, SiteProbe, SuffixProvider};
pub use crate::utils::error::{Result, RwsError};
