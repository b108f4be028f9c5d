use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Path every member domain is expected to publish its set under.
pub const WELL_KNOWN: &str = "/.well-known/related-website-set.json";

/// Submission mapping keyed by primary, in document order.
pub type SetsMap = IndexMap<String, RwsSet>;

/// One Related Website Set as submitted in the PR document.
///
/// Optional fields stay `None` when omitted; "field omitted" and "field
/// present but empty" are distinct for equality, matching the submitted
/// document verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RwsSet {
    pub primary: String,

    #[serde(rename = "associatedSites", default, skip_serializing_if = "Option::is_none")]
    pub associated_sites: Option<Vec<String>>,

    #[serde(rename = "serviceSites", default, skip_serializing_if = "Option::is_none")]
    pub service_sites: Option<Vec<String>>,

    #[serde(rename = "ccTLDs", default, skip_serializing_if = "Option::is_none")]
    pub cc_tlds: Option<BTreeMap<String, Vec<String>>>,

    #[serde(rename = "rationaleBySite", default, skip_serializing_if = "Option::is_none")]
    pub rationale_by_site: Option<BTreeMap<String, String>>,
}

/// Equality covers the fields that define set membership. A
/// rationale-only edit does not make a set "changed" in the diff.
impl PartialEq for RwsSet {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary
            && self.cc_tlds == other.cc_tlds
            && self.associated_sites == other.associated_sites
            && self.service_sites == other.service_sites
    }
}

impl Eq for RwsSet {}

impl RwsSet {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            associated_sites: None,
            service_sites: None,
            cc_tlds: None,
            rationale_by_site: None,
        }
    }

    pub fn associated(&self) -> &[String] {
        self.associated_sites.as_deref().unwrap_or(&[])
    }

    pub fn service(&self) -> &[String] {
        self.service_sites.as_deref().unwrap_or(&[])
    }

    /// ccTLD entries as (aliased site, variant list) pairs.
    pub fn cc_tld_entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.cc_tlds.iter().flatten()
    }

    /// Variant list declared under one aliased site, empty when absent.
    pub fn aliases_of(&self, site: &str) -> &[String] {
        self.cc_tlds
            .as_ref()
            .and_then(|m| m.get(site))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Membership test over primary, associated and service sites, and
    /// optionally every ccTLD variant.
    pub fn includes(&self, site: &str, with_cc_tlds: bool) -> bool {
        if self.primary == site
            || self.associated().iter().any(|s| s == site)
            || self.service().iter().any(|s| s == site)
        {
            return true;
        }
        with_cc_tlds
            && self
                .cc_tld_entries()
                .any(|(_, variants)| variants.iter().any(|v| v == site))
    }
}

/// Which rule of the battery produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Load,
    Rationale,
    Exclusivity,
    Scheme,
    EtldPlus1,
    WellKnown,
    Alias,
    RobotsTag,
    AdsTxt,
    ServiceRedirect,
    Removal,
}

/// One policy violation: the rule that fired, the site it fired for
/// (when there is a single offender) and the literal message shown to
/// the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub site: Option<String>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Append-only, ordered collection of diagnostics. All checks write
/// here and none of them ever removes or reorders an entry.
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Vec<Diagnostic>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: RuleId, site: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?rule, "policy violation: {}", message);
        self.entries.push(Diagnostic {
            rule,
            site: site.map(String::from),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Messages in append order, as the gate prints them.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|d| d.message.clone()).collect()
    }
}
