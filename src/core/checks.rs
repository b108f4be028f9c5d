use crate::domain::model::{ErrorLog, RuleId, RwsSet, SetsMap, WELL_KNOWN};
use crate::domain::ports::{SiteProbe, SuffixProvider};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// The ordered battery of policy checks. Every check reads the loaded
/// mapping, appends to the shared log, and keeps going past failures;
/// only the caller decides accept/reject, from the final log.
pub struct RwsChecker<S: SuffixProvider, P: SiteProbe> {
    suffixes: S,
    icann_codes: HashSet<String>,
    probe: P,
}

/// Every declared URL of a set with the role it plays in the scheme and
/// eTLD+1 messages, in reporting order.
fn declared_sites(set: &RwsSet) -> Vec<(&'static str, &String)> {
    let mut sites = vec![("primary", &set.primary)];
    for (aliased, variants) in set.cc_tld_entries() {
        sites.push(("aliased", aliased));
        for variant in variants {
            sites.push(("alias", variant));
        }
    }
    for site in set.associated() {
        sites.push(("associated", site));
    }
    for site in set.service() {
        sites.push(("service", site));
    }
    sites
}

fn strip_scheme(site: &str) -> &str {
    site.strip_prefix("https://").unwrap_or(site)
}

/// Splits a site into its second-level label and everything after it.
fn split_host(site: &str) -> (&str, &str) {
    let host = strip_scheme(site);
    host.split_once('.').unwrap_or((host, ""))
}

fn last_label(suffix: &str) -> &str {
    suffix.rsplit('.').next().unwrap_or(suffix)
}

fn has_robots_directive(tag: &str) -> bool {
    tag.split(',')
        .map(str::trim)
        .any(|directive| directive.eq_ignore_ascii_case("noindex") || directive.eq_ignore_ascii_case("none"))
}

fn same_endpoint(requested: &str, resolved: &str) -> bool {
    match (url::Url::parse(requested), url::Url::parse(resolved)) {
        (Ok(a), Ok(b)) => {
            a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
        }
        _ => requested.trim_end_matches('/') == resolved.trim_end_matches('/'),
    }
}

fn well_known_url(site: &str) -> String {
    format!("{site}{WELL_KNOWN}")
}

impl<S: SuffixProvider, P: SiteProbe> RwsChecker<S, P> {
    pub fn new(suffixes: S, icann_codes: HashSet<String>, probe: P) -> Self {
        Self {
            suffixes,
            icann_codes,
            probe,
        }
    }

    /// Runs the full battery in its fixed order. The removal check is
    /// separate because it operates on the diff, not the submission.
    pub async fn run_checks(&self, sets: &SetsMap, log: &mut ErrorLog) {
        tracing::info!("Running checks over {} set(s)", sets.len());
        self.has_all_rationales(sets, log);
        self.check_exclusivity(sets, log);
        self.find_non_https_urls(sets, log);
        self.find_invalid_etld_plus1(sets, log);
        self.find_invalid_well_known(sets, log).await;
        self.find_invalid_alias_eslds(sets, log);
        self.find_robots_tag(sets, log).await;
        self.find_ads_txt(sets, log).await;
        self.check_for_service_redirect(sets, log).await;
    }

    /// Every associated and service site needs a non-empty rationale.
    pub fn has_all_rationales(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for site in set.associated().iter().chain(set.service()) {
                let rationale = set
                    .rationale_by_site
                    .as_ref()
                    .and_then(|rationales| rationales.get(site));
                if rationale.map_or(true, |r| r.trim().is_empty()) {
                    log.push(
                        RuleId::Rationale,
                        Some(site),
                        format!("There is no provided rationale for {site}"),
                    );
                }
            }
        }
    }

    /// No site may belong to more than one set. Walks the mapping in
    /// document order, accumulating every member seen so far; the first
    /// set to declare a site owns it.
    pub fn check_exclusivity(&self, sets: &SetsMap, log: &mut ErrorLog) {
        let mut seen: HashSet<&str> = HashSet::new();
        for (primary, set) in sets {
            if seen.contains(primary.as_str()) {
                log.push(
                    RuleId::Exclusivity,
                    Some(primary),
                    format!(
                        "This primary is already registered in another related website set: {primary}"
                    ),
                );
            } else {
                seen.insert(primary);
            }
            let service_overlap: Vec<&str> = set
                .service()
                .iter()
                .map(String::as_str)
                .filter(|site| seen.contains(site))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            if !service_overlap.is_empty() {
                log.push(
                    RuleId::Exclusivity,
                    Some(primary),
                    format!(
                        "These service sites are already registered in another related website set: {service_overlap:?}"
                    ),
                );
            }
            seen.extend(set.service().iter().map(String::as_str));

            let associated_overlap: Vec<&str> = set
                .associated()
                .iter()
                .map(String::as_str)
                .filter(|site| seen.contains(site))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            if !associated_overlap.is_empty() {
                log.push(
                    RuleId::Exclusivity,
                    Some(primary),
                    format!(
                        "These associated sites are already registered in another related website set: {associated_overlap:?}"
                    ),
                );
            }
            seen.extend(set.associated().iter().map(String::as_str));
        }
    }

    /// Every declared URL must carry the https scheme, each field
    /// reported independently.
    pub fn find_non_https_urls(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for (role, site) in declared_sites(set) {
                if !site.starts_with("https://") {
                    log.push(
                        RuleId::Scheme,
                        Some(site),
                        format!("The provided {role} site does not begin with https:// {site}"),
                    );
                }
            }
        }
    }

    /// Every declared URL must be a registrable domain: exactly one
    /// label on top of a suffix that is actually on the list.
    pub fn find_invalid_etld_plus1(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for (role, site) in declared_sites(set) {
                let host = strip_scheme(site);
                if self.suffixes.registrable_domain(host).as_deref() != Some(host) {
                    log.push(
                        RuleId::EtldPlus1,
                        Some(site),
                        format!("The provided {role} site is not an eTLD+1: {site}"),
                    );
                }
            }
        }
    }

    /// ccTLD variants must share their key's second-level label and end
    /// in an acceptable country-code suffix. The key itself must be a
    /// declared member of the set.
    ///
    /// An acceptable variant suffix is the key's own suffix, an ICANN
    /// country code, or `com` when the key's terminal label is an ICANN
    /// country code (so `example.ca` may alias `example.com` and back).
    pub fn find_invalid_alias_eslds(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for (primary, set) in sets {
            for (aliased, variants) in set.cc_tld_entries() {
                if !set.includes(aliased, false) {
                    log.push(
                        RuleId::Alias,
                        Some(aliased),
                        format!(
                            "The provided aliased site {aliased} is not a member of the set with primary: {primary}"
                        ),
                    );
                    continue;
                }
                let (key_esld, key_suffix) = split_host(aliased);
                for variant in variants {
                    let (variant_esld, variant_suffix) = split_host(variant);
                    if variant_esld != key_esld {
                        log.push(
                            RuleId::Alias,
                            Some(variant),
                            format!(
                                "The following top level domain must match: {aliased}, but is instead: {variant}"
                            ),
                        );
                        continue;
                    }
                    if variant_suffix == key_suffix
                        || self.icann_codes.contains(variant_suffix)
                        || (variant_suffix == "com"
                            && self.icann_codes.contains(last_label(key_suffix)))
                    {
                        continue;
                    }
                    log.push(
                        RuleId::Alias,
                        Some(variant),
                        format!(
                            "The provided country code: {variant_suffix}, in: {variant} is not a ICANN registered country code"
                        ),
                    );
                }
            }
        }
    }

    /// Cross-validates each set against the well-known documents its
    /// members publish. A fetch failure behaves as an empty document,
    /// so an unreachable site reports mismatches rather than crashing.
    pub async fn find_invalid_well_known(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for (primary, set) in sets {
            let doc = self
                .probe
                .fetch_json(&well_known_url(primary))
                .await
                .unwrap_or(Value::Null);
            let wk_primary = doc.get("primary").and_then(Value::as_str);
            if wk_primary == Some(primary.as_str()) {
                self.compare_well_known_fields(primary, set, &doc, log);
            } else {
                log.push(
                    RuleId::WellKnown,
                    Some(primary),
                    format!(
                        "The {WELL_KNOWN} set's primary ({}) did not equal the PR set's primary ({})",
                        wk_primary.unwrap_or("None"),
                        primary
                    ),
                );
            }
            for site in set.associated() {
                self.check_member_primary(primary, site, log).await;
                for variant in set.aliases_of(site) {
                    self.check_member_primary(primary, variant, log).await;
                }
            }
        }
    }

    /// Field-level comparison of the PR set against the primary's
    /// well-known document. Only the checked fields are compared;
    /// unrecognized fields on either side are ignored.
    fn compare_well_known_fields(
        &self,
        primary: &str,
        set: &RwsSet,
        doc: &Value,
        log: &mut ErrorLog,
    ) {
        let wk_associated = string_list(doc.get("associatedSites"));
        report_list_mismatch(log, primary, "associatedSites", set.associated(), &wk_associated);

        let wk_service = string_list(doc.get("serviceSites"));
        report_list_mismatch(log, primary, "serviceSites", set.service(), &wk_service);

        let wk_cc_tlds = doc.get("ccTLDs").and_then(Value::as_object);
        let mut compared: HashSet<&str> = HashSet::new();
        for (aliased, variants) in set.cc_tld_entries() {
            let wk_variants = string_list(wk_cc_tlds.and_then(|cc| cc.get(aliased)));
            let label = format!("{aliased} alias list");
            report_list_mismatch(log, primary, &label, variants, &wk_variants);
            compared.insert(aliased);
        }
        if let Some(wk_cc_tlds) = wk_cc_tlds {
            for (aliased, variants) in wk_cc_tlds {
                if compared.contains(aliased.as_str()) {
                    continue;
                }
                let wk_variants = string_list(Some(variants));
                let label = format!("{aliased} alias list");
                report_list_mismatch(log, primary, &label, &[], &wk_variants);
            }
        }
    }

    /// An associated site (or one of its ccTLD variants) must publish a
    /// well-known document naming the PR set's primary as its own.
    async fn check_member_primary(&self, primary: &str, site: &str, log: &mut ErrorLog) {
        let doc = self
            .probe
            .fetch_json(&well_known_url(site))
            .await
            .unwrap_or(Value::Null);
        if doc.get("primary").and_then(Value::as_str) != Some(primary) {
            log.push(
                RuleId::WellKnown,
                Some(site),
                format!(
                    "The listed associated site did not have {primary} listed as its primary: {site}"
                ),
            );
        }
    }

    /// Service sites must opt out of indexing. Probes without following
    /// redirects so the tag of the service site itself is inspected; a
    /// failed or 4xx probe is compliant (nothing is being indexed).
    pub async fn find_robots_tag(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for site in set.service() {
                let Some(response) = self.probe.get(site, false).await else {
                    continue;
                };
                if response.is_error() {
                    continue;
                }
                match response.header("X-Robots-Tag") {
                    None => log.push(
                        RuleId::RobotsTag,
                        Some(site),
                        format!("The service site {site} does not have an X-Robots-Tag in its header"),
                    ),
                    Some(tag) if !has_robots_directive(tag) => log.push(
                        RuleId::RobotsTag,
                        Some(site),
                        format!(
                            "The service site {site} does not have a 'noindex' or 'none' tag in its header"
                        ),
                    ),
                    _ => {}
                }
            }
        }
    }

    /// Service sites must not serve ads; a resolvable /ads.txt is a
    /// violation and a 4xx answer is compliant.
    pub async fn find_ads_txt(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for site in set.service() {
                let Some(response) = self.probe.get(&format!("{site}/ads.txt"), true).await
                else {
                    continue;
                };
                if !response.is_error() {
                    log.push(
                        RuleId::AdsTxt,
                        Some(site),
                        format!(
                            "The service site {site} has an ads.txt file, this violates the policies for service sites"
                        ),
                    );
                }
            }
        }
    }

    /// A service site must not be a user-facing endpoint: a GET that
    /// resolves on the same host, without redirecting away, fails.
    pub async fn check_for_service_redirect(&self, sets: &SetsMap, log: &mut ErrorLog) {
        for set in sets.values() {
            for site in set.service() {
                let Some(response) = self.probe.get(site, true).await else {
                    continue;
                };
                if response.is_error() {
                    continue;
                }
                if same_endpoint(site, &response.final_url) {
                    log.push(
                        RuleId::ServiceRedirect,
                        Some(site),
                        format!("The service site must not be an endpoint: {site}"),
                    );
                }
            }
        }
    }

    /// A removed set must have relinquished its published claim: its
    /// old well-known document has to answer 404.
    pub async fn find_invalid_removal(&self, removed_sets: &SetsMap, log: &mut ErrorLog) {
        for primary in removed_sets.keys() {
            let url = well_known_url(primary);
            let Some(response) = self.probe.get(&url, true).await else {
                continue;
            };
            if response.status != 404 {
                log.push(
                    RuleId::Removal,
                    Some(primary),
                    format!(
                        "The set associated with {primary} was removed from the list, but {url} does not return error 404."
                    ),
                );
            }
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Order-insensitive list comparison; a mismatch reports both sides in
/// document order plus the sorted symmetric difference.
fn report_list_mismatch(
    log: &mut ErrorLog,
    primary: &str,
    field_label: &str,
    pr: &[String],
    wk: &[String],
) {
    let pr_members: BTreeSet<&str> = pr.iter().map(String::as_str).collect();
    let wk_members: BTreeSet<&str> = wk.iter().map(String::as_str).collect();
    if pr_members == wk_members {
        return;
    }
    let diff: Vec<&&str> = pr_members.symmetric_difference(&wk_members).collect();
    let pr_view: Vec<&str> = pr.iter().map(String::as_str).collect();
    let wk_view: Vec<&str> = wk.iter().map(String::as_str).collect();
    log.push(
        RuleId::WellKnown,
        Some(primary),
        format!(
            "Encountered an inequality between the PR submission and the {WELL_KNOWN} file:\n\t{field_label} was {pr_view:?} in the PR, and {wk_view:?} in the well-known.\n\tDiff was: {diff:?}."
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::suffixes::PublicSuffixes;
    use crate::core::loader::load_sets;
    use crate::domain::ports::ProbeResponse;
    use async_trait::async_trait;
    use serde_json::json;

    const TEST_PSL: &str =
        "// ===BEGIN ICANN DOMAINS===\ncom\nca\nedu\ngov\nuk\nco.uk\nar\ncom.ar\nbg\n7.bg\n";

    /// Probe for pure-check tests: every request fails at transport.
    struct NullProbe;

    #[async_trait]
    impl SiteProbe for NullProbe {
        async fn get(&self, _url: &str, _follow_redirects: bool) -> Option<ProbeResponse> {
            None
        }

        async fn fetch_json(&self, _url: &str) -> Option<Value> {
            None
        }
    }

    fn checker(icanns: &[&str]) -> RwsChecker<PublicSuffixes, NullProbe> {
        RwsChecker::new(
            PublicSuffixes::from_list_text(TEST_PSL).unwrap(),
            icanns.iter().map(|s| s.to_string()).collect(),
            NullProbe,
        )
    }

    fn loaded(document: Value) -> SetsMap {
        let mut log = ErrorLog::new();
        let sets = load_sets(&document, &mut log);
        assert!(log.is_empty(), "unexpected load errors: {:?}", log.messages());
        sets
    }

    #[test]
    fn test_no_rationales() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "associatedSites": ["https://associated1.com"],
                "serviceSites": ["https://service1.com"],
                "rationaleBySite": {}
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).has_all_rationales(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "There is no provided rationale for https://associated1.com",
                "There is no provided rationale for https://service1.com",
            ]
        );
    }

    #[test]
    fn test_expected_rationales() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "associatedSites": ["https://associated1.com"],
                "serviceSites": ["https://service1.com"],
                "rationaleBySite": {
                    "https://associated1.com": "example rationale",
                    "https://service1.com": "example rationale"
                }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).has_all_rationales(&sets, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_service_sites_overlap() {
        let sets = loaded(json!({
            "sets": [
                {
                    "primary": "https://primary.com",
                    "associatedSites": ["https://associated1.com"],
                    "serviceSites": ["https://service1.com"]
                },
                {
                    "primary": "https://primary2.com",
                    "associatedSites": ["https://associated2.com"],
                    "serviceSites": ["https://service1.com"]
                }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).check_exclusivity(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "These service sites are already registered in another related website set: [\"https://service1.com\"]"
            ]
        );
    }

    #[test]
    fn test_primary_is_associate_elsewhere() {
        let sets = loaded(json!({
            "sets": [
                {
                    "primary": "https://primary.com",
                    "associatedSites": ["https://primary2.com"],
                    "serviceSites": ["https://service1.com"]
                },
                {
                    "primary": "https://primary2.com",
                    "associatedSites": ["https://associated2.com"],
                    "serviceSites": ["https://service2.com"]
                }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).check_exclusivity(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "This primary is already registered in another related website set: https://primary2.com"
            ]
        );
    }

    #[test]
    fn test_primary_overlap_in_own_and_other_set() {
        let sets = loaded(json!({
            "sets": [
                {
                    "primary": "https://primary.com",
                    "associatedSites": ["https://associated1.com"],
                    "serviceSites": ["https://primary.com"]
                },
                {
                    "primary": "https://primary2.com",
                    "associatedSites": ["https://primary.com"],
                    "serviceSites": ["https://service2.com"]
                }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).check_exclusivity(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "These service sites are already registered in another related website set: [\"https://primary.com\"]",
                "These associated sites are already registered in another related website set: [\"https://primary.com\"]",
            ]
        );
    }

    #[test]
    fn test_exclusivity_disjoint_sets() {
        let sets = loaded(json!({
            "sets": [
                {
                    "primary": "https://primary.com",
                    "associatedSites": ["https://associated1.com"],
                    "serviceSites": ["https://service1.com"]
                },
                {
                    "primary": "https://primary2.com",
                    "associatedSites": ["https://associated2.com"],
                    "serviceSites": ["https://service2.com"]
                }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).check_exclusivity(&sets, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_no_https_in_primary() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "primary.com",
                "associatedSites": ["https://associated1.com"],
                "serviceSites": ["https://service1.com"]
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).find_non_https_urls(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec!["The provided primary site does not begin with https:// primary.com"]
        );
    }

    #[test]
    fn test_multi_no_https() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "primary.com",
                "associatedSites": ["associated1.com"],
                "serviceSites": ["service1.com"],
                "ccTLDs": { "primary.com": ["primary.ca"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).find_non_https_urls(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "The provided primary site does not begin with https:// primary.com",
                "The provided aliased site does not begin with https:// primary.com",
                "The provided alias site does not begin with https:// primary.ca",
                "The provided associated site does not begin with https:// associated1.com",
                "The provided service site does not begin with https:// service1.com",
            ]
        );
    }

    #[test]
    fn test_invalid_etld_primary() {
        let sets = loaded(json!({
            "sets": [{ "primary": "https://primary.c2om" }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).find_invalid_etld_plus1(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec!["The provided primary site is not an eTLD+1: https://primary.c2om"]
        );
    }

    #[test]
    fn test_subdomain_is_not_etld_plus1() {
        let sets = loaded(json!({
            "sets": [{ "primary": "https://subdomain.primary.com" }]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).find_invalid_etld_plus1(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec!["The provided primary site is not an eTLD+1: https://subdomain.primary.com"]
        );
    }

    #[test]
    fn test_bare_suffix_is_not_etld_plus1() {
        let sets = loaded(json!({ "sets": [{ "primary": "https://7.bg" }] }));
        let mut log = ErrorLog::new();
        checker(&[]).find_invalid_etld_plus1(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec!["The provided primary site is not an eTLD+1: https://7.bg"]
        );
    }

    #[test]
    fn test_valid_etld_plus1() {
        let sets = loaded(json!({
            "sets": [
                { "primary": "https://primary.com" },
                { "primary": "https://primary.com.ar" }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&[]).find_invalid_etld_plus1(&sets, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_alias_esld_mismatch() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "ccTLDs": { "https://primary.com": ["https://primary2.ca"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca"]).find_invalid_alias_eslds(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "The following top level domain must match: https://primary.com, but is instead: https://primary2.ca"
            ]
        );
    }

    #[test]
    fn test_alias_unregistered_country_code() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "ccTLDs": { "https://primary.com": ["https://primary.gov"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca"]).find_invalid_alias_eslds(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "The provided country code: gov, in: https://primary.gov is not a ICANN registered country code"
            ]
        );
    }

    #[test]
    fn test_com_alias_of_generic_tld_rejected() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.edu",
                "ccTLDs": { "https://primary.edu": ["https://primary.com"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca"]).find_invalid_alias_eslds(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "The provided country code: com, in: https://primary.com is not a ICANN registered country code"
            ]
        );
    }

    #[test]
    fn test_com_alias_of_country_code_accepted() {
        let sets = loaded(json!({
            "sets": [
                {
                    "primary": "https://primary.ca",
                    "ccTLDs": { "https://primary.ca": ["https://primary.com"] }
                },
                {
                    "primary": "https://primary2.co.uk",
                    "ccTLDs": { "https://primary2.co.uk": ["https://primary2.com"] }
                }
            ]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca", "uk"]).find_invalid_alias_eslds(&sets, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_associated_alias_cases() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "associatedSites": ["https://associated.com"],
                "ccTLDs": { "https://associated.com": ["https://associated.ca"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca"]).find_invalid_alias_eslds(&sets, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_alias_key_must_be_member() {
        let sets = loaded(json!({
            "sets": [{
                "primary": "https://primary.com",
                "ccTLDs": { "https://other.com": ["https://other.ca"] }
            }]
        }));
        let mut log = ErrorLog::new();
        checker(&["ca"]).find_invalid_alias_eslds(&sets, &mut log);
        assert_eq!(
            log.messages(),
            vec![
                "The provided aliased site https://other.com is not a member of the set with primary: https://primary.com"
            ]
        );
    }

    #[tokio::test]
    async fn test_well_known_unreachable_primary() {
        let sets = loaded(json!({ "sets": [{ "primary": "https://primary.com" }] }));
        let mut log = ErrorLog::new();
        checker(&[])
            .find_invalid_well_known(&sets, &mut log)
            .await;
        assert_eq!(
            log.messages(),
            vec![
                "The /.well-known/related-website-set.json set's primary (None) did not equal the PR set's primary (https://primary.com)"
            ]
        );
    }

    #[test]
    fn test_robots_directive_matching() {
        assert!(has_robots_directive("noindex"));
        assert!(has_robots_directive("none"));
        assert!(has_robots_directive("noindex, nofollow"));
        assert!(has_robots_directive("NOINDEX"));
        assert!(!has_robots_directive("foo"));
        assert!(!has_robots_directive("nonexistent"));
    }

    #[test]
    fn test_same_endpoint_ignores_trailing_slash() {
        assert!(same_endpoint("https://service1.com", "https://service1.com/"));
        assert!(!same_endpoint("https://service1.com", "https://example.com/"));
        assert!(!same_endpoint("http://127.0.0.1:5000", "http://127.0.0.1:5001/"));
    }
}
