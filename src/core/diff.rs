use crate::domain::model::{ErrorLog, RuleId, SetsMap};

/// Computes which sets in `new_sets` need checking and which primaries
/// were truly removed, relative to the previously accepted submission.
///
/// A set counts as changed when it is absent from `old_sets` or unequal
/// to the old one. A primary dropped from `new_sets` is only "removed"
/// when no surviving set still references it as a member; a primary
/// demoted into another set is not checked for removal.
pub fn find_diff_sets(old_sets: &SetsMap, new_sets: &SetsMap) -> (SetsMap, SetsMap) {
    let changed: SetsMap = new_sets
        .iter()
        .filter(|(primary, set)| old_sets.get(*primary) != Some(*set))
        .map(|(primary, set)| (primary.clone(), set.clone()))
        .collect();

    let removed: SetsMap = old_sets
        .iter()
        .filter(|(primary, _)| !new_sets.contains_key(*primary))
        .filter(|(primary, _)| !new_sets.values().any(|set| set.includes(primary, true)))
        .map(|(primary, set)| (primary.clone(), set.clone()))
        .collect();

    (changed, removed)
}

/// Narrows a loaded mapping to an explicitly requested list of
/// primaries. A requested primary that is not in the mapping is logged
/// once and skipped; it never aborts the run.
pub fn select_primaries(sets: &SetsMap, requested: &[String], log: &mut ErrorLog) -> SetsMap {
    let mut subset = SetsMap::new();
    for primary in requested {
        match sets.get(primary) {
            Some(set) => {
                subset.insert(primary.clone(), set.clone());
            }
            None => log.push(
                RuleId::Load,
                Some(primary),
                format!("Could not find set with primary site: {primary}"),
            ),
        }
    }
    subset
}
