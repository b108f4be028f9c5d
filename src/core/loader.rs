use crate::domain::model::{ErrorLog, RuleId, RwsSet, SetsMap};
use serde_json::Value;

/// Builds the primary-keyed mapping from a schema-valid document, in
/// document order. A primary collision keeps the first-seen set and
/// logs the duplicate; the mapping is still returned so every later
/// check gets a chance to catalog its own findings in the same run.
pub fn load_sets(document: &Value, log: &mut ErrorLog) -> SetsMap {
    let mut sets = SetsMap::new();
    let Some(records) = document.get("sets").and_then(Value::as_array) else {
        return sets;
    };
    for record in records {
        let set: RwsSet = match serde_json::from_value(record.clone()) {
            Ok(set) => set,
            Err(err) => {
                // Should not happen after schema validation; reported
                // rather than crashing in case the gate skips the schema.
                log.push(RuleId::Load, None, format!("Could not read set record: {err}"));
                continue;
            }
        };
        if sets.contains_key(&set.primary) {
            log.push(
                RuleId::Load,
                Some(&set.primary),
                format!("{} is already a primary of another site", set.primary),
            );
            continue;
        }
        sets.insert(set.primary.clone(), set);
    }
    sets
}
