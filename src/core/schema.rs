use crate::utils::error::{Result, RwsError};
use serde_json::Value;

/// Structural gate: the submitted document must satisfy the repository
/// schema before any policy rule looks at it. The first violation found
/// is reported with its location in the document.
pub fn validate_document(document: &Value, schema: &Value) -> Result<()> {
    let validator = jsonschema::validator_for(schema).map_err(|e| RwsError::Schema {
        message: format!("schema document is not a valid JSON Schema: {e}"),
    })?;
    if let Some(error) = validator.iter_errors(document).next() {
        return Err(RwsError::Schema {
            message: format!("{} at {}", error, error.instance_path),
        });
    }
    Ok(())
}
