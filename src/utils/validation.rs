use crate::utils::error::{Result, RwsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RwsError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_https_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_non_empty_string(field_name, url_str)?;
    if !url_str.starts_with("https://") {
        return Err(RwsError::Config {
            message: format!(
                "{} must be an https:// site, got: {}",
                field_name, url_str
            ),
        });
    }
    Ok(())
}
