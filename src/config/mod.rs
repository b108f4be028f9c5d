use crate::utils::error::Result;
use crate::utils::validation::{validate_https_url, validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rws-check")]
#[command(about = "Validates a Related Website Sets submission before it is accepted")]
pub struct CliConfig {
    /// Submitted sets document.
    #[arg(short = 'i', long, default_value = "related_website_sets.JSON")]
    pub input: String,

    /// Previously accepted document; enables diff narrowing and the
    /// removal check.
    #[arg(long)]
    pub old_input: Option<String>,

    /// Restrict checks to these primaries.
    #[arg(long, value_delimiter = ',')]
    pub primaries: Vec<String>,

    /// Reject documents that are not canonically pretty-printed.
    #[arg(long)]
    pub strict_formatting: bool,

    /// Public suffix list data file.
    #[arg(long, default_value = "effective_tld_names.dat")]
    pub psl_file: String,

    /// ICANN country-code registry, one suffix per line.
    #[arg(long, default_value = "ICANN_domains")]
    pub icann_file: String,

    /// JSON Schema the document must satisfy.
    #[arg(long, default_value = "data/SCHEMA.json")]
    pub schema_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_non_empty_string("psl_file", &self.psl_file)?;
        validate_non_empty_string("icann_file", &self.icann_file)?;
        validate_non_empty_string("schema_file", &self.schema_file)?;
        for primary in &self.primaries {
            validate_https_url("primaries", primary)?;
        }
        Ok(())
    }
}
