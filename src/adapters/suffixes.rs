use crate::domain::ports::SuffixProvider;
use crate::utils::error::{Result, RwsError};
use publicsuffix::{List, Psl};
use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Suffix lookups backed by a parsed copy of `effective_tld_names.dat`.
pub struct PublicSuffixes {
    list: List,
}

impl PublicSuffixes {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_list_text(&raw)
    }

    pub fn from_list_text(raw: &str) -> Result<Self> {
        let list = raw.parse::<List>().map_err(|e| RwsError::SuffixList {
            message: e.to_string(),
        })?;
        Ok(Self { list })
    }
}

impl SuffixProvider for PublicSuffixes {
    fn registrable_domain(&self, host: &str) -> Option<String> {
        let lowered = host.to_ascii_lowercase();
        let domain = self.list.domain(lowered.as_bytes())?;
        if !domain.suffix().is_known() {
            return None;
        }
        Some(String::from_utf8_lossy(domain.as_bytes()).into_owned())
    }
}

/// Reads the ICANN country-code registry, one suffix per line.
pub fn load_icann_domains(path: &Path) -> Result<HashSet<String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let mut codes = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            codes.insert(trimmed.to_string());
        }
    }
    Ok(codes)
}
