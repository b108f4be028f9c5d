use async_trait::async_trait;
use std::collections::HashMap;

/// Effective-TLD oracle backed by the public suffix list.
pub trait SuffixProvider: Send + Sync {
    /// Registrable domain (eTLD+1) of a bare host, when the host ends in
    /// a suffix that is actually on the list. `None` for bare suffixes
    /// and for hosts under an unlisted TLD.
    fn registrable_domain(&self, host: &str) -> Option<String>;
}

/// Outcome of one probe request, after any redirects the caller allowed.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub final_url: String,
    headers: HashMap<String, String>,
}

impl ProbeResponse {
    pub fn new(status: u16, final_url: impl Into<String>) -> Self {
        Self {
            status,
            final_url: final_url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// The network side of the battery. One blocking-style GET per site per
/// check; transport failures surface as `None` so a dead site never
/// aborts the run.
#[async_trait]
pub trait SiteProbe: Send + Sync {
    async fn get(&self, url: &str, follow_redirects: bool) -> Option<ProbeResponse>;

    /// Fetch and parse a remote JSON document. `None` when the document
    /// is unreachable, a non-success status, or not valid JSON.
    async fn fetch_json(&self, url: &str) -> Option<serde_json::Value>;
}
