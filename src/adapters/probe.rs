use crate::domain::ports::{ProbeResponse, SiteProbe};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Live HTTP probe. Holds two clients because the robots check must see
/// the first response of a service site, not wherever it redirects to.
pub struct ReqwestProbe {
    redirecting: Client,
    direct: Client,
}

impl ReqwestProbe {
    pub fn new() -> Result<Self> {
        let redirecting = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let direct = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self { redirecting, direct })
    }
}

#[async_trait]
impl SiteProbe for ReqwestProbe {
    async fn get(&self, url: &str, follow_redirects: bool) -> Option<ProbeResponse> {
        let client = if follow_redirects {
            &self.redirecting
        } else {
            &self.direct
        };
        match client.get(url).send().await {
            Ok(response) => {
                let mut probed =
                    ProbeResponse::new(response.status().as_u16(), response.url().to_string());
                for (name, value) in response.headers() {
                    if let Ok(value) = value.to_str() {
                        probed = probed.with_header(name.as_str(), value);
                    }
                }
                Some(probed)
            }
            Err(err) => {
                tracing::warn!("GET {} failed: {}", url, err);
                None
            }
        }
    }

    async fn fetch_json(&self, url: &str) -> Option<serde_json::Value> {
        let response = match self.redirecting.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("GET {} failed: {}", url, err);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("GET {} returned status {}", url, response.status());
            return None;
        }
        match response.json().await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("{} did not contain valid JSON: {}", url, err);
                None
            }
        }
    }
}
