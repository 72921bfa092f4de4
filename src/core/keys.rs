//! Repository public-key retrieval.
//!
//! The key source is a trait so command logic stays testable without a
//! network. Production fetches from the Travis API; `--key-file` swaps in a
//! local PEM file.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::HTTP_TIMEOUT;
use crate::core::types::Pem;
use crate::error::KeyError;

/// Source of a repository's RSA public key.
pub trait KeyProvider {
    /// Fetch the PEM public key for `slug` (`owner/name`).
    fn fetch(&self, slug: &str) -> Result<Pem, KeyError>;
}

/// Body of the key endpoint response.
#[derive(Debug, Deserialize)]
struct KeyResponse {
    key: String,
}

/// Fetches public keys from the Travis CI API.
#[derive(Debug)]
pub struct TravisKeys {
    api_url: String,
    agent: ureq::Agent,
}

impl TravisKeys {
    /// A provider for a given API endpoint. Accepts both hosted endpoints
    /// and self-hosted installs; a trailing slash is tolerated.
    pub fn new(api_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            agent,
        }
    }
}

impl KeyProvider for TravisKeys {
    fn fetch(&self, slug: &str) -> Result<Pem, KeyError> {
        let url = format!("{}/repos/{}/key", self.api_url, slug);
        debug!(%url, "fetching repository public key");

        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(404, _) => KeyError::NotFound(slug.to_string()),
            ureq::Error::Status(code, _) => {
                KeyError::Network(format!("{} returned status {}", url, code))
            }
            ureq::Error::Transport(transport) => KeyError::Network(transport.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|e| KeyError::Network(format!("{}", e)))?;

        parse_key_response(&body)
    }
}

/// Extract and sanity-check the PEM from a key endpoint response body.
fn parse_key_response(body: &str) -> Result<Pem, KeyError> {
    let response: KeyResponse = serde_json::from_str(body)
        .map_err(|e| KeyError::InvalidResponse(format!("{}", e)))?;

    if !response.key.contains("BEGIN PUBLIC KEY") && !response.key.contains("BEGIN RSA PUBLIC KEY")
    {
        return Err(KeyError::InvalidResponse(
            "body did not contain a PEM public key".to_string(),
        ));
    }
    Ok(response.key)
}

/// Reads the public key from a local PEM file.
#[derive(Debug)]
pub struct PemFileKeys {
    path: PathBuf,
}

impl PemFileKeys {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeyProvider for PemFileKeys {
    fn fetch(&self, _slug: &str) -> Result<Pem, KeyError> {
        debug!(path = %self.path.display(), "reading public key file");

        std::fs::read_to_string(&self.path).map_err(|e| KeyError::File {
            path: self.path.clone(),
            reason: format!("{}", e),
        })
    }
}
