use reqwest::Client;
use serde::Deserialize;

use crate::error::IdentifierError;

/// Sentinel returned when the identifier cannot be resolved.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org?format=json";

/// Best-effort network identifier lookup.
///
/// The identifier only feeds the advisory retake lockout, so resolution never
/// fails: any transport or decode fault degrades to [`UNKNOWN_IDENTIFIER`].
#[derive(Clone)]
pub struct IdentifierService {
    client: Client,
    echo_url: String,
}

impl Default for IdentifierService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpEchoResponse {
    ip: String,
}

impl IdentifierService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            echo_url: DEFAULT_IP_ECHO_URL.to_string(),
        }
    }

    /// Point the lookup at a different echo endpoint (tests, self-hosting).
    #[must_use]
    pub fn with_echo_url(mut self, url: impl Into<String>) -> Self {
        self.echo_url = url.into();
        self
    }

    /// Resolve the client identifier, degrading to the sentinel on failure.
    pub async fn resolve(&self) -> String {
        match self.fetch().await {
            Ok(ip) => ip,
            Err(err) => {
                tracing::warn!(error = %err, "identifier lookup failed, using sentinel");
                UNKNOWN_IDENTIFIER.to_string()
            }
        }
    }

    async fn fetch(&self) -> Result<String, IdentifierError> {
        let response = self.client.get(&self.echo_url).send().await?;
        if !response.status().is_success() {
            return Err(IdentifierError::HttpStatus(response.status()));
        }
        let body: IpEchoResponse = response.json().await?;
        Ok(body.ip)
    }
}
