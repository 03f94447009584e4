use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Why a single transport attempt failed. The fetcher treats both cases
/// identically and moves on to the next relay.
#[derive(Debug)]
pub enum TransportFault {
    /// The relay answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The request never completed.
    Network(reqwest::Error),
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFault::Status(status) => write!(f, "status {status}"),
            TransportFault::Network(err) => write!(f, "network: {err}"),
        }
    }
}

/// One way of delivering a request for the target URL.
///
/// Implementations are tried in order by [`MealFetcher`]; swapping the relay
/// list never touches the extractor.
///
/// [`MealFetcher`]: super::MealFetcher
pub trait Transport {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Deliver a GET for `target` and return the body on success.
    fn attempt(&self, target: &str) -> Result<String, TransportFault>;
}

/// Full request URL for a pass-through relay: prefix + url-encoded target.
pub fn relay_url(prefix: &str, target: &str) -> String {
    format!("{}{}", prefix, urlencoding::encode(target))
}

/// A generic pass-through relay that forwards the request and returns the
/// body unmodified.
pub struct RelayEndpoint {
    prefix: String,
    client: Client,
}

impl RelayEndpoint {
    pub fn new(prefix: impl Into<String>, client: Client) -> Self {
        Self {
            prefix: prefix.into(),
            client,
        }
    }
}

impl Transport for RelayEndpoint {
    fn name(&self) -> &str {
        &self.prefix
    }

    fn attempt(&self, target: &str) -> Result<String, TransportFault> {
        let url = relay_url(&self.prefix, target);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/xml, text/xml, */*")
            .send()
            .map_err(TransportFault::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFault::Status(status));
        }

        response.text().map_err(TransportFault::Network)
    }
}
