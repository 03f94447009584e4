use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::{MealError, Result};
use crate::fetch::relay::{RelayEndpoint, Transport};

/// Upstream NEIS meal-service endpoint.
pub const BASE_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

/// Pass-through relays, tried in declared order.
pub const RELAY_PREFIXES: [&str; 3] = [
    "https://api.allorigins.win/raw?url=",
    "https://corsproxy.io/?",
    "https://cors-anywhere.herokuapp.com/",
];

/// NEIS jurisdiction + institution identifiers for one school.
#[derive(Debug, Clone)]
pub struct SchoolCode {
    pub office_code: String,
    pub school_code: String,
}

impl SchoolCode {
    pub fn new(office_code: impl Into<String>, school_code: impl Into<String>) -> Self {
        Self {
            office_code: office_code.into(),
            school_code: school_code.into(),
        }
    }
}

impl Default for SchoolCode {
    fn default() -> Self {
        Self::new("J10", "7530475")
    }
}

/// Fetches the raw meal-service response through an ordered transport list.
pub struct MealFetcher {
    transports: Vec<Box<dyn Transport>>,
}

impl MealFetcher {
    pub fn new(transports: Vec<Box<dyn Transport>>) -> Self {
        Self { transports }
    }

    /// Fetcher backed by the built-in relay list.
    pub fn with_default_relays() -> Self {
        let client = Client::new();
        let transports = RELAY_PREFIXES
            .iter()
            .map(|prefix| {
                Box::new(RelayEndpoint::new(*prefix, client.clone())) as Box<dyn Transport>
            })
            .collect();
        Self::new(transports)
    }

    /// Canonical NEIS request URL for a date key (`YYYYMMDD`, digits only).
    pub fn target_url(school: &SchoolCode, date_key: &str) -> String {
        format!(
            "{BASE_URL}?ATPT_OFCDC_SC_CODE={}&SD_SCHUL_CODE={}&MLSV_YMD={}&Type=xml",
            school.office_code, school.school_code, date_key
        )
    }

    /// Try each transport in order; the first success short-circuits.
    ///
    /// Non-success statuses and network faults are treated the same: log and
    /// advance. A single pass over the list, no retries.
    pub fn fetch(&self, school: &SchoolCode, date_key: &str) -> Result<String> {
        let target = Self::target_url(school, date_key);

        for transport in &self.transports {
            match transport.attempt(&target) {
                Ok(body) => {
                    debug!(relay = transport.name(), bytes = body.len(), "relay responded");
                    return Ok(body);
                }
                Err(fault) => {
                    warn!(relay = transport.name(), %fault, "relay attempt failed");
                }
            }
        }

        Err(MealError::FetchExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_layout() {
        let school = SchoolCode::default();
        let url = MealFetcher::target_url(&school, "20250826");
        assert_eq!(
            url,
            "https://open.neis.go.kr/hub/mealServiceDietInfo\
             ?ATPT_OFCDC_SC_CODE=J10&SD_SCHUL_CODE=7530475&MLSV_YMD=20250826&Type=xml"
        );
    }
}
