mod client;
mod relay;

pub use client::{MealFetcher, SchoolCode, BASE_URL, RELAY_PREFIXES};
pub use relay::{relay_url, RelayEndpoint, Transport, TransportFault};
pub use reqwest::StatusCode;
