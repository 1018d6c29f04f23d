use crate::config::ApiEnvConfig;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates an HTTP client with retry middleware.
    ///
    /// The per-request timeout and the transient-retry budget come from
    /// the API config; each retry attempt is bounded by the same timeout.
    pub fn create_client(config: &ApiEnvConfig) -> ClientWithMiddleware {
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.retry_attempts);

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
}

/// Builds a full endpoint URL with percent-encoded query parameters.
/// reqwest-middleware's request builder does not expose `.query()`, so
/// the query string is assembled by hand.
pub fn endpoint_url(base_url: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), path);
    if params.is_empty() {
        return url;
    }

    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect();

    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&query.join("&"));
    url
}

/// Percent-encoding for query parameter keys and values (RFC 3986
/// unreserved characters pass through).
fn percent_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => encoded.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    encoded.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_without_params() {
        assert_eq!(
            endpoint_url("https://api.example.com/", "/ai_model", &[]),
            "https://api.example.com/ai_model"
        );
    }

    #[test]
    fn test_endpoint_url_appends_query() {
        assert_eq!(
            endpoint_url("https://api.example.com", "/ai_model", &[("mission", "kepler")]),
            "https://api.example.com/ai_model?mission=kepler"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_values() {
        let url = endpoint_url(
            "https://api.example.com",
            "/exoplanets",
            &[("search", "Kepler-227 b & friends")],
        );
        assert_eq!(
            url,
            "https://api.example.com/exoplanets?search=Kepler-227%20b%20%26%20friends"
        );
    }

    #[test]
    fn test_endpoint_url_joins_existing_query_with_ampersand() {
        let url = endpoint_url("https://api.example.com", "/exoplanets?page=2", &[("search", "b")]);
        assert_eq!(url, "https://api.example.com/exoplanets?page=2&search=b");
    }
}
