//! Lookup URL construction.

use url::Url;

use crate::config::{LookupConfig, API_KEY_PARAM, IP_PARAM};

/// Builds `{endpoint}?apiKey={api_key}&ip={ip}` with both values URL-encoded.
///
/// Existing query parameters on the endpoint are kept.
pub fn build_lookup_url(lookup: &LookupConfig, ip: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&lookup.endpoint)?;
    url.query_pairs_mut()
        .append_pair(API_KEY_PARAM, &lookup.api_key)
        .append_pair(IP_PARAM, ip);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(endpoint: &str, api_key: &str) -> LookupConfig {
        LookupConfig {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[test]
    fn test_build_lookup_url_default_endpoint() {
        let url = build_lookup_url(&LookupConfig::default(), "8.8.8.8").expect("valid URL");
        assert_eq!(
            url.as_str(),
            "https://api.ipgeolocation.io/ipgeo?apiKey=&ip=8.8.8.8"
        );
    }

    #[test]
    fn test_build_lookup_url_encodes_api_key() {
        let url = build_lookup_url(&lookup("https://api.example/ipgeo", "a b&c"), "1.1.1.1")
            .expect("valid URL");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("apiKey".to_string(), "a b&c".to_string()),
                ("ip".to_string(), "1.1.1.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_lookup_url_keeps_existing_query() {
        let url = build_lookup_url(&lookup("http://localhost:8080/ipgeo?lang=en", "k"), "1.2.3.4")
            .expect("valid URL");
        assert_eq!(url.query(), Some("lang=en&apiKey=k&ip=1.2.3.4"));
    }

    #[test]
    fn test_build_lookup_url_invalid_endpoint() {
        assert!(build_lookup_url(&lookup("not a url", "k"), "1.2.3.4").is_err());
    }
}
