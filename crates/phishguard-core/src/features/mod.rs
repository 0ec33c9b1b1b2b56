//! Lexical feature extraction.
//!
//! Maps a raw URL string to a fixed-schema numeric feature vector. The
//! definitions are frozen: the classifier was trained against exactly these
//! values, quirks included, so "obvious fixes" here would silently shift the
//! feature distribution.

mod entropy;
mod host;
mod vector;
mod words;

pub use entropy::shannon_entropy;
pub use host::{looks_like_ipv4, network_location, split_registrable};
pub use vector::{FeatureValue, FeatureVector, FEATURE_NAMES};
pub use words::{
    brand_in_subdomain, has_brand_name, has_suspicious_word, weighted_suspicious_word,
    BRAND_NAMES, SUSPICIOUS_WORDS,
};

use thiserror::Error;
use url::Url;

/// Default down-weight factor applied to the `is_https` feature.
pub const DEFAULT_HTTPS_WEIGHT: f64 = 0.7;

/// Failure to decompose a URL into scheme/host/path/query.
/// No partial feature data is ever returned.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("URL parse failed: {0}")]
    Parse(#[from] url::ParseError),
    #[error("URL has no host component")]
    MissingHost,
}

/// Extracts the feature vector for `url` with the default HTTPS down-weight.
pub fn extract_features(url: &str) -> Result<FeatureVector, ExtractError> {
    extract_features_weighted(url, DEFAULT_HTTPS_WEIGHT)
}

/// Extracts the feature vector for `url`, storing `https_weight` (not 1.0)
/// as the `is_https` value for https URLs.
pub fn extract_features_weighted(
    url: &str,
    https_weight: f64,
) -> Result<FeatureVector, ExtractError> {
    let parsed = Url::parse(url)?;
    let domain = network_location(&parsed).ok_or(ExtractError::MissingHost)?;
    let (main_domain, subdomain) = split_registrable(&domain);
    let path = parsed.path();
    let url_lower = url.to_lowercase();

    // Non-empty query: count of '&'-separated tokens. "a=1" counts as 1,
    // "a=1&b=2" as 2; an empty or absent query counts as 0.
    let num_query_params = match parsed.query() {
        Some(q) if !q.is_empty() => q.split('&').count(),
        _ => 0,
    };

    Ok(FeatureVector {
        url_length: url.chars().count(),
        num_dots: url.matches('.').count(),
        num_hyphens: url.matches('-').count(),
        has_at_symbol: url.contains('@'),
        has_ip: looks_like_ipv4(&domain),
        num_subdomains: subdomain.matches('.').count(),
        is_https: if parsed.scheme() == "https" {
            https_weight
        } else {
            0.0
        },
        num_query_params,
        path_length: path.chars().count(),
        // Number of '/'-separated tokens in the path minus one, i.e. the
        // count of '/' characters. Empty path yields 0.
        num_path_segments: if path.is_empty() {
            0
        } else {
            path.matches('/').count()
        },
        entropy: shannon_entropy(url),
        has_suspicious_word: has_suspicious_word(&url_lower),
        has_brand_name_suspicious: brand_in_subdomain(&domain, &main_domain),
    })
}
