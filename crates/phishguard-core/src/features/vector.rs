//! Fixed-schema feature vector.

use std::fmt;

/// Feature key order, fixed at build time. Every extraction produces exactly
/// these keys; display and serialization follow this order.
pub const FEATURE_NAMES: [&str; 13] = [
    "url_length",
    "num_dots",
    "num_hyphens",
    "has_at_symbol",
    "has_ip",
    "num_subdomains",
    "is_https",
    "num_query_params",
    "path_length",
    "num_path_segments",
    "entropy",
    "has_suspicious_word",
    "has_brand_name_suspicious",
];

/// A single feature value: counts and flags are integers, entropy and the
/// down-weighted HTTPS flag are floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(u64),
    Float(f64),
}

impl FeatureValue {
    /// Numeric form fed to the classifier.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(n) => n as f64,
            FeatureValue::Float(x) => x,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(n) => write!(f, "{}", n),
            FeatureValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Lexical features of one URL. Transient: built per request, fed to the
/// classifier, rendered, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub url_length: usize,
    pub num_dots: usize,
    pub num_hyphens: usize,
    pub has_at_symbol: bool,
    pub has_ip: bool,
    pub num_subdomains: usize,
    /// 0.0 for non-https, otherwise the down-weight factor (0.7 by default).
    pub is_https: f64,
    pub num_query_params: usize,
    pub path_length: usize,
    pub num_path_segments: usize,
    pub entropy: f64,
    pub has_suspicious_word: bool,
    pub has_brand_name_suspicious: bool,
}

impl FeatureVector {
    /// All features as `(name, value)` pairs in the fixed schema order.
    pub fn pairs(&self) -> [(&'static str, FeatureValue); 13] {
        fn flag(b: bool) -> FeatureValue {
            FeatureValue::Int(u64::from(b))
        }
        fn count(n: usize) -> FeatureValue {
            FeatureValue::Int(n as u64)
        }
        [
            ("url_length", count(self.url_length)),
            ("num_dots", count(self.num_dots)),
            ("num_hyphens", count(self.num_hyphens)),
            ("has_at_symbol", flag(self.has_at_symbol)),
            ("has_ip", flag(self.has_ip)),
            ("num_subdomains", count(self.num_subdomains)),
            ("is_https", FeatureValue::Float(self.is_https)),
            ("num_query_params", count(self.num_query_params)),
            ("path_length", count(self.path_length)),
            ("num_path_segments", count(self.num_path_segments)),
            ("entropy", FeatureValue::Float(self.entropy)),
            ("has_suspicious_word", flag(self.has_suspicious_word)),
            (
                "has_brand_name_suspicious",
                flag(self.has_brand_name_suspicious),
            ),
        ]
    }

    /// Looks up a feature by schema name.
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.pairs()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}
