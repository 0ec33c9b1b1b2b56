//! Constant word lists and substring predicates.

use url::Url;

/// Words commonly planted in phishing URLs.
pub const SUSPICIOUS_WORDS: [&str; 9] = [
    "secure", "account", "update", "login", "verify", "signin", "webscr", "confirm", "alert",
];

/// Brands commonly impersonated in phishing subdomains.
pub const BRAND_NAMES: [&str; 12] = [
    "paypal",
    "bankofamerica",
    "github",
    "google",
    "facebook",
    "linkedin",
    "instagram",
    "twitter",
    "amazon",
    "netflix",
    "coinbase",
    "binance",
];

/// True iff any suspicious word appears as a substring of the lower-cased URL.
pub fn has_suspicious_word(url_lower: &str) -> bool {
    SUSPICIOUS_WORDS.iter().any(|word| url_lower.contains(word))
}

/// True iff any known brand appears in `domain` but not in `main_domain`,
/// i.e. the brand sits in a subdomain position rather than the registrable
/// domain. Scans the full list; any qualifying brand raises the flag.
pub fn brand_in_subdomain(domain: &str, main_domain: &str) -> bool {
    BRAND_NAMES
        .iter()
        .any(|brand| domain.contains(brand) && !main_domain.contains(brand))
}

/// Experimental: brand substring anywhere in the URL, short brand list.
/// Not part of the active feature schema.
pub fn has_brand_name(url: &str) -> bool {
    const BRANDS: [&str; 4] = ["paypal", "google", "facebook", "github"];
    let url_lower = url.to_lowercase();
    BRANDS.iter().any(|brand| url_lower.contains(brand))
}

/// Experimental: position-weighted suspicious-word score. 1.0 if a word is
/// in the domain, 0.5 if only in the path, 0.0 otherwise. Not part of the
/// active feature schema.
pub fn weighted_suspicious_word(url: &str) -> f64 {
    const WORDS: [&str; 5] = ["secure", "account", "update", "verify", "bank"];

    let Ok(parsed) = Url::parse(url) else {
        return 0.0;
    };
    let domain = parsed.host_str().unwrap_or("").to_lowercase();
    let path = parsed.path().to_lowercase();

    for word in WORDS {
        if domain.contains(word) {
            return 1.0;
        }
        if path.contains(word) {
            return 0.5;
        }
    }
    0.0
}
