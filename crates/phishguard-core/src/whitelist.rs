//! Trusted-suffix whitelist: .edu / .gov hosts skip classification entirely.

use url::Url;

use crate::features::network_location;

/// True iff the URL's network-location is on a trusted suffix (.edu / .gov,
/// including country forms like ".edu.au" and ".gov.uk").
///
/// Fail-safe: any parse failure returns false so the URL still goes through
/// classification instead of being silently trusted.
pub fn is_whitelisted(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(netloc) = network_location(&parsed) else {
        return false;
    };
    netloc.contains(".edu.")
        || netloc.ends_with(".edu")
        || netloc.contains(".gov.")
        || netloc.ends_with(".gov")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edu_and_gov_suffixes() {
        assert!(is_whitelisted("https://university.edu/login"));
        assert!(is_whitelisted("http://www.irs.gov/refund"));
    }

    #[test]
    fn country_forms() {
        assert!(is_whitelisted("https://anu.edu.au/courses"));
        assert!(is_whitelisted("https://hmrc.gov.uk/"));
    }

    #[test]
    fn case_insensitive_host() {
        assert!(is_whitelisted("https://WWW.MIT.EDU/"));
    }

    #[test]
    fn ordinary_hosts_are_not_whitelisted() {
        assert!(!is_whitelisted("https://example.com/"));
        assert!(!is_whitelisted("http://edu-portal.com/"));
        assert!(!is_whitelisted("http://example.com/edu"));
    }

    #[test]
    fn parse_failure_is_not_whitelisted() {
        assert!(!is_whitelisted("not a url"));
        assert!(!is_whitelisted(""));
    }

    #[test]
    fn explicit_port_defeats_the_suffix_check() {
        // The network-location keeps an explicit port, so ends_with(".edu")
        // fails. Matches the reference behavior.
        assert!(!is_whitelisted("https://university.edu:8443/"));
    }
}
