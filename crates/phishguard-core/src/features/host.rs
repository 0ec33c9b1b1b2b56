//! Network-location handling: netloc string, registrable-domain split, IP check.

use url::Url;

/// Lower-cased network-location of a parsed URL: `host` or `host:port` when
/// an explicit non-default port is present. Returns `None` for host-less URLs
/// (e.g. `mailto:`).
pub fn network_location(parsed: &Url) -> Option<String> {
    let host = parsed.host_str()?;
    let netloc = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    Some(netloc.to_ascii_lowercase())
}

/// Splits a lower-cased domain into `(main_domain, subdomain)`.
///
/// `main_domain` is the last two dot-separated labels (the whole domain for
/// single-label hosts like "localhost"). `subdomain` is the domain with
/// `"." + main_domain` removed once.
///
/// Known limitations, kept because the classifier was trained on them:
/// multi-part public suffixes are mishandled ("example.co.uk" yields
/// main_domain "co.uk"), and a bare two-label domain is left intact as its
/// own "subdomain" since the dotted needle never matches it.
pub fn split_registrable(domain: &str) -> (String, String) {
    let parts: Vec<&str> = domain.split('.').collect();
    let main_domain = if parts.len() >= 2 {
        format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1])
    } else {
        domain.to_string()
    };
    let subdomain = domain.replacen(&format!(".{main_domain}"), "", 1);
    (main_domain, subdomain)
}

/// True iff `domain` is exactly four dot-separated groups of 1–3 ASCII
/// digits. A port suffix (`1.2.3.4:8080`) makes the last group non-numeric,
/// so it does not match; that behavior is deliberate.
pub fn looks_like_ipv4(domain: &str) -> bool {
    let mut groups = 0usize;
    for group in domain.split('.') {
        groups += 1;
        if groups > 4
            || group.is_empty()
            || group.len() > 3
            || !group.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
    }
    groups == 4
}
