//! Human-readable rendering of verdicts and feature tables.
//!
//! Pure string building; the CLI (or any other surface) decides where the
//! text goes.

use crate::features::FeatureVector;
use crate::verdict::{Label, Verdict};

/// One-line human summary of a verdict.
pub fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Whitelisted => {
            "whitelisted (.edu/.gov host), considered safe".to_string()
        }
        Verdict::Invalid => "invalid or malformed URL".to_string(),
        Verdict::Classified { probability, label } => match label {
            Label::Phishing => {
                format!("phishing URL detected (probability {probability:.2})")
            }
            Label::Legitimate => {
                format!("legitimate URL (phishing probability {probability:.2})")
            }
        },
    }
}

/// Aligned name/value table of all features, in the fixed schema order.
pub fn render_feature_table(features: &FeatureVector) -> String {
    let pairs = features.pairs();
    let width = pairs.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in pairs {
        out.push_str(&format!("{name:<width$}  {value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    #[test]
    fn verdict_lines() {
        assert_eq!(
            render_verdict(&Verdict::Whitelisted),
            "whitelisted (.edu/.gov host), considered safe"
        );
        assert_eq!(render_verdict(&Verdict::Invalid), "invalid or malformed URL");
        assert_eq!(
            render_verdict(&Verdict::Classified {
                probability: 0.875,
                label: Label::Phishing
            }),
            "phishing URL detected (probability 0.88)"
        );
        assert_eq!(
            render_verdict(&Verdict::Classified {
                probability: 0.05,
                label: Label::Legitimate
            }),
            "legitimate URL (phishing probability 0.05)"
        );
    }

    #[test]
    fn table_has_one_line_per_feature_in_order() {
        let fv = extract_features("https://example.com/a?x=1").unwrap();
        let table = render_feature_table(&fv);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("url_length"));
        assert!(lines[12].starts_with("has_brand_name_suspicious"));
    }

    #[test]
    fn table_is_deterministic() {
        let fv = extract_features("http://sub.example.com/path?a=1&b=2").unwrap();
        assert_eq!(render_feature_table(&fv), render_feature_table(&fv));
    }
}
