//! Decision policy: whitelist override, extraction, threshold decision.

use crate::classifier::Classifier;
use crate::features::{self, FeatureVector, DEFAULT_HTTPS_WEIGHT};
use crate::verdict::{Label, Verdict};
use crate::whitelist;

/// Fixed decision threshold on the phishing probability. Baked into the
/// reference behavior, deliberately not runtime-configurable.
pub const PHISHING_THRESHOLD: f64 = 0.5;

/// Verdict plus the feature vector that produced it (absent for whitelisted
/// or invalid URLs), so the presenter can show both.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub features: Option<FeatureVector>,
}

/// Runs the full pipeline for one URL.
///
/// Whitelisted hosts short-circuit before extraction; extraction failure
/// yields `Invalid`; otherwise the classifier's probability is thresholded
/// at [`PHISHING_THRESHOLD`].
pub fn evaluate(url: &str, https_weight: f64, classifier: &dyn Classifier) -> Evaluation {
    if whitelist::is_whitelisted(url) {
        tracing::debug!(url, "whitelisted host, skipping classification");
        return Evaluation {
            verdict: Verdict::Whitelisted,
            features: None,
        };
    }

    let features = match features::extract_features_weighted(url, https_weight) {
        Ok(fv) => fv,
        Err(err) => {
            tracing::debug!(url, %err, "feature extraction failed");
            return Evaluation {
                verdict: Verdict::Invalid,
                features: None,
            };
        }
    };

    let probability = classifier.predict_proba(&features);
    let label = if probability >= PHISHING_THRESHOLD {
        Label::Phishing
    } else {
        Label::Legitimate
    };
    tracing::debug!(url, probability, ?label, "classified");

    Evaluation {
        verdict: Verdict::Classified { probability, label },
        features: Some(features),
    }
}

/// Verdict-only form of [`evaluate`], with the default HTTPS down-weight.
pub fn decide(url: &str, classifier: &dyn Classifier) -> Verdict {
    evaluate(url, DEFAULT_HTTPS_WEIGHT, classifier).verdict
}
