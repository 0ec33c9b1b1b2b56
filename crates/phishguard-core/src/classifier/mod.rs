//! Classifier contract and implementations.
//!
//! The pipeline only depends on the `predict_proba` contract; the concrete
//! model is an opaque, read-only artifact loaded once at startup.

mod linear;

pub use linear::{LinearModel, ModelError};

use crate::features::FeatureVector;

/// A pre-trained binary classifier. Returns the phishing-class probability
/// in [0, 1] for a feature vector.
pub trait Classifier {
    fn predict_proba(&self, features: &FeatureVector) -> f64;
}

/// Classifier stub returning a fixed probability. Lets the pipeline be
/// exercised without a model artifact.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier(pub f64);

impl Classifier for FixedClassifier {
    fn predict_proba(&self, _features: &FeatureVector) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    #[test]
    fn fixed_classifier_ignores_features() {
        let a = extract_features("https://example.com/").unwrap();
        let b = extract_features("http://paypal.evil-login.com/webscr").unwrap();
        let stub = FixedClassifier(0.42);
        assert_eq!(stub.predict_proba(&a), 0.42);
        assert_eq!(stub.predict_proba(&b), 0.42);
    }
}
