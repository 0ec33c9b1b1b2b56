//! Logistic-regression model over the fixed feature schema.
//!
//! The artifact is a small JSON file: a bias plus one weight per feature
//! name. Validation is strict so a model trained against a different schema
//! fails at load, not silently at predict time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::classifier::Classifier;
use crate::features::{FeatureVector, FEATURE_NAMES};

/// Model artifact load/validation errors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("model is missing a weight for feature `{0}`")]
    MissingWeight(String),
    #[error("model has a weight for unknown feature `{0}`")]
    UnknownFeature(String),
}

/// Logistic regression: `sigmoid(bias + sum(weight[name] * value))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub bias: f64,
    /// Per-feature weights keyed by schema name. BTreeMap keeps artifact
    /// serialization order stable.
    pub weights: BTreeMap<String, f64>,
}

impl LinearModel {
    /// Loads and validates a JSON model artifact.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let data = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LinearModel =
            serde_json::from_str(&data).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate()?;
        tracing::info!("loaded model from {}", path.display());
        Ok(model)
    }

    /// Checks the weight keys against the closed feature schema: every
    /// feature must have a weight, and no extra keys are allowed.
    pub fn validate(&self) -> Result<(), ModelError> {
        for name in FEATURE_NAMES {
            if !self.weights.contains_key(name) {
                return Err(ModelError::MissingWeight(name.to_string()));
            }
        }
        for key in self.weights.keys() {
            if !FEATURE_NAMES.contains(&key.as_str()) {
                return Err(ModelError::UnknownFeature(key.clone()));
            }
        }
        Ok(())
    }

    /// Built-in default weights, used when no model file is configured.
    pub fn builtin() -> Self {
        let weights = [
            ("url_length", 0.02),
            ("num_dots", 0.15),
            ("num_hyphens", 0.25),
            ("has_at_symbol", 1.5),
            ("has_ip", 2.0),
            ("num_subdomains", 0.4),
            ("is_https", -0.8),
            ("num_query_params", 0.1),
            ("path_length", 0.01),
            ("num_path_segments", 0.05),
            ("entropy", 0.3),
            ("has_suspicious_word", 1.2),
            ("has_brand_name_suspicious", 2.5),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self { bias: -4.0, weights }
    }
}

impl Classifier for LinearModel {
    fn predict_proba(&self, features: &FeatureVector) -> f64 {
        let z: f64 = self.bias
            + features
                .pairs()
                .into_iter()
                .map(|(name, value)| {
                    self.weights.get(name).copied().unwrap_or(0.0) * value.as_f64()
                })
                .sum::<f64>();
        1.0 / (1.0 + (-z).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;
    use std::io::Write;

    #[test]
    fn builtin_model_is_valid() {
        LinearModel::builtin().validate().unwrap();
    }

    #[test]
    fn probability_is_in_unit_interval() {
        let model = LinearModel::builtin();
        for url in [
            "https://www.google.com",
            "http://paypal.secure-login-verify.com/webscr/update?a=1&b=2",
            "http://192.168.1.1/admin",
        ] {
            let p = model.predict_proba(&extract_features(url).unwrap());
            assert!((0.0..=1.0).contains(&p), "p = {p} for {url}");
        }
    }

    #[test]
    fn builtin_separates_obvious_cases() {
        let model = LinearModel::builtin();
        let benign = model.predict_proba(&extract_features("https://www.google.com").unwrap());
        let phishy = model.predict_proba(
            &extract_features("http://paypal.secure-login-verify.com/webscr/update?a=1&b=2")
                .unwrap(),
        );
        assert!(benign < 0.5, "benign p = {benign}");
        assert!(phishy >= 0.5, "phishy p = {phishy}");
    }

    #[test]
    fn missing_weight_fails_validation() {
        let mut model = LinearModel::builtin();
        model.weights.remove("entropy");
        assert!(matches!(
            model.validate(),
            Err(ModelError::MissingWeight(name)) if name == "entropy"
        ));
    }

    #[test]
    fn unknown_weight_fails_validation() {
        let mut model = LinearModel::builtin();
        model.weights.insert("num_slashes".to_string(), 1.0);
        assert!(matches!(
            model.validate(),
            Err(ModelError::UnknownFeature(name)) if name == "num_slashes"
        ));
    }

    #[test]
    fn artifact_roundtrip_via_file() {
        let model = LinearModel::builtin();
        let json = serde_json::to_string_pretty(&model).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = LinearModel::from_path(file.path()).unwrap();
        assert_eq!(loaded.bias, model.bias);
        assert_eq!(loaded.weights, model.weights);
    }

    #[test]
    fn malformed_artifact_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            LinearModel::from_path(file.path()),
            Err(ModelError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            LinearModel::from_path(Path::new("/nonexistent/model.json")),
            Err(ModelError::Io { .. })
        ));
    }
}
