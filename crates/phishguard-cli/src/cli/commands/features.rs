//! `phishguard features <url>` – feature extraction without classification.

use anyhow::{Context, Result};
use phishguard_core::config::DetectorConfig;
use phishguard_core::features::extract_features_weighted;
use phishguard_core::report;

pub fn run_features(cfg: &DetectorConfig, url: &str) -> Result<()> {
    let features = extract_features_weighted(url, cfg.https_weight)
        .with_context(|| format!("cannot extract features from {url}"))?;
    print!("{}", report::render_feature_table(&features));
    Ok(())
}
