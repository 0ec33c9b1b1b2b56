//! `phishguard check <url>` – classify one URL and show its features.

use anyhow::Result;
use phishguard_core::classifier::Classifier;
use phishguard_core::config::DetectorConfig;
use phishguard_core::pipeline;
use phishguard_core::report;

pub fn run_check(cfg: &DetectorConfig, classifier: &dyn Classifier, url: &str) -> Result<()> {
    let eval = pipeline::evaluate(url, cfg.https_weight, classifier);

    println!("{}: {}", url, report::render_verdict(&eval.verdict));
    if let Some(features) = &eval.features {
        println!();
        print!("{}", report::render_feature_table(features));
    }
    Ok(())
}
