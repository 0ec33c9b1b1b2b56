//! `phishguard batch <path>` – classify one URL per line from a file.

use anyhow::{Context, Result};
use phishguard_core::classifier::Classifier;
use phishguard_core::config::DetectorConfig;
use phishguard_core::pipeline;
use phishguard_core::report;
use phishguard_core::verdict::{Label, Verdict};
use std::fs;
use std::path::Path;

pub fn run_batch(cfg: &DetectorConfig, classifier: &dyn Classifier, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list {}", path.display()))?;

    let mut phishing = 0usize;
    let mut legitimate = 0usize;
    let mut whitelisted = 0usize;
    let mut invalid = 0usize;

    for line in data.lines() {
        let url = line.trim();
        if url.is_empty() || url.starts_with('#') {
            continue;
        }

        let eval = pipeline::evaluate(url, cfg.https_weight, classifier);
        match &eval.verdict {
            Verdict::Whitelisted => whitelisted += 1,
            Verdict::Invalid => invalid += 1,
            Verdict::Classified { label, .. } => match label {
                Label::Phishing => phishing += 1,
                Label::Legitimate => legitimate += 1,
            },
        }
        println!("{}\t{}", url, report::render_verdict(&eval.verdict));
    }

    println!(
        "\n{} phishing, {} legitimate, {} whitelisted, {} invalid",
        phishing, legitimate, whitelisted, invalid
    );
    Ok(())
}
