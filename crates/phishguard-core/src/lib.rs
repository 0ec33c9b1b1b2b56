pub mod config;
pub mod logging;

// Detection pipeline
pub mod classifier;
pub mod features;
pub mod pipeline;
pub mod report;
pub mod verdict;
pub mod whitelist;
