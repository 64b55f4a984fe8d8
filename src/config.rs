use std::path::PathBuf;

use crate::cli::command::Cli;
use crate::store::ContactStore;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings resolved from flags, environment and `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: bool,
    pub log_filter: Option<String>,
    pub export_path: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            seed: !cli.no_seed,
            log_filter: cli.log_level.clone(),
            export_path: cli.export_path.clone(),
        }
    }

    /// The store every run starts from.
    pub fn build_store(&self) -> ContactStore {
        if self.seed {
            ContactStore::seeded()
        } else {
            ContactStore::new()
        }
    }
}
