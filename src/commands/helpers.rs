//! Command helper utilities

use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::sync::Synchronizer;
use crate::ui::{AssumeYes, Confirmer, PromptConfirmer};

/// Global path options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalPaths {
    pub source: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

impl GlobalPaths {
    /// Resolve the configuration from flags, environment and defaults
    pub fn config(&self) -> Result<SyncConfig> {
        SyncConfig::resolve(self.source.as_deref(), self.config_dir.as_deref())
    }

    pub fn synchronizer(&self) -> Result<Synchronizer> {
        Ok(Synchronizer::new(self.config()?))
    }
}

/// Confirmer for the `--yes` flag
pub fn confirmer(yes: bool) -> Box<dyn Confirmer> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(PromptConfirmer)
    }
}
