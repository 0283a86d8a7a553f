use crate::io;
use crate::model::Team;
use crate::scheduler::{RotationScheduler, ScoringOptions};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fichier de configuration d'un roulement : noms des agents et pondération.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub scoring: ScoringOptions,
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.team.names().iter().any(|n| n.trim().is_empty()) {
            bail!("team names cannot be empty");
        }
        Ok(())
    }

    pub fn scheduler(&self) -> RotationScheduler {
        RotationScheduler::with_options(self.scoring)
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RosterConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RosterConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RosterConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_vec_pretty(config)?;
    io::write_atomic(path.as_ref(), &json)
}
