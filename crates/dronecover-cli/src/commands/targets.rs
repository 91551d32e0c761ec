//! Generate a target field and save it as JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use dronecover::prelude::*;
use std::path::Path;
use tracing::info;

use crate::config::Config;

pub fn run(count: Option<usize>, seed: Option<u64>, output: &str) -> Result<()> {
    let config = Config::load()?;
    let count = count.or(config.mission.target_count);

    let mut mission = match seed {
        Some(seed) => CoverageMission::seeded(config.evolution, seed)?,
        None => CoverageMission::new(config.evolution)?,
    };
    if let Some(count) = count {
        mission.regenerate_targets(count)?;
    }

    let path = Path::new(output);
    mission
        .field()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), targets = mission.field().len(), "saved target field");
    println!(
        "{} Generated {} targets → {}",
        "✓".green().bold(),
        mission.field().len().to_string().cyan(),
        path.display()
    );
    Ok(())
}
