//! Evolve a drone placement over a target field.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use dronecover::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Config, MissionConfig};
use crate::render;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Coverage radius of every drone
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Target field JSON (default: random field)
    #[arg(short, long)]
    pub targets: Option<String>,

    /// Number of random targets, ignored with --targets
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Master seed for the run and the random field
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Generation steps after the initial population
    #[arg(short, long)]
    pub generations: Option<u32>,

    /// Individuals per generation
    #[arg(short, long)]
    pub population: Option<usize>,

    /// Drones per placement
    #[arg(short, long)]
    pub drones: Option<usize>,

    /// Per-gene mutation probability
    #[arg(short, long)]
    pub mutation: Option<f64>,

    /// Do not carry the best placement into the next generation
    #[arg(long)]
    pub no_elitism: bool,

    /// Output base path; writes BASE.json, BASE.txt and BASE.svg
    #[arg(short, long)]
    pub output: Option<String>,
}

impl RunArgs {
    /// Command-line flags take precedence over the config file.
    fn merge_into(&self, mut config: EvolutionConfig) -> EvolutionConfig {
        if let Some(size) = self.population {
            config.generation_size = size;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(p) = self.mutation {
            config.mutation_probability = p;
        }
        if let Some(drones) = self.drones {
            config.number_of_agents = drones;
        }
        if self.no_elitism {
            config.use_elitism = false;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}

pub fn run(args: RunArgs, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let evolution = args.merge_into(config.evolution);

    let radius = resolve_radius(&args, &config.mission)?;
    let mut mission = build_mission(&args, &config.mission, evolution)?;
    mission.set_radius(radius)?;

    println!(
        "{} Optimizing {} drones over {} targets (radius {})...",
        "→".blue(),
        mission.config().number_of_agents.to_string().cyan(),
        mission.field().len().to_string().cyan(),
        radius.to_string().cyan()
    );

    let mut evolution_run = mission.start_optimization()?;
    let pb = ProgressBar::new(evolution_run.total_steps());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} generations")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    while let Some(stats) = evolution_run.step() {
        if verbose {
            pb.println(format!(
                "  gen {:>4}: best {} mean {:.2} worst {}",
                stats.generation, stats.best, stats.mean, stats.worst
            ));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let outcome = evolution_run.finish();
    let report = mission.report(&outcome)?;

    println!();
    println!("{} Optimization complete!", "✓".green().bold());
    println!("  Run:      {}", report.run_id.to_string().dimmed());
    println!("  Seed:     {}", report.seed.to_string().cyan());
    println!(
        "  Coverage: {}/{} ({:.1}%)",
        report.fitness.to_string().green(),
        report.targets.len(),
        report.coverage_ratio() * 100.0
    );
    println!();
    for line in report.drone_lines() {
        println!("  {line}");
    }

    if let Some(base) = &args.output {
        write_outputs(&report, Path::new(base), config.mission.map_scale)?;
    }

    Ok(())
}

/// `--radius` wins over `[mission] radius`.
fn resolve_radius(args: &RunArgs, mission_config: &MissionConfig) -> Result<f64> {
    let Some(radius) = args.radius.or(mission_config.radius) else {
        bail!(
            "No coverage radius. Pass {} or set it in dronecover.toml.",
            "--radius".cyan()
        );
    };
    debug!(radius, from_flag = args.radius.is_some(), "coverage radius resolved");
    Ok(radius)
}

fn build_mission(
    args: &RunArgs,
    mission_config: &MissionConfig,
    evolution: EvolutionConfig,
) -> Result<CoverageMission> {
    if let Some(path) = &args.targets {
        let field = TargetField::load(Path::new(path))
            .with_context(|| format!("Failed to load targets from {path}"))?;
        if field.is_empty() {
            bail!("Target file {path} holds no targets");
        }
        info!(path = %path, targets = field.len(), "loaded target field");
        return Ok(CoverageMission::with_field(evolution, field)?);
    }

    let mut mission = match evolution.seed {
        Some(seed) => CoverageMission::seeded(evolution, seed)?,
        None => CoverageMission::new(evolution)?,
    };
    if let Some(count) = args.count.or(mission_config.target_count) {
        mission.regenerate_targets(count)?;
    }
    Ok(mission)
}

/// `base` with its extension replaced.
fn output_path(base: &Path, extension: &str) -> PathBuf {
    base.with_extension(extension)
}

fn write_outputs(report: &MissionReport, base: &Path, scale: f64) -> Result<()> {
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = output_path(base, "json");
    report.save_json(&json)?;
    info!(path = %json.display(), "wrote mission report");
    println!("  {} Wrote {}", "✓".green(), json.display());

    let text = output_path(base, "txt");
    report.save_text(&text)?;
    info!(path = %text.display(), "wrote drone listing");
    println!("  {} Wrote {}", "✓".green(), text.display());

    let svg = output_path(base, "svg");
    std::fs::write(&svg, render::svg_map(report, scale))
        .with_context(|| format!("Failed to write {}", svg.display()))?;
    info!(path = %svg.display(), "wrote coverage map");
    println!("  {} Wrote {}", "✓".green(), svg.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = RunArgs {
            generations: Some(7),
            drones: Some(3),
            no_elitism: true,
            seed: Some(5),
            ..Default::default()
        };
        let merged = args.merge_into(EvolutionConfig::default());
        assert_eq!(merged.generations, 7);
        assert_eq!(merged.number_of_agents, 3);
        assert!(!merged.use_elitism);
        assert_eq!(merged.seed, Some(5));
        assert_eq!(merged.generation_size, 100);
    }

    #[test]
    fn unset_flags_keep_config() {
        let file = EvolutionConfig::default().with_generations(42).with_seed(1);
        let merged = RunArgs::default().merge_into(file.clone());
        assert_eq!(merged, file);
    }

    #[test]
    fn radius_flag_wins_over_file() {
        let file = MissionConfig { radius: Some(4.0), ..Default::default() };
        let args = RunArgs { radius: Some(9.0), ..Default::default() };
        assert_eq!(resolve_radius(&args, &file).unwrap(), 9.0);
        assert_eq!(resolve_radius(&RunArgs::default(), &file).unwrap(), 4.0);
        assert!(resolve_radius(&RunArgs::default(), &MissionConfig::default()).is_err());
    }

    #[test]
    fn target_file_overrides_random_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.json");
        let field = TargetField::from_targets(vec![
            Coordinate::new(5.0, 5.0),
            Coordinate::new(60.0, 40.0),
        ]);
        field.save(&path).unwrap();

        let args = RunArgs {
            targets: Some(path.display().to_string()),
            count: Some(50),
            ..Default::default()
        };
        let mission = build_mission(&args, &MissionConfig::default(), EvolutionConfig::default())
            .unwrap();
        assert_eq!(mission.field(), &field);
    }

    #[test]
    fn empty_target_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        TargetField::new().save(&path).unwrap();

        let args = RunArgs {
            targets: Some(path.display().to_string()),
            ..Default::default()
        };
        assert!(build_mission(&args, &MissionConfig::default(), EvolutionConfig::default()).is_err());
    }

    #[test]
    fn count_flag_sizes_random_field() {
        let args = RunArgs { count: Some(12), ..Default::default() };
        let evolution = EvolutionConfig::default().with_seed(3);
        let mission = build_mission(&args, &MissionConfig::default(), evolution).unwrap();
        assert_eq!(mission.field().len(), 12);
    }

    #[test]
    fn outputs_share_a_base_name() {
        let base = Path::new("out/run1");
        assert_eq!(output_path(base, "json"), PathBuf::from("out/run1.json"));
        assert_eq!(output_path(base, "svg"), PathBuf::from("out/run1.svg"));
    }

    #[test]
    fn write_outputs_creates_all_three_files() {
        let field = TargetField::from_targets(vec![
            Coordinate::new(20.0, 20.0),
            Coordinate::new(70.0, 30.0),
            Coordinate::new(40.0, 80.0),
        ]);
        let config = EvolutionConfig::default()
            .with_generation_size(8)
            .with_generations(2)
            .with_agents(2)
            .with_seed(4);
        let mut mission = CoverageMission::with_field(config, field).unwrap();
        mission.set_radius(10.0).unwrap();
        let outcome = mission.run_optimization().unwrap();
        let report = mission.report(&outcome).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("mission");
        write_outputs(&report, &base, 5.0).unwrap();

        assert!(base.with_extension("json").exists());
        assert!(base.with_extension("txt").exists());
        let svg = std::fs::read_to_string(base.with_extension("svg")).unwrap();
        assert!(svg.contains("<svg"));

        let loaded = MissionReport::load_json(&base.with_extension("json")).unwrap();
        assert_eq!(loaded.drones.len(), 2);
    }
}
