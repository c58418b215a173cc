//! Blender binary entry point
//!
//! Runs one optimize or compare action against the solver using the real
//! HTTP client and the console renderer.

use clap::Parser;
use std::path::PathBuf;

use blender::{
    BatchRegistry, BlenderConfig, BlenderResult, Workbench,
    config::parse_solver_url,
    services::{ConsoleRenderer, RealOptimizationClient},
};
use shared::{Algorithm, AxisToggle, OptimizationMode, ParamsProfile, TargetSelection, demo_inventory, logging};

/// Coffee blend workbench: ask the solver for a blend recipe
#[derive(Parser)]
#[command(name = "blender")]
#[command(about = "Optimize or compare coffee blends against an external solver")]
pub struct Args {
    /// Solver base URL (overrides BLENDER_SOLVER_URL)
    #[arg(long)]
    pub solver_url: Option<String>,

    /// JSON inventory file (array of batches); the demo inventory is used when absent
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Run all three modes side by side instead of a single optimize
    #[arg(long)]
    pub compare: bool,

    /// Target mode: PRICE, BALANCED or QUALITY
    #[arg(long, default_value = "BALANCED")]
    pub mode: OptimizationMode,

    /// Solver algorithm: DEFAULT or HYBRID (overrides BLENDER_ALGORITHM)
    #[arg(long)]
    pub algorithm: Option<Algorithm>,

    /// Parameter preset: mass, balanced or specialty (overrides BLENDER_PROFILE)
    #[arg(long)]
    pub profile: Option<ParamsProfile>,

    /// Target price per kg
    #[arg(long, default_value = "160000")]
    pub target_price: f64,

    /// Target acidity; omit to leave unconstrained
    #[arg(long)]
    pub target_acid: Option<f64>,

    /// Target bitterness; omit to leave unconstrained
    #[arg(long)]
    pub target_bitter: Option<f64>,

    /// Target sweetness; omit to leave unconstrained
    #[arg(long)]
    pub target_sweet: Option<f64>,

    /// Target caffeine; omit to leave unconstrained
    #[arg(long)]
    pub target_caffeine: Option<f64>,

    /// Use the demo flavor targets for every axis not given explicitly
    #[arg(long)]
    pub demo_targets: bool,

    /// Blend output in kg
    #[arg(long, default_value = "100")]
    pub total_output: f64,

    /// Maximum number of distinct batches in the blend
    #[arg(long, default_value = "3")]
    pub max_types: u32,

    /// Override the profile's price tolerance
    #[arg(long)]
    pub price_tolerance: Option<f64>,

    /// Override the profile's flavor tolerance
    #[arg(long)]
    pub flavor_tolerance: Option<f64>,

    /// Override the profile's solver timeout (seconds, enforced by the solver)
    #[arg(long)]
    pub solver_timeout: Option<f64>,

    /// Log level (trace, debug, info, warn, error; overrides BLENDER_LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    fn target_selection(&self) -> TargetSelection {
        let demo = TargetSelection::default();
        let axis = |explicit: Option<f64>, fallback: &AxisToggle| match explicit {
            Some(value) => AxisToggle::on(value),
            None if self.demo_targets => *fallback,
            None => AxisToggle::off(),
        };

        TargetSelection {
            mode: self.mode,
            target_price: self.target_price,
            acid: axis(self.target_acid, &demo.acid),
            bitter: axis(self.target_bitter, &demo.bitter),
            sweet: axis(self.target_sweet, &demo.sweet),
            caffeine: axis(self.target_caffeine, &demo.caffeine),
            total_output_kg: self.total_output,
            max_batch_types: self.max_types,
        }
    }
}

#[tokio::main]
async fn main() -> BlenderResult<()> {
    let args = Args::parse();

    // Defaults, .env and environment first; flags win
    let mut config = BlenderConfig::from_env()?;
    if let Some(raw) = &args.solver_url {
        config.solver_url = parse_solver_url(raw)?;
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    logging::init_tracing_with_level(Some(&config.log_level));
    tracing::info!("☕ Blender starting against {}", config.solver_url);

    let client = RealOptimizationClient::from_config(&config)?;
    let renderer = ConsoleRenderer::new();

    let registry = match &args.inventory {
        Some(_) => BatchRegistry::new(),
        None => BatchRegistry::with_batches(demo_inventory())?,
    };
    let workbench = Workbench::new(registry, client, renderer);
    if let Some(path) = &args.inventory {
        workbench.load_inventory_file(path).await?;
    }

    let mut params = config.profile.params();
    if let Some(value) = args.price_tolerance {
        params.price_tolerance = value;
    }
    if let Some(value) = args.flavor_tolerance {
        params.flavor_tolerance = value;
    }
    if let Some(value) = args.solver_timeout {
        params.solver_timeout_sec = value;
    }

    workbench.set_target(args.target_selection()).await?;
    workbench.set_params(params).await?;
    workbench.set_algorithm(config.algorithm).await;

    if args.compare {
        workbench.compare().await?;
    } else {
        workbench.optimize().await?;
    }

    Ok(())
}
