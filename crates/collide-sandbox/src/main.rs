// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `collide-sandbox`: runs a demo scene headless and reports engine totals.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use collide_physics::{BroadPhase, Sandbox, SatKernel};
use collide_sandbox::config::SANDBOX_CONFIG_KEY;
use collide_sandbox::{
    run, scenes, ConfigService, FsConfigStore, SandboxConfig, SceneKind, SceneParams,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BroadPhaseArg {
    BruteForce,
    Tree,
}

impl From<BroadPhaseArg> for BroadPhase {
    fn from(arg: BroadPhaseArg) -> Self {
        match arg {
            BroadPhaseArg::BruteForce => Self::BruteForce,
            BroadPhaseArg::Tree => Self::Tree,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SatKernelArg {
    Scalar,
    Wide,
}

impl From<SatKernelArg> for SatKernel {
    fn from(arg: SatKernelArg) -> Self {
        match arg {
            SatKernelArg::Scalar => Self::Scalar,
            SatKernelArg::Wide => Self::Wide,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Scene to run
    #[clap(short, long, value_enum)]
    scene: Option<SceneKind>,

    /// Frames to simulate
    #[clap(short, long)]
    frames: Option<u64>,

    /// Fixed time step in seconds
    #[clap(long)]
    dt: Option<f32>,

    /// Layout seed
    #[clap(long)]
    seed: Option<u64>,

    /// Polygon count for the bouncing scene
    #[clap(short, long)]
    polygons: Option<usize>,

    /// Broad-phase strategy
    #[clap(long, value_enum)]
    broad_phase: Option<BroadPhaseArg>,

    /// Narrow-phase SAT kernel
    #[clap(long, value_enum)]
    sat_kernel: Option<SatKernelArg>,

    /// Config directory (defaults to the platform config dir)
    #[clap(long)]
    config_dir: Option<PathBuf>,

    /// Write the effective configuration back to the config directory
    #[clap(long)]
    save_config: bool,

    /// Write the run summary as JSON to this path
    #[clap(long)]
    summary: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply(&self, cfg: &mut SandboxConfig) {
        if let Some(scene) = self.scene {
            cfg.scene = scene;
        }
        if let Some(frames) = self.frames {
            cfg.frames = frames;
        }
        if let Some(dt) = self.dt {
            cfg.dt = dt;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(polygons) = self.polygons {
            cfg.polygons = polygons;
        }
        if let Some(bp) = self.broad_phase {
            cfg.engine.broad_phase = bp.into();
        }
        if let Some(kernel) = self.sat_kernel {
            cfg.engine.sat_kernel = kernel.into();
        }
    }

    fn log_level(&self, cfg: &SandboxConfig) -> Result<Level> {
        match self.verbose {
            0 => Level::from_str(&cfg.log_level)
                .with_context(|| format!("invalid log level in config: {:?}", cfg.log_level)),
            1 => Ok(Level::DEBUG),
            _ => Ok(Level::TRACE),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::in_dir(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    let service = ConfigService::new(store);
    let mut cfg: SandboxConfig = service
        .load(SANDBOX_CONFIG_KEY)
        .context("loading sandbox config")?
        .unwrap_or_default();
    args.apply(&mut cfg);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level(&cfg)?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    info!(scene = ?cfg.scene, frames = cfg.frames, dt = cfg.dt, "starting collide sandbox");
    if args.save_config {
        service.save(SANDBOX_CONFIG_KEY, &cfg).context("saving sandbox config")?;
        info!(dir = %service.into_inner().base().display(), "config saved");
    }

    let mut sandbox = Sandbox::new(cfg.engine);
    let mut behavior = scenes::build(cfg.scene, &SceneParams::from(&cfg), &mut sandbox)
        .context("building scene")?;
    let summary = run(&mut sandbox, &mut behavior, cfg.frames, cfg.dt).context("running scene")?;

    if let Some(path) = &args.summary {
        let json = serde_json::to_vec_pretty(&summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }
    Ok(())
}
