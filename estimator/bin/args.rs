use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use estimator::order::{OrderOptions, OrderRequest};
use pricing::addons::AddOns;

#[derive(Debug, Parser)]
/// Instant quote estimator for custom 3d prints.
pub struct Args {
    #[arg(long)]
    /// Model volume at unit scale, in cm³.
    pub volume: f64,
    #[arg(long)]
    /// Model surface area at unit scale, in cm².
    pub area: f64,
    #[arg(long, default_value_t = 20.0)]
    /// Infill density percentage, 0-100.
    pub infill: f64,
    #[arg(long, default_value = "PLA")]
    /// Material id. Unknown ids fall back to PLA.
    pub material: String,
    #[arg(long, default_value = "0.20")]
    /// Layer height quality tier. Unknown tiers fall back to 0.20.
    pub quality: String,
    #[arg(long)]
    /// Infill pattern name. Informational only, does not affect price.
    pub pattern: Option<String>,

    #[arg(long, default_value_t = 1.0)]
    /// Uniform scale factor applied to the model.
    pub scale: f64,
    #[arg(long, default_value_t = 1)]
    /// Number of copies to print.
    pub quantity: u32,
    #[arg(long)]
    /// Perimeter wall passes. Defaults to the catalog value.
    pub wall_loops: Option<u32>,
    #[arg(long)]
    /// Generate support structures.
    pub supports: bool,
    #[arg(long)]
    /// Add a brim/raft for bed adhesion.
    pub adhesion: bool,
    #[arg(long)]
    /// Rush order processing.
    pub rush: bool,
    #[arg(long)]
    /// Surface finish id (raw, sanded, painted).
    pub finish: Option<String>,
    #[arg(long = "addon", value_parser = addon_value_parser)]
    /// Post-processing add-on, may be repeated. One of qc, epoxy, vapor,
    /// hardware, remove-brand, inserts, uv, assembly, repair, cert,
    /// report, sandblast.
    pub addons: Vec<AddOns>,

    #[arg(long)]
    /// Path to a TOML file overriding the builtin pricing catalog.
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    /// Print the cost breakdown as JSON.
    pub json: bool,
}

impl Args {
    pub fn order(&self) -> OrderRequest {
        OrderRequest {
            base_volume: self.volume,
            base_area: self.area,
            infill_percent: self.infill,
            material: self.material.clone(),
            quality: self.quality.clone(),
            options: OrderOptions {
                scale: self.scale,
                quantity: self.quantity,
                wall_loops: self.wall_loops,
                supports: self.supports,
                adhesion: self.adhesion,
                rush: self.rush,
                finish: self.finish.clone(),
                addons: self
                    .addons
                    .iter()
                    .fold(AddOns::empty(), |set, &addon| set | addon),
            },
        }
    }
}

fn addon_value_parser(raw: &str) -> Result<AddOns> {
    AddOns::from_alias(raw).with_context(|| format!("Unknown add-on `{raw}`"))
}
