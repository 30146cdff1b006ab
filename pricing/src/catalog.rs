use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    addons::AddOnPrices,
    entries::{Finish, Material, QualityTier},
};

pub const DEFAULT_MATERIAL: &str = "PLA";
pub const DEFAULT_QUALITY: &str = "0.20";
pub const DEFAULT_FINISH: &str = "raw";

/// Every price, rate, and multiplier the estimator uses. Constructed once
/// at process start and never mutated; changing a figure is a data edit
/// here (or in a TOML override), not a code change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Catalog {
    pub shipping_standard: f64,
    pub free_shipping_threshold: f64,
    pub setup_fee: f64,
    pub machine_hourly_rate: f64,
    pub minimum_order_value: f64,
    /// Machine setup and heat-up time added to every job, in seconds.
    pub warmup_seconds: f64,

    /// Extra plastic consumed by support structures, as a multiplier.
    pub support_waste_factor: f64,
    /// Print time multiplier when supports are enabled.
    pub support_time_factor: f64,
    /// Flat brim/raft volume in cm³.
    pub adhesion_base_volume: f64,
    /// Additional brim/raft volume per cm² of surface area.
    pub adhesion_area_factor: f64,
    /// Fraction of extra print time at 100% infill.
    pub infill_time_penalty: f64,
    pub rush_multiplier: f64,
    /// Fraction of the setup fee rebated per extra unit in a batch.
    pub bulk_discount_fraction: f64,
    /// Per-cm² labor surcharge on any non-raw finish.
    pub finish_area_rate: f64,

    /// Nozzle width in mm, determines shell thickness per wall loop.
    pub nozzle_width: f64,
    pub default_wall_loops: u32,

    pub materials: BTreeMap<String, Material>,
    pub quality: BTreeMap<String, QualityTier>,
    pub finishes: BTreeMap<String, Finish>,
    /// Selectable infill patterns. Informational only, no cost effect.
    pub infill_patterns: Vec<String>,
    pub addon_prices: AddOnPrices,
}

impl Catalog {
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("Failed to load pricing catalog, using defaults: {}", err);
                Catalog::default()
            }
        }
    }

    /// Loads a catalog from a TOML file. Absent keys keep their default
    /// values, so an override file only needs the figures it changes.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&raw)?;
        catalog.validate()?;
        info!("Loaded pricing catalog from `{}`", path.display());
        Ok(catalog)
    }

    /// Unknown ids fall back to the default entries, so a catalog without
    /// them cannot honor the lookup contract.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.materials.contains_key(DEFAULT_MATERIAL),
            "catalog is missing the default material `{DEFAULT_MATERIAL}`"
        );
        ensure!(
            self.quality.contains_key(DEFAULT_QUALITY),
            "catalog is missing the default quality tier `{DEFAULT_QUALITY}`"
        );
        ensure!(
            self.finishes.contains_key(DEFAULT_FINISH),
            "catalog is missing the default finish `{DEFAULT_FINISH}`"
        );
        Ok(())
    }

    pub fn material(&self, id: &str) -> &Material {
        self.materials
            .get(id)
            .or_else(|| self.materials.get(DEFAULT_MATERIAL))
            .expect("default material missing from catalog")
    }

    pub fn quality(&self, id: &str) -> &QualityTier {
        self.quality
            .get(id)
            .or_else(|| self.quality.get(DEFAULT_QUALITY))
            .expect("default quality tier missing from catalog")
    }

    /// Resolves a finish id, falling back to the raw finish. Returns the
    /// resolved key alongside the entry so callers can tell whether the
    /// per-area surcharge applies.
    pub fn finish(&self, id: &str) -> (&str, &Finish) {
        self.finishes
            .get_key_value(id)
            .or_else(|| self.finishes.get_key_value(DEFAULT_FINISH))
            .map(|(key, finish)| (key.as_str(), finish))
            .expect("default finish missing from catalog")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let materials = [
            ("PLA", "PLA (Eco-Friendly)", 1.54, 3.5),
            ("PETG", "PETG (Strong)", 1.47, 5.5),
            ("ABS", "ABS (Durable)", 1.24, 5.0),
            ("TPU", "TPU (Flexible)", 1.41, 6.0),
            ("CF", "Carbon Fiber", 1.40, 7.0),
            ("ASA", "ASA (UV Resistant)", 1.17, 8.0),
        ]
        .into_iter()
        .map(|(id, name, density, price)| {
            (
                id.to_owned(),
                Material {
                    name: name.to_owned(),
                    density,
                    price,
                },
            )
        })
        .collect();

        let quality = [
            ("0.12", "0.12mm (Ultra Detail)", 4.0, 1.3),
            ("0.20", "0.20mm (Standard)", 8.0, 1.0),
            ("0.28", "0.28mm (Draft/Fast)", 12.0, 0.8),
        ]
        .into_iter()
        .map(|(id, label, flow_rate, price_mult)| {
            (
                id.to_owned(),
                QualityTier {
                    label: label.to_owned(),
                    flow_rate,
                    price_mult,
                },
            )
        })
        .collect();

        let finishes = [
            ("raw", "Raw", 0.0),
            ("sanded", "Sanded", 80.0),
            ("painted", "Painted", 250.0),
        ]
        .into_iter()
        .map(|(id, label, price)| {
            (
                id.to_owned(),
                Finish {
                    label: label.to_owned(),
                    price,
                },
            )
        })
        .collect();

        Self {
            shipping_standard: 100.0,
            free_shipping_threshold: 500.0,
            setup_fee: 40.0,
            machine_hourly_rate: 30.0,
            minimum_order_value: 80.0,
            warmup_seconds: 600.0,

            support_waste_factor: 1.25,
            support_time_factor: 1.25,
            adhesion_base_volume: 2.0,
            adhesion_area_factor: 0.05,
            infill_time_penalty: 0.5,
            rush_multiplier: 1.5,
            bulk_discount_fraction: 0.5,
            finish_area_rate: 0.2,

            nozzle_width: 0.4,
            default_wall_loops: 3,

            materials,
            quality,
            finishes,
            infill_patterns: ["grid", "gyroid", "honeycomb", "triangles", "cubic", "concentric"]
                .into_iter()
                .map(String::from)
                .collect(),
            addon_prices: AddOnPrices::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_fall_back_to_defaults() {
        let catalog = Catalog::default();
        assert_eq!(catalog.material("UNOBTAINIUM"), catalog.material(DEFAULT_MATERIAL));
        assert_eq!(catalog.quality("0.99"), catalog.quality(DEFAULT_QUALITY));

        let (key, finish) = catalog.finish("chrome");
        assert_eq!(key, DEFAULT_FINISH);
        assert_eq!(finish.price, 0.0);
    }

    #[test]
    fn known_ids_resolve() {
        let catalog = Catalog::default();
        assert_eq!(catalog.material("PETG").density, 1.47);
        assert_eq!(catalog.quality("0.12").flow_rate, 4.0);
        assert_eq!(catalog.finish("painted").1.price, 250.0);
    }

    #[test]
    fn default_catalog_validates() {
        Catalog::default().validate().unwrap();
    }

    #[test]
    fn toml_override_keeps_defaults_for_absent_keys() {
        let catalog: Catalog = toml::from_str(
            "shipping_standard = 250.0\n\
             [materials.PLA]\n\
             name = \"PLA\"\n\
             density = 1.24\n\
             price = 4.0\n",
        )
        .unwrap();

        assert_eq!(catalog.shipping_standard, 250.0);
        assert_eq!(catalog.material("PLA").density, 1.24);
        // Untouched figures keep their builtin values
        assert_eq!(catalog.free_shipping_threshold, 500.0);
        assert_eq!(catalog.setup_fee, 40.0);
        // A materials table in the override replaces the whole table
        assert_eq!(catalog.materials.len(), 1);
    }

    #[test]
    fn load_or_default_degrades_to_builtin_figures() {
        let catalog = Catalog::load_or_default(Path::new("/nonexistent/catalog.toml"));
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn validate_rejects_catalog_without_defaults() {
        let mut catalog = Catalog::default();
        catalog.materials.remove(DEFAULT_MATERIAL);
        assert!(catalog.validate().is_err());
    }
}
