use serde::{Deserialize, Serialize};

/// A printable filament material.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Density in g/cm³.
    pub density: f64,
    /// Price per gram.
    pub price: f64,
}

/// A layer-height quality tier. Finer layers print slower and cost more.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QualityTier {
    pub label: String,
    /// Extrusion throughput in mm³/s.
    pub flow_rate: f64,
    pub price_mult: f64,
}

/// A surface finish applied after printing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Finish {
    pub label: String,
    pub price: f64,
}
