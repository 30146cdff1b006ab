use pricing::addons::AddOns;

/// One pricing request: model geometry at unit scale plus everything the
/// customer picked. Built fresh per call, never stored.
#[derive(Clone, Debug)]
pub struct OrderRequest {
    /// Mesh volume in cm³ before scaling.
    pub base_volume: f64,
    /// Mesh surface area in cm² before scaling.
    pub base_area: f64,
    /// Infill density, 0-100.
    pub infill_percent: f64,
    pub material: String,
    pub quality: String,
    pub options: OrderOptions,
}

#[derive(Clone, Debug)]
pub struct OrderOptions {
    /// Uniform scale factor applied to the model.
    pub scale: f64,
    pub quantity: u32,
    /// Perimeter wall passes. `None` uses the catalog default.
    pub wall_loops: Option<u32>,
    pub supports: bool,
    pub adhesion: bool,
    pub rush: bool,
    /// Finish id, `None` for no finishing at all.
    pub finish: Option<String>,
    pub addons: AddOns,
}

impl OrderOptions {
    /// Number of units actually priced. Zero normalizes to one, matching
    /// the neutral quantity default.
    pub fn units(&self) -> u32 {
        self.quantity.max(1)
    }
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            quantity: 1,
            wall_loops: None,
            supports: false,
            adhesion: false,
            rush: false,
            finish: None,
            addons: AddOns::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_normalizes_to_one_unit() {
        let mut options = OrderOptions::default();
        assert_eq!(options.units(), 1);

        options.quantity = 0;
        assert_eq!(options.units(), 1);

        options.quantity = 7;
        assert_eq!(options.units(), 7);
    }
}
