use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Post-processing services a customer can attach to an order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AddOns: u16 {
        const QualityCheck = 1 << 0;
        const EpoxyCoat = 1 << 1;
        const VaporSmooth = 1 << 2;
        const Hardware = 1 << 3;
        const RemoveBrand = 1 << 4;
        const ThreadedInserts = 1 << 5;
        const UvCoating = 1 << 6;
        const Assembly = 1 << 7;
        const Repair = 1 << 8;
        const MaterialCert = 1 << 9;
        const DimensionReport = 1 << 10;
        const Sandblast = 1 << 11;
    }
}

impl AddOns {
    pub fn from_alias(name: &str) -> Option<Self> {
        Some(match name.to_lowercase().as_str() {
            "qc" | "quality-check" => Self::QualityCheck,
            "epoxy" => Self::EpoxyCoat,
            "vapor" => Self::VaporSmooth,
            "hardware" => Self::Hardware,
            "remove-brand" => Self::RemoveBrand,
            "inserts" => Self::ThreadedInserts,
            "uv" => Self::UvCoating,
            "assembly" => Self::Assembly,
            "repair" => Self::Repair,
            "cert" => Self::MaterialCert,
            "report" => Self::DimensionReport,
            "sandblast" => Self::Sandblast,
            _ => return None,
        })
    }
}

/// Flat price of each add-on flag. Kept as a struct rather than a map so
/// the table stays exhaustive: a new flag without a price is a compile
/// error in [`AddOnPrices::table`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AddOnPrices {
    pub quality_check: f64,
    pub epoxy_coat: f64,
    pub vapor_smooth: f64,
    pub hardware: f64,
    pub remove_brand: f64,
    pub threaded_inserts: f64,
    pub uv_coating: f64,
    pub assembly: f64,
    pub repair: f64,
    pub material_cert: f64,
    pub dimension_report: f64,
    pub sandblast: f64,
}

impl AddOnPrices {
    /// Sums the price of every flag set in `addons`.
    pub fn price(&self, addons: AddOns) -> f64 {
        self.table()
            .iter()
            .filter(|(flag, _)| addons.contains(*flag))
            .map(|(_, price)| price)
            .sum()
    }

    fn table(&self) -> [(AddOns, f64); 12] {
        [
            (AddOns::QualityCheck, self.quality_check),
            (AddOns::EpoxyCoat, self.epoxy_coat),
            (AddOns::VaporSmooth, self.vapor_smooth),
            (AddOns::Hardware, self.hardware),
            (AddOns::RemoveBrand, self.remove_brand),
            (AddOns::ThreadedInserts, self.threaded_inserts),
            (AddOns::UvCoating, self.uv_coating),
            (AddOns::Assembly, self.assembly),
            (AddOns::Repair, self.repair),
            (AddOns::MaterialCert, self.material_cert),
            (AddOns::DimensionReport, self.dimension_report),
            (AddOns::Sandblast, self.sandblast),
        ]
    }
}

impl Default for AddOnPrices {
    fn default() -> Self {
        Self {
            quality_check: 150.0,
            epoxy_coat: 150.0,
            vapor_smooth: 200.0,
            hardware: 80.0,
            remove_brand: 40.0,
            threaded_inserts: 120.0,
            uv_coating: 100.0,
            assembly: 250.0,
            repair: 100.0,
            material_cert: 500.0,
            dimension_report: 800.0,
            sandblast: 180.0,
        }
    }
}
