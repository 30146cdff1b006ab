use serde::Serialize;

/// Result of a quote estimation. All fields are scaled by the order
/// quantity and fixed once produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Total plastic weight in grams.
    pub weight: f64,
    /// Total print time in hours.
    pub time_hours: f64,
    /// Pre-shipping cost, rounded up to a whole currency unit.
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub total_cost: f64,
    pub buckets: CostBuckets,
}

/// Where the money goes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostBuckets {
    pub material: f64,
    pub machine: f64,
    pub labor: f64,
}

impl CostBreakdown {
    /// The degenerate result for an order with no printable volume.
    pub fn zero() -> Self {
        Self {
            weight: 0.0,
            time_hours: 0.0,
            subtotal: 0.0,
            shipping_cost: 0.0,
            total_cost: 0.0,
            buckets: CostBuckets {
                material: 0.0,
                machine: 0.0,
                labor: 0.0,
            },
        }
    }
}
