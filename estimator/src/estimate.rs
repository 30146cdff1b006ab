use pricing::catalog::{Catalog, DEFAULT_FINISH};

use crate::{
    breakdown::{CostBreakdown, CostBuckets},
    order::OrderRequest,
};

/// Prices an order against a catalog. Never fails: out-of-domain inputs
/// resolve through catalog defaults, and an order with no printable
/// volume yields [`CostBreakdown::zero`].
pub fn estimate(catalog: &Catalog, order: &OrderRequest) -> CostBreakdown {
    if !(order.base_volume > 0.0) {
        return CostBreakdown::zero();
    }

    let opts = &order.options;

    // The model scales isotropically: volume by the cube, area by the
    // square of the scale factor.
    let scale = if opts.scale > 0.0 { opts.scale } else { 1.0 };
    let volume = order.base_volume * scale.powi(3);
    let area = order.base_area.max(0.0) * scale.powi(2);
    let infill = order.infill_percent.max(0.0).min(100.0) / 100.0;

    let material = catalog.material(&order.material);
    let quality = catalog.quality(&order.quality);

    // Shell walls are laid down at nozzle width, mm converted to cm. Only
    // the volume inside the shell is filled at the infill density.
    let wall_loops = opts.wall_loops.unwrap_or(catalog.default_wall_loops);
    let shell_thickness = wall_loops as f64 * catalog.nozzle_width / 10.0;
    let shell_volume = area * shell_thickness;
    let internal_volume = (volume - shell_volume).max(0.0);
    let infill_volume = internal_volume * infill;

    let mut plastic_cm3 = shell_volume + infill_volume;
    if opts.supports {
        plastic_cm3 *= catalog.support_waste_factor;
    }
    if opts.adhesion {
        plastic_cm3 += catalog.adhesion_base_volume + area * catalog.adhesion_area_factor;
    }

    let weight = plastic_cm3 * material.density;

    // Time follows deposited volume over the tier's flow rate, with denser
    // infill slowing the toolpath down.
    let mut seconds = plastic_cm3 * 1000.0 / quality.flow_rate;
    seconds *= 1.0 + infill * catalog.infill_time_penalty;
    if opts.supports {
        seconds *= catalog.support_time_factor;
    }
    seconds += catalog.warmup_seconds;
    let time_hours = seconds / 3600.0;

    let material_cost = weight * material.price;
    let machine_cost = time_hours * catalog.machine_hourly_rate;

    let mut finish_cost = 0.0;
    if let Some(finish_id) = &opts.finish {
        let (resolved, finish) = catalog.finish(finish_id);
        finish_cost = finish.price;
        if resolved != DEFAULT_FINISH {
            finish_cost += area * catalog.finish_area_rate;
        }
    }

    let addons_cost = catalog.addon_prices.price(opts.addons);

    let mut unit_cost = (catalog.setup_fee + material_cost + machine_cost) * quality.price_mult
        + finish_cost
        + addons_cost;
    if opts.rush {
        unit_cost *= catalog.rush_multiplier;
    }
    unit_cost = unit_cost.max(catalog.minimum_order_value);

    // Setup happens once per batch, so part of its fee is rebated for
    // every unit past the first.
    let quantity = opts.units() as f64;
    let rebate = catalog.setup_fee * catalog.bulk_discount_fraction * (quantity - 1.0);
    let subtotal = (unit_cost * quantity - rebate).ceil();

    let shipping_cost = if subtotal > catalog.free_shipping_threshold {
        0.0
    } else {
        catalog.shipping_standard
    };

    CostBreakdown {
        weight: weight * quantity,
        time_hours: time_hours * quantity,
        subtotal,
        shipping_cost,
        total_cost: subtotal + shipping_cost,
        buckets: CostBuckets {
            material: material_cost * quantity,
            machine: (machine_cost + catalog.setup_fee) * quantity,
            labor: (finish_cost + addons_cost) * quantity,
        },
    }
}
