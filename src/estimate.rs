/// Repair cost estimation
///
/// Deterministic arithmetic that turns a damage measurement into the
/// materials, equipment, labor, and cost range a repair crew would
/// budget for. Independent of trust scoring: measurements come from
/// whatever survey or analysis the caller runs, and the estimate is
/// advisory. All amounts are INR at approximate municipal rates.

use serde::Serialize;

// ========== Material rates (INR) ==========

/// 50 kg bag of cement
const CEMENT_PER_BAG: u64 = 350;
/// Asphalt mix per kilogram
const ASPHALT_PER_KG: u64 = 15;
/// 50 kg bag of gravel
const GRAVEL_PER_BAG: u64 = 200;
const PAINT_PER_LITER: u64 = 250;
const BRICK_PER_PIECE: u64 = 8;

// ========== Labor rates (INR per hour) ==========

const LABOR_POTHOLE: u64 = 200;
const LABOR_GARBAGE: u64 = 150;
const LABOR_INFRASTRUCTURE: u64 = 250;

// ========== Equipment rental (INR per day) ==========

const GARBAGE_TRUCK_PER_DAY: u64 = 2000;

/// Contingency buffers applied on top of the base cost, per job type.
/// Road work is the most predictable; structural repair the least.
const BUFFER_POTHOLE: f64 = 1.4;
const BUFFER_GARBAGE: f64 = 1.3;
const BUFFER_INFRASTRUCTURE: f64 = 1.5;

/// What kind of structural damage is being repaired. Surface defects
/// get patched and repainted; everything else is rebuilt in brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureDamage {
    Crack,
    Wall,
    Hole,
    Collapse,
}

/// A measured quantity of damage, as reported by whoever surveyed it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageMeasurement {
    /// Road surface cavity
    Pothole { area_sqm: f64, depth_cm: f64 },
    /// Accumulated waste to haul away
    Garbage { volume_cubic_m: f64, weight_kg: f64 },
    /// Damage to a built structure
    Infrastructure {
        crack_length_m: f64,
        affected_area_sqm: f64,
        damage: StructureDamage,
    },
}

/// Cost bounds for one repair, in whole rupees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRange {
    pub min: u64,
    pub max: u64,
    pub currency: &'static str,
}

impl CostRange {
    /// Base cost floored to whole rupees, buffered ceiling on top
    fn buffered(base: f64, buffer: f64) -> Self {
        let min = base as u64;
        let max = (min as f64 * buffer) as u64;
        Self {
            min,
            max,
            currency: "INR",
        }
    }
}

/// Everything a crew needs to budget one fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairEstimate {
    pub materials: Vec<String>,
    pub equipment: Vec<&'static str>,
    pub labor_hours: u32,
    pub cost_range: CostRange,
}

impl RepairEstimate {
    /// Serialize to the JSON boundary contract
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Estimate the repair for one measured damage.
pub fn estimate_repair(measurement: &DamageMeasurement) -> RepairEstimate {
    match *measurement {
        DamageMeasurement::Pothole { area_sqm, depth_cm } => pothole_repair(area_sqm, depth_cm),
        DamageMeasurement::Garbage {
            volume_cubic_m,
            weight_kg,
        } => garbage_cleanup(volume_cubic_m, weight_kg),
        DamageMeasurement::Infrastructure {
            crack_length_m,
            affected_area_sqm,
            damage,
        } => infrastructure_repair(crack_length_m, affected_area_sqm, damage),
    }
}

fn plural(count: u64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

fn bag_line(count: u64, material: &str) -> String {
    format!("{count} bag{} {material} ({}kg)", plural(count), count * 50)
}

fn pothole_repair(area_sqm: f64, depth_cm: f64) -> RepairEstimate {
    let volume_liters = area_sqm * (depth_cm / 100.0) * 1000.0;

    // Coverage per 50 kg bag: roughly 40 L cement, 50 L gravel
    let cement_bags = (volume_liters / 40.0) as u64 + 1;
    let gravel_bags = (volume_liters / 50.0) as u64 + 1;
    let asphalt_kg = volume_liters * 0.8;

    let mut materials = vec![bag_line(cement_bags, "cement"), bag_line(gravel_bags, "gravel")];

    let mut material_cost = (cement_bags * CEMENT_PER_BAG + gravel_bags * GRAVEL_PER_BAG) as f64;
    // Larger cavities get an asphalt top layer
    if area_sqm > 0.5 {
        materials.push(format!("{}kg asphalt mix", asphalt_kg as u64));
        material_cost += asphalt_kg * ASPHALT_PER_KG as f64;
    }

    let labor_hours = (area_sqm * 2.0) as u32 + 1;
    let labor_cost = u64::from(labor_hours) * LABOR_POTHOLE;

    RepairEstimate {
        materials,
        equipment: vec!["Basic road repair kit", "Safety barriers"],
        labor_hours,
        cost_range: CostRange::buffered(material_cost + labor_cost as f64, BUFFER_POTHOLE),
    }
}

fn garbage_cleanup(volume_cubic_m: f64, weight_kg: f64) -> RepairEstimate {
    // A truck takes about 5 cubic meters or 2000 kg, whichever fills first
    let trucks = ((volume_cubic_m / 5.0).max(weight_kg / 2000.0) + 0.5) as u64;
    let trucks = trucks.max(1);
    let workers = ((weight_kg / 200.0) as u64).max(2);
    let labor_hours = ((weight_kg / 100.0) as u32).max(1);

    let labor_cost = u64::from(labor_hours) * workers * LABOR_GARBAGE;
    let truck_cost = trucks * GARBAGE_TRUCK_PER_DAY;

    RepairEstimate {
        materials: vec![
            format!("{trucks} garbage truck{} needed", plural(trucks)),
            format!("{workers} workers required"),
            "Industrial garbage bags".to_string(),
            "Protective gear".to_string(),
        ],
        equipment: vec!["Garbage truck", "Loading equipment"],
        labor_hours,
        cost_range: CostRange::buffered((labor_cost + truck_cost) as f64, BUFFER_GARBAGE),
    }
}

fn infrastructure_repair(
    crack_length_m: f64,
    affected_area_sqm: f64,
    damage: StructureDamage,
) -> RepairEstimate {
    let (materials, material_cost) = match damage {
        StructureDamage::Crack | StructureDamage::Wall => {
            let cement_bags = (crack_length_m / 5.0) as u64 + 1;
            let paint_liters = (affected_area_sqm / 10.0) as u64 + 1;
            let materials = vec![
                bag_line(cement_bags, "cement"),
                format!("{paint_liters} liter{} paint", plural(paint_liters)),
                "Crack filler/sealant".to_string(),
                "Primer".to_string(),
            ];
            let cost = cement_bags * CEMENT_PER_BAG + paint_liters * PAINT_PER_LITER;
            (materials, cost)
        }
        StructureDamage::Hole | StructureDamage::Collapse => {
            // Roughly 50 bricks per square meter of rebuilt surface
            let bricks = (affected_area_sqm * 50.0) as u64;
            let cement_bags = (affected_area_sqm / 2.0) as u64 + 1;
            let materials = vec![
                format!("{bricks} bricks"),
                format!("{cement_bags} bag{} cement", plural(cement_bags)),
                "Sand and mortar mix".to_string(),
            ];
            let cost = bricks * BRICK_PER_PIECE + cement_bags * CEMENT_PER_BAG;
            (materials, cost)
        }
    };

    let labor_hours = ((affected_area_sqm as u32) + (crack_length_m as u32)).max(2);
    let labor_cost = u64::from(labor_hours) * LABOR_INFRASTRUCTURE;

    RepairEstimate {
        materials,
        equipment: vec!["Scaffolding (if needed)", "Power tools", "Safety equipment"],
        labor_hours,
        cost_range: CostRange::buffered((material_cost + labor_cost) as f64, BUFFER_INFRASTRUCTURE),
    }
}
