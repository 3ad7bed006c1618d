//! Appliance placeholder volumes

use std::f64::consts::TAU;

use cabinetkit_core::{BoxCategory, CabinetKind, Dimensions, MaterialTag};

use crate::decomposition::Decomposition;
use crate::spec::CabinetSpec;

const BURNER_SEGMENTS: usize = 12;
const BURNER_THICKNESS: f64 = 0.125;

pub fn decompose_appliance(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    match spec.kind {
        CabinetKind::SubzeroFridge => fridge(spec, dims, out),
        CabinetKind::MieleDishwasher => dishwasher(spec, dims, out),
        CabinetKind::Range => range(spec, dims, out),
        CabinetKind::WallOven => wall_oven(spec, dims, out),
        _ => {}
    }
}

fn fridge(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    let t = dims.panel_thickness;
    let uc = dims.utility_clearance;
    let (w, d, h) = (spec.width, spec.depth, spec.height);
    let body_height = spec.interior_height(dims);

    for (name, x) in [("Left Side", 0.0), ("Right Side", w - t)] {
        out.panel(
            BoxCategory::Carcass,
            name,
            [x, 0.0, 0.0],
            [t, d, h],
            MaterialTag::Panel,
        );
    }
    out.panel(
        BoxCategory::Appliances,
        "Refrigerator",
        [t + uc, 0.0, 0.0],
        [w - 2.0 * (t + uc), d - uc, body_height],
        MaterialTag::Appliance,
    );
    out.panel(
        BoxCategory::Appliances,
        "Vent Grille",
        [t, 0.0, body_height],
        [w - 2.0 * t, t, h - body_height],
        MaterialTag::Vent,
    );
}

/// The body sits on the kick height but no recess panel is emitted; the
/// appliance brings its own kick plate.
fn dishwasher(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    let uc = dims.utility_clearance;
    let kick = spec.kick_height(dims);
    let (w, d, h) = (spec.width, spec.depth, spec.height);

    out.panel(
        BoxCategory::Appliances,
        "Dishwasher",
        [uc, 0.0, kick],
        [w - 2.0 * uc, d - uc, h - kick - uc],
        MaterialTag::Appliance,
    );
}

fn range(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    let ct = dims.cooktop_thickness;
    let (w, d, h) = (spec.width, spec.depth, spec.height);

    out.panel(
        BoxCategory::Appliances,
        "Range",
        [0.0, 0.0, 0.0],
        [w, d, h - ct],
        MaterialTag::Appliance,
    );
    out.panel(
        BoxCategory::Appliances,
        "Cooktop",
        [0.0, 0.0, h - ct],
        [w, d, ct],
        MaterialTag::Cooktop,
    );

    let r = dims.burner_radius;
    let centers = [
        (w / 4.0, d / 3.0),
        (3.0 * w / 4.0, d / 3.0),
        (w / 4.0, 2.0 * d / 3.0),
        (3.0 * w / 4.0, 2.0 * d / 3.0),
    ];
    for (i, (cx, cy)) in centers.into_iter().enumerate() {
        let ring: Vec<(f64, f64)> = (0..BURNER_SEGMENTS)
            .map(|k| {
                let a = TAU * k as f64 / BURNER_SEGMENTS as f64;
                (cx + r * a.cos(), cy + r * a.sin())
            })
            .collect();
        out.slab(
            BoxCategory::Appliances,
            format!("Burner {}", i + 1),
            &ring,
            h,
            BURNER_THICKNESS,
            MaterialTag::Burner,
        );
    }
}

fn wall_oven(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    let t = dims.panel_thickness;
    let uc = dims.utility_clearance;
    let (w, d, h) = (spec.width, spec.depth, spec.height);
    let carcass = BoxCategory::Carcass;

    for (name, x) in [("Left Side", 0.0), ("Right Side", w - t)] {
        out.panel(carcass, name, [x, 0.0, 0.0], [t, d, h], MaterialTag::Carcass);
    }
    for (name, z) in [("Bottom", 0.0), ("Top", h - t)] {
        out.panel(
            carcass,
            name,
            [t, 0.0, z],
            [w - 2.0 * t, d, t],
            MaterialTag::Carcass,
        );
    }

    // Keep the opening between bottom and top on short towers.
    let opening = dims.oven_opening_height.min(h - 2.0 * t);
    let bottom = dims.oven_opening_bottom.min(h - t - opening).max(t);
    out.panel(
        BoxCategory::Appliances,
        "Oven",
        [t + uc, 0.0, bottom],
        [w - 2.0 * (t + uc), d - uc, opening],
        MaterialTag::Appliance,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::FrameStyle;

    fn build(kind: CabinetKind) -> Decomposition {
        let dims = Dimensions::default();
        let spec = CabinetSpec::standard(kind, FrameStyle::Frameless, &dims);
        let mut out = Decomposition::new(&dims);
        decompose_appliance(&spec, &dims, &mut out);
        out
    }

    #[test]
    fn test_range_has_four_burners() {
        let out = build(CabinetKind::Range);
        let burners: Vec<_> = out
            .boxes
            .iter()
            .filter(|b| b.material == MaterialTag::Burner)
            .collect();
        assert_eq!(burners.len(), 4);
        assert!(burners.iter().all(|b| b.face_vertex_count() == 12));
        let (min, _) = burners[0].bounds();
        assert!((min.z - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_fridge_vent_above_body() {
        let out = build(CabinetKind::SubzeroFridge);
        let (_, body_max) = out.find("Refrigerator").unwrap().bounds();
        let (vent_min, vent_max) = out.find("Vent Grille").unwrap().bounds();
        assert!((body_max.z - 83.0).abs() < 1e-9);
        assert!((vent_min.z - 83.0).abs() < 1e-9);
        assert!((vent_max.z - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_dishwasher_has_no_toe_kick_panel() {
        let out = build(CabinetKind::MieleDishwasher);
        assert_eq!(out.boxes.len(), 1);
        assert!(out.find("Toe Kick").is_none());
        assert!(out.boxes.iter().all(|b| b.material != MaterialTag::ToeKick));
        let (min, _) = out.find("Dishwasher").unwrap().bounds();
        assert!((min.z - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_oven_opening() {
        let out = build(CabinetKind::WallOven);
        let (min, max) = out.find("Oven").unwrap().bounds();
        assert!((min.z - 32.0).abs() < 1e-9);
        assert!((max.z - 60.5).abs() < 1e-9);
        assert_eq!(out.count(BoxCategory::Carcass), 4);
    }
}
