//! Rectangular carcass recipe
//!
//! Shared by the plain kinds and by each unit of a wall stack. Local frame:
//! x across the width, y from the front face (0) to the wall, z up.

use cabinetkit_core::{BoxCategory, Dimensions, MaterialTag};
use tracing::debug;

use crate::decomposition::Decomposition;

/// One rectangular box to decompose.
#[derive(Debug, Clone)]
pub struct UnitShape {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Height of the unit's underside
    pub z0: f64,
    pub toe_kick: bool,
    pub closed_top: bool,
    pub display: bool,
    pub framed: bool,
    /// Name prefix for stacked units, e.g. `"Upper 1 "`
    pub prefix: String,
}

impl UnitShape {
    fn name(&self, part: &str) -> String {
        format!("{}{}", self.prefix, part)
    }
}

/// Shelf heights above the bottom panel's top face.
///
/// Plain cabinets get one centered shelf once the interior exceeds the
/// threshold; display cabinets get a ladder near the preferred spacing.
pub fn shelf_offsets(clear: f64, interior_height: f64, display: bool, dims: &Dimensions) -> Vec<f64> {
    if clear <= dims.panel_thickness {
        return Vec::new();
    }
    if !display {
        return if interior_height > dims.shelf_threshold {
            vec![clear / 2.0]
        } else {
            Vec::new()
        };
    }

    let mut spaces = (clear / dims.display_shelf_spacing).round().max(1.0);
    let spacing = clear / spaces;
    if spacing > dims.display_shelf_max_spacing {
        spaces = (clear / dims.display_shelf_max_spacing).ceil();
    } else if spacing < dims.display_shelf_min_spacing && spaces > 1.0 {
        spaces = (clear / dims.display_shelf_min_spacing).floor().max(1.0);
    }
    let spacing = clear / spaces;
    (1..spaces as usize).map(|i| i as f64 * spacing).collect()
}

pub fn standard_unit(unit: &UnitShape, dims: &Dimensions, out: &mut Decomposition) {
    let t = dims.panel_thickness;
    let bt = dims.back_thickness;
    let (w, d, h, z0) = (unit.width, unit.depth, unit.height, unit.z0);
    let kick = if unit.toe_kick { dims.toe_kick_height } else { 0.0 };
    let kd = dims.toe_kick_depth;
    let carcass = BoxCategory::Carcass;

    for (side, x) in [("Left Side", 0.0), ("Right Side", w - t)] {
        if unit.toe_kick {
            out.panel(
                carcass,
                unit.name(&format!("{} Kick", side)),
                [x, kd, z0],
                [t, d - kd, kick],
                MaterialTag::Carcass,
            );
        }
        out.panel(
            carcass,
            unit.name(side),
            [x, 0.0, z0 + kick],
            [t, d, h - kick],
            MaterialTag::Carcass,
        );
    }

    let inner = w - 2.0 * t;
    out.panel(
        carcass,
        unit.name("Bottom"),
        [t, 0.0, z0 + kick],
        [inner, d - bt, t],
        MaterialTag::Carcass,
    );
    out.panel(
        carcass,
        unit.name("Back"),
        [t, d - bt, z0 + kick],
        [inner, bt, h - kick],
        MaterialTag::Back,
    );
    if unit.closed_top {
        out.panel(
            carcass,
            unit.name("Top"),
            [t, 0.0, z0 + h - t],
            [inner, d - bt, t],
            MaterialTag::Carcass,
        );
    }

    let floor = z0 + kick + t;
    let ceiling = if unit.closed_top { z0 + h - t } else { z0 + h };
    let shelves = shelf_offsets(ceiling - floor, h - kick, unit.display, dims);
    debug!("{}{} shelves", unit.prefix, shelves.len());
    for (i, offset) in shelves.iter().enumerate() {
        out.panel(
            carcass,
            unit.name(&format!("Shelf {}", i + 1)),
            [t, dims.shelf_setback, floor + offset - t / 2.0],
            [inner, d - bt - dims.shelf_setback, t],
            MaterialTag::Shelf,
        );
    }

    if unit.toe_kick {
        out.panel(
            carcass,
            unit.name("Toe Kick"),
            [t, kd, z0],
            [inner, t, kick],
            MaterialTag::ToeKick,
        );
    }

    if unit.framed {
        face_frame(unit, kick, dims, out);
    }
}

fn face_frame(unit: &UnitShape, kick: f64, dims: &Dimensions, out: &mut Decomposition) {
    let sw = dims.frame_stile_width;
    let rw = dims.frame_rail_width;
    let ft = dims.frame_thickness;
    let (w, h, z0) = (unit.width, unit.height, unit.z0);
    let carcass = BoxCategory::Carcass;

    for (name, x) in [("Face Frame Left Stile", 0.0), ("Face Frame Right Stile", w - sw)] {
        out.panel(
            carcass,
            unit.name(name),
            [x, -ft, z0 + kick],
            [sw, ft, h - kick],
            MaterialTag::FaceFrame,
        );
    }
    for (name, z) in [
        ("Face Frame Bottom Rail", z0 + kick),
        ("Face Frame Top Rail", z0 + h - rw),
    ] {
        out.panel(
            carcass,
            unit.name(name),
            [sw, -ft, z],
            [w - 2.0 * sw, ft, rw],
            MaterialTag::FaceFrame,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_unit(height: f64) -> UnitShape {
        UnitShape {
            width: 24.0,
            depth: 24.0,
            height,
            z0: 0.0,
            toe_kick: true,
            closed_top: false,
            display: false,
            framed: false,
            prefix: String::new(),
        }
    }

    #[test]
    fn test_base_unit_panels() {
        let dims = Dimensions::default();
        let mut out = Decomposition::new(&dims);
        standard_unit(&base_unit(34.5), &dims, &mut out);

        assert!(out.find("Top").is_none());
        assert!(out.find("Shelf 1").is_some());
        assert!(out.find("Toe Kick").is_some());
        assert!(out.find("Left Side Kick").is_some());

        let (min, max) = out.find("Bottom").unwrap().bounds();
        assert!((min.z - 4.0).abs() < 1e-9);
        assert!((max.x - 23.25).abs() < 1e-9);

        let (min, _) = out.find("Back").unwrap().bounds();
        assert!((min.y - (24.0 - 0.375)).abs() < 1e-9);

        let (min, _) = out.find("Toe Kick").unwrap().bounds();
        assert!((min.y - 3.0).abs() < 1e-9);
        assert_eq!(out.skipped(), 0);
    }

    #[test]
    fn test_shelf_threshold_is_strict() {
        let dims = Dimensions::default();
        let mut out = Decomposition::new(&dims);
        standard_unit(&base_unit(28.0), &dims, &mut out);
        assert!(out.find("Shelf 1").is_none());
    }

    #[test]
    fn test_display_ladder_spacing() {
        let dims = Dimensions::default();
        let offsets = shelf_offsets(60.0, 62.0, true, &dims);
        assert!(!offsets.is_empty());
        let spacing = offsets[0];
        assert!(spacing >= dims.display_shelf_min_spacing - 1e-9);
        assert!(spacing <= dims.display_shelf_max_spacing + 1e-9);
    }

    #[test]
    fn test_face_frame() {
        let dims = Dimensions::default();
        let mut out = Decomposition::new(&dims);
        let mut unit = base_unit(34.5);
        unit.framed = true;
        standard_unit(&unit, &dims, &mut out);
        let (min, max) = out.find("Face Frame Top Rail").unwrap().bounds();
        assert!((min.y + 0.75).abs() < 1e-9);
        assert!((max.z - 34.5).abs() < 1e-9);
        assert_eq!(
            out.boxes
                .iter()
                .filter(|b| b.material == MaterialTag::FaceFrame)
                .count(),
            4
        );
    }
}
