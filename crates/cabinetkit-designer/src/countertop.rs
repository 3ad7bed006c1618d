//! Countertop and backsplash slabs
//!
//! Single-cabinet and corner tops are built in the cabinet's local frame;
//! run tops are built in world space from already-placed cabinets.

use cabinetkit_core::constants::{
    BACKSPLASH_HEIGHT, BACKSPLASH_THICKNESS, COUNTERTOP_BACK_OVERHANG, COUNTERTOP_FRONT_OVERHANG,
    COUNTERTOP_SIDE_OVERHANG, COUNTERTOP_THICKNESS, SEATING_EXTRA_DEPTH,
};
use cabinetkit_core::{BoxCategory, CabinetKind, Dimensions, MaterialTag};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::carcass::corner::outside_outline;
use crate::decomposition::Decomposition;
use crate::spec::{CabinetSpec, CornerLayout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountertopOptions {
    pub thickness: f64,
    pub front_overhang: f64,
    pub back_overhang: f64,
    pub side_overhang: f64,
    /// Apply the side overhang to single-cabinet tops
    pub include_side_overhang: bool,
    pub seating_extra_depth: f64,
    pub backsplash_height: f64,
    pub backsplash_thickness: f64,
}

impl Default for CountertopOptions {
    fn default() -> Self {
        Self {
            thickness: COUNTERTOP_THICKNESS,
            front_overhang: COUNTERTOP_FRONT_OVERHANG,
            back_overhang: COUNTERTOP_BACK_OVERHANG,
            side_overhang: COUNTERTOP_SIDE_OVERHANG,
            include_side_overhang: false,
            seating_extra_depth: SEATING_EXTRA_DEPTH,
            backsplash_height: BACKSPLASH_HEIGHT,
            backsplash_thickness: BACKSPLASH_THICKNESS,
        }
    }
}

/// Slab over one rectangular cabinet, plus its backsplash when requested.
///
/// A seating overhang puts the back edge in open space, so no backsplash
/// is emitted on an island with seating.
pub fn single_countertop(
    spec: &CabinetSpec,
    opts: &CountertopOptions,
    dims: &Dimensions,
) -> Decomposition {
    let mut out = Decomposition::new(dims);
    let side = if opts.include_side_overhang {
        opts.side_overhang
    } else {
        0.0
    };
    let seating = if spec.kind == CabinetKind::Island && spec.has_seating_side {
        opts.seating_extra_depth
    } else {
        0.0
    };
    let back_y = spec.depth + opts.back_overhang;

    out.panel(
        BoxCategory::Countertops,
        "Countertop",
        [-side, -opts.front_overhang, spec.height],
        [
            spec.width + 2.0 * side,
            back_y + seating + opts.front_overhang,
            opts.thickness,
        ],
        MaterialTag::Countertop,
    );
    if spec.has_backsplash && seating > 0.0 {
        debug!("island seating overhang, skipping backsplash");
    } else if spec.has_backsplash {
        backsplash(
            &mut out,
            "Backsplash",
            [-side, back_y - opts.backsplash_thickness],
            [spec.width + 2.0 * side, opts.backsplash_thickness],
            spec.height + opts.thickness,
            opts,
        );
    }
    out
}

/// One slab spanning placed cabinets, sized from the first cabinet.
///
/// Returns `None` for an empty run.
pub fn run_countertop(
    cabinets: &[CabinetSpec],
    opts: &CountertopOptions,
    backsplash_too: bool,
    dims: &Dimensions,
) -> Option<Decomposition> {
    let first = cabinets.first()?;
    let min_x = cabinets
        .iter()
        .map(|c| c.position.x)
        .fold(f64::INFINITY, f64::min);
    let max_x = cabinets
        .iter()
        .map(|c| c.position.x + c.footprint().0)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut out = Decomposition::new(dims);
    let x0 = min_x - opts.side_overhang;
    let width = max_x - min_x + 2.0 * opts.side_overhang;
    let y0 = first.position.y - opts.front_overhang;
    let back_y = first.position.y + first.depth + opts.back_overhang;
    let top = first.position.z + first.height;

    out.panel(
        BoxCategory::Countertops,
        "Run Countertop",
        [x0, y0, top],
        [width, back_y - y0, opts.thickness],
        MaterialTag::Countertop,
    );
    if backsplash_too {
        backsplash(
            &mut out,
            "Run Backsplash",
            [x0, back_y - opts.backsplash_thickness],
            [width, opts.backsplash_thickness],
            top + opts.thickness,
            opts,
        );
    }
    Some(out)
}

/// L-shaped top following the corner footprint, grown by the front
/// overhang on the exposed faces only.
pub fn corner_countertop(
    spec: &CabinetSpec,
    layout: &CornerLayout,
    opts: &CountertopOptions,
    dims: &Dimensions,
) -> Decomposition {
    let mut out = Decomposition::new(dims);
    let o = opts.front_overhang;
    let d = layout.depth;
    let top = spec.height + opts.thickness;
    let bt = opts.backsplash_thickness;

    let outline: Vec<(f64, f64)> = if layout.inside {
        let l = layout.extent();
        vec![
            (0.0, 0.0),
            (d + o, 0.0),
            (d + o, l - d - o),
            (l, l - d - o),
            (l, l),
            (0.0, l),
        ]
    } else {
        let s = layout.size;
        outside_outline(layout)
            .into_iter()
            .map(|(px, py)| {
                let px = if (px - s).abs() < dims.epsilon { s + o } else { px };
                let py = if py.abs() < dims.epsilon { -o } else { py };
                (px, py)
            })
            .collect()
    };
    out.slab(
        BoxCategory::Countertops,
        "Countertop",
        &outline,
        spec.height,
        opts.thickness,
        MaterialTag::Countertop,
    );

    if spec.has_backsplash {
        if layout.inside {
            let l = layout.extent();
            backsplash(&mut out, "Backsplash 1", [0.0, l - bt], [l, bt], top, opts);
            backsplash(&mut out, "Backsplash 2", [0.0, 0.0], [bt, l - bt], top, opts);
        } else if layout.return_depth() > 0.0 {
            let s = layout.size;
            let (_, y) = layout.footprint();
            backsplash(&mut out, "Backsplash 1", [0.0, d - bt], [s - d, bt], top, opts);
            backsplash(&mut out, "Backsplash 2", [s - d, d], [bt, y - d], top, opts);
        } else {
            let (x, y) = layout.footprint();
            backsplash(&mut out, "Backsplash 1", [0.0, y - bt], [x + o, bt], top, opts);
        }
    }
    out
}

/// Vertical slab from plan `min`/`size` standing on height `z`.
fn backsplash(
    out: &mut Decomposition,
    name: &str,
    min: [f64; 2],
    size: [f64; 2],
    z: f64,
    opts: &CountertopOptions,
) {
    out.panel(
        BoxCategory::Backsplash,
        name,
        [min[0], min[1], z],
        [size[0], size[1], opts.backsplash_height],
        MaterialTag::Backsplash,
    );
}
