//! Corner carcass decomposition
//!
//! Inside corners occupy an `L × L` square (`L = depth + size`) with the
//! bite taken out of the front-right: the left leg runs along the left
//! wall (y from 0 to L, fronts facing +x) and the back leg runs along the
//! back wall (x from 0 to L, fronts facing -y).
//!
//! Outside corners have a `size`-wide front at y = 0 and a return wing at
//! the right whose face is the x = size plane.

use cabinetkit_core::{BoxCategory, Dimensions, MaterialTag};

use crate::decomposition::Decomposition;
use crate::spec::{CabinetSpec, CornerLayout};

/// Inside-corner footprint as a 6-point polygon, counter-clockwise.
pub fn inside_outline(layout: &CornerLayout) -> Vec<(f64, f64)> {
    let l = layout.extent();
    let d = layout.depth;
    vec![
        (0.0, 0.0),
        (d, 0.0),
        (d, l - d),
        (l, l - d),
        (l, l),
        (0.0, l),
    ]
}

/// Outside-corner footprint; a plain rectangle when there is no return wing.
pub fn outside_outline(layout: &CornerLayout) -> Vec<(f64, f64)> {
    let s = layout.size;
    let d = layout.depth;
    let (_, y) = layout.footprint();
    if layout.return_depth() <= 0.0 {
        vec![(0.0, 0.0), (s, 0.0), (s, y), (0.0, y)]
    } else {
        vec![
            (0.0, 0.0),
            (s, 0.0),
            (s, y),
            (s - d, y),
            (s - d, d),
            (0.0, d),
        ]
    }
}

pub fn decompose_corner(
    spec: &CabinetSpec,
    layout: &CornerLayout,
    dims: &Dimensions,
    out: &mut Decomposition,
) {
    let kick = spec.kick_height(dims);
    let outline = if layout.inside {
        inside_outline(layout)
    } else {
        outside_outline(layout)
    };

    let t = dims.panel_thickness;
    out.slab(
        BoxCategory::Carcass,
        "Bottom",
        &outline,
        kick,
        t,
        MaterialTag::Carcass,
    );
    out.slab(
        BoxCategory::Carcass,
        "Top",
        &outline,
        spec.height - t,
        t,
        MaterialTag::Carcass,
    );

    if layout.inside {
        inside_panels(spec, layout, kick, dims, out);
    } else {
        outside_panels(spec, layout, kick, dims, out);
    }
}

fn inside_panels(
    spec: &CabinetSpec,
    layout: &CornerLayout,
    kick: f64,
    dims: &Dimensions,
    out: &mut Decomposition,
) {
    let t = dims.panel_thickness;
    let bt = dims.back_thickness;
    let kd = dims.toe_kick_depth;
    let h = spec.height;
    let l = layout.extent();
    let d = layout.depth;
    let carcass = BoxCategory::Carcass;

    // Left leg end, in the y = 0 plane.
    if kick > 0.0 {
        out.panel(
            carcass,
            "Left End Kick",
            [0.0, 0.0, 0.0],
            [d - kd, t, kick],
            MaterialTag::Carcass,
        );
    }
    out.panel(
        carcass,
        "Left End",
        [0.0, 0.0, kick],
        [d, t, h - kick],
        MaterialTag::Carcass,
    );

    // Back leg end, in the x = L plane.
    if kick > 0.0 {
        out.panel(
            carcass,
            "Right End Kick",
            [l - t, l - d + kd, 0.0],
            [t, d - kd, kick],
            MaterialTag::Carcass,
        );
    }
    out.panel(
        carcass,
        "Right End",
        [l - t, l - d, kick],
        [t, d, h - kick],
        MaterialTag::Carcass,
    );

    out.panel(
        carcass,
        "Back",
        [bt, l - bt, kick],
        [l - bt - t, bt, h - kick],
        MaterialTag::Back,
    );
    out.panel(
        carcass,
        "Side Back",
        [0.0, t, kick],
        [bt, l - bt - t, h - kick],
        MaterialTag::Back,
    );

    if kick > 0.0 {
        // Kick faces sit kick_depth behind each leg's front plane.
        let kx = d - kd;
        let ky = l - d + kd;
        out.panel(
            carcass,
            "Toe Kick Left",
            [kx - t, t, 0.0],
            [t, ky - t, kick],
            MaterialTag::ToeKick,
        );
        out.panel(
            carcass,
            "Toe Kick Corner",
            [kx - t, ky, 0.0],
            [t, t, kick],
            MaterialTag::ToeKick,
        );
        out.panel(
            carcass,
            "Toe Kick Back",
            [kx, ky, 0.0],
            [l - t - kx, t, kick],
            MaterialTag::ToeKick,
        );
    }
}

fn outside_panels(
    spec: &CabinetSpec,
    layout: &CornerLayout,
    kick: f64,
    dims: &Dimensions,
    out: &mut Decomposition,
) {
    let t = dims.panel_thickness;
    let bt = dims.back_thickness;
    let kd = dims.toe_kick_depth;
    let h = spec.height;
    let s = layout.size;
    let d = layout.depth;
    let r = layout.return_depth();
    let (_, y) = layout.footprint();
    let carcass = BoxCategory::Carcass;

    if kick > 0.0 {
        out.panel(
            carcass,
            "Left Side Kick",
            [0.0, kd, 0.0],
            [t, d - kd, kick],
            MaterialTag::Carcass,
        );
    }
    out.panel(
        carcass,
        "Left Side",
        [0.0, 0.0, kick],
        [t, d, h - kick],
        MaterialTag::Carcass,
    );

    if r > 0.0 {
        out.panel(
            carcass,
            "Back",
            [t, d - bt, kick],
            [s - d - t, bt, h - kick],
            MaterialTag::Back,
        );
        out.panel(
            carcass,
            "Return Side",
            [s - d, d, kick],
            [t, r, h - kick],
            MaterialTag::Carcass,
        );
        out.panel(
            carcass,
            "Return Back",
            [s - d + t, y - bt, kick],
            [d - t, bt, h - kick],
            MaterialTag::Back,
        );
    } else {
        out.panel(
            carcass,
            "Back",
            [t, y - bt, kick],
            [s - t, bt, h - kick],
            MaterialTag::Back,
        );
    }

    if kick > 0.0 {
        let kx = s - kd;
        out.panel(
            carcass,
            "Toe Kick Front",
            [t, kd, 0.0],
            [kx - t, t, kick],
            MaterialTag::ToeKick,
        );
        out.panel(
            carcass,
            "Toe Kick Return",
            [kx - t, kd + t, 0.0],
            [t, y - bt - kd - t, kick],
            MaterialTag::ToeKick,
        );
    }
}
