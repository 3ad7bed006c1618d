//! Door and drawer front layout
//!
//! Fronts are stacked bottom-to-top from the top of the toe kick, sitting
//! in front of the carcass (in front of the face frame when framed).
//! Handles and pulls are emitted as small hardware markers on the front face.

use cabinetkit_core::{BoxCategory, CabinetKind, Dimensions, MaterialTag};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::carcass::stack::stack_units;
use crate::decomposition::{Decomposition, Diagnostic};
use crate::drawers::section_drawer_heights;
use crate::front_config::{FrontTemplate, ParsedFronts, Section, SectionRole, Sizing};
use crate::spec::{CabinetSpec, CornerLayout};

const GRADUATED_DOOR_SPLIT: [f64; 3] = [0.2, 0.3, 0.5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleSide {
    Left,
    Right,
    TopCenter,
}

/// Handle placement for door `index` of `count`.
///
/// A lone door opens from the right; pairs meet in the middle.
pub fn handle_side(index: usize, count: usize, template: FrontTemplate) -> HandleSide {
    if template == FrontTemplate::Dishwasher {
        HandleSide::TopCenter
    } else if count == 1 || index % 2 == 0 {
        HandleSide::Right
    } else {
        HandleSide::Left
    }
}

/// Door widths across `available` with edge and center reveals removed.
pub fn door_widths(
    available: f64,
    count: usize,
    graduated: bool,
    edge_reveal: f64,
    center_reveal: f64,
) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let net = available - 2.0 * edge_reveal - (count as f64 - 1.0) * center_reveal;
    if graduated && count == GRADUATED_DOOR_SPLIT.len() {
        GRADUATED_DOOR_SPLIT.iter().map(|f| f * net).collect()
    } else {
        vec![net / count as f64; count]
    }
}

/// Rectangle on the front plane that fronts are laid into.
#[derive(Debug, Clone)]
struct FrontZone {
    width: f64,
    z0: f64,
    height: f64,
    /// Outer face of the fronts (most negative y)
    face_y: f64,
    edge: f64,
    glass: bool,
    prefix: String,
}

#[derive(Debug, Default)]
struct Counters {
    doors: usize,
    drawers: usize,
}

pub fn layout_fronts(spec: &CabinetSpec, parsed: &ParsedFronts, dims: &Dimensions) -> Decomposition {
    let mut out = Decomposition::new(dims);

    if let Some(layout) = spec.corner_layout() {
        corner_fronts(spec, &layout, dims, &mut out);
        return out;
    }
    if spec.kind.is_appliance() && spec.kind != CabinetKind::MieleDishwasher {
        return out;
    }

    let framed = spec.is_framed();
    let face_y = if framed {
        -(dims.frame_thickness + dims.front_thickness)
    } else {
        -dims.front_thickness
    };
    let zone = FrontZone {
        width: spec.width,
        z0: spec.kick_height(dims),
        height: spec.interior_height(dims),
        face_y,
        edge: dims.edge_reveal(framed),
        glass: spec.kind.is_display(),
        prefix: String::new(),
    };

    if spec.kind.is_wall_stack() {
        let door_count = parsed.first_door_count().unwrap_or(2);
        for unit in stack_units(spec, dims) {
            let upper = unit.prefix.starts_with("Upper");
            let unit_zone = FrontZone {
                z0: unit.z0,
                height: unit.height,
                prefix: unit.prefix,
                ..zone.clone()
            };
            if upper {
                let row = [Section {
                    role: SectionRole::Door,
                    height_ratio: 1.0,
                    item_count: door_count,
                    sizing: Sizing::Equal,
                    custom_heights: None,
                }];
                layout_zone(&unit_zone, &row, FrontTemplate::Standard, dims, &mut out);
            } else {
                layout_zone(&unit_zone, &parsed.sections, parsed.template, dims, &mut out);
            }
        }
    } else {
        layout_zone(&zone, &parsed.sections, parsed.template, dims, &mut out);
    }

    debug!("{} fronts: {} boxes", spec.kind, out.boxes.len());
    out
}

fn layout_zone(
    zone: &FrontZone,
    sections: &[Section],
    template: FrontTemplate,
    dims: &Dimensions,
    out: &mut Decomposition,
) {
    let mut counters = Counters::default();
    let mut z = zone.z0;
    for section in sections {
        let section_height = section.height_ratio * zone.height;
        let capped = capped_section(zone, section, section_height, dims, out);
        let section = capped.as_ref().unwrap_or(section);
        match section.role {
            SectionRole::Door => {
                doors(zone, section, template, z, section_height, dims, &mut counters, out)
            }
            SectionRole::Drawer => {
                drawers(zone, section, z, section_height, dims, &mut counters, out)
            }
        }
        z += section_height;
    }
}

/// Most fronts of one role that fit `extent`, never fewer than one.
fn front_capacity(extent: f64, min: f64) -> usize {
    if !(extent.is_finite() && min > 0.0) {
        return 1;
    }
    ((extent / min).floor() as usize).max(1)
}

/// Copy of `section` with its count reduced to what fits, or `None` when it
/// already fits. Custom drawer heights are sized by the caller and kept.
fn capped_section(
    zone: &FrontZone,
    section: &Section,
    section_height: f64,
    dims: &Dimensions,
    out: &mut Decomposition,
) -> Option<Section> {
    if section.sizing == Sizing::Custom && section.custom_heights.is_some() {
        return None;
    }
    let (front, allowed) = match section.role {
        SectionRole::Door => ("doors", front_capacity(zone.width, dims.min_door_width)),
        SectionRole::Drawer => (
            "drawers",
            front_capacity(section_height, dims.min_drawer_height),
        ),
    };
    if section.item_count <= allowed {
        return None;
    }

    warn!(
        "{} {} requested, only {} fit; capping",
        section.item_count, front, allowed
    );
    out.note(Diagnostic::FrontCountCapped {
        front: front.to_string(),
        requested: section.item_count,
        allowed,
    });
    Some(Section {
        item_count: allowed,
        ..section.clone()
    })
}

#[allow(clippy::too_many_arguments)]
fn doors(
    zone: &FrontZone,
    section: &Section,
    template: FrontTemplate,
    z: f64,
    section_height: f64,
    dims: &Dimensions,
    counters: &mut Counters,
    out: &mut Decomposition,
) {
    let graduated =
        template == FrontTemplate::GraduatedDoors || section.sizing == Sizing::Graduated;
    let widths = door_widths(
        zone.width,
        section.item_count,
        graduated,
        zone.edge,
        dims.center_reveal,
    );
    let material = if zone.glass {
        MaterialTag::Glass
    } else {
        MaterialTag::Door
    };
    let height = section_height - 2.0 * zone.edge;
    let bottom = z + zone.edge;

    let mut x = zone.edge;
    for (i, w) in widths.iter().enumerate() {
        counters.doors += 1;
        let n = counters.doors;
        out.panel(
            BoxCategory::Fronts,
            format!("{}Door {}", zone.prefix, n),
            [x, zone.face_y, bottom],
            [*w, dims.front_thickness, height],
            material,
        );
        let side = handle_side(i, widths.len(), template);
        let marker = handle_marker(side, x, *w, bottom, height, dims);
        out.panel(
            BoxCategory::Hardware,
            format!("{}Handle {}", zone.prefix, n),
            [marker.0, zone.face_y - dims.handle_projection, marker.1],
            [marker.2, dims.handle_projection, marker.3],
            MaterialTag::Hardware,
        );
        x += w + dims.center_reveal;
    }
}

fn drawers(
    zone: &FrontZone,
    section: &Section,
    z: f64,
    section_height: f64,
    dims: &Dimensions,
    counters: &mut Counters,
    out: &mut Decomposition,
) {
    let width = zone.width - 2.0 * zone.edge;
    let mut slot_bottom = z;
    for slot in section_drawer_heights(section, section_height) {
        counters.drawers += 1;
        let n = counters.drawers;
        let bottom = slot_bottom + zone.edge;
        let height = slot - 2.0 * zone.edge;
        out.panel(
            BoxCategory::Fronts,
            format!("{}Drawer {}", zone.prefix, n),
            [zone.edge, zone.face_y, bottom],
            [width, dims.front_thickness, height],
            MaterialTag::Drawer,
        );
        let marker = handle_marker(HandleSide::TopCenter, zone.edge, width, bottom, height, dims);
        out.panel(
            BoxCategory::Hardware,
            format!("{}Pull {}", zone.prefix, n),
            [marker.0, zone.face_y - dims.handle_projection, marker.1],
            [marker.2, dims.handle_projection, marker.3],
            MaterialTag::Hardware,
        );
        slot_bottom += slot;
    }
}

/// Marker rectangle on a front as `(x, z, width, height)`.
fn handle_marker(
    side: HandleSide,
    x: f64,
    width: f64,
    z: f64,
    height: f64,
    dims: &Dimensions,
) -> (f64, f64, f64, f64) {
    let hw = dims.handle_width;
    match side {
        HandleSide::TopCenter => {
            let len = dims.pull_length.min(width * 0.8);
            let inset = dims.pull_top_inset.min(height / 2.0);
            (x + (width - len) / 2.0, z + height - inset - hw / 2.0, len, hw)
        }
        HandleSide::Left | HandleSide::Right => {
            let len = dims.handle_length.min(height * 0.5);
            let inset = dims.handle_edge_inset.min(width / 2.0);
            let cx = if side == HandleSide::Right {
                x + width - inset
            } else {
                x + inset
            };
            (cx - hw / 2.0, z + (height - len) / 2.0, hw, len)
        }
    }
}

fn corner_fronts(
    spec: &CabinetSpec,
    layout: &CornerLayout,
    dims: &Dimensions,
    out: &mut Decomposition,
) {
    let r = dims.edge_reveal(spec.is_framed());
    let tf = dims.front_thickness;
    let proj = dims.handle_projection;
    let hw = dims.handle_width;
    let inset = dims.handle_edge_inset;
    let bottom = spec.kick_height(dims) + r;
    let height = spec.height - bottom - r;
    let len = dims.handle_length.min(height * 0.5);
    let handle_z = bottom + (height - len) / 2.0;
    let material = if spec.kind.is_display() {
        MaterialTag::Glass
    } else {
        MaterialTag::Door
    };

    if layout.inside {
        let d = layout.depth;
        let l = layout.extent();
        // Left-leg door stops short of the back-leg door's face.
        let stop = l - d - tf - r;
        out.panel(
            BoxCategory::Fronts,
            "Door 1",
            [d, r, bottom],
            [tf, stop - r, height],
            material,
        );
        out.panel(
            BoxCategory::Hardware,
            "Handle 1",
            [d + tf, stop - inset - hw / 2.0, handle_z],
            [proj, hw, len],
            MaterialTag::Hardware,
        );
        out.panel(
            BoxCategory::Fronts,
            "Door 2",
            [d, l - d - tf, bottom],
            [l - r - d, tf, height],
            material,
        );
        out.panel(
            BoxCategory::Hardware,
            "Handle 2",
            [d + inset - hw / 2.0, l - d - tf - proj, handle_z],
            [hw, proj, len],
            MaterialTag::Hardware,
        );
    } else {
        let s = layout.size;
        let (_, y) = layout.footprint();
        out.panel(
            BoxCategory::Fronts,
            "Decorative Panel",
            [0.0, -tf, bottom],
            [s, tf, height],
            MaterialTag::Panel,
        );
        out.panel(
            BoxCategory::Fronts,
            "Door 1",
            [s, r, bottom],
            [tf, y - 2.0 * r, height],
            material,
        );
        out.panel(
            BoxCategory::Hardware,
            "Handle 1",
            [s + tf, r + inset - hw / 2.0, handle_z],
            [proj, hw, len],
            MaterialTag::Hardware,
        );
    }
}
