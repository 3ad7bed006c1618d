//! Carcass decomposition
//!
//! Turns a validated [`CabinetSpec`] into carcass panels in the cabinet's
//! local frame (origin at the front-left-bottom corner of the box, y toward
//! the wall). Dispatch is purely on the cabinet kind.

pub mod appliance;
pub mod corner;
pub mod stack;
pub mod standard;

use cabinetkit_core::Dimensions;
use tracing::debug;

use crate::decomposition::Decomposition;
use crate::error::{BuildError, BuildResult, SpecError};
use crate::spec::CabinetSpec;

pub use standard::{shelf_offsets, standard_unit, UnitShape};

pub fn decompose(spec: &CabinetSpec, dims: &Dimensions) -> BuildResult<Decomposition> {
    dims.validate().map_err(BuildError::InvalidDimensions)?;
    spec.validate()?;

    let mut out = Decomposition::new(dims);
    let kind = &spec.kind;

    if kind.is_corner() {
        let layout = spec
            .corner_layout()
            .ok_or_else(|| SpecError::MissingCornerSubtype(kind.to_string()))?;
        corner::decompose_corner(spec, &layout, dims, &mut out);
    } else if kind.is_wall_stack() {
        stack::decompose_stack(spec, dims, &mut out);
    } else if kind.is_appliance() {
        appliance::decompose_appliance(spec, dims, &mut out);
    } else {
        let unit = UnitShape {
            width: spec.width,
            depth: spec.depth,
            height: spec.height,
            z0: 0.0,
            toe_kick: kind.has_toe_kick(),
            closed_top: kind.is_closed_top(),
            display: kind.is_display(),
            framed: spec.is_framed(),
            prefix: String::new(),
        };
        standard_unit(&unit, dims, &mut out);
    }

    debug!(
        "{} carcass: {} boxes, {} skipped",
        kind,
        out.boxes.len(),
        out.skipped()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{CabinetKind, FrameStyle, MaterialTag};

    #[test]
    fn test_invalid_spec_refused() {
        let dims = Dimensions::default();
        let spec = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, -1.0, 24.0, 34.5);
        assert!(matches!(
            decompose(&spec, &dims),
            Err(BuildError::InvalidSpec(SpecError::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn test_top_panel_by_kind() {
        let dims = Dimensions::default();
        for (kind, has_top) in [
            (CabinetKind::Base, false),
            (CabinetKind::Island, false),
            (CabinetKind::Wall, true),
            (CabinetKind::Tall, true),
            (CabinetKind::Floating, true),
            (CabinetKind::DisplayBase, true),
        ] {
            let spec = CabinetSpec::standard(kind.clone(), FrameStyle::Frameless, &dims);
            let out = decompose(&spec, &dims).unwrap();
            assert_eq!(out.find("Top").is_some(), has_top, "{kind}");
        }
    }

    #[test]
    fn test_toe_kick_by_kind() {
        let dims = Dimensions::default();
        for kind in [CabinetKind::Wall, CabinetKind::Tall, CabinetKind::Floating] {
            let spec = CabinetSpec::standard(kind, FrameStyle::Frameless, &dims);
            let out = decompose(&spec, &dims).unwrap();
            assert!(out.boxes.iter().all(|b| b.material != MaterialTag::ToeKick));
        }
    }
}
