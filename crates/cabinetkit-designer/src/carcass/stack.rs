//! Stacked wall units (8ft and 9ft ceilings)

use cabinetkit_core::Dimensions;

use super::standard::{standard_unit, UnitShape};
use crate::decomposition::Decomposition;
use crate::spec::CabinetSpec;

/// One unit of a stack: bottom z, height, name prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct StackUnit {
    pub z0: f64,
    pub height: f64,
    pub prefix: String,
}

/// Lower unit first, then each upper unit above the stack reveal.
pub fn stack_units(spec: &CabinetSpec, dims: &Dimensions) -> Vec<StackUnit> {
    let mut units = vec![StackUnit {
        z0: 0.0,
        height: dims.stack_lower_height,
        prefix: "Lower ".to_string(),
    }];
    let mut z = dims.stack_lower_height;
    for i in 0..spec.kind.stacked_units() {
        z += dims.stack_reveal;
        units.push(StackUnit {
            z0: z,
            height: dims.stack_unit_height,
            prefix: format!("Upper {} ", i + 1),
        });
        z += dims.stack_unit_height;
    }
    units
}

pub fn decompose_stack(spec: &CabinetSpec, dims: &Dimensions, out: &mut Decomposition) {
    for unit in stack_units(spec, dims) {
        let shape = UnitShape {
            width: spec.width,
            depth: spec.depth,
            height: unit.height,
            z0: unit.z0,
            toe_kick: false,
            closed_top: true,
            display: false,
            framed: spec.is_framed(),
            prefix: unit.prefix,
        };
        standard_unit(&shape, dims, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{CabinetKind, FrameStyle};

    #[test]
    fn test_nine_foot_stack_offsets() {
        let dims = Dimensions::default();
        let spec = CabinetSpec::standard(CabinetKind::WallStack9ft, FrameStyle::Frameless, &dims);
        let units = stack_units(&spec, &dims);
        assert_eq!(units.len(), 3);
        assert!((units[1].z0 - 42.125).abs() < 1e-9);
        assert!((units[2].z0 - 54.25).abs() < 1e-9);
    }

    #[test]
    fn test_stack_panels_are_prefixed() {
        let dims = Dimensions::default();
        let spec = CabinetSpec::standard(CabinetKind::WallStack, FrameStyle::Frameless, &dims);
        let mut out = Decomposition::new(&dims);
        decompose_stack(&spec, &dims, &mut out);
        assert!(out.find("Lower Top").is_some());
        assert!(out.find("Upper 1 Bottom").is_some());
        assert!(out.find("Upper 2 Bottom").is_none());
        assert!(out.find("Upper 1 Shelf 1").is_none());
    }
}
