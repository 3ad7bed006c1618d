//! Cabinet specification
//!
//! The immutable description of one cabinet. Everything the geometry
//! engines produce is derived from these fields plus a [`Dimensions`] table.

use cabinetkit_core::{CabinetKind, CornerSubtype, Dimensions, FrameStyle, Point3};
use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::front_config::{FrontConfig, FrontTemplate, ParsedFronts, SectionContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetSpec {
    pub kind: CabinetKind,
    pub frame: FrameStyle,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Required for corner kinds, absent otherwise
    #[serde(default)]
    pub corner_subtype: Option<CornerSubtype>,
    pub front_config: FrontConfig,
    /// Drawer heights supplied alongside the config string, bottom first
    #[serde(default)]
    pub custom_drawer_heights: Option<Vec<f64>>,
    #[serde(default)]
    pub has_countertop: bool,
    #[serde(default)]
    pub has_backsplash: bool,
    #[serde(default)]
    pub has_seating_side: bool,
    /// Bottom of a wall-mounted cabinet above the floor
    #[serde(default)]
    pub height_from_floor: f64,
    /// World placement of the cabinet's min corner
    #[serde(default = "origin")]
    pub position: Point3,
}

fn origin() -> Point3 {
    Point3::origin()
}

/// Plan-view layout of a corner cabinet.
///
/// Inside corners are an `extent × extent` square minus the front bite;
/// outside corners are a `size` wide front with a return wing of
/// `return_depth` behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerLayout {
    pub inside: bool,
    /// Corner size (24 or 36)
    pub size: f64,
    /// Cabinet depth of each leg
    pub depth: f64,
}

impl CornerLayout {
    /// Overall leg length of an inside corner (`depth + size`).
    pub fn extent(&self) -> f64 {
        self.depth + self.size
    }

    /// Depth of the outside-corner return wing beyond the main body.
    pub fn return_depth(&self) -> f64 {
        (self.size - self.depth).max(0.0)
    }

    /// Plan-view bounding box as `(x, y)`.
    pub fn footprint(&self) -> (f64, f64) {
        if self.inside {
            (self.extent(), self.extent())
        } else {
            (self.size, self.depth + self.return_depth())
        }
    }
}

impl CabinetSpec {
    /// Spec with every optional field at its default.
    pub fn new(kind: CabinetKind, frame: FrameStyle, width: f64, depth: f64, height: f64) -> Self {
        Self {
            kind,
            frame,
            width,
            depth,
            height,
            corner_subtype: None,
            front_config: FrontConfig::default(),
            custom_drawer_heights: None,
            has_countertop: false,
            has_backsplash: false,
            has_seating_side: false,
            height_from_floor: 0.0,
            position: Point3::origin(),
        }
    }

    /// Spec at the nominal size for `kind`.
    pub fn standard(kind: CabinetKind, frame: FrameStyle, dims: &Dimensions) -> Self {
        let size = dims.standard_size(&kind);
        let mut spec = Self::new(kind, frame, size.width, size.depth, size.height);
        if spec.kind.is_wall_mounted() {
            spec.height_from_floor = cabinetkit_core::constants::WALL_MOUNT_HEIGHT;
        }
        spec
    }

    pub fn with_corner(mut self, subtype: CornerSubtype) -> Self {
        self.corner_subtype = Some(subtype);
        self
    }

    pub fn with_fronts(mut self, config: FrontConfig) -> Self {
        self.front_config = config;
        self
    }

    pub fn with_custom_drawer_heights(mut self, heights: Vec<f64>) -> Self {
        self.custom_drawer_heights = Some(heights);
        self
    }

    pub fn with_countertop(mut self, countertop: bool, backsplash: bool) -> Self {
        self.has_countertop = countertop;
        self.has_backsplash = backsplash;
        self
    }

    pub fn with_seating_side(mut self, seating: bool) -> Self {
        self.has_seating_side = seating;
        self
    }

    pub fn with_height_from_floor(mut self, height: f64) -> Self {
        self.height_from_floor = height;
        self
    }

    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    pub fn is_framed(&self) -> bool {
        self.frame.is_framed()
    }

    /// Height of the kick zone under the box, zero for kinds without one.
    pub fn kick_height(&self, dims: &Dimensions) -> f64 {
        if self.kind.has_toe_kick() {
            dims.toe_kick_height
        } else {
            0.0
        }
    }

    /// Usable height above the toe kick (or below the fridge vent).
    pub fn interior_height(&self, dims: &Dimensions) -> f64 {
        match self.kind {
            CabinetKind::SubzeroFridge => self.height - dims.ventilation_clearance,
            _ => self.height - self.kick_height(dims),
        }
    }

    pub fn interior_width(&self, dims: &Dimensions) -> f64 {
        if self.is_framed() {
            self.width - 2.0 * dims.frame_stile_width
        } else {
            self.width
        }
    }

    pub fn interior_depth(&self, dims: &Dimensions) -> f64 {
        if self.is_framed() {
            self.depth - 2.0 * dims.frame_stile_width
        } else {
            self.depth
        }
    }

    /// Corner plan geometry, `None` for non-corner kinds or a missing subtype.
    pub fn corner_layout(&self) -> Option<CornerLayout> {
        if !self.kind.is_corner() {
            return None;
        }
        self.corner_subtype.map(|subtype| CornerLayout {
            inside: subtype.is_inside(),
            size: subtype.corner_size(),
            depth: self.depth,
        })
    }

    /// Plan-view extent as `(x, y)`; corner kinds use their L footprint.
    pub fn footprint(&self) -> (f64, f64) {
        match self.corner_layout() {
            Some(layout) => layout.footprint(),
            None => (self.width, self.depth),
        }
    }

    /// Parse the front configuration against this cabinet's interior.
    ///
    /// The dishwasher always gets its single-panel template regardless of
    /// the configured string.
    pub fn parsed_fronts(&self, dims: &Dimensions) -> ParsedFronts {
        if self.kind == CabinetKind::MieleDishwasher {
            return ParsedFronts::dishwasher();
        }
        let interior = if self.kind.is_wall_stack() {
            dims.stack_lower_height
        } else {
            self.interior_height(dims)
        };
        let ctx = SectionContext {
            interior_height: Some(interior),
            custom_drawer_heights: self.custom_drawer_heights.as_deref(),
        };
        let parsed = self.front_config.sections(&ctx);
        if parsed.template == FrontTemplate::Dishwasher {
            tracing::debug!("dishwasher template on a {} cabinet", self.kind);
        }
        parsed
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.kind.is_recognized() {
            return Err(SpecError::UnrecognizedKind(self.kind.as_str().to_string()));
        }
        if !self.frame.is_recognized() {
            return Err(SpecError::UnrecognizedFrame(self.frame.as_str().to_string()));
        }
        for (name, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpecError::InvalidDimension { name, value });
            }
        }
        if !self.height_from_floor.is_finite() || self.height_from_floor < 0.0 {
            return Err(SpecError::InvalidDimension {
                name: "height_from_floor",
                value: self.height_from_floor,
            });
        }
        match (self.kind.is_corner(), self.corner_subtype) {
            (true, None) => Err(SpecError::MissingCornerSubtype(self.kind.to_string())),
            (false, Some(_)) => Err(SpecError::UnexpectedCornerSubtype(self.kind.to_string())),
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions::default()
    }

    #[test]
    fn test_interior_height_by_kind() {
        let base = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, 24.0, 24.0, 34.5);
        assert_eq!(base.interior_height(&dims()), 30.5);

        let wall = CabinetSpec::new(CabinetKind::Wall, FrameStyle::Frameless, 30.0, 12.0, 36.0);
        assert_eq!(wall.interior_height(&dims()), 36.0);

        let fridge = CabinetSpec::new(
            CabinetKind::SubzeroFridge,
            FrameStyle::Frameless,
            36.0,
            24.0,
            84.0,
        );
        assert_eq!(fridge.interior_height(&dims()), 83.0);
    }

    #[test]
    fn test_interior_width_framed() {
        let spec = CabinetSpec::new(CabinetKind::Base, FrameStyle::Framed, 24.0, 24.0, 34.5);
        assert_eq!(spec.interior_width(&dims()), 21.0);
        let spec = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, 24.0, 24.0, 34.5);
        assert_eq!(spec.interior_width(&dims()), 24.0);
    }

    #[test]
    fn test_validation() {
        let ok = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, 24.0, 24.0, 34.5);
        assert!(ok.is_valid());

        let zero = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, 0.0, 24.0, 34.5);
        assert_eq!(
            zero.validate(),
            Err(SpecError::InvalidDimension {
                name: "width",
                value: 0.0
            })
        );

        let unknown = CabinetSpec::new(
            CabinetKind::parse("bookshelf"),
            FrameStyle::Frameless,
            24.0,
            24.0,
            34.5,
        );
        assert!(matches!(
            unknown.validate(),
            Err(SpecError::UnrecognizedKind(_))
        ));

        let corner = CabinetSpec::new(
            CabinetKind::CornerBase,
            FrameStyle::Frameless,
            36.0,
            24.0,
            34.5,
        );
        assert!(matches!(
            corner.validate(),
            Err(SpecError::MissingCornerSubtype(_))
        ));
        assert!(corner.with_corner(CornerSubtype::InsideSmall).is_valid());

        let stray = ok.with_corner(CornerSubtype::OutsideLarge);
        assert!(matches!(
            stray.validate(),
            Err(SpecError::UnexpectedCornerSubtype(_))
        ));
    }

    #[test]
    fn test_corner_footprint() {
        let inside = CabinetSpec::new(
            CabinetKind::CornerBase,
            FrameStyle::Frameless,
            36.0,
            24.0,
            34.5,
        )
        .with_corner(CornerSubtype::InsideSmall);
        assert_eq!(inside.footprint(), (48.0, 48.0));

        let outside = CabinetSpec::new(
            CabinetKind::CornerWall,
            FrameStyle::Frameless,
            24.0,
            12.0,
            30.0,
        )
        .with_corner(CornerSubtype::OutsideSmall);
        let layout = outside.corner_layout().unwrap();
        assert_eq!(layout.return_depth(), 12.0);
        assert_eq!(outside.footprint(), (24.0, 24.0));
    }

    #[test]
    fn test_standard_wall_is_raised() {
        let spec = CabinetSpec::standard(CabinetKind::Wall, FrameStyle::Framed, &dims());
        assert_eq!(spec.height_from_floor, 54.0);
        assert_eq!(spec.width, 30.0);
    }
}
