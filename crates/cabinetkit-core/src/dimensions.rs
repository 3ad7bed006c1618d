//! Dimension table
//!
//! [`Dimensions`] carries every standard measurement the geometry engines
//! read. Its default is the [`crate::constants`] table; projects override
//! individual values through configuration.

use crate::constants::*;
use crate::kinds::CabinetKind;
use serde::{Deserialize, Serialize};

/// Nominal size of a cabinet class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardSize {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl StandardSize {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }
}

/// Standard measurements used by decomposition, fronts, and countertops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub panel_thickness: f64,
    pub back_thickness: f64,
    pub shelf_setback: f64,
    pub toe_kick_height: f64,
    pub toe_kick_depth: f64,
    pub reveal: f64,
    pub frameless_reveal: f64,
    pub center_reveal: f64,
    pub overlay: f64,
    pub frame_stile_width: f64,
    pub frame_rail_width: f64,
    pub frame_thickness: f64,
    pub front_thickness: f64,
    pub ventilation_clearance: f64,
    pub utility_clearance: f64,
    pub cooktop_thickness: f64,
    pub burner_radius: f64,
    pub oven_opening_height: f64,
    pub oven_opening_bottom: f64,
    pub shelf_threshold: f64,
    pub display_shelf_spacing: f64,
    pub display_shelf_min_spacing: f64,
    pub display_shelf_max_spacing: f64,
    pub stack_lower_height: f64,
    pub stack_unit_height: f64,
    pub stack_reveal: f64,
    pub handle_length: f64,
    pub handle_width: f64,
    pub handle_projection: f64,
    pub handle_edge_inset: f64,
    pub pull_length: f64,
    pub pull_top_inset: f64,
    pub min_drawer_height: f64,
    pub min_door_width: f64,
    /// Extent below which a panel is skipped as degenerate
    pub epsilon: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            panel_thickness: PANEL_THICKNESS,
            back_thickness: BACK_THICKNESS,
            shelf_setback: SHELF_SETBACK,
            toe_kick_height: TOE_KICK_HEIGHT,
            toe_kick_depth: TOE_KICK_DEPTH,
            reveal: REVEAL,
            frameless_reveal: FRAMELESS_REVEAL,
            center_reveal: CENTER_REVEAL,
            overlay: OVERLAY,
            frame_stile_width: FRAME_STILE_WIDTH,
            frame_rail_width: FRAME_RAIL_WIDTH,
            frame_thickness: FRAME_THICKNESS,
            front_thickness: FRONT_THICKNESS,
            ventilation_clearance: VENTILATION_CLEARANCE,
            utility_clearance: UTILITY_CLEARANCE,
            cooktop_thickness: COOKTOP_THICKNESS,
            burner_radius: BURNER_RADIUS,
            oven_opening_height: OVEN_OPENING_HEIGHT,
            oven_opening_bottom: OVEN_OPENING_BOTTOM,
            shelf_threshold: SHELF_THRESHOLD,
            display_shelf_spacing: DISPLAY_SHELF_SPACING,
            display_shelf_min_spacing: DISPLAY_SHELF_MIN_SPACING,
            display_shelf_max_spacing: DISPLAY_SHELF_MAX_SPACING,
            stack_lower_height: STACK_LOWER_HEIGHT,
            stack_unit_height: STACK_UNIT_HEIGHT,
            stack_reveal: STACK_REVEAL,
            handle_length: HANDLE_LENGTH,
            handle_width: HANDLE_WIDTH,
            handle_projection: HANDLE_PROJECTION,
            handle_edge_inset: HANDLE_EDGE_INSET,
            pull_length: PULL_LENGTH,
            pull_top_inset: PULL_TOP_INSET,
            min_drawer_height: MIN_DRAWER_HEIGHT,
            min_door_width: MIN_DOOR_WIDTH,
            epsilon: DEGENERATE_EPSILON,
        }
    }
}

impl Dimensions {
    /// Nominal width/depth/height for a cabinet class.
    pub fn standard_size(&self, kind: &CabinetKind) -> StandardSize {
        match kind {
            CabinetKind::Base | CabinetKind::DisplayBase => StandardSize::new(24.0, 24.0, 34.5),
            CabinetKind::Island => StandardSize::new(36.0, 24.0, 34.5),
            CabinetKind::Wall | CabinetKind::DisplayWall => StandardSize::new(30.0, 12.0, 30.0),
            CabinetKind::WallStack => StandardSize::new(
                30.0,
                12.0,
                self.stack_lower_height + self.stack_unit_height + self.stack_reveal,
            ),
            CabinetKind::WallStack9ft => StandardSize::new(
                30.0,
                12.0,
                self.stack_lower_height + 2.0 * (self.stack_unit_height + self.stack_reveal),
            ),
            CabinetKind::Tall => StandardSize::new(24.0, 24.0, 84.0),
            CabinetKind::CornerBase => StandardSize::new(36.0, 24.0, 34.5),
            CabinetKind::CornerWall => StandardSize::new(24.0, 12.0, 30.0),
            CabinetKind::Floating => StandardSize::new(36.0, 16.0, 12.0),
            CabinetKind::SubzeroFridge => StandardSize::new(36.0, 24.0, 84.0),
            CabinetKind::MieleDishwasher => StandardSize::new(24.0, 24.0, 34.5),
            CabinetKind::Range => StandardSize::new(30.0, 25.0, 36.0),
            CabinetKind::WallOven => StandardSize::new(30.0, 24.0, 84.0),
            CabinetKind::Unrecognized(_) => StandardSize::new(24.0, 24.0, 34.5),
        }
    }

    /// Reveal at the outer edges of a front, by construction style.
    pub fn edge_reveal(&self, framed: bool) -> f64 {
        if framed {
            self.reveal
        } else {
            self.frameless_reveal
        }
    }

    /// Graduated drawer splits for `count` drawers, bottom first.
    ///
    /// Returns `None` when the count is outside the table (callers use equal
    /// splits instead).
    pub fn drawer_graduation(count: usize) -> Option<&'static [f64]> {
        if count == 0 {
            return None;
        }
        DRAWER_GRADUATIONS.get(count - 1).copied()
    }

    /// Check that every measurement is usable.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("panel_thickness", self.panel_thickness),
            ("back_thickness", self.back_thickness),
            ("toe_kick_height", self.toe_kick_height),
            ("toe_kick_depth", self.toe_kick_depth),
            ("front_thickness", self.front_thickness),
            ("frame_stile_width", self.frame_stile_width),
            ("frame_thickness", self.frame_thickness),
            ("shelf_threshold", self.shelf_threshold),
            ("stack_lower_height", self.stack_lower_height),
            ("stack_unit_height", self.stack_unit_height),
            ("display_shelf_spacing", self.display_shelf_spacing),
            ("min_drawer_height", self.min_drawer_height),
            ("min_door_width", self.min_door_width),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be > 0 (got {})", name, value));
            }
        }

        let non_negative = [
            ("reveal", self.reveal),
            ("frameless_reveal", self.frameless_reveal),
            ("center_reveal", self.center_reveal),
            ("ventilation_clearance", self.ventilation_clearance),
            ("stack_reveal", self.stack_reveal),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be >= 0 (got {})", name, value));
            }
        }

        if self.display_shelf_min_spacing > self.display_shelf_max_spacing {
            return Err("display shelf min spacing exceeds max spacing".to_string());
        }

        Ok(())
    }
}
