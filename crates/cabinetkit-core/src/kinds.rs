//! Cabinet classes and construction styles
//!
//! Parsing from UI strings never fails: anything unknown becomes an
//! `Unrecognized` variant so an invalid request is still representable and
//! is rejected later by validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabinet class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CabinetKind {
    Base,
    Wall,
    WallStack,
    WallStack9ft,
    Island,
    Tall,
    CornerBase,
    CornerWall,
    Floating,
    SubzeroFridge,
    MieleDishwasher,
    Range,
    WallOven,
    DisplayBase,
    DisplayWall,
    Unrecognized(String),
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl CabinetKind {
    /// Parse a UI identifier such as `"base"`, `"wall_stack_9ft"` or `"CornerBase"`.
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "base" => Self::Base,
            "wall" => Self::Wall,
            "wallstack" => Self::WallStack,
            "wallstack9ft" => Self::WallStack9ft,
            "island" => Self::Island,
            "tall" | "pantry" => Self::Tall,
            "cornerbase" => Self::CornerBase,
            "cornerwall" => Self::CornerWall,
            "floating" => Self::Floating,
            "subzerofridge" | "fridge" | "refrigerator" => Self::SubzeroFridge,
            "mieledishwasher" | "dishwasher" => Self::MieleDishwasher,
            "range" => Self::Range,
            "walloven" => Self::WallOven,
            "displaybase" => Self::DisplayBase,
            "displaywall" => Self::DisplayWall,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    /// Stable snake_case identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "base",
            Self::Wall => "wall",
            Self::WallStack => "wall_stack",
            Self::WallStack9ft => "wall_stack_9ft",
            Self::Island => "island",
            Self::Tall => "tall",
            Self::CornerBase => "corner_base",
            Self::CornerWall => "corner_wall",
            Self::Floating => "floating",
            Self::SubzeroFridge => "subzero_fridge",
            Self::MieleDishwasher => "miele_dishwasher",
            Self::Range => "range",
            Self::WallOven => "wall_oven",
            Self::DisplayBase => "display_base",
            Self::DisplayWall => "display_wall",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Floor-standing classes with a recessed toe kick
    pub fn has_toe_kick(&self) -> bool {
        matches!(
            self,
            Self::Base | Self::Island | Self::CornerBase | Self::MieleDishwasher | Self::DisplayBase
        )
    }

    /// Classes that receive a top panel
    pub fn is_closed_top(&self) -> bool {
        matches!(
            self,
            Self::Wall
                | Self::WallStack
                | Self::WallStack9ft
                | Self::Tall
                | Self::Floating
                | Self::CornerWall
                | Self::DisplayBase
                | Self::DisplayWall
        )
    }

    /// Classes hung on the wall at `height_from_floor`
    pub fn is_wall_mounted(&self) -> bool {
        matches!(
            self,
            Self::Wall
                | Self::WallStack
                | Self::WallStack9ft
                | Self::CornerWall
                | Self::Floating
                | Self::DisplayWall
        )
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Self::CornerBase | Self::CornerWall)
    }

    pub fn is_appliance(&self) -> bool {
        matches!(
            self,
            Self::SubzeroFridge | Self::MieleDishwasher | Self::Range | Self::WallOven
        )
    }

    pub fn is_display(&self) -> bool {
        matches!(self, Self::DisplayBase | Self::DisplayWall)
    }

    pub fn is_wall_stack(&self) -> bool {
        matches!(self, Self::WallStack | Self::WallStack9ft)
    }

    /// Number of 12" units stacked above the lower unit
    pub fn stacked_units(&self) -> usize {
        match self {
            Self::WallStack => 1,
            Self::WallStack9ft => 2,
            _ => 0,
        }
    }
}

impl From<String> for CabinetKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CabinetKind> for String {
    fn from(kind: CabinetKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for CabinetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Construction style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameStyle {
    Framed,
    Frameless,
    Unrecognized(String),
}

impl FrameStyle {
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "framed" | "faceframe" => Self::Framed,
            "frameless" | "european" => Self::Frameless,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Framed => "framed",
            Self::Frameless => "frameless",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_framed(&self) -> bool {
        matches!(self, Self::Framed)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for FrameStyle {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FrameStyle> for String {
    fn from(frame: FrameStyle) -> Self {
        frame.as_str().to_string()
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Corner cabinet geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerSubtype {
    InsideSmall,
    InsideLarge,
    OutsideSmall,
    OutsideLarge,
}

impl CornerSubtype {
    /// Parse `"inside_24"`, `"outside-36"`, `"InsideSmall"` and similar.
    ///
    /// Sizes other than 24 resolve to the large (36") variant.
    pub fn parse(value: &str) -> Option<Self> {
        let key = normalize(value);
        let inside = if key.starts_with("inside") {
            true
        } else if key.starts_with("outside") {
            false
        } else {
            return None;
        };
        let small = key.ends_with("small") || key.ends_with("24");
        Some(match (inside, small) {
            (true, true) => Self::InsideSmall,
            (true, false) => Self::InsideLarge,
            (false, true) => Self::OutsideSmall,
            (false, false) => Self::OutsideLarge,
        })
    }

    /// Pick the subtype for a requested size; only 24 and 36 exist.
    pub fn from_size(inside: bool, size: f64) -> Self {
        let small = (size - crate::constants::CORNER_SIZE_SMALL).abs() < 1e-6;
        match (inside, small) {
            (true, true) => Self::InsideSmall,
            (true, false) => Self::InsideLarge,
            (false, true) => Self::OutsideSmall,
            (false, false) => Self::OutsideLarge,
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, Self::InsideSmall | Self::InsideLarge)
    }

    pub fn corner_size(&self) -> f64 {
        match self {
            Self::InsideSmall | Self::OutsideSmall => crate::constants::CORNER_SIZE_SMALL,
            Self::InsideLarge | Self::OutsideLarge => crate::constants::CORNER_SIZE_LARGE,
        }
    }
}

impl fmt::Display for CornerSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.is_inside() { "inside" } else { "outside" };
        write!(f, "{}_{}", side, self.corner_size())
    }
}
