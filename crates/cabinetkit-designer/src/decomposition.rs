//! Box collection with degenerate-geometry filtering
//!
//! Every engine pushes its boxes through [`Decomposition`], which sanitizes
//! each one and turns rejects into [`Diagnostic`] entries instead of errors.

use std::fmt;

use cabinetkit_core::constants::DEGENERATE_EPSILON;
use cabinetkit_core::{
    Axis, BoxCategory, Dimensions, MaterialTag, OrientedBox, Point2, Point3, Vector3,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Non-fatal findings attached to a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A box or face was skipped because it had no usable extent
    DegenerateGeometry { group: String, reason: String },
    /// The front configuration was not understood
    ConfigFallback { raw: String },
    /// More doors or drawers were asked for than fit the section
    FrontCountCapped {
        front: String,
        requested: usize,
        allowed: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { group, reason } => {
                write!(f, "skipped degenerate {}: {}", group, reason)
            }
            Self::ConfigFallback { raw } => {
                write!(f, "unrecognized door/drawer config '{}', used two doors", raw)
            }
            Self::FrontCountCapped {
                front,
                requested,
                allowed,
            } => write!(f, "{} {} requested, {} fit", requested, front, allowed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub boxes: Vec<OrientedBox>,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip, default = "default_epsilon")]
    epsilon: f64,
}

fn default_epsilon() -> f64 {
    DEGENERATE_EPSILON
}

impl Default for Decomposition {
    fn default() -> Self {
        Self {
            boxes: Vec::new(),
            diagnostics: Vec::new(),
            epsilon: default_epsilon(),
        }
    }
}

impl Decomposition {
    pub fn new(dims: &Dimensions) -> Self {
        Self {
            boxes: Vec::new(),
            diagnostics: Vec::new(),
            epsilon: dims.epsilon,
        }
    }

    /// Add a box, or record why it was skipped.
    pub fn push(&mut self, mut b: OrientedBox) {
        match b.sanitize(self.epsilon) {
            Ok(()) => self.boxes.push(b),
            Err(e) => {
                warn!("{}", e);
                self.diagnostics.push(Diagnostic::DegenerateGeometry {
                    group: b.group(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Axis-aligned panel from min corner and size.
    pub fn panel(
        &mut self,
        category: BoxCategory,
        name: impl Into<String>,
        min: [f64; 3],
        size: [f64; 3],
        material: MaterialTag,
    ) {
        self.push(OrientedBox::cuboid(
            category,
            name,
            Point3::new(min[0], min[1], min[2]),
            Vector3::new(size[0], size[1], size[2]),
            material,
        ));
    }

    /// Horizontal polygon slab whose face lies at height `z`.
    pub fn slab(
        &mut self,
        category: BoxCategory,
        name: impl Into<String>,
        points: &[(f64, f64)],
        z: f64,
        thickness: f64,
        material: MaterialTag,
    ) {
        let points = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        self.push(OrientedBox::extruded(
            category,
            name,
            Point3::new(0.0, 0.0, z),
            Axis::Z,
            points,
            thickness,
            material,
        ));
    }

    pub fn note(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, other: Decomposition) {
        self.boxes.extend(other.boxes);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Move every box by `offset`.
    pub fn translate(&mut self, offset: &Vector3) {
        for b in &mut self.boxes {
            b.origin += *offset;
        }
    }

    pub fn find(&self, name: &str) -> Option<&OrientedBox> {
        self.boxes.iter().find(|b| b.name == name)
    }

    pub fn count(&self, category: BoxCategory) -> usize {
        self.boxes.iter().filter(|b| b.category == category).count()
    }

    pub fn skipped(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DegenerateGeometry { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_panel_is_skipped() {
        let mut out = Decomposition::new(&Dimensions::default());
        out.panel(
            BoxCategory::Carcass,
            "Side",
            [0.0, 0.0, 0.0],
            [0.75, 24.0, 30.0],
            MaterialTag::Carcass,
        );
        out.panel(
            BoxCategory::Carcass,
            "Sliver",
            [0.0, 0.0, 0.0],
            [0.0, 24.0, 30.0],
            MaterialTag::Carcass,
        );
        assert_eq!(out.boxes.len(), 1);
        assert_eq!(out.skipped(), 1);
        assert!(out.diagnostics[0].to_string().contains("Carcass/Sliver"));
    }

    fn sliver(out: &mut Decomposition) {
        out.panel(
            BoxCategory::Fronts,
            "Sliver",
            [0.0, 0.0, 0.0],
            [1e-6, 24.0, 30.0],
            MaterialTag::Door,
        );
    }

    #[test]
    fn test_default_uses_standard_epsilon() {
        let mut out = Decomposition::default();
        sliver(&mut out);
        assert!(out.is_empty());
        assert_eq!(out.skipped(), 1);

        let mut restored: Decomposition =
            serde_json::from_str(r#"{"boxes": [], "diagnostics": []}"#).unwrap();
        sliver(&mut restored);
        assert!(restored.is_empty());
        assert_eq!(restored.skipped(), 1);
        assert_eq!(Decomposition::default(), Decomposition::new(&Dimensions::default()));
    }

    #[test]
    fn test_slab_collapses_repeated_vertices() {
        let mut out = Decomposition::new(&Dimensions::default());
        out.slab(
            BoxCategory::Countertops,
            "Top",
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0), (0.0, 0.0)],
            0.0,
            1.5,
            MaterialTag::Countertop,
        );
        assert_eq!(out.boxes[0].face_vertex_count(), 4);

        out.slab(
            BoxCategory::Countertops,
            "Line",
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0)],
            0.0,
            1.5,
            MaterialTag::Countertop,
        );
        assert_eq!(out.boxes.len(), 1);
        assert_eq!(out.skipped(), 1);
    }

    #[test]
    fn test_translate() {
        let mut out = Decomposition::new(&Dimensions::default());
        out.panel(
            BoxCategory::Carcass,
            "Bottom",
            [0.75, 0.0, 4.0],
            [22.5, 23.625, 0.75],
            MaterialTag::Carcass,
        );
        out.translate(&Vector3::new(10.0, 0.0, 0.0));
        let (min, _) = out.find("Bottom").unwrap().bounds();
        assert!((min.x - 10.75).abs() < 1e-9);
    }
}
