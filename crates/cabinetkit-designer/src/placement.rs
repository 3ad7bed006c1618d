//! Sequential placement within a run
//!
//! A new cabinet goes to the right of the rightmost cabinet that shares its
//! mounting class and height. Wall-mounted cabinets are offset in y so every
//! back sits on the run's back line, set by the first wall cabinet placed.

use cabinetkit_core::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spec::CabinetSpec;

/// Back-alignment state for the wall cabinets of one run.
///
/// The reference depth only ever grows. The back line is fixed by the first
/// cabinet observed and never moves, so a shallower cabinet is set back and
/// a deeper one is set forward (negative y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthRatchet {
    reference_depth: Option<f64>,
    #[serde(default)]
    back_line: Option<f64>,
}

impl DepthRatchet {
    pub fn reference(&self) -> Option<f64> {
        self.reference_depth
    }

    /// Y of the shared back face, once a cabinet has been placed.
    pub fn back_line(&self) -> Option<f64> {
        self.back_line
    }

    /// Y offset that puts a cabinet of `depth` on the back line.
    pub fn align(&mut self, depth: f64) -> f64 {
        self.observe(depth);
        let line = *self.back_line.get_or_insert(depth);
        line - depth
    }

    /// Record `depth` and return the (possibly raised) reference.
    pub fn observe(&mut self, depth: f64) -> f64 {
        let reference = match self.reference_depth {
            Some(current) if current >= depth => current,
            _ => depth,
        };
        self.reference_depth = Some(reference);
        reference
    }
}

fn mount_height(spec: &CabinetSpec) -> f64 {
    if spec.kind.is_wall_mounted() {
        spec.height_from_floor
    } else {
        0.0
    }
}

/// Position for `new` after `existing`, advancing `ratchet` for wall kinds.
pub fn next_position(
    existing: &[CabinetSpec],
    new: &CabinetSpec,
    ratchet: &mut DepthRatchet,
    height_tolerance: f64,
) -> Point3 {
    let z = mount_height(new);
    let wall = new.kind.is_wall_mounted();

    let x = existing
        .iter()
        .filter(|c| c.kind.is_wall_mounted() == wall)
        .filter(|c| (c.position.z - z).abs() <= height_tolerance)
        .map(|c| c.position.x + c.footprint().0)
        .fold(0.0_f64, f64::max);

    let y = if wall {
        ratchet.align(new.depth)
    } else {
        0.0
    };

    debug!("next {} at ({:.3}, {:.3}, {:.3})", new.kind, x, y, z);
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{CabinetKind, FrameStyle};

    fn wall(width: f64, depth: f64) -> CabinetSpec {
        CabinetSpec::new(CabinetKind::Wall, FrameStyle::Frameless, width, depth, 30.0)
            .with_height_from_floor(54.0)
    }

    fn place_all(specs: Vec<CabinetSpec>) -> Vec<CabinetSpec> {
        let mut ratchet = DepthRatchet::default();
        let mut placed: Vec<CabinetSpec> = Vec::new();
        for spec in specs {
            let position = next_position(&placed, &spec, &mut ratchet, 1.0);
            placed.push(spec.with_position(position));
        }
        placed
    }

    #[test]
    fn test_ratchet_is_monotonic() {
        let mut ratchet = DepthRatchet::default();
        assert_eq!(ratchet.observe(12.0), 12.0);
        assert_eq!(ratchet.observe(15.0), 15.0);
        assert_eq!(ratchet.observe(12.0), 15.0);
        assert_eq!(ratchet.reference(), Some(15.0));
    }

    fn backs(placed: &[CabinetSpec]) -> Vec<f64> {
        placed.iter().map(|c| c.position.y + c.depth).collect()
    }

    #[test]
    fn test_wall_backs_align_deep_first() {
        let placed = place_all(vec![wall(30.0, 15.0), wall(30.0, 12.0), wall(24.0, 13.0)]);
        assert_eq!(placed[0].position, Point3::new(0.0, 0.0, 54.0));
        // Shallower cabinets are set back by the depth difference.
        assert_eq!(placed[1].position, Point3::new(30.0, 3.0, 54.0));
        assert_eq!(placed[2].position, Point3::new(60.0, 2.0, 54.0));
        assert_eq!(backs(&placed), vec![15.0, 15.0, 15.0]);
    }

    #[test]
    fn test_wall_backs_align_shallow_first() {
        let placed = place_all(vec![wall(30.0, 12.0), wall(30.0, 15.0), wall(24.0, 12.0)]);
        assert_eq!(placed[0].position, Point3::new(0.0, 0.0, 54.0));
        // The deeper cabinet comes forward instead of moving the wall.
        assert_eq!(placed[1].position, Point3::new(30.0, -3.0, 54.0));
        assert_eq!(placed[2].position, Point3::new(60.0, 0.0, 54.0));
        assert_eq!(backs(&placed), vec![12.0, 12.0, 12.0]);
    }

    #[test]
    fn test_back_line_is_fixed() {
        let mut ratchet = DepthRatchet::default();
        assert_eq!(ratchet.back_line(), None);
        assert_eq!(ratchet.align(12.0), 0.0);
        assert_eq!(ratchet.align(18.0), -6.0);
        assert_eq!(ratchet.back_line(), Some(12.0));
        assert_eq!(ratchet.reference(), Some(18.0));
    }

    #[test]
    fn test_mounting_classes_are_separate() {
        let base = CabinetSpec::new(CabinetKind::Base, FrameStyle::Frameless, 24.0, 24.0, 34.5);
        let placed = place_all(vec![base.clone(), wall(30.0, 12.0), base]);
        assert_eq!(placed[1].position.x, 0.0);
        assert_eq!(placed[2].position.x, 24.0);
        assert_eq!(placed[2].position.y, 0.0);
    }
}
