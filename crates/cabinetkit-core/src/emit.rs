//! Renderer and material seams
//!
//! The host application implements [`BoxSink`] (create a face, push/pull
//! it) and [`MaterialProvider`] (look up a painted material). The engines
//! never call the host directly; [`emit_all`] walks a finished box list,
//! places it, and tallies per-box failures.

use crate::error::EmissionError;
use crate::geometry::{MaterialTag, OrientedBox, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Host-side material reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialHandle {
    pub name: String,
    /// sRGB color
    pub color: [u8; 3],
}

/// Resolves material tags to host materials
pub trait MaterialProvider {
    fn material(&self, tag: MaterialTag) -> MaterialHandle;
}

/// Receives placed boxes
pub trait BoxSink {
    fn emit(&mut self, placed: &OrientedBox, material: &MaterialHandle)
        -> Result<(), EmissionError>;
}

/// Default palette with room-scoped material names (`"Kitchen - door"`).
#[derive(Debug, Clone)]
pub struct RoomMaterials {
    room: String,
}

impl RoomMaterials {
    pub fn new(room: impl Into<String>) -> Self {
        Self { room: room.into() }
    }

    fn color(tag: MaterialTag) -> [u8; 3] {
        match tag {
            MaterialTag::Carcass | MaterialTag::Shelf => [222, 206, 178],
            MaterialTag::Back => [205, 190, 160],
            MaterialTag::ToeKick => [60, 60, 60],
            MaterialTag::FaceFrame | MaterialTag::Door | MaterialTag::Drawer => [245, 245, 240],
            MaterialTag::Panel | MaterialTag::Filler => [235, 235, 228],
            MaterialTag::Glass => [190, 220, 230],
            MaterialTag::Hardware => [150, 150, 155],
            MaterialTag::Countertop | MaterialTag::Backsplash => [210, 210, 205],
            MaterialTag::Appliance => [192, 192, 192],
            MaterialTag::Cooktop => [30, 30, 30],
            MaterialTag::Burner => [90, 20, 20],
            MaterialTag::Vent => [110, 110, 110],
        }
    }
}

impl MaterialProvider for RoomMaterials {
    fn material(&self, tag: MaterialTag) -> MaterialHandle {
        let name = if self.room.is_empty() {
            tag.key().to_string()
        } else {
            format!("{} - {}", self.room, tag.key())
        };
        MaterialHandle {
            name,
            color: Self::color(tag),
        }
    }
}

/// Sink that keeps every placed box; useful for tests and JSON export.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub boxes: Vec<(OrientedBox, MaterialHandle)>,
}

impl BoxSink for CollectingSink {
    fn emit(
        &mut self,
        placed: &OrientedBox,
        material: &MaterialHandle,
    ) -> Result<(), EmissionError> {
        self.boxes.push((placed.clone(), material.clone()));
        Ok(())
    }
}

/// Outcome of a batch emission
#[derive(Debug, Default, Clone)]
pub struct EmissionReport {
    pub emitted: usize,
    pub failed: usize,
    pub failures: Vec<EmissionError>,
}

impl EmissionReport {
    pub fn is_partial(&self) -> bool {
        self.failed > 0
    }

    pub fn merge(&mut self, other: EmissionReport) {
        self.emitted += other.emitted;
        self.failed += other.failed;
        self.failures.extend(other.failures);
    }
}

/// Emit `boxes` translated by `offset`. A rejected box is logged and
/// counted; the remaining boxes are still emitted.
pub fn emit_all(
    boxes: &[OrientedBox],
    offset: Vector3,
    sink: &mut dyn BoxSink,
    materials: &dyn MaterialProvider,
) -> EmissionReport {
    let mut report = EmissionReport::default();
    for b in boxes {
        let placed = b.translated(&offset);
        let material = materials.material(b.material);
        match sink.emit(&placed, &material) {
            Ok(()) => report.emitted += 1,
            Err(e) => {
                warn!("Emission failed for {}: {}", placed.group(), e);
                report.failed += 1;
                report.failures.push(e);
            }
        }
    }
    debug!(
        "Emitted {} boxes ({} failed) at offset ({:.3}, {:.3}, {:.3})",
        report.emitted, report.failed, offset.x, offset.y, offset.z
    );
    report
}
