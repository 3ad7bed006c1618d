//! Cabinet runs and greedy auto-fill
//!
//! A run is a straight line of cabinets along one wall. [`CabinetRun::auto_layout`]
//! fills the free stretches between appliance gaps with the largest standard
//! widths that fit, largest first, and leaves any leftover as a filler strip.
//! The fill is deterministic but not optimal: it never trades a large
//! cabinet for a combination that would avoid a filler.

use cabinetkit_core::constants::{FILLER_THRESHOLD, PLACEMENT_HEIGHT_TOLERANCE, STANDARD_WIDTHS};
use cabinetkit_core::{
    BoxCategory, CabinetKind, Dimensions, FrameStyle, MaterialTag, OrientedBox, Point3,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::builder::{CabinetBuilder, CabinetGeometry};
use crate::countertop::run_countertop;
use crate::decomposition::Decomposition;
use crate::error::{BuildResult, LayoutError};
use crate::front_config::{FrontConfig, FrontPreset};
use crate::placement::{next_position, DepthRatchet};
use crate::record::{RunCollections, RunFlags};
use crate::spec::CabinetSpec;

const LENGTH_EPSILON: f64 = 1e-9;

/// Reserved span for a built-in appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceGap {
    pub position: f64,
    pub width: f64,
    pub label: String,
}

impl ApplianceGap {
    pub fn new(position: f64, width: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            width,
            label: label.into(),
        }
    }

    pub fn end(&self) -> f64 {
        self.position + self.width
    }
}

/// Non-standard panel closing a leftover span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerStrip {
    pub position: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunLayoutOptions {
    /// Candidate widths; tried largest first
    pub standard_widths: Vec<f64>,
    /// Leftovers at or below this are left open
    pub filler_threshold: f64,
    /// Height match window for sequential placement
    pub height_tolerance: f64,
}

impl Default for RunLayoutOptions {
    fn default() -> Self {
        Self {
            standard_widths: STANDARD_WIDTHS.to_vec(),
            filler_threshold: FILLER_THRESHOLD,
            height_tolerance: PLACEMENT_HEIGHT_TOLERANCE,
        }
    }
}

impl RunLayoutOptions {
    /// Positive widths, descending, without repeats.
    pub fn sorted_widths(&self) -> Result<Vec<f64>, LayoutError> {
        let mut widths: Vec<f64> = self
            .standard_widths
            .iter()
            .copied()
            .filter(|w| w.is_finite() && *w > 0.0)
            .collect();
        widths.sort_by(|a, b| b.total_cmp(a));
        widths.dedup_by(|a, b| (*a - *b).abs() < LENGTH_EPSILON);
        if widths.is_empty() {
            return Err(LayoutError::InvalidWidths(
                "no positive standard widths".to_string(),
            ));
        }
        Ok(widths)
    }
}

/// Geometry for a whole run in world space.
#[derive(Debug, Clone, Serialize)]
pub struct RunGeometry {
    pub cabinets: Vec<CabinetGeometry>,
    /// Fillers and the shared countertop
    pub extras: Vec<OrientedBox>,
}

impl RunGeometry {
    pub fn world_boxes(&self) -> Vec<OrientedBox> {
        self.cabinets
            .iter()
            .flat_map(|c| c.world_boxes())
            .chain(self.extras.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetRun {
    pub id: Uuid,
    pub name: String,
    pub room: String,
    /// Cabinet class used for auto-filled cabinets
    pub kind: CabinetKind,
    pub frame: FrameStyle,
    pub flags: RunFlags,
    pub created_at: DateTime<Utc>,
    pub total_length: f64,
    /// Sorted by position, non-overlapping
    pub appliance_gaps: Vec<ApplianceGap>,
    pub cabinets: Vec<CabinetSpec>,
    pub filler_strips: Vec<FillerStrip>,
    pub depth_ratchet: DepthRatchet,
    /// Placed geometry, world space
    pub collections: RunCollections,
}

impl CabinetRun {
    /// Empty run that grows as cabinets are placed into it.
    pub fn open(
        name: impl Into<String>,
        room: impl Into<String>,
        kind: CabinetKind,
        frame: FrameStyle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            room: room.into(),
            kind,
            frame,
            flags: RunFlags::default(),
            created_at: Utc::now(),
            total_length: 0.0,
            appliance_gaps: Vec::new(),
            cabinets: Vec::new(),
            filler_strips: Vec::new(),
            depth_ratchet: DepthRatchet::default(),
            collections: RunCollections::default(),
        }
    }

    /// Run of fixed length with reserved appliance gaps.
    pub fn new(
        name: impl Into<String>,
        total_length: f64,
        mut gaps: Vec<ApplianceGap>,
    ) -> Result<Self, LayoutError> {
        if !total_length.is_finite() || total_length <= 0.0 {
            return Err(LayoutError::InvalidLength(total_length));
        }
        gaps.sort_by(|a, b| a.position.total_cmp(&b.position));
        for gap in &gaps {
            if !gap.width.is_finite()
                || gap.width <= 0.0
                || gap.position < 0.0
                || gap.end() > total_length + LENGTH_EPSILON
            {
                return Err(LayoutError::GapOutOfRange {
                    label: gap.label.clone(),
                    position: gap.position,
                    width: gap.width,
                });
            }
        }
        for pair in gaps.windows(2) {
            if pair[0].end() > pair[1].position + LENGTH_EPSILON {
                return Err(LayoutError::OverlappingGaps {
                    first: pair[0].label.clone(),
                    second: pair[1].label.clone(),
                });
            }
        }

        let mut run = Self::open(name, "", CabinetKind::Base, FrameStyle::Frameless);
        run.total_length = total_length;
        run.appliance_gaps = gaps;
        Ok(run)
    }

    pub fn with_style(mut self, kind: CabinetKind, frame: FrameStyle) -> Self {
        self.kind = kind;
        self.frame = frame;
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    pub fn with_flags(mut self, flags: RunFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cabinets.is_empty()
    }

    pub fn cabinet_width_sum(&self) -> f64 {
        self.cabinets.iter().map(|c| c.width).sum()
    }

    pub fn gap_width_sum(&self) -> f64 {
        self.appliance_gaps.iter().map(|g| g.width).sum()
    }

    pub fn filler_width_sum(&self) -> f64 {
        self.filler_strips.iter().map(|f| f.width).sum()
    }

    /// Length not covered by cabinets, gaps, or fillers.
    pub fn unallocated(&self) -> f64 {
        self.total_length - self.cabinet_width_sum() - self.gap_width_sum() - self.filler_width_sum()
    }

    /// Fill every free segment; replaces any previous layout.
    pub fn auto_layout(
        &mut self,
        options: &RunLayoutOptions,
        dims: &Dimensions,
    ) -> Result<(), LayoutError> {
        let widths = options.sorted_widths()?;
        self.cabinets.clear();
        self.filler_strips.clear();
        self.appliance_gaps
            .sort_by(|a, b| a.position.total_cmp(&b.position));

        let template = CabinetSpec::standard(self.kind.clone(), self.frame.clone(), dims)
            .with_countertop(self.flags.has_countertop, self.flags.has_backsplash);

        let mut cursor = 0.0;
        let gaps = self.appliance_gaps.clone();
        for gap in &gaps {
            if gap.position > cursor + LENGTH_EPSILON {
                self.fill_segment(cursor, gap.position, &widths, options, &template);
            }
            cursor = f64::max(cursor, gap.end());
        }
        if self.total_length > cursor + LENGTH_EPSILON {
            self.fill_segment(cursor, self.total_length, &widths, options, &template);
        }

        info!(
            "Run '{}' laid out: {} cabinets, {} fillers over {:.3}",
            self.name,
            self.cabinets.len(),
            self.filler_strips.len(),
            self.total_length
        );
        Ok(())
    }

    fn fill_segment(
        &mut self,
        start: f64,
        end: f64,
        widths: &[f64],
        options: &RunLayoutOptions,
        template: &CabinetSpec,
    ) {
        let mut x = start;
        while let Some(width) = widths
            .iter()
            .copied()
            .find(|w| *w <= end - x + LENGTH_EPSILON)
        {
            let fronts = if width > 21.0 {
                FrontPreset::Doors
            } else {
                FrontPreset::Door
            };
            let mut spec = template
                .clone()
                .with_fronts(FrontConfig::Preset(fronts))
                .with_position(Point3::new(x, 0.0, 0.0));
            spec.width = width;
            self.cabinets.push(spec);
            x += width;
        }

        let remainder = end - x;
        if remainder > options.filler_threshold {
            self.filler_strips.push(FillerStrip {
                position: x,
                width: remainder,
                height: template.height,
            });
        } else if remainder > LENGTH_EPSILON {
            debug!("leaving {:.3} open at {:.3}", remainder, x);
        }
    }

    /// Place `spec` after the cabinets already in the run.
    pub fn add_cabinet(&mut self, spec: CabinetSpec, height_tolerance: f64) -> &CabinetSpec {
        let position = next_position(&self.cabinets, &spec, &mut self.depth_ratchet, height_tolerance);
        let placed = spec.with_position(position);
        self.total_length = self
            .total_length
            .max(placed.position.x + placed.footprint().0);
        let index = self.cabinets.len();
        self.cabinets.push(placed);
        &self.cabinets[index]
    }

    /// Position the next cabinet would get, without placing it.
    pub fn preview_position(&self, spec: &CabinetSpec) -> Point3 {
        let mut ratchet = self.depth_ratchet;
        next_position(&self.cabinets, spec, &mut ratchet, PLACEMENT_HEIGHT_TOLERANCE)
    }

    /// Build every cabinet, the fillers, and the shared countertop.
    pub fn build_geometry(&self, builder: &CabinetBuilder) -> BuildResult<RunGeometry> {
        let dims = builder.dimensions();
        let mut cabinets = Vec::with_capacity(self.cabinets.len());
        for spec in &self.cabinets {
            // The run-wide top replaces per-cabinet tops.
            let mut spec = spec.clone();
            spec.has_countertop = false;
            cabinets.push(builder.build(&spec)?);
        }

        let mut extras = Decomposition::new(dims);
        for (i, filler) in self.filler_strips.iter().enumerate() {
            extras.panel(
                BoxCategory::Carcass,
                format!("Filler {}", i + 1),
                [filler.position, -dims.front_thickness, 0.0],
                [filler.width, dims.front_thickness, filler.height],
                MaterialTag::Filler,
            );
        }
        if self.flags.has_countertop && !self.kind.is_wall_mounted() {
            if let Some(top) = run_countertop(
                &self.cabinets,
                builder.countertop_options(),
                self.flags.has_backsplash,
                dims,
            ) {
                extras.extend(top);
            }
        }

        Ok(RunGeometry {
            cabinets,
            extras: extras.boxes,
        })
    }
}
