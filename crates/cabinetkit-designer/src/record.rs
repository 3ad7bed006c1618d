//! Persisted run records
//!
//! A run is stored as one JSON document holding its identity, flags and the
//! placed geometry split into named sub-collections.

use cabinetkit_core::{BoxCategory, CabinetKind, FrameStyle, OrientedBox};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::placement::DepthRatchet;
use crate::run_layout::{ApplianceGap, CabinetRun, FillerStrip};
use crate::spec::CabinetSpec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFlags {
    pub has_countertop: bool,
    pub has_backsplash: bool,
}

/// Placed boxes grouped the way a host scene groups them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCollections {
    pub carcass: Vec<OrientedBox>,
    pub fronts: Vec<OrientedBox>,
    pub hardware: Vec<OrientedBox>,
    pub countertops: Vec<OrientedBox>,
    pub backsplash: Vec<OrientedBox>,
    pub appliances: Vec<OrientedBox>,
}

impl RunCollections {
    pub fn get(&self, category: BoxCategory) -> &[OrientedBox] {
        match category {
            BoxCategory::Carcass => &self.carcass,
            BoxCategory::Fronts => &self.fronts,
            BoxCategory::Hardware => &self.hardware,
            BoxCategory::Countertops => &self.countertops,
            BoxCategory::Backsplash => &self.backsplash,
            BoxCategory::Appliances => &self.appliances,
        }
    }

    fn get_mut(&mut self, category: BoxCategory) -> &mut Vec<OrientedBox> {
        match category {
            BoxCategory::Carcass => &mut self.carcass,
            BoxCategory::Fronts => &mut self.fronts,
            BoxCategory::Hardware => &mut self.hardware,
            BoxCategory::Countertops => &mut self.countertops,
            BoxCategory::Backsplash => &mut self.backsplash,
            BoxCategory::Appliances => &mut self.appliances,
        }
    }

    pub fn add(&mut self, b: OrientedBox) {
        self.get_mut(b.category).push(b);
    }

    pub fn extend(&mut self, boxes: impl IntoIterator<Item = OrientedBox>) {
        for b in boxes {
            self.add(b);
        }
    }

    pub fn len(&self) -> usize {
        BoxCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrientedBox> {
        BoxCategory::ALL.iter().flat_map(move |c| self.get(*c).iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub name: String,
    pub room: String,
    pub kind: CabinetKind,
    pub frame_type: FrameStyle,
    pub flags: RunFlags,
    pub created_at: DateTime<Utc>,
    pub total_length: f64,
    #[serde(default)]
    pub appliance_gaps: Vec<ApplianceGap>,
    #[serde(default)]
    pub cabinets: Vec<CabinetSpec>,
    #[serde(default)]
    pub filler_strips: Vec<FillerStrip>,
    #[serde(default)]
    pub depth_ratchet: DepthRatchet,
    #[serde(default)]
    pub collections: RunCollections,
}

impl RunRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&CabinetRun> for RunRecord {
    fn from(run: &CabinetRun) -> Self {
        Self {
            id: run.id,
            name: run.name.clone(),
            room: run.room.clone(),
            kind: run.kind.clone(),
            frame_type: run.frame.clone(),
            flags: run.flags,
            created_at: run.created_at,
            total_length: run.total_length,
            appliance_gaps: run.appliance_gaps.clone(),
            cabinets: run.cabinets.clone(),
            filler_strips: run.filler_strips.clone(),
            depth_ratchet: run.depth_ratchet,
            collections: run.collections.clone(),
        }
    }
}

impl From<RunRecord> for CabinetRun {
    fn from(record: RunRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            room: record.room,
            kind: record.kind,
            frame: record.frame_type,
            flags: record.flags,
            created_at: record.created_at,
            total_length: record.total_length,
            appliance_gaps: record.appliance_gaps,
            cabinets: record.cabinets,
            filler_strips: record.filler_strips,
            depth_ratchet: record.depth_ratchet,
            collections: record.collections,
        }
    }
}
