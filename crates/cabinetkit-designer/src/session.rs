//! Run registry and placement session
//!
//! Stands in for the host document: holds every run, resolves where a new
//! cabinet goes, and commits a placement only after every check has passed.

use cabinetkit_core::{CabinetKind, FrameStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::builder::{CabinetBuilder, CabinetGeometry};
use crate::error::SessionError;
use crate::placement::next_position;
use crate::record::{RunFlags, RunRecord};
use crate::run_layout::CabinetRun;
use crate::spec::CabinetSpec;

/// How a new cabinet joins the existing runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionMode {
    /// Continue the current run when it matches, else start one
    #[default]
    Auto,
    NewRun,
    /// Append to the named run
    ExtendRun(String),
}

impl ConnectionMode {
    pub fn parse(mode: &str, target: Option<&str>) -> Result<Self, SessionError> {
        match mode.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "new_run" | "new" => Ok(Self::NewRun),
            "extend_run" | "extend" => match target.map(str::trim).filter(|t| !t.is_empty()) {
                Some(name) => Ok(Self::ExtendRun(name.to_string())),
                None => Err(SessionError::UnknownMode(
                    "extend_run requires a target run".to_string(),
                )),
            },
            other => Err(SessionError::UnknownMode(other.to_string())),
        }
    }
}

/// Per-document state threaded through placements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    pub room: String,
    pub current_run: Option<Uuid>,
}

impl RunContext {
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            current_run: None,
        }
    }
}

/// Where a placement will land before it is committed.
enum Target {
    Existing(usize),
    Fresh(String, usize),
}

#[derive(Debug, Clone)]
pub struct RunRegistry {
    runs: Vec<CabinetRun>,
    builder: CabinetBuilder,
    height_tolerance: f64,
    next_index: usize,
}

impl RunRegistry {
    pub fn new(builder: CabinetBuilder, height_tolerance: f64) -> Self {
        Self {
            runs: Vec::new(),
            builder,
            height_tolerance,
            next_index: 1,
        }
    }

    pub fn runs(&self) -> &[CabinetRun] {
        &self.runs
    }

    pub fn get(&self, id: Uuid) -> Option<&CabinetRun> {
        self.runs.iter().find(|r| r.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CabinetRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    pub fn create_run(
        &mut self,
        name: &str,
        room: &str,
        kind: CabinetKind,
        frame: FrameStyle,
    ) -> Result<Uuid, SessionError> {
        if self.find_by_name(name).is_some() {
            return Err(SessionError::DuplicateRun(name.to_string()));
        }
        let run = CabinetRun::open(name, room, kind, frame);
        let id = run.id;
        info!("Created run '{}' in '{}'", name, room);
        self.runs.push(run);
        Ok(id)
    }

    /// First unused `"Run N"` name; claimed only when the run is committed.
    fn fresh_name(&self) -> (String, usize) {
        let mut index = self.next_index;
        loop {
            let name = format!("Run {}", index);
            if self.find_by_name(&name).is_none() {
                return (name, index);
            }
            index += 1;
        }
    }

    fn target(
        &self,
        mode: &ConnectionMode,
        ctx: &RunContext,
        spec: &CabinetSpec,
    ) -> Result<Target, SessionError> {
        match mode {
            ConnectionMode::ExtendRun(name) => self
                .runs
                .iter()
                .position(|r| &r.name == name)
                .map(Target::Existing)
                .ok_or_else(|| SessionError::RunNotFound(name.clone())),
            ConnectionMode::NewRun => {
                let (name, index) = self.fresh_name();
                Ok(Target::Fresh(name, index))
            }
            ConnectionMode::Auto => {
                let current = ctx.current_run.and_then(|id| {
                    self.runs.iter().position(|r| {
                        r.id == id
                            && r.room == ctx.room
                            && r.kind.is_wall_mounted() == spec.kind.is_wall_mounted()
                    })
                });
                Ok(match current {
                    Some(index) => Target::Existing(index),
                    None => {
                        let (name, index) = self.fresh_name();
                        Target::Fresh(name, index)
                    }
                })
            }
        }
    }

    /// Resolve the run a placement in `mode` would join, creating it if needed.
    pub fn resolve(
        &mut self,
        mode: &ConnectionMode,
        ctx: &RunContext,
        spec: &CabinetSpec,
    ) -> Result<Uuid, SessionError> {
        match self.target(mode, ctx, spec)? {
            Target::Existing(index) => Ok(self.runs[index].id),
            Target::Fresh(name, index) => {
                let id = self.create_run(&name, &ctx.room, spec.kind.clone(), spec.frame.clone())?;
                self.next_index = index + 1;
                Ok(id)
            }
        }
    }

    /// Validate, position, build, then commit.
    ///
    /// Any error leaves the registry and `ctx` untouched.
    pub fn place(
        &mut self,
        spec: CabinetSpec,
        mode: &ConnectionMode,
        ctx: &mut RunContext,
    ) -> Result<CabinetGeometry, SessionError> {
        self.builder.check(&spec)?;
        let target = self.target(mode, ctx, &spec)?;

        let (existing, mut ratchet) = match &target {
            Target::Existing(index) => {
                let run = &self.runs[*index];
                (run.cabinets.as_slice(), run.depth_ratchet)
            }
            Target::Fresh(..) => (&[][..], Default::default()),
        };
        let position = next_position(existing, &spec, &mut ratchet, self.height_tolerance);
        let placed = spec.with_position(position);
        let geometry = self.builder.build(&placed)?;

        let index = match target {
            Target::Existing(index) => index,
            Target::Fresh(name, name_index) => {
                self.next_index = name_index + 1;
                let mut run =
                    CabinetRun::open(name, ctx.room.clone(), placed.kind.clone(), placed.frame.clone());
                run.flags = RunFlags {
                    has_countertop: placed.has_countertop,
                    has_backsplash: placed.has_backsplash,
                };
                info!("Created run '{}' in '{}'", run.name, run.room);
                self.runs.push(run);
                self.runs.len() - 1
            }
        };

        let run = &mut self.runs[index];
        run.depth_ratchet = ratchet;
        run.total_length = run
            .total_length
            .max(placed.position.x + placed.footprint().0);
        run.collections.extend(geometry.world_boxes());
        run.cabinets.push(placed);
        ctx.current_run = Some(run.id);
        debug!(
            "Placed cabinet {} in run '{}'",
            run.cabinets.len(),
            run.name
        );
        Ok(geometry)
    }

    pub fn records(&self) -> Vec<RunRecord> {
        self.runs.iter().map(RunRecord::from).collect()
    }

    /// Replace the registry contents with stored runs.
    pub fn restore(&mut self, records: Vec<RunRecord>) {
        self.runs = records.into_iter().map(CabinetRun::from).collect();
        self.next_index = self.runs.len() + 1;
    }
}
