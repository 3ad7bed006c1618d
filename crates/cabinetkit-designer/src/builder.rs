//! Cabinet builder
//!
//! Runs the engines in order (carcass, fronts, countertop) for one spec and
//! collects the result into a [`CabinetGeometry`].

use cabinetkit_core::{
    emit_all, BoxCategory, BoxSink, Dimensions, EmissionReport, MaterialProvider, OrientedBox,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::carcass;
use crate::countertop::{corner_countertop, single_countertop, CountertopOptions};
use crate::decomposition::{Decomposition, Diagnostic};
use crate::error::{BuildError, BuildResult};
use crate::fronts::layout_fronts;
use crate::front_config::FrontConfig;
use crate::spec::CabinetSpec;

/// Everything generated for one cabinet, in its local frame.
#[derive(Debug, Clone, Serialize)]
pub struct CabinetGeometry {
    pub spec: CabinetSpec,
    pub boxes: Vec<OrientedBox>,
    pub diagnostics: Vec<Diagnostic>,
    pub used_fallback: bool,
}

impl CabinetGeometry {
    pub fn by_category(&self, category: BoxCategory) -> impl Iterator<Item = &OrientedBox> {
        self.boxes.iter().filter(move |b| b.category == category)
    }

    pub fn count(&self, category: BoxCategory) -> usize {
        self.by_category(category).count()
    }

    /// Look up a box by its group path, e.g. `"Fronts/Door 1"`.
    pub fn find(&self, group: &str) -> Option<&OrientedBox> {
        self.boxes.iter().find(|b| b.group() == group)
    }

    /// Boxes moved to the spec's world position.
    pub fn world_boxes(&self) -> Vec<OrientedBox> {
        let offset = self.spec.position.coords;
        self.boxes.iter().map(|b| b.translated(&offset)).collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.used_fallback || !self.diagnostics.is_empty()
    }

    /// Hand every box to `sink` at the spec's world position.
    pub fn emit(&self, sink: &mut dyn BoxSink, materials: &dyn MaterialProvider) -> EmissionReport {
        emit_all(&self.boxes, self.spec.position.coords, sink, materials)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CabinetBuilder {
    dims: Dimensions,
    countertop: CountertopOptions,
}

impl CabinetBuilder {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            countertop: CountertopOptions::default(),
        }
    }

    pub fn with_countertop(mut self, options: CountertopOptions) -> Self {
        self.countertop = options;
        self
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn countertop_options(&self) -> &CountertopOptions {
        &self.countertop
    }

    pub fn build(&self, spec: &CabinetSpec) -> BuildResult<CabinetGeometry> {
        let dims = &self.dims;
        let mut out: Decomposition = carcass::decompose(spec, dims)?;

        let parsed = spec.parsed_fronts(dims);
        if parsed.used_fallback {
            let raw = match &spec.front_config {
                FrontConfig::Fallback { raw } => raw.clone(),
                other => format!("{:?}", other),
            };
            warn!("{} cabinet uses the two-door fallback for '{}'", spec.kind, raw);
            out.note(Diagnostic::ConfigFallback { raw });
        }
        out.extend(layout_fronts(spec, &parsed, dims));

        if spec.has_countertop {
            match spec.corner_layout() {
                Some(layout) => out.extend(corner_countertop(spec, &layout, &self.countertop, dims)),
                None => out.extend(single_countertop(spec, &self.countertop, dims)),
            }
        } else if spec.has_backsplash {
            debug!("backsplash requested without a countertop, skipping");
        }

        debug!(
            "built {} {}x{}x{}: {} boxes, {} diagnostics",
            spec.kind,
            spec.width,
            spec.depth,
            spec.height,
            out.boxes.len(),
            out.diagnostics.len()
        );

        Ok(CabinetGeometry {
            spec: spec.clone(),
            boxes: out.boxes,
            diagnostics: out.diagnostics,
            used_fallback: parsed.used_fallback,
        })
    }

    /// Validate the spec and dimension table without building anything.
    pub fn check(&self, spec: &CabinetSpec) -> BuildResult<()> {
        self.dims.validate().map_err(BuildError::InvalidDimensions)?;
        spec.validate()?;
        Ok(())
    }
}
