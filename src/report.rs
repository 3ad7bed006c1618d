//! Batch placement of cabinet requests
//!
//! Feeds a list of [`CabinetRequest`]s through one [`RunRegistry`] and
//! collects a serializable report of what was placed where.

use cabinetkit_core::{BoxCategory, MeasurementSystem, Point3};
use cabinetkit_designer::{
    CabinetRequest, CabinetRun, RequestError, RunContext, RunRecord, RunRegistry,
};
use cabinetkit_settings::Config;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One placed cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSummary {
    pub run: String,
    pub kind: String,
    pub position: Point3,
    pub width: f64,
    pub carcass: usize,
    pub fronts: usize,
    pub hardware: usize,
    pub countertops: usize,
    pub used_fallback: bool,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub placements: Vec<PlacementSummary>,
    pub runs: Vec<RunRecord>,
}

impl SessionReport {
    pub fn warning_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.used_fallback || !p.diagnostics.is_empty())
            .count()
    }
}

/// Requests may be stored as a single object or as an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestFile {
    One(CabinetRequest),
    Many(Vec<CabinetRequest>),
}

impl RequestFile {
    pub fn into_requests(self) -> Vec<CabinetRequest> {
        match self {
            Self::One(request) => vec![request],
            Self::Many(requests) => requests,
        }
    }
}

/// Place every request in order. The first failure stops the batch.
pub fn run_requests(
    config: &Config,
    requests: &[CabinetRequest],
) -> Result<SessionReport, RequestError> {
    let dims = &config.dimensions;
    let mut registry = RunRegistry::new(config.builder(), config.run.height_tolerance);
    let mut ctx = RunContext::new(config.default_room.clone());
    let mut report = SessionReport::default();

    for request in requests {
        ctx.room = if request.room_name.trim().is_empty() {
            config.default_room.clone()
        } else {
            request.room_name.clone()
        };
        let spec = request.to_spec(dims)?;
        let mode = request.connection()?;
        let geometry = registry.place(spec, &mode, &mut ctx)?;

        let run = ctx
            .current_run
            .and_then(|id| registry.get(id))
            .map(|r| r.name.clone())
            .unwrap_or_default();
        for diagnostic in &geometry.diagnostics {
            warn!("{}: {}", run, diagnostic);
        }
        report.placements.push(PlacementSummary {
            run,
            kind: geometry.spec.kind.to_string(),
            position: geometry.spec.position,
            width: geometry.spec.width,
            carcass: geometry.count(BoxCategory::Carcass),
            fronts: geometry.count(BoxCategory::Fronts),
            hardware: geometry.count(BoxCategory::Hardware),
            countertops: geometry.count(BoxCategory::Countertops),
            used_fallback: geometry.used_fallback,
            diagnostics: geometry.diagnostics.iter().map(ToString::to_string).collect(),
        });
    }

    report.runs = registry.records();
    info!(
        "Placed {} cabinets in {} runs",
        report.placements.len(),
        report.runs.len()
    );
    Ok(report)
}

/// One line per cabinet and filler, lengths in `units`.
pub fn describe_run(run: &CabinetRun, units: MeasurementSystem) -> Vec<String> {
    use cabinetkit_core::units::format_length;

    let mut lines: Vec<(f64, String)> = run
        .cabinets
        .iter()
        .map(|c| {
            (
                c.position.x,
                format!(
                    "{:>10}  cabinet {}",
                    format_length(c.position.x, units),
                    format_length(c.width, units)
                ),
            )
        })
        .chain(run.appliance_gaps.iter().map(|g| {
            (
                g.position,
                format!(
                    "{:>10}  {} {}",
                    format_length(g.position, units),
                    g.label,
                    format_length(g.width, units)
                ),
            )
        }))
        .chain(run.filler_strips.iter().map(|f| {
            (
                f.position,
                format!(
                    "{:>10}  filler {}",
                    format_length(f.position, units),
                    format_length(f.width, units)
                ),
            )
        }))
        .collect();
    lines.sort_by(|a, b| a.0.total_cmp(&b.0));
    lines.into_iter().map(|(_, line)| line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_designer::{ApplianceGap, RunLayoutOptions};
    use tempfile::tempdir;

    fn request(kind: &str, config: &str) -> CabinetRequest {
        CabinetRequest {
            cabinet_type: kind.to_string(),
            frame_type: "frameless".to_string(),
            door_drawer_config: config.to_string(),
            ..CabinetRequest::default()
        }
    }

    #[test]
    fn test_batch_places_in_one_run() {
        let config = Config::default();
        let requests = vec![request("base", "doors"), request("base", "3 drawers")];
        let report = run_requests(&config, &requests).unwrap();

        assert_eq!(report.runs.len(), 1);
        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.placements[1].position.x, 24.0);
        assert_eq!(report.placements[0].run, "Run 1");
        assert_eq!(report.runs[0].room, "Kitchen");
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_wall_cabinet_starts_new_run() {
        let config = Config::default();
        let requests = vec![request("base", "doors"), request("wall", "doors")];
        let report = run_requests(&config, &requests).unwrap();
        assert_eq!(report.runs.len(), 2);
        assert_eq!(report.placements[1].position.z, 54.0);
    }

    #[test]
    fn test_fallback_is_reported() {
        let report = run_requests(&Config::default(), &[request("base", "lazy susan")]).unwrap();
        assert!(report.placements[0].used_fallback);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_bad_request_stops_batch() {
        let mut bad = request("base", "doors");
        bad.connection_mode = "extend_run".to_string();
        bad.target_run = Some("Island".to_string());
        assert!(run_requests(&Config::default(), &[bad]).is_err());
    }

    #[test]
    fn test_request_file_shapes() {
        let one: RequestFile = serde_json::from_str(r#"{"cabinet_type": "base"}"#).unwrap();
        assert_eq!(one.into_requests().len(), 1);
        let many: RequestFile =
            serde_json::from_str(r#"[{"cabinet_type": "base"}, {"cabinet_type": "wall"}]"#)
                .unwrap();
        assert_eq!(many.into_requests().len(), 2);
    }

    #[test]
    fn test_describe_run_orders_by_position() {
        let dims = cabinetkit_core::Dimensions::default();
        let gaps = vec![ApplianceGap::new(36.0, 30.0, "Range")];
        let mut run = CabinetRun::new("Run 1", 102.0, gaps).unwrap();
        run.auto_layout(&RunLayoutOptions::default(), &dims).unwrap();

        let lines = describe_run(&run, MeasurementSystem::Imperial);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Range"));
    }

    #[test]
    fn test_configured_dimensions_reach_geometry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_room = \"Laundry\"\n\n[dimensions]\ntoe_kick_height = 3.0\n",
        )
        .unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.dimensions.toe_kick_height, 3.0);

        let file: RequestFile = serde_json::from_str(
            r#"[
                {"cabinet_type": "base", "door_drawer_config": "doors", "has_countertop": true},
                {"cabinet_type": "base", "width": "18", "door_drawer_config": "door"}
            ]"#,
        )
        .unwrap();
        let report = run_requests(&config, &file.into_requests()).unwrap();

        assert_eq!(report.runs.len(), 1);
        assert_eq!(report.runs[0].room, "Laundry");
        assert_eq!(report.placements[0].countertops, 1);
        assert_eq!(report.placements[1].position.x, 24.0);
        assert_eq!(report.placements[1].width, 18.0);

        let kick = report.runs[0]
            .collections
            .carcass
            .iter()
            .find(|b| b.name == "Toe Kick")
            .unwrap();
        assert!((kick.size().z - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_serializes() {
        let requests = vec![CabinetRequest {
            cabinet_type: "corner_base".to_string(),
            corner_type: Some("inside_36".to_string()),
            ..CabinetRequest::default()
        }];
        let report = run_requests(&Config::default(), &requests).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["placements"][0]["fronts"], 2);
        assert!(value["runs"][0]["collections"]["carcass"].is_array());
    }
}
