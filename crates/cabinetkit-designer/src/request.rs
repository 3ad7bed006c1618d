//! Flat request parameters as sent by a dialog or a JSON file
//!
//! All string-to-enum conversion happens here, once. Missing dimensions
//! fall back to the standard size for the cabinet type.

use cabinetkit_core::units::parse_length;
use cabinetkit_core::{CabinetKind, CornerSubtype, Dimensions, FrameStyle, MeasurementSystem};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::front_config::FrontConfig;
use crate::session::{ConnectionMode, RunContext};
use crate::spec::CabinetSpec;

/// A length given either as a number or as text such as `"34 1/2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthValue {
    Number(f64),
    Text(String),
}

impl LengthValue {
    fn to_inches(
        &self,
        field: &'static str,
        units: MeasurementSystem,
    ) -> Result<Option<f64>, RequestError> {
        match self {
            Self::Number(n) => Ok(Some(match units {
                MeasurementSystem::Imperial => *n,
                MeasurementSystem::Metric => *n / 25.4,
            })),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => parse_length(text, units)
                .map(Some)
                .map_err(|reason| RequestError::InvalidLength { field, reason }),
        }
    }
}

impl From<f64> for LengthValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetRequest {
    pub cabinet_type: String,
    pub frame_type: String,
    pub width: Option<LengthValue>,
    pub depth: Option<LengthValue>,
    pub height: Option<LengthValue>,
    /// e.g. `"inside_24"`, `"outside_36"`
    pub corner_type: Option<String>,
    pub door_drawer_config: String,
    pub custom_drawer_heights: Option<Vec<LengthValue>>,
    pub has_countertop: bool,
    pub has_backsplash: bool,
    pub has_seating_side: bool,
    pub height_from_floor: Option<LengthValue>,
    pub room_name: String,
    pub connection_mode: String,
    pub target_run: Option<String>,
    pub units: MeasurementSystem,
}

fn length(
    value: &Option<LengthValue>,
    field: &'static str,
    units: MeasurementSystem,
) -> Result<Option<f64>, RequestError> {
    match value {
        Some(v) => v.to_inches(field, units),
        None => Ok(None),
    }
}

impl CabinetRequest {
    /// Build the spec. The result is not validated; an unknown type or a
    /// zero dimension is reported when the spec is built.
    pub fn to_spec(&self, dims: &Dimensions) -> Result<CabinetSpec, RequestError> {
        let kind = CabinetKind::parse(&self.cabinet_type);
        let frame = if self.frame_type.trim().is_empty() {
            FrameStyle::Frameless
        } else {
            FrameStyle::parse(&self.frame_type)
        };
        let mut spec = CabinetSpec::standard(kind, frame, dims);

        if let Some(w) = length(&self.width, "width", self.units)? {
            spec.width = w;
        }
        if let Some(d) = length(&self.depth, "depth", self.units)? {
            spec.depth = d;
        }
        if let Some(h) = length(&self.height, "height", self.units)? {
            spec.height = h;
        }
        if let Some(h) = length(&self.height_from_floor, "height_from_floor", self.units)? {
            spec.height_from_floor = h;
        }

        spec.corner_subtype = self
            .corner_type
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .and_then(CornerSubtype::parse);
        if !self.door_drawer_config.trim().is_empty() {
            spec.front_config = FrontConfig::parse(&self.door_drawer_config);
        }

        if let Some(heights) = &self.custom_drawer_heights {
            let mut parsed = Vec::with_capacity(heights.len());
            for h in heights {
                if let Some(v) = h.to_inches("custom_drawer_heights", self.units)? {
                    parsed.push(v);
                }
            }
            spec.custom_drawer_heights = Some(parsed);
        }

        spec.has_countertop = self.has_countertop;
        spec.has_backsplash = self.has_backsplash;
        spec.has_seating_side = self.has_seating_side;
        Ok(spec)
    }

    pub fn connection(&self) -> Result<ConnectionMode, RequestError> {
        Ok(ConnectionMode::parse(
            &self.connection_mode,
            self.target_run.as_deref(),
        )?)
    }

    pub fn context(&self) -> RunContext {
        RunContext::new(self.room_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_config::FrontPreset;

    #[test]
    fn test_json_request_with_fractions() {
        let json = r#"{
            "cabinet_type": "base",
            "frame_type": "framed",
            "width": 30,
            "height": "34 1/2",
            "door_drawer_config": "drawer_bank_3",
            "has_countertop": true,
            "room_name": "Kitchen"
        }"#;
        let request: CabinetRequest = serde_json::from_str(json).unwrap();
        let spec = request.to_spec(&Dimensions::default()).unwrap();
        assert_eq!(spec.kind, CabinetKind::Base);
        assert_eq!(spec.frame, FrameStyle::Framed);
        assert_eq!(spec.width, 30.0);
        assert_eq!(spec.depth, 24.0);
        assert_eq!(spec.height, 34.5);
        assert_eq!(
            spec.front_config,
            FrontConfig::Preset(FrontPreset::DrawerBank3)
        );
        assert!(spec.has_countertop);
        assert_eq!(request.connection().unwrap(), ConnectionMode::Auto);
        assert_eq!(request.context().room, "Kitchen");
    }

    #[test]
    fn test_corner_request() {
        let request = CabinetRequest {
            cabinet_type: "corner_base".to_string(),
            corner_type: Some("inside_36".to_string()),
            ..CabinetRequest::default()
        };
        let spec = request.to_spec(&Dimensions::default()).unwrap();
        assert_eq!(spec.corner_subtype, Some(CornerSubtype::InsideLarge));
        assert!(spec.is_valid());
    }

    #[test]
    fn test_bad_length() {
        let request = CabinetRequest {
            cabinet_type: "wall".to_string(),
            width: Some(LengthValue::Text("thirty".to_string())),
            ..CabinetRequest::default()
        };
        assert!(matches!(
            request.to_spec(&Dimensions::default()),
            Err(RequestError::InvalidLength { field: "width", .. })
        ));
    }

    #[test]
    fn test_metric_request() {
        let request = CabinetRequest {
            cabinet_type: "wall".to_string(),
            width: Some(LengthValue::Number(762.0)),
            units: MeasurementSystem::Metric,
            ..CabinetRequest::default()
        };
        let spec = request.to_spec(&Dimensions::default()).unwrap();
        assert!((spec.width - 30.0).abs() < 1e-9);
        assert_eq!(spec.height_from_floor, 54.0);
    }

    #[test]
    fn test_extend_mode() {
        let request = CabinetRequest {
            connection_mode: "extend_run".to_string(),
            target_run: Some("Run 3".to_string()),
            ..CabinetRequest::default()
        };
        assert_eq!(
            request.connection().unwrap(),
            ConnectionMode::ExtendRun("Run 3".to_string())
        );
    }
}
