//! Door/drawer configuration parser
//!
//! A configuration string is parsed once into a closed [`FrontConfig`]
//! variant. [`FrontConfig::sections`] then turns it into bottom-to-top
//! [`Section`]s whose height ratios sum to one.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

static COUNTED_DRAWERS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)(equal)?drawers?$").ok());

static PART: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)?\s*(.*?)\s*$").ok());

const RATIO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionRole {
    Door,
    Drawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sizing {
    Equal,
    Graduated,
    Custom,
}

/// Layout variant applied on top of the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrontTemplate {
    #[default]
    Standard,
    /// Single panel, handle at top-center
    Dishwasher,
    /// Three doors split 20/30/50
    GraduatedDoors,
}

/// One horizontal band of fronts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub role: SectionRole,
    /// Share of the interior height, in `(0, 1]`
    pub height_ratio: f64,
    pub item_count: usize,
    pub sizing: Sizing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_heights: Option<Vec<f64>>,
}

impl Section {
    fn new(role: SectionRole, height_ratio: f64, item_count: usize, sizing: Sizing) -> Self {
        Self {
            role,
            height_ratio,
            item_count,
            sizing,
            custom_heights: None,
        }
    }

    fn door(height_ratio: f64, item_count: usize) -> Self {
        Self::new(SectionRole::Door, height_ratio, item_count, Sizing::Equal)
    }

    fn drawers(height_ratio: f64, item_count: usize, equal: bool) -> Self {
        let sizing = if equal || item_count <= 1 {
            Sizing::Equal
        } else {
            Sizing::Graduated
        };
        Self::new(SectionRole::Drawer, height_ratio, item_count, sizing)
    }

    fn custom(height_ratio: f64, heights: Vec<f64>) -> Self {
        let mut section = Self::new(
            SectionRole::Drawer,
            height_ratio,
            heights.len(),
            Sizing::Custom,
        );
        section.custom_heights = Some(heights);
        section
    }
}

/// Result of parsing a configuration against a cabinet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedFronts {
    /// Bottom to top
    pub sections: Vec<Section>,
    pub template: FrontTemplate,
    /// The input was not understood and the two-door default was used
    pub used_fallback: bool,
}

impl ParsedFronts {
    pub fn dishwasher() -> Self {
        Self {
            sections: vec![Section::door(1.0, 1)],
            template: FrontTemplate::Dishwasher,
            used_fallback: false,
        }
    }

    /// Sections top to bottom.
    pub fn reversed(&self) -> Vec<Section> {
        self.sections.iter().rev().cloned().collect()
    }

    pub fn ratio_sum(&self) -> f64 {
        self.sections.iter().map(|s| s.height_ratio).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Door count of the lowest door section.
    pub fn first_door_count(&self) -> Option<usize> {
        self.sections
            .iter()
            .find(|s| s.role == SectionRole::Door)
            .map(|s| s.item_count)
    }
}

/// Named configurations with fixed section tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrontPreset {
    Door,
    Doors,
    Drawers,
    NDrawers(usize),
    NEqualDrawers(usize),
    DrawerBank3,
    ThreeDoorsGraduated,
    /// Heights bottom first; empty means "use the heights given with the spec"
    CustomDrawers(Vec<f64>),
    DrawerOverDoors,
    Dishwasher,
    Open,
}

impl FrontPreset {
    /// Look up a normalized key (lowercase, no separators).
    fn from_key(key: &str) -> Option<Self> {
        let preset = match key {
            "door" | "singledoor" => Self::Door,
            "doors" | "2doors" | "doubledoors" => Self::Doors,
            "drawers" => Self::Drawers,
            "drawer" => Self::NDrawers(1),
            "drawerbank3" | "drawerbank" => Self::DrawerBank3,
            "3doorsgraduated" | "threedoorsgraduated" | "graduateddoors" => {
                Self::ThreeDoorsGraduated
            }
            "customdrawers" | "custom" => Self::CustomDrawers(Vec::new()),
            "draweroverdoors" | "drawerdoors" => Self::DrawerOverDoors,
            "dishwasher" => Self::Dishwasher,
            "open" | "none" | "nofronts" => Self::Open,
            _ => {
                let caps = COUNTED_DRAWERS.as_ref()?.captures(key)?;
                let count: usize = caps.get(1)?.as_str().parse().ok()?;
                if count == 0 {
                    return None;
                }
                if caps.get(2).is_some() {
                    Self::NEqualDrawers(count)
                } else {
                    Self::NDrawers(count)
                }
            }
        };
        Some(preset)
    }

    fn sections(&self, ctx: &SectionContext<'_>) -> (Vec<Section>, FrontTemplate) {
        let standard = FrontTemplate::Standard;
        match self {
            Self::Door => (vec![Section::door(1.0, 1)], standard),
            Self::Doors => (vec![Section::door(1.0, 2)], standard),
            Self::Drawers => (vec![Section::drawers(1.0, 3, false)], standard),
            Self::NDrawers(n) => (vec![Section::drawers(1.0, *n, false)], standard),
            Self::NEqualDrawers(n) => (vec![Section::drawers(1.0, *n, true)], standard),
            Self::DrawerBank3 => (
                vec![Section::drawers(0.45, 3, false), Section::door(0.55, 1)],
                standard,
            ),
            Self::ThreeDoorsGraduated => {
                let mut section = Section::door(1.0, 3);
                section.sizing = Sizing::Graduated;
                (vec![section], FrontTemplate::GraduatedDoors)
            }
            Self::CustomDrawers(heights) => {
                let heights = if heights.is_empty() {
                    ctx.custom_drawer_heights.map(<[f64]>::to_vec)
                } else {
                    Some(heights.clone())
                };
                match heights.filter(|h| !h.is_empty()) {
                    Some(h) => (vec![Section::custom(1.0, h)], standard),
                    None => {
                        warn!("custom drawers requested without heights, using 3 equal drawers");
                        (vec![Section::drawers(1.0, 3, true)], standard)
                    }
                }
            }
            Self::DrawerOverDoors => (
                vec![Section::door(0.8, 2), Section::drawers(0.2, 1, true)],
                standard,
            ),
            Self::Dishwasher => (vec![Section::door(1.0, 1)], FrontTemplate::Dishwasher),
            Self::Open => (Vec::new(), standard),
        }
    }
}

/// One `+`-separated part of a composite configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub role: SectionRole,
    /// Leading integer, if one was written
    pub count: Option<usize>,
    pub equal: bool,
    pub plural: bool,
}

impl PartSpec {
    pub fn parse(part: &str) -> Option<Self> {
        let lower = part.to_lowercase();
        let caps = PART.as_ref()?.captures(&lower)?;
        let count = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let word = caps.get(2).map_or("", |m| m.as_str());

        let (role, plural) = if word.contains("drawer") {
            (SectionRole::Drawer, word.contains("drawers"))
        } else if word.contains("door") {
            (SectionRole::Door, word.contains("doors"))
        } else {
            return None;
        };

        Some(Self {
            role,
            count: count.filter(|c| *c > 0),
            equal: word.contains("equal"),
            plural,
        })
    }
}

/// What the front layout needs to know about the cabinet being fronted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionContext<'a> {
    pub interior_height: Option<f64>,
    pub custom_drawer_heights: Option<&'a [f64]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrontConfig {
    Preset(FrontPreset),
    Composite(Vec<PartSpec>),
    /// Unparseable input; laid out as two doors
    Fallback { raw: String },
}

impl Default for FrontConfig {
    fn default() -> Self {
        Self::Preset(FrontPreset::Doors)
    }
}

impl FrontConfig {
    pub fn parse(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' ' | '\t'))
            .flat_map(char::to_lowercase)
            .collect();

        if key.is_empty() {
            warn!("empty door/drawer config, defaulting to two doors");
            return Self::Fallback { raw: raw.to_string() };
        }
        if let Some(preset) = FrontPreset::from_key(&key) {
            return Self::Preset(preset);
        }

        let mut parts = Vec::new();
        for part in raw.split('+') {
            match PartSpec::parse(part) {
                Some(spec) => parts.push(spec),
                None => warn!("dropping unrecognized config part '{}'", part.trim()),
            }
        }
        if parts.is_empty() {
            warn!("unrecognized door/drawer config '{}', defaulting to two doors", raw);
            Self::Fallback { raw: raw.to_string() }
        } else {
            Self::Composite(parts)
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn sections(&self, ctx: &SectionContext<'_>) -> ParsedFronts {
        let (sections, template, used_fallback) = match self {
            Self::Preset(preset) => {
                let (sections, template) = preset.sections(ctx);
                (sections, template, false)
            }
            Self::Composite(parts) => (composite_sections(parts, ctx), FrontTemplate::Standard, false),
            Self::Fallback { .. } => (vec![Section::door(1.0, 2)], FrontTemplate::Standard, true),
        };
        ParsedFronts {
            sections: normalize(sections),
            template,
            used_fallback,
        }
    }
}

fn composite_sections(parts: &[PartSpec], ctx: &SectionContext<'_>) -> Vec<Section> {
    let has_door = parts.iter().any(|p| p.role == SectionRole::Door);
    let has_drawer = parts.iter().any(|p| p.role == SectionRole::Drawer);
    let mixed = has_door && has_drawer;

    // Custom heights apply to the first drawer part only.
    let custom = ctx
        .custom_drawer_heights
        .filter(|h| !h.is_empty() && h.iter().all(|v| v.is_finite() && *v > 0.0));
    let custom_index = custom.and(parts.iter().position(|p| p.role == SectionRole::Drawer));

    let custom_ratio = match (custom, ctx.interior_height, custom_index) {
        (Some(heights), Some(interior), Some(_)) if interior > 0.0 => {
            Some((heights.iter().sum::<f64>() / interior).min(1.0))
        }
        _ => None,
    };

    let equal_share = 1.0 / parts.len() as f64;
    let remainder_share = custom_ratio
        .map(|ratio| (1.0 - ratio) / (parts.len() - 1).max(1) as f64)
        .unwrap_or(equal_share);

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let ratio = match custom_ratio {
                Some(ratio) if Some(i) == custom_index => ratio,
                Some(_) => remainder_share,
                None => equal_share,
            };
            match part.role {
                SectionRole::Drawer => match custom.filter(|_| Some(i) == custom_index) {
                    Some(heights) => Section::custom(ratio, heights.to_vec()),
                    None => Section::drawers(ratio, part.count.unwrap_or(1), part.equal),
                },
                SectionRole::Door => {
                    let default = if !mixed && part.plural { 2 } else { 1 };
                    Section::door(ratio, part.count.unwrap_or(default))
                }
            }
        })
        .collect()
}

/// Drop empty bands and scale the rest to sum to one.
fn normalize(sections: Vec<Section>) -> Vec<Section> {
    let mut kept: Vec<Section> = sections
        .into_iter()
        .filter(|s| {
            let keep = s.height_ratio > RATIO_TOLERANCE && s.item_count > 0;
            if !keep {
                warn!("dropping empty {:?} section", s.role);
            }
            keep
        })
        .collect();

    let sum: f64 = kept.iter().map(|s| s.height_ratio).sum();
    if sum > 0.0 {
        for section in &mut kept {
            section.height_ratio /= sum;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ParsedFronts {
        FrontConfig::parse(raw).sections(&SectionContext::default())
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            FrontConfig::parse("DrawerBank3"),
            FrontConfig::Preset(FrontPreset::DrawerBank3)
        );
        assert_eq!(
            FrontConfig::parse("3 Doors Graduated"),
            FrontConfig::Preset(FrontPreset::ThreeDoorsGraduated)
        );
        assert_eq!(
            FrontConfig::parse("4_drawers"),
            FrontConfig::Preset(FrontPreset::NDrawers(4))
        );
        assert_eq!(
            FrontConfig::parse("2-equal-drawers"),
            FrontConfig::Preset(FrontPreset::NEqualDrawers(2))
        );
    }

    #[test]
    fn test_drawer_bank_sections() {
        let parsed = parse("drawer_bank_3");
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.sections[0].role, SectionRole::Drawer);
        assert_eq!(parsed.sections[0].item_count, 3);
        assert_eq!(parsed.sections[0].sizing, Sizing::Graduated);
        assert!((parsed.sections[0].height_ratio - 0.45).abs() < 1e-9);
        assert_eq!(parsed.sections[1].role, SectionRole::Door);
        assert!((parsed.ratio_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_composite_order_and_counts() {
        let parsed = parse("2 drawers + door");
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.sections[0].role, SectionRole::Drawer);
        assert_eq!(parsed.sections[0].item_count, 2);
        assert_eq!(parsed.sections[1].role, SectionRole::Door);
        assert_eq!(parsed.sections[1].item_count, 1);
        assert!((parsed.sections[0].height_ratio - 0.5).abs() < 1e-9);

        let top_down = parsed.reversed();
        assert_eq!(top_down[0].role, SectionRole::Door);
    }

    #[test]
    fn test_lone_plural_doors_default_to_two() {
        let parsed = parse("doors+");
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].item_count, 2);
    }

    #[test]
    fn test_equal_marker() {
        let parsed = parse("3 equal drawers + doors");
        assert_eq!(parsed.sections[0].sizing, Sizing::Equal);
        assert_eq!(parsed.sections[1].item_count, 1);
    }

    #[test]
    fn test_custom_heights_ratio() {
        let heights = [6.0, 9.0];
        let ctx = SectionContext {
            interior_height: Some(30.0),
            custom_drawer_heights: Some(&heights),
        };
        let parsed = FrontConfig::parse("drawers + door").sections(&ctx);
        assert_eq!(parsed.sections[0].sizing, Sizing::Custom);
        assert_eq!(parsed.sections[0].item_count, 2);
        assert!((parsed.sections[0].height_ratio - 0.5).abs() < 1e-9);
        assert!((parsed.sections[1].height_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_custom_heights_filling_interior_drop_door() {
        let heights = [15.0, 15.0];
        let ctx = SectionContext {
            interior_height: Some(30.0),
            custom_drawer_heights: Some(&heights),
        };
        let parsed = FrontConfig::parse("drawers + door").sections(&ctx);
        assert_eq!(parsed.sections.len(), 1);
        assert!((parsed.ratio_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_is_flagged() {
        let parsed = parse("shelves");
        assert!(parsed.used_fallback);
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].item_count, 2);

        assert!(FrontConfig::parse("").is_fallback());
    }

    #[test]
    fn test_open_has_no_sections() {
        let parsed = parse("open");
        assert!(parsed.is_empty());
        assert!(!parsed.used_fallback);
    }

    #[test]
    fn test_unknown_part_dropped() {
        let parsed = parse("drawer + shelf + door");
        assert_eq!(parsed.sections.len(), 2);
        assert!(!parsed.used_fallback);
    }

    #[test]
    fn test_custom_preset_without_heights() {
        let parsed = parse("custom_drawers");
        assert_eq!(parsed.sections[0].item_count, 3);
        assert_eq!(parsed.sections[0].sizing, Sizing::Equal);
    }
}
