//! # CabinetKit Designer
//!
//! Parametric cabinet geometry: carcass decomposition, door and drawer
//! layout, countertops, and multi-cabinet runs.
//!
//! Every engine produces [`cabinetkit_core::OrientedBox`] values in the
//! cabinet's local frame (x across the front, y toward the wall, z up, origin
//! at the front-left-bottom corner). Rendering is left to a
//! [`cabinetkit_core::BoxSink`].

pub mod builder;
pub mod carcass;
pub mod countertop;
pub mod decomposition;
pub mod drawers;
pub mod error;
pub mod front_config;
pub mod fronts;
pub mod placement;
pub mod record;
pub mod request;
pub mod run_layout;
pub mod session;
pub mod spec;

pub use builder::{CabinetBuilder, CabinetGeometry};
pub use carcass::decompose;
pub use countertop::{corner_countertop, run_countertop, single_countertop, CountertopOptions};
pub use decomposition::{Decomposition, Diagnostic};
pub use drawers::{calculate_drawer_heights, section_drawer_heights};
pub use error::{BuildError, BuildResult, LayoutError, RequestError, SessionError, SpecError};
pub use front_config::{
    FrontConfig, FrontPreset, FrontTemplate, ParsedFronts, PartSpec, Section, SectionContext,
    SectionRole, Sizing,
};
pub use fronts::{door_widths, handle_side, layout_fronts, HandleSide};
pub use placement::{next_position, DepthRatchet};
pub use record::{RunCollections, RunFlags, RunRecord};
pub use request::{CabinetRequest, LengthValue};
pub use run_layout::{ApplianceGap, CabinetRun, FillerStrip, RunGeometry, RunLayoutOptions};
pub use session::{ConnectionMode, RunContext, RunRegistry};
pub use spec::{CabinetSpec, CornerLayout};
