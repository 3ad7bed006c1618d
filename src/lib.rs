//! # CabinetKit
//!
//! Parametric kitchen cabinet geometry: every cabinet is decomposed into
//! oriented boxes (carcass panels, doors, drawers, handles, countertops)
//! that any renderer can consume.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Dimension tables, oriented boxes, emission traits, units
//! 2. **cabinetkit-designer** - Carcass, fronts, countertops, runs and placement
//! 3. **cabinetkit-settings** - Configuration loading and validation
//! 4. **cabinetkit** - Command line front end that integrates all crates

pub mod report;

pub use cabinetkit_designer as designer;
pub use cabinetkit_settings as settings;

pub use cabinetkit_core::{
    BoxCategory, BoxSink, CabinetKind, CornerSubtype, Dimensions, FrameStyle, MaterialTag,
    MeasurementSystem, OrientedBox,
};
pub use cabinetkit_designer::{
    ApplianceGap, CabinetBuilder, CabinetGeometry, CabinetRequest, CabinetRun, CabinetSpec,
    ConnectionMode, FrontConfig, RunLayoutOptions, RunRegistry,
};
pub use cabinetkit_settings::Config;
pub use report::{run_requests, SessionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so JSON written to stdout stays clean. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
