//! # CabinetKit Core
//!
//! Core types shared by the CabinetKit crates.
//! Provides the dimension tables, the oriented-box emission primitive,
//! the renderer/material seams, and unit handling.

pub mod constants;
pub mod dimensions;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod kinds;
pub mod units;

pub use dimensions::{Dimensions, StandardSize};
pub use emit::{
    emit_all, BoxSink, CollectingSink, EmissionReport, MaterialHandle, MaterialProvider,
    RoomMaterials,
};
pub use error::{EmissionError, GeometryError};
pub use geometry::{
    push_unique_point, Axis, BoxCategory, MaterialTag, OrientedBox, Point2, Point3, Profile,
    Vector3,
};
pub use kinds::{CabinetKind, CornerSubtype, FrameStyle};
pub use units::MeasurementSystem;
