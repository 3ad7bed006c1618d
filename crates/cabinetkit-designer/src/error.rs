//! Error types for the designer crate.
//!
//! Hard failures (invalid spec, unknown run, bad request) abort before any
//! geometry exists. Problems found while building geometry are reported as
//! [`crate::Diagnostic`] entries instead.

use thiserror::Error;

/// Reasons a [`crate::CabinetSpec`] fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// The cabinet type string did not match a known class.
    #[error("Unrecognized cabinet type: {0}")]
    UnrecognizedKind(String),

    /// The frame type string was neither framed nor frameless.
    #[error("Unrecognized frame type: {0}")]
    UnrecognizedFrame(String),

    /// A dimension is zero, negative, or not finite.
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A corner class was requested without a corner subtype.
    #[error("Corner cabinet '{0}' requires a corner type")]
    MissingCornerSubtype(String),

    /// A corner subtype was given for a non-corner class.
    #[error("Corner type given for non-corner cabinet '{0}'")]
    UnexpectedCornerSubtype(String),
}

/// Errors from building a cabinet's geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The spec was rejected before any geometry was produced.
    #[error("Invalid cabinet specification: {0}")]
    InvalidSpec(#[from] SpecError),

    /// The dimension table itself is unusable.
    #[error("Invalid dimension table: {0}")]
    InvalidDimensions(String),
}

/// Errors from run construction and layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The run length is zero, negative, or not finite.
    #[error("Invalid run length: {0}")]
    InvalidLength(f64),

    /// Two appliance gaps overlap.
    #[error("Appliance gaps overlap: '{first}' and '{second}'")]
    OverlappingGaps { first: String, second: String },

    /// A gap lies partly or fully outside the run.
    #[error("Appliance gap '{label}' at {position} (width {width}) lies outside the run")]
    GapOutOfRange {
        label: String,
        position: f64,
        width: f64,
    },

    /// The standard width list is empty or contains unusable values.
    #[error("Invalid standard widths: {0}")]
    InvalidWidths(String),
}

/// Errors from the run registry / session context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// An extend-run request named a run that does not exist.
    #[error("Run not found: {0}")]
    RunNotFound(String),

    /// A new run was requested with a name already in use.
    #[error("Run already exists: {0}")]
    DuplicateRun(String),

    /// The connection mode string was not understood.
    #[error("Unknown connection mode: {0}")]
    UnknownMode(String),

    /// The cabinet could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Errors converting an input parameter set into a spec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// A length field could not be parsed.
    #[error("Invalid length for '{field}': {reason}")]
    InvalidLength { field: &'static str, reason: String },

    /// The connection mode was not understood.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;
