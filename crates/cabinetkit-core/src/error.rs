//! Error types for geometry construction and emission
//!
//! Both kinds are recoverable: a degenerate box is skipped and a rejected
//! emission is counted, neither aborts the enclosing operation.

use thiserror::Error;

/// Problems with an individual box or face.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A box has zero or near-zero extent
    #[error("Degenerate geometry in {group}: {reason}")]
    Degenerate {
        /// Scene group of the skipped box.
        group: String,
        /// What made it degenerate.
        reason: String,
    },

    /// A polygon face collapsed below three distinct vertices
    #[error("Face in {group} has only {count} distinct vertices")]
    TooFewVertices {
        /// Scene group of the skipped face.
        group: String,
        /// Distinct vertices that remained.
        count: usize,
    },
}

/// Failures reported by the rendering collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmissionError {
    /// The host refused to create the face or solid
    #[error("Host rejected {group}: {reason}")]
    Rejected {
        /// Scene group of the rejected box.
        group: String,
        /// Host-provided reason.
        reason: String,
    },

    /// The sink cannot represent this profile
    #[error("Unsupported profile for {0}")]
    Unsupported(String),
}
