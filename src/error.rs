//! Errors raised by voxel grid construction and lookups.

use crate::math::{Real, Vector, VoxelIndex};

/// Error indicating that a voxel grid operation could not be completed.
///
/// Operations deriving structures from the grid (clusters, intervals, height maps)
/// never fail: an empty grid yields an empty result (or `None`) instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelGridError {
    /// The voxel resolution must be finite and strictly positive along every axis.
    #[error("invalid configuration: the resolution {0:?} must be finite and strictly positive along every axis")]
    InvalidConfiguration(Vector<Real>),
    /// A height map footprint or pixel configuration is degenerate.
    #[error("invalid configuration: {0}")]
    InvalidRaster(&'static str),
    /// The requested voxel is not occupied.
    #[error("the voxel {0:?} is not occupied")]
    NotFound(VoxelIndex),
}
