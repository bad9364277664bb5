use core::fmt::Debug;
use core::hash::Hash;

use parry3d::bounding_volume::Aabb;

use crate::math::{Isometry, Real, Vector};

/// The collision capabilities a voxel grid needs to populate itself from rigid bodies.
///
/// The grid never owns body geometry. Instead it enumerates the parts (links) of each body,
/// asks for their world-space bounding boxes, and tests them against a *probe*: a temporary
/// box the size of one voxel, moved to each candidate voxel in turn.
///
/// Queries are expected to be side-effect free on the grid and independent of the order in
/// which voxels are tested. Any error aborts the enclosing bulk operation.
pub trait CollisionBackend {
    /// A handle identifying a rigid body.
    type Body: Copy + Eq + Hash + Debug;
    /// A handle identifying one part of a rigid body.
    type Link: Copy + Eq + Hash + Debug;
    /// A handle identifying a probe volume.
    type Probe;
    /// The error returned when a query cannot be answered.
    type Error: core::error::Error;

    /// All the parts of the given body.
    fn links(&self, body: Self::Body) -> Result<Vec<Self::Link>, Self::Error>;

    /// The world-space AABB of a part of a body.
    fn link_aabb(&self, body: Self::Body, link: Self::Link) -> Result<Aabb, Self::Error>;

    /// Creates a box-shaped probe with the given full dimensions.
    fn create_probe(&mut self, dimensions: Vector<Real>) -> Result<Self::Probe, Self::Error>;

    /// Moves the probe to the given world-space pose.
    fn place_probe(&mut self, probe: &Self::Probe, pose: &Isometry<Real>)
        -> Result<(), Self::Error>;

    /// Are the body part and the probe closer than `threshold`?
    ///
    /// Touching or penetrating shapes are at distance zero, so with a `threshold` of zero
    /// this tests for contact.
    fn overlaps(
        &self,
        body: Self::Body,
        link: Self::Link,
        probe: &Self::Probe,
        threshold: Real,
    ) -> Result<bool, Self::Error>;

    /// Destroys a probe created by [`Self::create_probe`].
    fn destroy_probe(&mut self, probe: Self::Probe) -> Result<(), Self::Error>;
}
