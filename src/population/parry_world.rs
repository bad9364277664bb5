use parry3d::bounding_volume::Aabb;
use parry3d::query;
use parry3d::shape::{Cuboid, Shape, SharedShape};
use slab::Slab;

use crate::math::{Isometry, Real, Vector};
use crate::population::CollisionBackend;

/// A handle to a body inserted into a [`ParryWorld`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

/// A handle to a probe created by a [`ParryWorld`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ProbeHandle(usize);

/// Errors raised by the queries of a [`ParryWorld`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParryWorldError {
    /// The body does not exist, or was removed.
    #[error("unknown body {0:?}")]
    UnknownBody(BodyHandle),
    /// The body exists but has no link with this index.
    #[error("the body {body:?} has no link {link}")]
    UnknownLink {
        /// The body that was queried.
        body: BodyHandle,
        /// The missing link index.
        link: usize,
    },
    /// The probe does not exist, or was destroyed.
    #[error("unknown probe {0:?}")]
    UnknownProbe(usize),
    /// The distance between the probe and a link shape cannot be computed.
    #[error("distance queries between the link {link} of {body:?} and a cuboid are not supported")]
    UnsupportedQuery {
        /// The body that was queried.
        body: BodyHandle,
        /// The link whose shape is not supported.
        link: usize,
    },
}

/// A rigid part of a body, positioned relative to the body.
#[derive(Clone)]
pub struct BodyLink {
    /// The pose of the link relative to its body.
    pub local_pose: Isometry<Real>,
    /// The shape of the link.
    pub shape: SharedShape,
}

#[derive(Clone)]
struct WorldBody {
    pose: Isometry<Real>,
    links: Vec<BodyLink>,
}

struct WorldProbe {
    shape: Cuboid,
    pose: Isometry<Real>,
}

/// A minimal collection of rigid bodies backed by `parry3d` shapes.
///
/// Each body is a set of links (shapes at fixed poses relative to the body). Bodies and
/// probes are stored in slabs so that handles stay valid until their removal.
#[derive(Default)]
pub struct ParryWorld {
    bodies: Slab<WorldBody>,
    probes: Slab<WorldProbe>,
}

impl ParryWorld {
    /// An empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body made of the given links.
    pub fn insert_body(&mut self, pose: Isometry<Real>, links: Vec<BodyLink>) -> BodyHandle {
        BodyHandle(self.bodies.insert(WorldBody { pose, links }))
    }

    /// Inserts a body made of a single shape located at the body origin.
    pub fn insert_shape(&mut self, pose: Isometry<Real>, shape: SharedShape) -> BodyHandle {
        self.insert_body(
            pose,
            vec![BodyLink {
                local_pose: Isometry::identity(),
                shape,
            }],
        )
    }

    /// Removes a body, returning `false` if it did not exist.
    pub fn remove_body(&mut self, body: BodyHandle) -> bool {
        self.bodies.try_remove(body.0).is_some()
    }

    /// Moves a body.
    pub fn set_body_pose(
        &mut self,
        body: BodyHandle,
        pose: Isometry<Real>,
    ) -> Result<(), ParryWorldError> {
        let world_body = self
            .bodies
            .get_mut(body.0)
            .ok_or(ParryWorldError::UnknownBody(body))?;
        world_body.pose = pose;
        Ok(())
    }

    /// The number of probes currently alive.
    pub fn num_probes(&self) -> usize {
        self.probes.len()
    }

    fn link(
        &self,
        body: BodyHandle,
        link: usize,
    ) -> Result<(Isometry<Real>, &BodyLink), ParryWorldError> {
        let world_body = self
            .bodies
            .get(body.0)
            .ok_or(ParryWorldError::UnknownBody(body))?;
        let part = world_body
            .links
            .get(link)
            .ok_or(ParryWorldError::UnknownLink { body, link })?;
        Ok((world_body.pose * part.local_pose, part))
    }
}

impl CollisionBackend for ParryWorld {
    type Body = BodyHandle;
    type Link = usize;
    type Probe = ProbeHandle;
    type Error = ParryWorldError;

    fn links(&self, body: BodyHandle) -> Result<Vec<usize>, ParryWorldError> {
        let world_body = self
            .bodies
            .get(body.0)
            .ok_or(ParryWorldError::UnknownBody(body))?;
        Ok((0..world_body.links.len()).collect())
    }

    fn link_aabb(&self, body: BodyHandle, link: usize) -> Result<Aabb, ParryWorldError> {
        let (pose, part) = self.link(body, link)?;
        Ok(part.shape.compute_aabb(&pose))
    }

    fn create_probe(&mut self, dimensions: Vector<Real>) -> Result<ProbeHandle, ParryWorldError> {
        let probe = WorldProbe {
            shape: Cuboid::new(dimensions / 2.0),
            pose: Isometry::identity(),
        };
        Ok(ProbeHandle(self.probes.insert(probe)))
    }

    fn place_probe(
        &mut self,
        probe: &ProbeHandle,
        pose: &Isometry<Real>,
    ) -> Result<(), ParryWorldError> {
        let world_probe = self
            .probes
            .get_mut(probe.0)
            .ok_or(ParryWorldError::UnknownProbe(probe.0))?;
        world_probe.pose = *pose;
        Ok(())
    }

    fn overlaps(
        &self,
        body: BodyHandle,
        link: usize,
        probe: &ProbeHandle,
        threshold: Real,
    ) -> Result<bool, ParryWorldError> {
        let world_probe = self
            .probes
            .get(probe.0)
            .ok_or(ParryWorldError::UnknownProbe(probe.0))?;
        let (pose, part) = self.link(body, link)?;
        let dist = query::distance(&pose, &*part.shape, &world_probe.pose, &world_probe.shape)
            .map_err(|_| ParryWorldError::UnsupportedQuery { body, link })?;
        Ok(dist <= threshold)
    }

    fn destroy_probe(&mut self, probe: ProbeHandle) -> Result<(), ParryWorldError> {
        self.probes
            .try_remove(probe.0)
            .map(|_| ())
            .ok_or(ParryWorldError::UnknownProbe(probe.0))
    }
}
