use parry3d::bounding_volume::Aabb;
use smallvec::SmallVec;

use crate::grid::VoxelGrid;
use crate::math::{Point, Real, VoxelIndex};
use crate::population::{CollisionBackend, ScopedProbe};
use crate::utils::{self, hashmap::HashMap};

/// The body parts whose AABB covers a candidate voxel.
///
/// Most voxels are covered by a single part.
pub type CoveringLinks<B> =
    SmallVec<[(<B as CollisionBackend>::Body, <B as CollisionBackend>::Link); 1]>;

impl<T> VoxelGrid<T> {
    /// Marks a world-space point's voxel as occupied.
    ///
    /// Returns `false` if it already was.
    pub fn add_point(&mut self, point: &Point<Real>) -> bool {
        self.set_occupied(self.voxel_from_point(point))
    }

    /// Marks the voxels of all the given world-space points as occupied.
    ///
    /// Returns the number of newly occupied voxels.
    pub fn add_points<'a>(&mut self, points: impl IntoIterator<Item = &'a Point<Real>>) -> usize {
        points
            .into_iter()
            .filter(|point| self.add_point(point))
            .count()
    }

    /// Marks every voxel covering a world-space AABB as occupied.
    ///
    /// Returns the number of newly occupied voxels.
    pub fn add_aabb(&mut self, aabb: &Aabb) -> usize {
        let voxels: Vec<_> = self.voxels_from_aabb(aabb).collect();
        voxels
            .into_iter()
            .filter(|voxel| self.set_occupied(*voxel))
            .count()
    }

    /// The candidate voxels touched by the AABBs of the given bodies, with the body parts
    /// covering each of them.
    ///
    /// Only voxels whose occupancy equals `occupied` are listed. The candidates are sorted
    /// in lexicographic order.
    pub fn affected_voxels<B: CollisionBackend>(
        &self,
        backend: &B,
        bodies: &[B::Body],
        occupied: bool,
    ) -> Result<Vec<(VoxelIndex, CoveringLinks<B>)>, B::Error> {
        let mut candidates: HashMap<VoxelIndex, CoveringLinks<B>> = HashMap::default();

        for body in bodies {
            for link in backend.links(*body)? {
                let aabb = backend.link_aabb(*body, link)?;
                for voxel in self.occupied_from_aabb(&aabb, Some(occupied)) {
                    candidates.entry(voxel).or_default().push((*body, link));
                }
            }
        }

        let mut candidates: Vec<_> = candidates.into_iter().collect();
        candidates.sort_unstable_by_key(|(voxel, _)| utils::lexicographic_key(voxel));
        Ok(candidates)
    }

    /// Places the probe at the voxel and tests it against every given body part.
    fn probe_voxel<B: CollisionBackend>(
        &self,
        probe: &mut ScopedProbe<'_, B>,
        voxel: VoxelIndex,
        links: &[(B::Body, B::Link)],
        threshold: Real,
    ) -> Result<bool, B::Error> {
        probe.place(&self.pose_from_voxel(voxel))?;

        for (body, link) in links {
            if probe.overlaps(*body, *link, threshold)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Marks as occupied every free voxel that overlaps one of the given bodies.
    ///
    /// Candidate voxels are the free voxels covering the AABB of any part of any body. A
    /// single probe of the size of a voxel is created for the whole operation and moved to
    /// each candidate; the voxel becomes occupied if the probe is within `threshold` of one
    /// of the parts covering it.
    ///
    /// Returns the number of newly occupied voxels. If the backend fails, the operation stops:
    /// voxels already decided remain occupied and the probe is destroyed.
    pub fn add_bodies<B: CollisionBackend>(
        &mut self,
        backend: &mut B,
        bodies: &[B::Body],
        threshold: Real,
    ) -> Result<usize, B::Error> {
        let candidates = self.affected_voxels(&*backend, bodies, false)?;
        let mut probe = ScopedProbe::acquire(backend, *self.resolutions())?;
        let mut num_added = 0;

        for (voxel, links) in &candidates {
            if self.probe_voxel(&mut probe, *voxel, links, threshold)? && self.set_occupied(*voxel)
            {
                num_added += 1;
            }
        }

        probe.release()?;
        log::debug!(
            "occupied {num_added} voxels out of {} candidates from {} bodies",
            candidates.len(),
            bodies.len()
        );
        Ok(num_added)
    }

    /// Marks as occupied every free voxel that overlaps the given body.
    ///
    /// See [`Self::add_bodies`].
    pub fn add_body<B: CollisionBackend>(
        &mut self,
        backend: &mut B,
        body: B::Body,
        threshold: Real,
    ) -> Result<usize, B::Error> {
        self.add_bodies(backend, &[body], threshold)
    }

    /// Frees every occupied voxel that overlaps one of the given bodies.
    ///
    /// This mirrors [`Self::add_bodies`] on the occupied voxels: a voxel is freed when the probe
    /// placed at its pose is within `threshold` of a part of a body being removed. Calling this
    /// with the bodies and threshold used to populate the grid frees exactly the voxels they
    /// occupied, as long as the bodies did not move. Occupied voxels away from the bodies are
    /// left untouched.
    ///
    /// Returns the number of freed voxels. Failure semantics are the same as for
    /// [`Self::add_bodies`].
    pub fn remove_bodies<B: CollisionBackend>(
        &mut self,
        backend: &mut B,
        bodies: &[B::Body],
        threshold: Real,
    ) -> Result<usize, B::Error> {
        let candidates = self.affected_voxels(&*backend, bodies, true)?;
        let mut probe = ScopedProbe::acquire(backend, *self.resolutions())?;
        let mut num_removed = 0;

        for (voxel, links) in &candidates {
            if self.probe_voxel(&mut probe, *voxel, links, threshold)? && self.set_free(*voxel) {
                num_removed += 1;
            }
        }

        probe.release()?;
        log::debug!(
            "freed {num_removed} voxels out of {} candidates from {} bodies",
            candidates.len(),
            bodies.len()
        );
        Ok(num_removed)
    }

    /// Frees every occupied voxel that overlaps the given body.
    ///
    /// See [`Self::remove_bodies`].
    pub fn remove_body<B: CollisionBackend>(
        &mut self,
        backend: &mut B,
        body: B::Body,
        threshold: Real,
    ) -> Result<usize, B::Error> {
        self.remove_bodies(backend, &[body], threshold)
    }
}
