use parry3d::bounding_volume::Aabb;

use crate::grid::VoxelGrid;
use crate::math::{Point, VoxelIndex};

impl<T> VoxelGrid<T> {
    /// The inclusive range of voxel indices covering a world-space AABB.
    ///
    /// All eight corners of the box are mapped to voxel indices and the componentwise
    /// extrema are returned. This stays correct when the grid frame is rotated relative to
    /// the world, in which case the range covers the grid-aligned bounding box of the
    /// rotated corners.
    pub fn voxel_range_from_aabb(&self, aabb: &Aabb) -> [VoxelIndex; 2] {
        let corners = aabb.vertices().map(|pt| self.voxel_from_point(&pt));
        let mut mins = corners[0];
        let mut maxs = corners[0];

        for corner in &corners[1..] {
            mins = mins.coords.zip_map(&corner.coords, |a, b| a.min(b)).into();
            maxs = maxs.coords.zip_map(&corner.coords, |a, b| a.max(b)).into();
        }

        [mins, maxs]
    }

    /// Every voxel index in the range covering a world-space AABB, occupied or not.
    ///
    /// Indices are yielded with `i` varying slowest and `k` fastest.
    pub fn voxels_from_aabb(&self, aabb: &Aabb) -> impl Iterator<Item = VoxelIndex> {
        let [mins, maxs] = self.voxel_range_from_aabb(aabb);
        (mins.x..=maxs.x).flat_map(move |i| {
            (mins.y..=maxs.y)
                .flat_map(move |j| (mins.z..=maxs.z).map(move |k| Point::new(i, j, k)))
        })
    }

    /// The voxels covering a world-space AABB, filtered by occupancy.
    ///
    /// With `Some(true)` only occupied voxels are yielded, with `Some(false)` only free
    /// ones, and with `None` every voxel of the range.
    pub fn occupied_from_aabb<'a>(
        &'a self,
        aabb: &Aabb,
        occupied: Option<bool>,
    ) -> impl Iterator<Item = VoxelIndex> + 'a {
        self.voxels_from_aabb(aabb)
            .filter(move |voxel| occupied.map_or(true, |occ| self.contains(*voxel) == occ))
    }
}
