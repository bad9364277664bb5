use parry3d::shape::{Compound, SharedShape};

use crate::grid::VoxelGrid;
use crate::math::VoxelIndex;

impl<T> VoxelGrid<T> {
    /// Builds a single compound shape made of one cuboid per given voxel.
    ///
    /// Each cuboid has the size of a voxel and is placed at the voxel's world-space pose, so
    /// the compound is expressed in world-space. All the cuboids share the same underlying
    /// shape.
    ///
    /// Returns `None` if `voxels` is empty since a compound needs at least one part.
    pub fn to_compound(&self, voxels: impl IntoIterator<Item = VoxelIndex>) -> Option<Compound> {
        let half_extents = self.resolutions / 2.0;
        let cuboid = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);
        let parts: Vec<_> = voxels
            .into_iter()
            .map(|voxel| (self.pose_from_voxel(voxel), cuboid.clone()))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(Compound::new(parts))
        }
    }
}
