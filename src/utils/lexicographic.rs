use crate::math::VoxelIndex;

/// The `(i, j, k)` key used to order voxel indices.
///
/// `Point<i32>` only implements a componentwise partial order, so every
/// deterministic listing of voxels goes through this key instead.
#[inline]
pub fn lexicographic_key(voxel: &VoxelIndex) -> (i32, i32, i32) {
    (voxel.x, voxel.y, voxel.z)
}

/// Sorts voxel indices in lexicographic `(i, j, k)` order.
pub fn sort_lexicographic(voxels: &mut [VoxelIndex]) {
    voxels.sort_unstable_by_key(lexicographic_key);
}
