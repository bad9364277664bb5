use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::grid::VoxelGrid;
use crate::math::{VoxelIndex, NUM_FACE_NEIGHBORS};

/// The voxels sharing a face with `voxel`.
///
/// There are six of them, except on the boundary of the `i32` index range where the
/// neighbors that cannot be represented are omitted.
pub fn face_neighbors(voxel: VoxelIndex) -> SmallVec<[VoxelIndex; NUM_FACE_NEIGHBORS]> {
    let mut neighbors = SmallVec::new();

    for axis in 0..3 {
        for coord in [voxel[axis].checked_sub(1), voxel[axis].checked_add(1)]
            .into_iter()
            .flatten()
        {
            let mut neighbor = voxel;
            neighbor[axis] = coord;
            neighbors.push(neighbor);
        }
    }

    neighbors
}

impl<T> VoxelGrid<T> {
    /// Splits all the occupied voxels into 6-connected clusters.
    ///
    /// See [`Self::clusters_of`].
    pub fn clusters(&self) -> Vec<Vec<VoxelIndex>> {
        self.clusters_of(self.occupied())
    }

    /// Splits the given voxels into clusters of face-adjacent occupied voxels.
    ///
    /// Voxels are visited in input order and each unvisited occupied voxel seeds a new
    /// cluster, grown depth-first through face neighbors that are both occupied and part of
    /// `voxels`. Free input voxels are ignored, so the returned clusters partition exactly the
    /// occupied subset of `voxels`.
    ///
    /// The traversal uses an explicit stack: arbitrarily large connected regions do not
    /// grow the call stack.
    pub fn clusters_of(
        &self,
        voxels: impl IntoIterator<Item = VoxelIndex>,
    ) -> Vec<Vec<VoxelIndex>> {
        let voxels: Vec<_> = voxels
            .into_iter()
            .filter(|voxel| self.contains(*voxel))
            .collect();
        let candidates: HashSet<VoxelIndex> = voxels.iter().copied().collect();

        let mut clusters = vec![];
        let mut visited = HashSet::with_capacity(candidates.len());
        let mut stack = vec![];

        for seed in voxels {
            if !visited.insert(seed) {
                continue;
            }

            let mut cluster = vec![];
            stack.push(seed);

            while let Some(current) = stack.pop() {
                cluster.push(current);

                for neighbor in face_neighbors(current) {
                    if candidates.contains(&neighbor) && visited.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }

            clusters.push(cluster);
        }

        clusters
    }
}
