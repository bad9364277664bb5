use alloc::collections::BTreeMap;

use parry3d::bounding_volume::Aabb;

use crate::grid::VoxelGrid;
use crate::math::{Point, VoxelIndex};

/// A maximal run of vertically contiguous occupied voxels.
///
/// The interval covers the voxels `(i, j, k)` for every `k` in `k_min..=k_max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ColumnInterval {
    /// The first horizontal index of the column.
    pub i: i32,
    /// The second horizontal index of the column.
    pub j: i32,
    /// The lowest vertical index of the run (inclusive).
    pub k_min: i32,
    /// The highest vertical index of the run (inclusive).
    pub k_max: i32,
}

impl ColumnInterval {
    /// The number of voxels covered by this interval.
    #[inline]
    pub fn len(&self) -> usize {
        (i64::from(self.k_max) - i64::from(self.k_min)) as usize + 1
    }

    /// Always `false`: an interval covers at least one voxel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The lowest voxel of the run.
    #[inline]
    pub fn bottom(&self) -> VoxelIndex {
        Point::new(self.i, self.j, self.k_min)
    }

    /// The highest voxel of the run.
    #[inline]
    pub fn top(&self) -> VoxelIndex {
        Point::new(self.i, self.j, self.k_max)
    }

    /// Iterates through the voxels of this interval, from bottom to top.
    pub fn voxels(&self) -> impl Iterator<Item = VoxelIndex> {
        let (i, j) = (self.i, self.j);
        (self.k_min..=self.k_max).map(move |k| Point::new(i, j, k))
    }
}

impl<T> VoxelGrid<T> {
    /// Compresses all the occupied voxels into vertical intervals.
    ///
    /// See [`Self::intervals_of`].
    pub fn intervals(&self) -> Vec<ColumnInterval> {
        self.intervals_of(self.occupied())
    }

    /// Compresses the given voxels into maximal vertical runs.
    ///
    /// The voxels are grouped by `(i, j)` column and each column is split wherever two
    /// consecutive `k` differ by more than one. Columns are listed in lexicographic `(i, j)`
    /// order, and the intervals of one column by increasing `k`. Duplicate input voxels are
    /// merged.
    pub fn intervals_of(&self, voxels: impl IntoIterator<Item = VoxelIndex>) -> Vec<ColumnInterval> {
        let mut heights: BTreeMap<(i32, i32), Vec<i32>> = BTreeMap::new();
        for voxel in voxels {
            heights.entry((voxel.x, voxel.y)).or_default().push(voxel.z);
        }

        let mut intervals = vec![];

        for ((i, j), mut ks) in heights {
            ks.sort_unstable();
            ks.dedup();

            // Never empty: a column only exists once one of its voxels was pushed.
            let mut k_min = ks[0];
            let mut k_max = ks[0];

            for k in ks.into_iter().skip(1) {
                if k == k_max + 1 {
                    k_max = k;
                } else {
                    intervals.push(ColumnInterval { i, j, k_min, k_max });
                    k_min = k;
                    k_max = k;
                }
            }

            intervals.push(ColumnInterval { i, j, k_min, k_max });
        }

        intervals
    }

    /// The box covered by an interval, in the grid frame.
    pub fn aabb_from_interval(&self, interval: &ColumnInterval) -> Aabb {
        Aabb::new(
            self.lower_from_voxel(interval.bottom()),
            self.upper_from_voxel(interval.top()),
        )
    }
}
