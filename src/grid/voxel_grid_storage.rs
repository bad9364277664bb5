use crate::error::VoxelGridError;
use crate::grid::VoxelGrid;
use crate::math::VoxelIndex;
use crate::utils;
use crate::utils::hashmap::Entry;

impl<T> VoxelGrid<T> {
    /// The number of occupied voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is no voxel occupied?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Is the given voxel occupied?
    #[inline]
    pub fn contains(&self, voxel: VoxelIndex) -> bool {
        self.values.contains_key(&voxel)
    }

    /// The payload of an occupied voxel.
    pub fn get_value(&self, voxel: VoxelIndex) -> Result<&T, VoxelGridError> {
        self.values
            .get(&voxel)
            .ok_or(VoxelGridError::NotFound(voxel))
    }

    /// A mutable reference to the payload of an occupied voxel.
    pub fn get_value_mut(&mut self, voxel: VoxelIndex) -> Result<&mut T, VoxelGridError> {
        self.values
            .get_mut(&voxel)
            .ok_or(VoxelGridError::NotFound(voxel))
    }

    /// Marks the voxel as occupied with the given payload.
    ///
    /// Returns the payload previously stored for this voxel, if it was occupied.
    pub fn set_value(&mut self, voxel: VoxelIndex, value: T) -> Option<T> {
        self.values.insert(voxel, value)
    }

    /// Frees the voxel, returning its payload if it was occupied.
    pub fn remove_value(&mut self, voxel: VoxelIndex) -> Option<T> {
        #[cfg(feature = "enhanced-determinism")]
        let removed = self.values.shift_remove(&voxel);
        #[cfg(not(feature = "enhanced-determinism"))]
        let removed = self.values.remove(&voxel);
        removed
    }

    /// Marks the voxel as occupied with a default payload.
    ///
    /// Returns `false` without touching the existing payload if the voxel was
    /// already occupied.
    pub fn set_occupied(&mut self, voxel: VoxelIndex) -> bool {
        match self.values.entry(voxel) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let _ = entry.insert((self.default_value)());
                true
            }
        }
    }

    /// Marks the voxel as free.
    ///
    /// Returns `false` if the voxel was already free.
    pub fn set_free(&mut self, voxel: VoxelIndex) -> bool {
        self.remove_value(voxel).is_some()
    }

    /// All the occupied voxels, in lexicographic `(i, j, k)` order.
    pub fn occupied(&self) -> Vec<VoxelIndex> {
        let mut voxels: Vec<_> = self.values.keys().copied().collect();
        utils::sort_lexicographic(&mut voxels);
        voxels
    }

    /// Iterates through the occupied voxels and their payload, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&VoxelIndex, &T)> + '_ {
        self.values.iter()
    }
}
