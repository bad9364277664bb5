use parry3d::bounding_volume::Aabb;

use crate::error::VoxelGridError;
use crate::math::{Isometry, Point, Real, Translation, Vector, VoxelIndex};
use crate::utils::hashmap::HashMap;

/// A sparse voxel occupancy grid.
///
/// The grid partitions its local frame into boxes of size `resolutions`. The voxel with
/// index `(i, j, k)` covers the semi-open box `[index * res, (index + 1) * res)` of the
/// grid frame: a point lying exactly on the upper boundary of a voxel belongs to the
/// next voxel. The grid frame is placed in the world by the `world_from_grid` isometry.
///
/// Occupancy is sparse: a voxel is occupied if and only if it has an entry in the grid.
/// Each newly occupied voxel receives a payload created by the grid's default-value
/// factory. Free voxels never have an entry.
///
/// Cloning a grid gives an independent occupancy map sharing the same resolution,
/// transform, and default-value factory.
///
/// # Examples
///
/// ```
/// use voxgrid3d::grid::VoxelGrid;
/// use voxgrid3d::math::{Isometry, Point, Vector};
///
/// let mut grid = VoxelGrid::<u32>::new(Vector::new(0.5, 0.5, 0.25), Isometry::identity()).unwrap();
///
/// // X divided by 0.5, Y by 0.5, Z by 0.25.
/// let voxel = grid.voxel_from_point(&Point::new(1.2, -0.1, 0.3));
/// assert_eq!(voxel, Point::new(2, -1, 1));
///
/// assert!(grid.set_occupied(voxel));
/// assert_eq!(grid.get_value(voxel), Ok(&0));
/// ```
#[derive(Clone, Debug)]
pub struct VoxelGrid<T = ()> {
    pub(super) resolutions: Vector<Real>,
    pub(super) world_from_grid: Isometry<Real>,
    pub(super) default_value: fn() -> T,
    pub(super) values: HashMap<VoxelIndex, T>,
}

impl<T: Default> VoxelGrid<T> {
    /// Creates an empty grid whose occupied voxels receive `T::default()` as payload.
    ///
    /// Fails with [`VoxelGridError::InvalidConfiguration`] if any component of
    /// `resolutions` is not finite and strictly positive.
    pub fn new(
        resolutions: Vector<Real>,
        world_from_grid: Isometry<Real>,
    ) -> Result<Self, VoxelGridError> {
        Self::with_default(resolutions, world_from_grid, T::default)
    }
}

impl<T> VoxelGrid<T> {
    /// Creates an empty grid whose occupied voxels receive `default_value()` as payload.
    pub fn with_default(
        resolutions: Vector<Real>,
        world_from_grid: Isometry<Real>,
        default_value: fn() -> T,
    ) -> Result<Self, VoxelGridError> {
        // NaN components fail the comparison and are rejected too.
        if resolutions.iter().any(|r| !(*r > 0.0 && r.is_finite())) {
            return Err(VoxelGridError::InvalidConfiguration(resolutions));
        }

        Ok(Self {
            resolutions,
            world_from_grid,
            default_value,
            values: HashMap::default(),
        })
    }

    /// The size of a voxel along each axis of the grid frame.
    #[inline]
    pub fn resolutions(&self) -> &Vector<Real> {
        &self.resolutions
    }

    /// The pose of the grid frame in the world.
    #[inline]
    pub fn world_from_grid(&self) -> &Isometry<Real> {
        &self.world_from_grid
    }

    /// Expresses a world-space point in the grid frame.
    #[inline]
    pub fn to_grid(&self, point_world: &Point<Real>) -> Point<Real> {
        self.world_from_grid.inverse_transform_point(point_world)
    }

    /// Expresses a grid-frame point in world-space.
    #[inline]
    pub fn to_world(&self, point_grid: &Point<Real>) -> Point<Real> {
        self.world_from_grid.transform_point(point_grid)
    }

    /// The index of the voxel containing the given world-space point.
    ///
    /// This is defined for every point, independently of whether the voxel is occupied.
    /// Indices saturate: points beyond the `i32` index range along an axis map to the
    /// voxel at `i32::MIN` or `i32::MAX` on that axis, and a NaN coordinate maps to `0`.
    pub fn voxel_from_point(&self, point_world: &Point<Real>) -> VoxelIndex {
        self.to_grid(point_world)
            .coords
            .component_div(&self.resolutions)
            .map(|x| x.floor() as i32)
            .into()
    }

    fn point_from_voxel(&self, voxel: VoxelIndex, offset: Real) -> Point<Real> {
        (voxel.cast::<Real>() + Vector::repeat(offset))
            .coords
            .component_mul(&self.resolutions)
            .into()
    }

    /// The lower corner of the voxel, in the grid frame.
    pub fn lower_from_voxel(&self, voxel: VoxelIndex) -> Point<Real> {
        self.point_from_voxel(voxel, 0.0)
    }

    /// The center of the voxel, in the grid frame.
    pub fn center_from_voxel(&self, voxel: VoxelIndex) -> Point<Real> {
        self.point_from_voxel(voxel, 0.5)
    }

    /// The upper corner of the voxel, in the grid frame.
    ///
    /// This point belongs to the voxel `voxel + (1, 1, 1)`.
    pub fn upper_from_voxel(&self, voxel: VoxelIndex) -> Point<Real> {
        self.point_from_voxel(voxel, 1.0)
    }

    /// The box covered by the voxel, in the grid frame.
    pub fn aabb_from_voxel(&self, voxel: VoxelIndex) -> Aabb {
        Aabb::new(self.lower_from_voxel(voxel), self.upper_from_voxel(voxel))
    }

    /// The world-space pose of the voxel center, with the orientation of the grid.
    pub fn pose_from_voxel(&self, voxel: VoxelIndex) -> Isometry<Real> {
        let center = self.center_from_voxel(voxel);
        self.world_from_grid * Translation::from(center.coords)
    }

    /// The eight corners of the voxel, in world-space.
    pub fn vertices_from_voxel(&self, voxel: VoxelIndex) -> [Point<Real>; 8] {
        self.aabb_from_voxel(voxel)
            .vertices()
            .map(|pt| self.to_world(&pt))
    }
}
