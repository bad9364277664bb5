//! The sparse voxel occupancy grid and the structures derived from it.

pub use self::height_map::{
    Footprint, HeightMapConfig, HeightfieldData, DEFAULT_HEIGHT_MAP_SIZE,
};
pub use self::voxel_grid::VoxelGrid;
pub use self::voxel_grid_clusters::face_neighbors;
pub use self::voxel_grid_intervals::ColumnInterval;

mod height_map;
mod voxel_grid;
mod voxel_grid_aabb;
mod voxel_grid_clusters;
mod voxel_grid_intervals;
mod voxel_grid_projection;
mod voxel_grid_shapes;
mod voxel_grid_storage;
