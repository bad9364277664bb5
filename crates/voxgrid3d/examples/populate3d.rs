use voxgrid3d::grid::{Footprint, HeightMapConfig, VoxelGrid};
use voxgrid3d::math::{Isometry, Vector};
use voxgrid3d::na::Point2;
use voxgrid3d::parry3d::shape::SharedShape;
use voxgrid3d::population::ParryWorld;

fn main() {
    let mut world = ParryWorld::new();
    let table = world.insert_shape(
        Isometry::translation(0.0, 0.0, 0.4),
        SharedShape::cuboid(0.6, 0.4, 0.02),
    );
    let mug = world.insert_shape(
        Isometry::translation(0.2, 0.1, 0.5),
        SharedShape::cylinder(0.08, 0.05),
    );

    let mut grid = VoxelGrid::<()>::new(Vector::repeat(0.02), Isometry::identity()).unwrap();
    let num_added = grid.add_bodies(&mut world, &[table, mug], 0.0).unwrap();
    println!("Occupied voxels: {num_added}");
    println!("Clusters: {}", grid.clusters().len());
    println!("Column intervals: {}", grid.intervals().len());

    let footprint = Footprint::from_center(Point2::origin(), 1.5).unwrap();
    let image = grid
        .create_height_map(&footprint, &HeightMapConfig::default())
        .unwrap();
    println!("Height map: {}×{}, max value {}", image.nrows(), image.ncols(), image.max());

    let num_freed = grid.remove_body(&mut world, mug, 0.0).unwrap();
    println!("Freed {num_freed} voxels after removing the mug");

    if let Some((pose, heightfield)) = grid.create_heightmap().and_then(|h| h.to_heightfield()) {
        println!(
            "Heightfield of {}×{} samples at {}",
            heightfield.nrows(),
            heightfield.ncols(),
            pose.translation.vector.transpose()
        );
    }
}
