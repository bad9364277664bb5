use voxgrid3d::grid::VoxelGrid;
use voxgrid3d::math::{Isometry, Point, Vector};

fn main() {
    let mut grid = VoxelGrid::<()>::new(Vector::repeat(0.1), Isometry::identity()).unwrap();

    assert!(grid.add_point(&Point::new(0.05, 0.05, 0.05)));
    assert!(grid.add_point(&Point::new(0.05, 0.05, 0.15)));
    assert!(!grid.add_point(&Point::new(0.01, 0.02, 0.03)));

    assert_eq!(grid.clusters().len(), 1);
    assert_eq!(grid.project2d(), vec![Point::new(0, 0, 1)]);
}
