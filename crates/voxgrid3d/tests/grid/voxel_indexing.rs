use approx::assert_relative_eq;
use voxgrid3d::grid::VoxelGrid;
use voxgrid3d::math::{Isometry, Point, Real, Vector};
use voxgrid3d::VoxelGridError;

fn rotated_pose() -> Isometry<Real> {
    Isometry::new(Vector::new(1.0, -2.0, 0.5), Vector::new(0.3, -0.7, 1.1))
}

fn random_voxel(rng: &mut oorandom::Rand32) -> Point<i32> {
    Point::new(
        rng.rand_range(0..200) as i32 - 100,
        rng.rand_range(0..200) as i32 - 100,
        rng.rand_range(0..200) as i32 - 100,
    )
}

#[test]
fn voxel_center_round_trip() {
    let mut rng = oorandom::Rand32::new(42);

    for pose in [Isometry::identity(), rotated_pose()] {
        let grid = VoxelGrid::<()>::new(Vector::new(0.1, 0.25, 0.05), pose).unwrap();

        for _ in 0..1000 {
            let voxel = random_voxel(&mut rng);
            let center = grid.to_world(&grid.center_from_voxel(voxel));
            assert_eq!(grid.voxel_from_point(&center), voxel);
        }
    }
}

#[test]
fn upper_boundary_belongs_to_next_voxel() {
    let grid = VoxelGrid::<()>::new(Vector::new(0.5, 0.25, 1.0), Isometry::identity()).unwrap();
    let voxel = Point::new(2, -3, 0);

    assert_eq!(grid.lower_from_voxel(voxel), Point::new(1.0, -0.75, 0.0));
    assert_eq!(grid.center_from_voxel(voxel), Point::new(1.25, -0.625, 0.5));
    assert_eq!(grid.upper_from_voxel(voxel), Point::new(1.5, -0.5, 1.0));

    // The lower corner is inside the voxel, the upper corner is not.
    assert_eq!(grid.voxel_from_point(&grid.lower_from_voxel(voxel)), voxel);
    assert_eq!(
        grid.voxel_from_point(&grid.upper_from_voxel(voxel)),
        voxel + Vector::repeat(1)
    );

    // A point on a single upper face only moves along that axis.
    assert_eq!(
        grid.voxel_from_point(&Point::new(1.5, -0.6, 0.5)),
        Point::new(3, -3, 0)
    );
    assert_eq!(
        grid.voxel_from_point(&Point::new(1.4999, -0.6, 0.5)),
        Point::new(2, -3, 0)
    );
}

#[test]
fn negative_coordinates_floor_towards_negative_infinity() {
    let grid = VoxelGrid::<()>::new(Vector::repeat(0.5), Isometry::identity()).unwrap();
    assert_eq!(
        grid.voxel_from_point(&Point::new(-0.1, -0.5, -0.6)),
        Point::new(-1, -1, -2)
    );
    assert_eq!(grid.voxel_from_point(&Point::origin()), Point::origin());
}

#[test]
fn voxel_indices_follow_the_grid_pose() {
    let pose = Isometry::translation(10.0, 0.0, -1.0);
    let grid = VoxelGrid::<()>::new(Vector::repeat(1.0), pose).unwrap();

    assert_eq!(
        grid.voxel_from_point(&Point::new(10.5, 0.5, -0.5)),
        Point::new(0, 0, 0)
    );
    assert_eq!(grid.to_grid(&Point::new(10.5, 0.5, -0.5)), Point::new(0.5, 0.5, 0.5));
    assert_eq!(grid.to_world(&Point::new(0.5, 0.5, 0.5)), Point::new(10.5, 0.5, -0.5));
}

#[test]
fn world_space_voxel_geometry() {
    let grid = VoxelGrid::<()>::new(Vector::new(0.2, 0.3, 0.4), rotated_pose()).unwrap();
    let voxel = Point::new(3, -1, 7);
    let center = grid.to_world(&grid.center_from_voxel(voxel));

    let pose = grid.pose_from_voxel(voxel);
    assert_relative_eq!(Point::from(pose.translation.vector), center, epsilon = 1.0e-5);
    assert_relative_eq!(pose.rotation, rotated_pose().rotation, epsilon = 1.0e-6);

    let vertices = grid.vertices_from_voxel(voxel);
    let mean = vertices
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords)
        / 8.0;
    assert_relative_eq!(Point::from(mean), center, epsilon = 1.0e-5);

    let aabb = grid.aabb_from_voxel(voxel);
    assert_relative_eq!(aabb.extents(), *grid.resolutions(), epsilon = 1.0e-5);
}

#[test]
fn invalid_resolutions_are_rejected() {
    let invalid = [
        Vector::new(0.0, 1.0, 1.0),
        Vector::new(1.0, -0.1, 1.0),
        Vector::new(1.0, 1.0, Real::NAN),
        Vector::new(Real::INFINITY, 1.0, 1.0),
    ];

    for resolutions in invalid {
        assert!(matches!(
            VoxelGrid::<()>::new(resolutions, Isometry::identity()),
            Err(VoxelGridError::InvalidConfiguration(_))
        ));
    }
}
