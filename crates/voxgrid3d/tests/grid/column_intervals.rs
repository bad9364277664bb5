use voxgrid3d::grid::{ColumnInterval, VoxelGrid};
use voxgrid3d::math::{Isometry, Point, Vector};

#[test]
fn vertical_runs_are_merged() {
    let mut grid = VoxelGrid::<()>::new(Vector::repeat(0.1), Isometry::identity()).unwrap();
    for k in [0, 1, 2, 5] {
        let _ = grid.set_occupied(Point::new(0, 0, k));
    }

    assert_eq!(
        grid.intervals(),
        vec![
            ColumnInterval { i: 0, j: 0, k_min: 0, k_max: 2 },
            ColumnInterval { i: 0, j: 0, k_min: 5, k_max: 5 },
        ]
    );
}

#[test]
fn intervals_expand_back_to_the_occupied_voxels() {
    let mut rng = oorandom::Rand32::new(99);
    let mut grid = VoxelGrid::<()>::new(Vector::repeat(1.0), Isometry::identity()).unwrap();
    for _ in 0..400 {
        let voxel = Point::new(
            rng.rand_range(0..4) as i32 - 2,
            rng.rand_range(0..4) as i32 - 2,
            rng.rand_range(0..30) as i32 - 15,
        );
        let _ = grid.set_occupied(voxel);
    }

    let intervals = grid.intervals();
    let mut expanded: Vec<_> = intervals.iter().flat_map(|interval| interval.voxels()).collect();
    expanded.sort_by_key(|v| (v.x, v.y, v.z));
    assert_eq!(expanded, grid.occupied());

    // Intervals are maximal: two runs of one column are separated by a free voxel.
    for pair in intervals.windows(2) {
        if (pair[0].i, pair[0].j) == (pair[1].i, pair[1].j) {
            assert!(pair[1].k_min > pair[0].k_max + 1);
        }
    }
    assert!(intervals.iter().all(|interval| !interval.is_empty()));
}

#[test]
fn intervals_of_ignore_duplicates() {
    let grid = VoxelGrid::<()>::new(Vector::repeat(1.0), Isometry::identity()).unwrap();
    let voxels = [
        Point::new(1, 1, -3),
        Point::new(1, 1, -2),
        Point::new(1, 1, -3),
        Point::new(0, 4, 0),
    ];

    assert_eq!(
        grid.intervals_of(voxels),
        vec![
            ColumnInterval { i: 0, j: 4, k_min: 0, k_max: 0 },
            ColumnInterval { i: 1, j: 1, k_min: -3, k_max: -2 },
        ]
    );
}

#[test]
fn interval_geometry() {
    let grid = VoxelGrid::<()>::new(Vector::new(0.5, 0.5, 0.25), Isometry::identity()).unwrap();
    let interval = ColumnInterval { i: 1, j: -1, k_min: 2, k_max: 5 };

    assert_eq!(interval.len(), 4);
    assert_eq!(interval.bottom(), Point::new(1, -1, 2));
    assert_eq!(interval.top(), Point::new(1, -1, 5));

    let aabb = grid.aabb_from_interval(&interval);
    assert_eq!(aabb.mins, Point::new(0.5, -0.5, 0.5));
    assert_eq!(aabb.maxs, Point::new(1.0, 0.0, 1.5));
}

#[test]
fn intervals_at_the_index_boundary() {
    let mut grid = VoxelGrid::<()>::new(Vector::repeat(1.0), Isometry::identity()).unwrap();
    assert!(grid.add_point(&Point::new(0.5, 0.5, 1.0e30)));
    let _ = grid.set_occupied(Point::new(0, 0, i32::MAX - 1));
    let _ = grid.set_occupied(Point::new(0, 0, i32::MIN));

    let intervals = grid.intervals();
    assert_eq!(
        intervals,
        vec![
            ColumnInterval { i: 0, j: 0, k_min: i32::MIN, k_max: i32::MIN },
            ColumnInterval { i: 0, j: 0, k_min: i32::MAX - 1, k_max: i32::MAX },
        ]
    );
    assert_eq!(intervals[1].len(), 2);

    let full = ColumnInterval { i: 0, j: 0, k_min: i32::MIN, k_max: i32::MAX };
    assert_eq!(full.len(), u32::MAX as usize + 1);
}
