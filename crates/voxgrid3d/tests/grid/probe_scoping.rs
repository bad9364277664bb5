use std::cell::Cell;

use parry3d::bounding_volume::Aabb;
use voxgrid3d::grid::VoxelGrid;
use voxgrid3d::math::{Isometry, Point, Real, Vector};
use voxgrid3d::population::{CollisionBackend, ScopedProbe};

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("the backend went away")]
struct BackendGone;

/// A backend where every candidate overlaps, failing after a fixed number of queries.
#[derive(Default)]
struct FlakyBackend {
    query_budget: usize,
    num_queries: Cell<usize>,
    fail_destroy: bool,
    num_created: usize,
    num_destroyed: usize,
}

impl FlakyBackend {
    fn with_budget(query_budget: usize) -> Self {
        Self {
            query_budget,
            ..Self::default()
        }
    }
}

impl CollisionBackend for FlakyBackend {
    type Body = u32;
    type Link = u8;
    type Probe = usize;
    type Error = BackendGone;

    fn links(&self, _: u32) -> Result<Vec<u8>, BackendGone> {
        Ok(vec![0])
    }

    fn link_aabb(&self, _: u32, _: u8) -> Result<Aabb, BackendGone> {
        Ok(Aabb::new(Point::origin(), Point::new(0.9, 0.9, 0.9)))
    }

    fn create_probe(&mut self, _: Vector<Real>) -> Result<usize, BackendGone> {
        self.num_created += 1;
        Ok(self.num_created)
    }

    fn place_probe(&mut self, _: &usize, _: &Isometry<Real>) -> Result<(), BackendGone> {
        Ok(())
    }

    fn overlaps(&self, _: u32, _: u8, _: &usize, _: Real) -> Result<bool, BackendGone> {
        let n = self.num_queries.get();
        self.num_queries.set(n + 1);
        if n < self.query_budget {
            Ok(true)
        } else {
            Err(BackendGone)
        }
    }

    fn destroy_probe(&mut self, _: usize) -> Result<(), BackendGone> {
        self.num_destroyed += 1;
        if self.fail_destroy {
            Err(BackendGone)
        } else {
            Ok(())
        }
    }
}

fn half_grid() -> VoxelGrid {
    VoxelGrid::new(Vector::repeat(0.5), Isometry::identity()).unwrap()
}

#[test]
fn probe_is_released_after_a_successful_population() {
    let mut backend = FlakyBackend::with_budget(usize::MAX);
    let mut grid = half_grid();

    assert_eq!(grid.add_body(&mut backend, 0, 0.0), Ok(8));
    assert_eq!((backend.num_created, backend.num_destroyed), (1, 1));
}

#[test]
fn backend_failure_keeps_earlier_decisions_and_releases_the_probe() {
    let mut backend = FlakyBackend::with_budget(3);
    let mut grid = half_grid();

    assert_eq!(grid.add_body(&mut backend, 0, 0.0), Err(BackendGone));
    assert_eq!(
        grid.occupied(),
        vec![Point::new(0, 0, 0), Point::new(0, 0, 1), Point::new(0, 1, 0)]
    );
    assert_eq!((backend.num_created, backend.num_destroyed), (1, 1));
}

#[test]
fn backend_failure_during_removal() {
    let mut grid = half_grid();
    let mut backend = FlakyBackend::with_budget(usize::MAX);
    assert_eq!(grid.add_body(&mut backend, 0, 0.0), Ok(8));

    let mut backend = FlakyBackend::with_budget(2);
    assert_eq!(grid.remove_body(&mut backend, 0, 0.0), Err(BackendGone));
    assert_eq!(grid.len(), 6);
    assert!(!grid.contains(Point::new(0, 0, 0)));
    assert!(!grid.contains(Point::new(0, 0, 1)));
    assert_eq!(backend.num_destroyed, 1);
}

#[test]
fn failing_to_release_the_probe_is_an_error() {
    let mut backend = FlakyBackend {
        fail_destroy: true,
        ..FlakyBackend::with_budget(usize::MAX)
    };
    let mut grid = half_grid();

    assert_eq!(grid.add_body(&mut backend, 0, 0.0), Err(BackendGone));
    assert_eq!(grid.len(), 8);
    // Destroyed once, not again when the guard is dropped.
    assert_eq!(backend.num_destroyed, 1);
}

#[test]
fn dropped_probes_are_destroyed() {
    let mut backend = FlakyBackend::with_budget(0);

    {
        let probe = ScopedProbe::acquire(&mut backend, Vector::repeat(1.0)).unwrap();
        assert!(probe.overlaps(0, 0, 0.0).is_err());
    }
    assert_eq!((backend.num_created, backend.num_destroyed), (1, 1));

    backend.fail_destroy = true;
    {
        let _probe = ScopedProbe::acquire(&mut backend, Vector::repeat(1.0)).unwrap();
    }
    assert_eq!((backend.num_created, backend.num_destroyed), (2, 2));
}
