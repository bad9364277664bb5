/*!
voxgrid3d
=========

**voxgrid3d** is a sparse 3-dimensional voxel occupancy grid written with
the rust programming language.

Occupancy is populated from points, axis-aligned boxes, or from the surfaces
of rigid bodies tested against a collision backend. Higher-level structures
(connected clusters, vertical intervals, top-down projections and heightfields)
are derived from the current occupancy on demand.

```
use voxgrid3d::grid::VoxelGrid;
use voxgrid3d::math::{Isometry, Point, Vector};

let mut grid = VoxelGrid::<()>::new(Vector::repeat(0.1), Isometry::identity()).unwrap();
assert!(grid.add_point(&Point::new(0.05, 0.05, 0.05)));
assert_eq!(grid.occupied(), vec![Point::new(0, 0, 0)]);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;
pub extern crate parry3d;

pub mod error;
pub mod grid;
pub mod population;
pub mod utils;

pub use crate::error::VoxelGridError;
pub use crate::grid::VoxelGrid;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use parry3d::math::{Isometry, Point, Real, Translation, Vector};

    /// The integer coordinates identifying one cell of a voxel grid.
    pub type VoxelIndex = Point<i32>;

    /// The number of face-adjacent neighbors of a voxel.
    pub const NUM_FACE_NEIGHBORS: usize = 6;
}
