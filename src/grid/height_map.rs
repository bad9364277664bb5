use na::{DMatrix, Point2, RealField, Vector2};
use parry3d::shape::HeightField;

use crate::error::VoxelGridError;
use crate::math::{Isometry, Real, Vector};

/// The default width and height, in pixels, of a rasterized height map.
pub const DEFAULT_HEIGHT_MAP_SIZE: usize = 418;

/// A rectangle of the grid frame's `xy` plane onto which the top surface is rasterized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Footprint {
    mins: Point2<Real>,
    maxs: Point2<Real>,
}

impl Footprint {
    /// Creates the footprint `[mins, maxs]`.
    ///
    /// Fails if the rectangle is not finite or has a zero or negative extent along any axis.
    pub fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Result<Self, VoxelGridError> {
        let extents = maxs - mins;
        if extents.iter().any(|e| !(*e > 0.0 && e.is_finite())) {
            return Err(VoxelGridError::InvalidRaster(
                "the footprint must have a finite and strictly positive extent",
            ));
        }

        Ok(Self { mins, maxs })
    }

    /// Creates a square footprint of side `size` centered at `center`.
    pub fn from_center(center: Point2<Real>, size: Real) -> Result<Self, VoxelGridError> {
        let half = Vector2::repeat(size / 2.0);
        Self::new(center - half, center + half)
    }

    /// The lower corner of the footprint.
    #[inline]
    pub fn mins(&self) -> &Point2<Real> {
        &self.mins
    }

    /// The upper corner of the footprint.
    #[inline]
    pub fn maxs(&self) -> &Point2<Real> {
        &self.maxs
    }

    /// The size of the footprint along `x` and `y`.
    #[inline]
    pub fn extents(&self) -> Vector2<Real> {
        self.maxs - self.mins
    }
}

/// Pixel dimensions and height normalization of a rasterized height map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HeightMapConfig {
    width: usize,
    height: usize,
    z_clamp: [Real; 2],
}

impl Default for HeightMapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_HEIGHT_MAP_SIZE,
            height: DEFAULT_HEIGHT_MAP_SIZE,
            z_clamp: [0.0, 2.0],
        }
    }
}

impl HeightMapConfig {
    /// A height map of `width × height` pixels normalizing heights from `z_clamp`.
    ///
    /// Heights are clamped to `[z_clamp[0], z_clamp[1]]` then mapped linearly to `[0, 1]`.
    pub fn new(width: usize, height: usize, z_clamp: [Real; 2]) -> Result<Self, VoxelGridError> {
        if width == 0 || height == 0 {
            return Err(VoxelGridError::InvalidRaster(
                "a height map needs at least one pixel along each axis",
            ));
        }

        if !(z_clamp[0].is_finite() && z_clamp[1].is_finite() && z_clamp[0] < z_clamp[1]) {
            return Err(VoxelGridError::InvalidRaster(
                "the height clamping range must be finite and non-empty",
            ));
        }

        Ok(Self {
            width,
            height,
            z_clamp,
        })
    }

    /// The number of pixel columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of pixel rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The heights mapped to `0` and `1` respectively.
    #[inline]
    pub fn z_clamp(&self) -> [Real; 2] {
        self.z_clamp
    }

    /// Clamps `z` to the configured range and maps it to `[0, 1]`.
    pub fn normalize(&self, z: Real) -> Real {
        let [min_z, max_z] = self.z_clamp;
        (z.clamp(min_z, max_z) - min_z) / (max_z - min_z)
    }
}

/// Raw top-surface heights of a voxel grid, ready to build a heightfield shape.
///
/// `heights` has one row per `j` and one column per `i` of the bounding rectangle of the
/// occupied columns. Row 0 is the column with the largest `j`, column 0 the one with the
/// smallest `i`. Each cell holds the grid-frame `z` of the top face of the column's highest
/// voxel, or `0.0` if the column is empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HeightfieldData {
    /// The raw heights.
    pub heights: DMatrix<Real>,
    /// The physical size of a cell: `(res.x, res.y, 1)`.
    pub scale: Vector<Real>,
    /// The `(i, j)` index of the column at the lower corner of the covered rectangle.
    pub min_column: Point2<i32>,
}

impl HeightfieldData {
    /// The number of rows, i.e., the number of distinct `j` covered.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.heights.nrows()
    }

    /// The number of columns, i.e., the number of distinct `i` covered.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.heights.ncols()
    }

    /// The heights laid out row after row.
    pub fn row_major(&self) -> Vec<Real> {
        self.heights.transpose().as_slice().to_vec()
    }

    /// Builds a heightfield shape sampling the height of each column at its center.
    ///
    /// The returned isometry places the shape in the grid frame: heightfields are `y`-up
    /// in their local frame, so the shape is rotated to have its heights along the grid's
    /// `z` axis.
    ///
    /// Returns `None` if fewer than two rows or two columns are covered, which is
    /// not enough samples for a heightfield.
    pub fn to_heightfield(&self) -> Option<(Isometry<Real>, HeightField)> {
        let (nrows, ncols) = (self.nrows(), self.ncols());
        if nrows < 2 || ncols < 2 {
            return None;
        }

        let shape_scale = Vector::new(
            self.scale.x * (ncols - 1) as Real,
            self.scale.z,
            self.scale.y * (nrows - 1) as Real,
        );
        let center = Vector::new(
            (self.min_column.x as Real + (ncols - 1) as Real / 2.0 + 0.5) * self.scale.x,
            (self.min_column.y as Real + (nrows - 1) as Real / 2.0 + 0.5) * self.scale.y,
            0.0,
        );
        // Maps the local `y` (heights) to the grid `z`, and the local `z` (rows) to the
        // grid `-y` so that row 0 lies at the largest `j`.
        let pose = Isometry::new(center, Vector::x() * Real::frac_pi_2());

        Some((pose, HeightField::new(self.heights.clone(), shape_scale)))
    }
}
