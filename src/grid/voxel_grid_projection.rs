use na::{DMatrix, Point2, Vector2};

use crate::grid::{Footprint, HeightMapConfig, HeightfieldData, VoxelGrid};
use crate::math::{Point, Real, Vector, VoxelIndex};
use crate::utils::{self, hashmap::HashMap};

impl<T> VoxelGrid<T> {
    /// The top voxel of every occupied column.
    ///
    /// See [`Self::project2d_of`].
    pub fn project2d(&self) -> Vec<VoxelIndex> {
        self.project2d_of(self.occupied())
    }

    /// Projects the given voxels onto the grid's `xy` plane.
    ///
    /// Returns, for every `(i, j)` column containing at least one of the given voxels, the
    /// voxel of that column with the largest `k`. The result is in lexicographic order.
    pub fn project2d_of(&self, voxels: impl IntoIterator<Item = VoxelIndex>) -> Vec<VoxelIndex> {
        let mut tallest: HashMap<(i32, i32), i32> = HashMap::default();
        for voxel in voxels {
            let k = tallest.entry((voxel.x, voxel.y)).or_insert(voxel.z);
            *k = (*k).max(voxel.z);
        }

        let mut result: Vec<_> = tallest
            .into_iter()
            .map(|((i, j), k)| Point::new(i, j, k))
            .collect();
        utils::sort_lexicographic(&mut result);
        result
    }

    /// Rasterizes the top surface of the grid into a normalized height image.
    ///
    /// The footprint of each top voxel, in the grid's `xy` plane, is mapped to the pixels of a
    /// `config.width() × config.height()` image spanning `footprint`. Every pixel overlapped
    /// by a voxel receives the maximum of its current value and the voxel's normalized top
    /// height (see [`HeightMapConfig::normalize`]). Pixels no voxel covers stay at `0.0`.
    ///
    /// Pixel spans are semi-open like voxels: a voxel whose edge lies on a pixel boundary,
    /// up to floating-point rounding, does not spill into the neighboring pixel. Voxels whose
    /// pixel span is not entirely inside the image are skipped.
    ///
    /// The returned matrix has `config.height()` rows and `config.width()` columns; row `0`
    /// is the top of the image, i.e., the largest `y`.
    ///
    /// Returns `None` if the grid has no occupied voxel.
    pub fn create_height_map(
        &self,
        footprint: &Footprint,
        config: &HeightMapConfig,
    ) -> Option<DMatrix<Real>> {
        let top = self.project2d();
        if top.is_empty() {
            return None;
        }

        let (width, height) = (config.width(), config.height());
        let image_size = Vector2::new(width as Real, height as Real);
        let extents = footprint.extents();
        let pixel_from_point = |pt: Point2<Real>| -> Vector2<Real> {
            (pt - footprint.mins())
                .component_mul(&image_size)
                .component_div(&extents)
        };

        let mut height_map = DMatrix::<Real>::zeros(height, width);
        let mut num_skipped = 0;

        for voxel in top {
            let aabb = self.aabb_from_voxel(voxel);
            // Edges within rounding error of a pixel boundary snap onto it.
            let lower = pixel_from_point(aabb.mins.xy()).map(|e| (e + pixel_snap(e)).floor());
            let upper =
                pixel_from_point(aabb.maxs.xy()).map(|e| (e - pixel_snap(e)).ceil() - 1.0);
            let upper = upper.zip_map(&lower, |u, l| u.max(l));

            if lower.x < 0.0 || lower.y < 0.0 || upper.x >= image_size.x || upper.y >= image_size.y
            {
                num_skipped += 1;
                continue;
            }

            let scaled_z = config.normalize(aabb.maxs.z);

            for c in lower.x as usize..=upper.x as usize {
                for y in lower.y as usize..=upper.y as usize {
                    let r = height - y - 1;
                    height_map[(r, c)] = height_map[(r, c)].max(scaled_z);
                }
            }
        }

        if num_skipped > 0 {
            log::debug!("{num_skipped} top voxels fell outside of the height map footprint");
        }

        Some(height_map)
    }

    /// The raw top-surface heights of the grid, sized to the occupied columns.
    ///
    /// See [`HeightfieldData`] for the layout of the result. The matrix is dense over the
    /// bounding rectangle of the occupied columns, so its size grows with the distance
    /// between the outermost columns. Returns `None` if the grid has no occupied voxel.
    pub fn create_heightmap(&self) -> Option<HeightfieldData> {
        let top = self.project2d();
        let first = top.first()?;

        let mut mins = first.xy();
        let mut maxs = first.xy();
        for voxel in &top[1..] {
            mins = mins.coords.zip_map(&voxel.xy().coords, |a, b| a.min(b)).into();
            maxs = maxs.coords.zip_map(&voxel.xy().coords, |a, b| a.max(b)).into();
        }

        let ncols = index_span(mins.x, maxs.x) + 1;
        let nrows = index_span(mins.y, maxs.y) + 1;
        let mut heights = DMatrix::<Real>::zeros(nrows, ncols);

        for voxel in top {
            let c = index_span(mins.x, voxel.x);
            let r = index_span(voxel.y, maxs.y);
            heights[(r, c)] = self.upper_from_voxel(voxel).z;
        }

        Some(HeightfieldData {
            heights,
            scale: Vector::new(self.resolutions.x, self.resolutions.y, 1.0),
            min_column: mins,
        })
    }
}

/// The tolerance, in pixels, below which a pixel-space coordinate is considered to lie on a
/// pixel boundary.
fn pixel_snap(e: Real) -> Real {
    e.abs().max(1.0) * Real::EPSILON * 8.0
}

/// The number of steps from `from` to `to`, with `from <= to`.
fn index_span(from: i32, to: i32) -> usize {
    (i64::from(to) - i64::from(from)) as usize
}
