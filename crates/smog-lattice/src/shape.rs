//! Grid shape selection.
//!
//! [`choose_grid_shape`] factors a point count into `nx * ny * nz` with
//! the three dimensions as close to equal as the factorization allows.

use smog_core::SmogError;

/// Lattice dimensions along x, y, and z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Points along x.
    pub nx: usize,
    /// Points along y.
    pub ny: usize,
    /// Points along z.
    pub nz: usize,
}

impl GridShape {
    /// Create a shape from its three dimensions.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of lattice cells.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Dimensions as `[nx, ny, nz]`.
    pub fn dims(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Ratio of the largest to the smallest dimension. 1.0 is a cube.
    pub fn score(&self) -> f64 {
        let dims = self.dims();
        let max = dims.iter().copied().max().unwrap_or(1);
        let min = dims.iter().copied().min().unwrap_or(1).max(1);
        max as f64 / min as f64
    }
}

/// Choose the most cube-like `(nx, ny, nz)` with `nx * ny * nz == n_points`.
///
/// `nx` runs from 1 to `round(cbrt(n)) + 2`, and for each divisor `nx`,
/// `ny` runs from 1 to `floor(sqrt(n / nx)) + 1`. The first triple with
/// the strictly lowest [`score`](GridShape::score) wins, so ties resolve
/// to the smallest `nx`, then the smallest `ny`.
///
/// # Errors
///
/// [`SmogError::NoGridFactorization`] when `n_points` is zero.
pub fn choose_grid_shape(n_points: usize) -> Result<GridShape, SmogError> {
    if n_points == 0 {
        return Err(SmogError::NoGridFactorization { n_points });
    }

    let nx_max = (n_points as f64).cbrt().round() as usize + 2;
    let mut best: Option<(GridShape, f64)> = None;

    for nx in 1..=nx_max {
        if n_points % nx != 0 {
            continue;
        }
        let rem = n_points / nx;
        let ny_max = (rem as f64).sqrt() as usize + 1;
        for ny in 1..=ny_max {
            if rem % ny != 0 {
                continue;
            }
            let candidate = GridShape::new(nx, ny, rem / ny);
            let score = candidate.score();
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
    }

    best.map(|(shape, _)| shape)
        .ok_or(SmogError::NoGridFactorization { n_points })
}
