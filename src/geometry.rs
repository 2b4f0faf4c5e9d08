//! Physical space meta-data of an image: pixel spacing, origin and
//! direction cosines.
//!
//! Pixel indices are mapped to physical points as
//! `origin + direction * (spacing ⊙ index)`. When an axis is dropped from
//! an image, the spacing and origin simply lose the corresponding
//! component, whereas the direction matrix is reduced according to a
//! [`DirectionCollapse`] strategy.
//!
//! [`DirectionCollapse`]: ./enum.DirectionCollapse.html
use crate::error::{Result, VideoError};
use nalgebra::{DMatrix, DVector};

/// Strategy for reducing the direction cosine matrix of an image when some
/// of its axes are collapsed.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum DirectionCollapse {
    /// Keep the rows and columns of the surviving axes. Fails if the
    /// resulting submatrix is singular.
    Submatrix,
    /// Discard the input directions and use the identity matrix.
    Identity,
    /// Use the submatrix if it is invertible, the identity otherwise.
    Guess,
}

impl Default for DirectionCollapse {
    fn default() -> Self {
        DirectionCollapse::Submatrix
    }
}

/// Spacing, origin and direction of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGeometry {
    spacing: Vec<f64>,
    origin: Vec<f64>,
    direction: DMatrix<f64>,
}

impl ImageGeometry {
    /// Unit spacing, zero origin and identity direction.
    pub fn identity(rank: usize) -> Self {
        ImageGeometry {
            spacing: vec![1.; rank],
            origin: vec![0.; rank],
            direction: DMatrix::identity(rank, rank),
        }
    }

    /// Create a new geometry, checking that all components agree on the
    /// number of dimensions.
    pub fn new(spacing: Vec<f64>, origin: Vec<f64>, direction: DMatrix<f64>) -> Result<Self> {
        let rank = spacing.len();
        if origin.len() != rank {
            return Err(VideoError::DimensionalityMismatch(rank, origin.len()));
        }
        if direction.nrows() != rank || direction.ncols() != rank {
            return Err(VideoError::DimensionalityMismatch(rank, direction.nrows()));
        }
        Ok(ImageGeometry {
            spacing,
            origin,
            direction,
        })
    }

    /// Retrieve the rank of this geometry (dimensionality)
    pub fn rank(&self) -> usize {
        self.spacing.len()
    }

    /// Physical distance between adjacent pixels, per axis.
    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    /// Physical position of the pixel at index zero.
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Direction cosine matrix. Column `k` is the physical direction of
    /// axis `k`.
    pub fn direction(&self) -> &DMatrix<f64> {
        &self.direction
    }

    /// Map a pixel index to its physical position.
    pub fn index_to_physical_point(&self, idx: &[i64]) -> Result<Vec<f64>> {
        if idx.len() != self.rank() {
            return Err(VideoError::DimensionalityMismatch(self.rank(), idx.len()));
        }
        let scaled = DVector::from_iterator(
            self.rank(),
            idx.iter().zip(&self.spacing).map(|(i, s)| *i as f64 * s),
        );
        let point = &self.direction * scaled + DVector::from_column_slice(&self.origin);
        Ok(point.iter().cloned().collect())
    }

    /// Obtain the geometry of the image spanned by the axes in `keep`
    /// (in the given order).
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidAxis` if an axis in `keep` does not exist.
    /// - `VideoError::InvalidDirection` if `strategy` is
    ///   `DirectionCollapse::Submatrix` and the kept submatrix is singular.
    pub fn collapse(&self, keep: &[usize], strategy: DirectionCollapse) -> Result<Self> {
        if let Some(axis) = keep.iter().find(|a| **a >= self.rank()) {
            return Err(VideoError::InvalidAxis(*axis, self.rank()));
        }
        let spacing = keep.iter().map(|a| self.spacing[*a]).collect();
        let origin = keep.iter().map(|a| self.origin[*a]).collect();

        let n = keep.len();
        let direction = match strategy {
            DirectionCollapse::Identity => DMatrix::identity(n, n),
            DirectionCollapse::Submatrix => {
                let sub = self.direction.select_rows(keep).select_columns(keep);
                if is_singular(&sub) {
                    return Err(VideoError::InvalidDirection);
                }
                sub
            }
            DirectionCollapse::Guess => {
                let sub = self.direction.select_rows(keep).select_columns(keep);
                if is_singular(&sub) {
                    DMatrix::identity(n, n)
                } else {
                    sub
                }
            }
        };

        Ok(ImageGeometry {
            spacing,
            origin,
            direction,
        })
    }
}

fn is_singular(m: &DMatrix<f64>) -> bool {
    abs_diff_eq!(m.determinant(), 0.)
}
