//! Types for error handling go here.
use crate::region::ImageRegion;
use crate::temporal::TemporalRegion;
use ndarray::ShapeError;
use std::fmt;

/// The extent reported by an out-of-bounds error: either a spatial region
/// of an image or a span of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extent {
    /// A spatial region.
    Spatial(ImageRegion),
    /// A span of frames.
    Temporal(TemporalRegion),
}

impl From<ImageRegion> for Extent {
    fn from(region: ImageRegion) -> Self {
        Extent::Spatial(region)
    }
}

impl From<TemporalRegion> for Extent {
    fn from(region: TemporalRegion) -> Self {
        Extent::Temporal(region)
    }
}

impl PartialEq<ImageRegion> for Extent {
    fn eq(&self, other: &ImageRegion) -> bool {
        matches!(self, Extent::Spatial(r) if r == other)
    }
}

impl PartialEq<TemporalRegion> for Extent {
    fn eq(&self, other: &TemporalRegion) -> bool {
        matches!(self, Extent::Temporal(r) if r == other)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Spatial(region) => write!(f, "region {:?}", region),
            Extent::Temporal(region) => write!(f, "frames {}", region),
        }
    }
}

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum VideoError {
        /// The filter has no input, or the input has no usable meta-data.
        InvalidInput(reason: &'static str) {
            display("Invalid input image: {}", reason)
        }
        /// The configured frame axis does not exist in the input image.
        InvalidAxis(axis: usize, rank: usize) {
            display("Frame axis {} is out of range for an image of {} dimensions", axis, rank)
        }
        /// A region or span of frames falls outside of the data which is
        /// actually available.
        RegionOutOfBounds(region: Extent, bounds: Extent) {
            display("{} is out of bounds of {}", region, bounds)
        }
        /// Two regions, indices or arrays of different rank were combined.
        DimensionalityMismatch(expected: usize, got: usize) {
            display("Inconsistent dimensionality: expected {}, got {}", expected, got)
        }
        /// Collapsing the direction matrix yielded a singular submatrix.
        InvalidDirection {
            display("Invalid submatrix extracted for collapsed direction")
        }
        /// Error from `ndarray` when building a pixel buffer.
        Shape(err: ShapeError) {
            from()
            source(err)
            display("Invalid pixel buffer shape: {}", err)
        }
    }
}

impl VideoError {
    /// Create an out-of-bounds error from either kind of extent.
    pub fn out_of_bounds<R, B>(region: R, bounds: B) -> Self
    where
        R: Into<Extent>,
        B: Into<Extent>,
    {
        VideoError::RegionOutOfBounds(region.into(), bounds.into())
    }

    /// Whether this error reports a region or span of frames outside of
    /// the available data.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, VideoError::RegionOutOfBounds(..))
    }
}

#[cfg(test)]
mod tests {
    use super::{Extent, VideoError};
    use crate::region::ImageRegion;
    use crate::temporal::TemporalRegion;

    #[test]
    fn test_out_of_bounds_display() {
        let err =
            VideoError::out_of_bounds(TemporalRegion::new(2, 5), TemporalRegion::new(0, 4));
        assert!(err.is_out_of_bounds());
        assert_eq!(err.to_string(), "frames [2, 7) is out of bounds of frames [0, 4)");

        let err = VideoError::out_of_bounds(
            ImageRegion::from_size(&[3]),
            ImageRegion::from_size(&[2]),
        );
        match err {
            VideoError::RegionOutOfBounds(Extent::Spatial(r), Extent::Spatial(b)) => {
                assert_eq!(r, ImageRegion::from_size(&[3]));
                assert_eq!(b, ImageRegion::from_size(&[2]));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, VideoError>;
