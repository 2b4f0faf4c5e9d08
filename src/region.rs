//! N-dimensional index, size and region constructs.
//!
//! Images in this crate have a dynamic number of dimensions, so the types
//! [`ImageIndex`], [`ImageSize`] and [`ImageRegion`] hold one component
//! per axis rather than a fixed array. A region is a start index plus an
//! extent on every axis. Unlike array shapes, region starts are signed and
//! need not be zero: an image may cover, say, the indices `[-2, 8)` on one
//! of its axes.
//!
//! [`ImageIndex`]: ./struct.ImageIndex.html
//! [`ImageSize`]: ./struct.ImageSize.html
//! [`ImageRegion`]: ./struct.ImageRegion.html
use crate::error::{Result, VideoError};

/// An N-dimensional pixel index.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub struct ImageIndex(Vec<i64>);

impl ImageIndex {
    /// Create an index from its components.
    pub fn from_slice(idx: &[i64]) -> Self {
        ImageIndex(idx.to_vec())
    }

    /// Create an index of the given rank with all components at zero.
    pub fn zeros(rank: usize) -> Self {
        ImageIndex(vec![0; rank])
    }

    /// Retrieve the rank of this index (dimensionality)
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Obtain a new index without the component at `axis`.
    ///
    /// # Panic
    ///
    /// Panics if `axis` is not smaller than `self.rank()`.
    pub fn remove_axis(&self, axis: usize) -> Self {
        let mut idx = self.0.clone();
        let _ = idx.remove(axis);
        ImageIndex(idx)
    }
}

impl AsRef<[i64]> for ImageIndex {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl AsMut<[i64]> for ImageIndex {
    fn as_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

impl From<Vec<i64>> for ImageIndex {
    fn from(idx: Vec<i64>) -> Self {
        ImageIndex(idx)
    }
}

/// An N-dimensional extent, in number of pixels per axis.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub struct ImageSize(Vec<usize>);

impl ImageSize {
    /// Create a size from its components.
    pub fn from_slice(size: &[usize]) -> Self {
        ImageSize(size.to_vec())
    }

    /// Create a size of the given rank with all extents at zero.
    pub fn zeros(rank: usize) -> Self {
        ImageSize(vec![0; rank])
    }

    /// Retrieve the rank of this size (dimensionality)
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Calculate the number of elements covered by this size
    pub fn element_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Whether all extents are zero. A rank-0 size is trivially all zero.
    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|s| *s == 0)
    }

    /// Obtain a new size without the component at `axis`.
    ///
    /// # Panic
    ///
    /// Panics if `axis` is not smaller than `self.rank()`.
    pub fn remove_axis(&self, axis: usize) -> Self {
        let mut size = self.0.clone();
        let _ = size.remove(axis);
        ImageSize(size)
    }
}

impl AsRef<[usize]> for ImageSize {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl AsMut<[usize]> for ImageSize {
    fn as_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl From<Vec<usize>> for ImageSize {
    fn from(size: Vec<usize>) -> Self {
        ImageSize(size)
    }
}

/// A rectangular N-dimensional region: a start index and an extent on
/// each axis.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub struct ImageRegion {
    index: ImageIndex,
    size: ImageSize,
}

impl ImageRegion {
    /// Create a region from a start index and a size of the same rank.
    ///
    /// # Example
    ///
    /// ```
    /// # use volume_video::region::ImageRegion;
    /// let region = ImageRegion::new(&[0, 2, -1], &[4, 5, 6])?;
    /// assert_eq!(region.rank(), 3);
    /// assert_eq!(region.index_at(2), -1);
    /// assert_eq!(region.number_of_pixels(), 120);
    /// # Ok::<(), volume_video::VideoError>(())
    /// ```
    pub fn new(index: &[i64], size: &[usize]) -> Result<Self> {
        if index.len() != size.len() {
            return Err(VideoError::DimensionalityMismatch(index.len(), size.len()));
        }
        Ok(ImageRegion {
            index: ImageIndex::from_slice(index),
            size: ImageSize::from_slice(size),
        })
    }

    /// Create a region with the given size, starting at the origin.
    pub fn from_size(size: &[usize]) -> Self {
        ImageRegion {
            index: ImageIndex::zeros(size.len()),
            size: ImageSize::from_slice(size),
        }
    }

    /// Create a degenerate region of the given rank: start at the origin
    /// and zero extent on every axis.
    pub fn zeros(rank: usize) -> Self {
        ImageRegion {
            index: ImageIndex::zeros(rank),
            size: ImageSize::zeros(rank),
        }
    }

    /// Retrieve the rank of this region (dimensionality)
    pub fn rank(&self) -> usize {
        self.size.rank()
    }

    /// The start index of the region.
    pub fn index(&self) -> &ImageIndex {
        &self.index
    }

    /// The extent of the region.
    pub fn size(&self) -> &ImageSize {
        &self.size
    }

    /// Start index on the given axis.
    ///
    /// # Panic
    ///
    /// Panics if `axis` is not smaller than `self.rank()`.
    pub fn index_at(&self, axis: usize) -> i64 {
        self.index.as_ref()[axis]
    }

    /// Extent on the given axis.
    ///
    /// # Panic
    ///
    /// Panics if `axis` is not smaller than `self.rank()`.
    pub fn size_at(&self, axis: usize) -> usize {
        self.size.as_ref()[axis]
    }

    /// One past the last index on the given axis.
    pub fn end_at(&self, axis: usize) -> i64 {
        self.index_at(axis) + self.size_at(axis) as i64
    }

    /// Replace the start index on the given axis.
    pub fn set_index_at(&mut self, axis: usize, value: i64) {
        self.index.as_mut()[axis] = value;
    }

    /// Replace the extent on the given axis.
    pub fn set_size_at(&mut self, axis: usize, value: usize) {
        self.size.as_mut()[axis] = value;
    }

    /// Calculate the number of pixels in this region
    pub fn number_of_pixels(&self) -> usize {
        self.size.element_count()
    }

    /// Whether the region has zero extent on every axis. This is how an
    /// unspecified requested region is represented, so a region with only
    /// some of its extents at zero is not degenerate.
    ///
    /// ```
    /// # use volume_video::region::ImageRegion;
    /// assert!(ImageRegion::zeros(2).is_degenerate());
    /// assert!(!ImageRegion::from_size(&[0, 3]).is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        self.size.is_all_zero()
    }

    /// Whether this region lies entirely within `bounds`. Regions of
    /// different rank are never inside one another.
    pub fn is_inside(&self, bounds: &ImageRegion) -> bool {
        if self.rank() != bounds.rank() {
            return false;
        }
        (0..self.rank()).all(|axis| {
            self.index_at(axis) >= bounds.index_at(axis)
                && self.end_at(axis) <= bounds.end_at(axis)
        })
    }

    /// Whether the given pixel index falls within this region.
    pub fn contains_index(&self, idx: &[i64]) -> bool {
        idx.len() == self.rank()
            && idx
                .iter()
                .enumerate()
                .all(|(axis, i)| *i >= self.index_at(axis) && *i < self.end_at(axis))
    }

    /// Obtain the (N-1)-dimensional region resulting from dropping `axis`.
    /// The remaining axes keep their relative order.
    ///
    /// # Example
    ///
    /// ```
    /// # use volume_video::region::ImageRegion;
    /// let region = ImageRegion::new(&[1, 2, 3], &[4, 5, 6])?;
    /// let frame = region.remove_axis(1)?;
    /// assert_eq!(frame, ImageRegion::new(&[1, 3], &[4, 6])?);
    /// # Ok::<(), volume_video::VideoError>(())
    /// ```
    pub fn remove_axis(&self, axis: usize) -> Result<Self> {
        if axis >= self.rank() {
            return Err(VideoError::InvalidAxis(axis, self.rank()));
        }
        Ok(ImageRegion {
            index: self.index.remove_axis(axis),
            size: self.size.remove_axis(axis),
        })
    }

    /// Obtain a copy of this region collapsed on `axis` at position `at`:
    /// the extent on that axis becomes zero and its start becomes `at`.
    /// This is the form in which slice regions are given to
    /// [`extract_region`](../extract/fn.extract_region.html).
    pub fn collapse_axis(&self, axis: usize, at: i64) -> Result<Self> {
        if axis >= self.rank() {
            return Err(VideoError::InvalidAxis(axis, self.rank()));
        }
        let mut out = self.clone();
        out.set_size_at(axis, 0);
        out.set_index_at(axis, at);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageIndex, ImageRegion, ImageSize};
    use crate::error::VideoError;

    #[test]
    fn test_region_new() {
        let region = ImageRegion::new(&[0, -3], &[10, 4]).unwrap();
        assert_eq!(region.rank(), 2);
        assert_eq!(region.index().as_ref(), &[0, -3]);
        assert_eq!(region.size().as_ref(), &[10, 4]);
        assert_eq!(region.end_at(1), 1);
        assert_eq!(region.number_of_pixels(), 40);

        match ImageRegion::new(&[0, 0], &[1, 2, 3]) {
            Err(VideoError::DimensionalityMismatch(2, 3)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_degenerate() {
        assert!(ImageRegion::zeros(3).is_degenerate());
        assert!(ImageRegion::zeros(0).is_degenerate());
        assert!(ImageRegion::new(&[5, 5], &[0, 0]).unwrap().is_degenerate());
        assert!(!ImageRegion::from_size(&[0, 1, 0]).is_degenerate());
        assert!(!ImageRegion::from_size(&[2, 2]).is_degenerate());
    }

    #[test]
    fn test_is_inside() {
        let bounds = ImageRegion::new(&[0, 0], &[10, 10]).unwrap();
        assert!(bounds.is_inside(&bounds));
        assert!(ImageRegion::new(&[2, 3], &[8, 7]).unwrap().is_inside(&bounds));
        assert!(!ImageRegion::new(&[2, 3], &[9, 7]).unwrap().is_inside(&bounds));
        assert!(!ImageRegion::new(&[-1, 0], &[1, 1]).unwrap().is_inside(&bounds));
        assert!(!ImageRegion::from_size(&[1, 1, 1]).is_inside(&bounds));
    }

    #[test]
    fn test_contains_index() {
        let region = ImageRegion::new(&[-2, 1], &[4, 2]).unwrap();
        assert!(region.contains_index(&[-2, 1]));
        assert!(region.contains_index(&[1, 2]));
        assert!(!region.contains_index(&[2, 2]));
        assert!(!region.contains_index(&[0, 0]));
        assert!(!region.contains_index(&[0]));
    }

    #[test]
    fn test_remove_axis() {
        let region = ImageRegion::new(&[1, 2, 3, 4], &[5, 6, 7, 8]).unwrap();
        assert_eq!(
            region.remove_axis(0).unwrap(),
            ImageRegion::new(&[2, 3, 4], &[6, 7, 8]).unwrap()
        );
        assert_eq!(
            region.remove_axis(3).unwrap(),
            ImageRegion::new(&[1, 2, 3], &[5, 6, 7]).unwrap()
        );
        assert!(region.remove_axis(4).is_err());

        assert_eq!(ImageIndex::from_slice(&[7, 8]).remove_axis(0).as_ref(), &[8]);
        assert_eq!(ImageSize::from_slice(&[7, 8]).remove_axis(1).as_ref(), &[7]);
    }

    #[test]
    fn test_collapse_axis() {
        let region = ImageRegion::from_size(&[4, 5, 6]);
        let slice = region.collapse_axis(0, 2).unwrap();
        assert_eq!(slice, ImageRegion::new(&[2, 0, 0], &[0, 5, 6]).unwrap());
        assert!(!slice.is_degenerate());
        assert!(region.collapse_axis(3, 0).is_err());
    }
}
