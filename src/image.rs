//! Module holding an in-memory N-dimensional image.
//!
//! An [`Image`] pairs an `ndarray` pixel buffer with the region it covers
//! in index space, a requested region and its physical geometry. Axis `k`
//! of the region is axis `k` of the array, and pixels are addressed by
//! absolute index: an image whose region starts at `[3, 0]` holds its
//! first pixel at `[3, 0]`, not at `[0, 0]`.
//!
//! [`Image`]: ./struct.Image.html
use crate::error::{Result, VideoError};
use crate::extract::extract_region;
use crate::geometry::{DirectionCollapse, ImageGeometry};
use crate::pipeline::{MetadataSource, SliceSource};
use crate::region::ImageRegion;
use ndarray::{ArrayD, IxDyn};
use num_traits::Zero;

/// An image held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    data: ArrayD<T>,
    region: ImageRegion,
    requested: ImageRegion,
    geometry: ImageGeometry,
}

impl<T> Image<T> {
    /// Create an image from a pixel array. The image region starts at the
    /// origin and has the shape of the array.
    pub fn from_array(data: ArrayD<T>) -> Self {
        let region = ImageRegion::from_size(data.shape());
        Image {
            geometry: ImageGeometry::identity(region.rank()),
            requested: region.clone(),
            region,
            data,
        }
    }

    /// Create an image from a pixel array, with the region starting at the
    /// given index.
    ///
    /// # Example
    ///
    /// ```
    /// # use volume_video::Image;
    /// # use ndarray::{ArrayD, IxDyn};
    /// let data = ArrayD::from_shape_fn(IxDyn(&[2, 3]), |i| (i[0] * 10 + i[1]) as u8);
    /// let image = Image::from_array_with_index(data, &[5, -1])?;
    /// assert_eq!(image.pixel(&[6, 0]), Some(&11));
    /// assert_eq!(image.pixel(&[0, 0]), None);
    /// # Ok::<(), volume_video::VideoError>(())
    /// ```
    pub fn from_array_with_index(data: ArrayD<T>, index: &[i64]) -> Result<Self> {
        let region = ImageRegion::new(index, data.shape())?;
        Ok(Image {
            geometry: ImageGeometry::identity(region.rank()),
            requested: region.clone(),
            region,
            data,
        })
    }

    /// Create an image from a flat vector of pixels in row major order,
    /// covering the given region.
    pub fn from_shape_vec(region: ImageRegion, pixels: Vec<T>) -> Result<Self> {
        let data = ArrayD::from_shape_vec(IxDyn(region.size().as_ref()), pixels)?;
        Ok(Image {
            geometry: ImageGeometry::identity(region.rank()),
            requested: region.clone(),
            region,
            data,
        })
    }

    /// Replace the physical geometry of the image.
    pub fn with_geometry(mut self, geometry: ImageGeometry) -> Result<Self> {
        if geometry.rank() != self.rank() {
            return Err(VideoError::DimensionalityMismatch(self.rank(), geometry.rank()));
        }
        self.geometry = geometry;
        Ok(self)
    }

    /// Get the image's number of dimensions.
    pub fn rank(&self) -> usize {
        self.region.rank()
    }

    /// The region covered by the pixel buffer. For an in-memory image this
    /// is also its largest possible region.
    pub fn region(&self) -> &ImageRegion {
        &self.region
    }

    /// Physical geometry of the image.
    pub fn geometry(&self) -> &ImageGeometry {
        &self.geometry
    }

    /// Fetch a single pixel by absolute index. Returns `None` if the index
    /// is outside of the image region.
    pub fn pixel(&self, idx: &[i64]) -> Option<&T> {
        let offset = self.offset_of(idx)?;
        self.data.get(offset.as_slice())
    }

    /// Fetch a mutable reference to a single pixel by absolute index.
    pub fn pixel_mut(&mut self, idx: &[i64]) -> Option<&mut T> {
        let offset = self.offset_of(idx)?;
        self.data.get_mut(offset.as_slice())
    }

    /// Retrieve a view of the pixel buffer. Array index `[0, ..]`
    /// corresponds to the region's start index.
    pub fn as_array(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Retrieve the pixel buffer, consuming the image.
    pub fn into_array(self) -> ArrayD<T> {
        self.data
    }

    /// Take over the buffer, regions and geometry of another image. The
    /// pixel data is moved, not copied.
    pub fn graft(&mut self, other: Image<T>) {
        *self = other;
    }

    fn offset_of(&self, idx: &[i64]) -> Option<Vec<usize>> {
        if !self.region.contains_index(idx) {
            return None;
        }
        Some(
            idx.iter()
                .zip(self.region.index().as_ref())
                .map(|(i, start)| (i - start) as usize)
                .collect(),
        )
    }
}

impl<T> Image<T>
where
    T: Clone + Zero,
{
    /// Create an image covering the given region, with all pixels at zero.
    pub fn zeros(region: ImageRegion) -> Self {
        let data = ArrayD::zeros(IxDyn(region.size().as_ref()));
        Image {
            geometry: ImageGeometry::identity(region.rank()),
            requested: region.clone(),
            region,
            data,
        }
    }
}

impl<T> MetadataSource for Image<T> {
    fn largest_possible_region(&self) -> Option<ImageRegion> {
        Some(self.region.clone())
    }

    fn requested_region(&self) -> ImageRegion {
        self.requested.clone()
    }

    fn set_requested_region(&mut self, region: ImageRegion) {
        self.requested = region;
    }
}

impl<T> SliceSource<T> for Image<T>
where
    T: Clone,
{
    fn buffered_region(&self) -> ImageRegion {
        self.region.clone()
    }

    fn extract_region(
        &self,
        region: &ImageRegion,
        collapse: DirectionCollapse,
    ) -> Result<Image<T>> {
        extract_region(self, region, collapse)
    }
}

impl<T> From<ArrayD<T>> for Image<T> {
    fn from(data: ArrayD<T>) -> Self {
        Image::from_array(data)
    }
}
