//! Extraction of sub-images, with optional collapsing of axes.
//!
//! An extraction region has the same rank as the source image. Every axis
//! where the region has a non-zero extent is cropped to that extent, while
//! every axis with a zero extent is collapsed: the pixels at the region's
//! start index on that axis are kept and the axis itself is dropped from
//! the output. Extracting the region `[k, 0, 0] + [0, 5, 6]` from an image
//! of shape `[4, 5, 6]` therefore yields the 2-dimensional `[5, 6]` frame
//! at `k`.
//!
//! The output region keeps the start index of the extraction region on the
//! surviving axes, so that pixels keep their absolute index.
use crate::error::{Result, VideoError};
use crate::geometry::DirectionCollapse;
use crate::image::Image;
use crate::region::ImageRegion;
use ndarray::{Axis, Slice};

/// Extract the given region from an image, collapsing all axes of zero
/// extent.
///
/// # Errors
///
/// - `VideoError::DimensionalityMismatch` if the region and image ranks
///   differ.
/// - `VideoError::RegionOutOfBounds` if the region is not within the image
///   region. A collapsed axis is checked at its start index.
/// - `VideoError::InvalidInput` if every axis would be collapsed.
/// - `VideoError::InvalidDirection` if the direction matrix cannot be
///   collapsed with the given strategy.
pub fn extract_region<T>(
    image: &Image<T>,
    region: &ImageRegion,
    collapse: DirectionCollapse,
) -> Result<Image<T>>
where
    T: Clone,
{
    let bounds = image.region();
    if region.rank() != bounds.rank() {
        return Err(VideoError::DimensionalityMismatch(bounds.rank(), region.rank()));
    }

    // a collapsed axis still reads one pixel
    let mut footprint = region.clone();
    for axis in 0..region.rank() {
        if region.size_at(axis) == 0 {
            footprint.set_size_at(axis, 1);
        }
    }
    if !footprint.is_inside(bounds) {
        return Err(VideoError::out_of_bounds(region.clone(), bounds.clone()));
    }

    let keep: Vec<usize> = (0..region.rank())
        .filter(|axis| region.size_at(*axis) != 0)
        .collect();
    if keep.is_empty() {
        return Err(VideoError::InvalidInput(
            "extraction region collapses every axis",
        ));
    }

    let offset = |axis: usize| (region.index_at(axis) - bounds.index_at(axis)) as usize;
    let mut view = image.as_array().view();
    for &axis in &keep {
        let start = offset(axis);
        view.slice_axis_inplace(Axis(axis), Slice::from(start..start + region.size_at(axis)));
    }
    // remove from the last axis backwards so that the axis numbers
    // still to be removed stay valid
    for axis in (0..region.rank()).rev() {
        if region.size_at(axis) == 0 {
            view = view.index_axis_move(Axis(axis), offset(axis));
        }
    }

    let index: Vec<i64> = keep.iter().map(|a| region.index_at(*a)).collect();
    let geometry = image.geometry().collapse(&keep, collapse)?;
    Image::from_array_with_index(view.to_owned(), &index)?.with_geometry(geometry)
}

#[cfg(test)]
mod tests {
    use super::extract_region;
    use crate::error::VideoError;
    use crate::geometry::{DirectionCollapse, ImageGeometry};
    use crate::image::Image;
    use crate::region::ImageRegion;
    use nalgebra::DMatrix;
    use ndarray::{ArrayD, IxDyn};

    fn volume() -> Image<u32> {
        let data = ArrayD::from_shape_fn(IxDyn(&[4, 5, 6]), |i| {
            (i[0] * 100 + i[1] * 10 + i[2]) as u32
        });
        Image::from_array(data)
    }

    #[test]
    fn test_collapse_first_axis() {
        let image = volume();
        let region = ImageRegion::new(&[2, 0, 0], &[0, 5, 6]).unwrap();
        let slice = extract_region(&image, &region, DirectionCollapse::Submatrix).unwrap();
        assert_eq!(slice.rank(), 2);
        assert_eq!(slice.region(), &ImageRegion::from_size(&[5, 6]));
        assert_eq!(slice.pixel(&[1, 3]), Some(&213));
        assert_eq!(slice.pixel(&[4, 5]), Some(&245));
    }

    #[test]
    fn test_collapse_last_axis() {
        let image = volume();
        let region = ImageRegion::new(&[0, 0, 5], &[4, 5, 0]).unwrap();
        let slice = extract_region(&image, &region, DirectionCollapse::Submatrix).unwrap();
        assert_eq!(slice.region(), &ImageRegion::from_size(&[4, 5]));
        assert_eq!(slice.pixel(&[3, 2]), Some(&325));
    }

    #[test]
    fn test_crop_and_collapse() {
        let image = volume();
        let region = ImageRegion::new(&[1, 1, 3], &[2, 0, 2]).unwrap();
        let slice = extract_region(&image, &region, DirectionCollapse::Submatrix).unwrap();
        assert_eq!(slice.region(), &ImageRegion::new(&[1, 3], &[2, 2]).unwrap());
        assert_eq!(slice.pixel(&[1, 3]), Some(&113));
        assert_eq!(slice.pixel(&[2, 4]), Some(&214));
        assert_eq!(slice.pixel(&[0, 0]), None);
    }

    #[test]
    fn test_shifted_source() {
        let data = ArrayD::from_shape_fn(IxDyn(&[3, 2]), |i| (i[0] * 10 + i[1]) as i8);
        let image = Image::from_array_with_index(data, &[10, -1]).unwrap();
        let region = ImageRegion::new(&[11, -1], &[0, 2]).unwrap();
        let slice = extract_region(&image, &region, DirectionCollapse::Submatrix).unwrap();
        assert_eq!(slice.region(), &ImageRegion::new(&[-1], &[2]).unwrap());
        assert_eq!(slice.pixel(&[-1]), Some(&10));
        assert_eq!(slice.pixel(&[0]), Some(&11));
    }

    #[test]
    fn test_out_of_bounds() {
        let image = volume();
        let region = ImageRegion::new(&[4, 0, 0], &[0, 5, 6]).unwrap();
        match extract_region(&image, &region, DirectionCollapse::Submatrix) {
            Err(VideoError::RegionOutOfBounds(r, b)) => {
                assert_eq!(r, region);
                assert_eq!(b, *image.region());
            }
            other => panic!("unexpected result {:?}", other),
        }

        let region = ImageRegion::new(&[0, 0, 0], &[0, 6, 6]).unwrap();
        assert!(extract_region(&image, &region, DirectionCollapse::Submatrix).is_err());
    }

    #[test]
    fn test_bad_rank() {
        let image = volume();
        let region = ImageRegion::from_size(&[5, 6]);
        match extract_region(&image, &region, DirectionCollapse::Submatrix) {
            Err(VideoError::DimensionalityMismatch(3, 2)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_collapse_everything() {
        let image = volume();
        let region = ImageRegion::new(&[1, 1, 1], &[0, 0, 0]).unwrap();
        match extract_region(&image, &region, DirectionCollapse::Submatrix) {
            Err(VideoError::InvalidInput(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_geometry_follows_slice() {
        #[rustfmt::skip]
        let direction = DMatrix::from_row_slice(3, 3, &[
            0., 1., 0.,
            1., 0., 0.,
            0., 0., 1.,
        ]);
        let geometry =
            ImageGeometry::new(vec![0.5, 1., 2.], vec![-1., -2., -3.], direction).unwrap();
        let image = volume().with_geometry(geometry).unwrap();

        let region = ImageRegion::new(&[0, 0, 1], &[4, 5, 0]).unwrap();
        let slice = extract_region(&image, &region, DirectionCollapse::Submatrix).unwrap();
        assert_eq!(slice.geometry().spacing(), &[0.5, 1.]);
        assert_eq!(slice.geometry().origin(), &[-1., -2.]);
        assert_eq!(
            slice.geometry().direction(),
            &DMatrix::from_row_slice(2, 2, &[0., 1., 1., 0.])
        );

        // dropping axis 0 leaves a singular direction submatrix
        let region = ImageRegion::new(&[1, 0, 0], &[0, 5, 6]).unwrap();
        assert!(extract_region(&image, &region, DirectionCollapse::Submatrix).is_err());
        let slice = extract_region(&image, &region, DirectionCollapse::Guess).unwrap();
        assert_eq!(slice.geometry().direction(), &DMatrix::identity(2, 2));
    }
}
