use ndarray::{ArrayD, IxDyn};
use volume_video::Image;

/// A 3-dimensional image in which every pixel encodes its own index as
/// `i0 * 100 + i1 * 10 + i2`.
#[allow(dead_code)]
pub fn coded_volume(shape: [usize; 3]) -> Image<u32> {
    let data = ArrayD::from_shape_fn(IxDyn(&shape), |i| code(i[0], i[1], i[2]));
    Image::from_array(data)
}

/// Same as `coded_volume`, with the image region starting at `index`.
#[allow(dead_code)]
pub fn coded_volume_at(shape: [usize; 3], index: [i64; 3]) -> Image<u32> {
    let data = ArrayD::from_shape_fn(IxDyn(&shape), |i| code(i[0], i[1], i[2]));
    Image::from_array_with_index(data, &index).unwrap()
}

pub fn code(i0: usize, i1: usize, i2: usize) -> u32 {
    (i0 * 100 + i1 * 10 + i2) as u32
}
