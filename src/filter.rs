//! The image-to-video filter.
//!
//! [`ImageToVideoFilter`] reinterprets one axis of an N-dimensional image
//! as time and produces a video stream of (N-1)-dimensional frames, one per
//! index along that axis. It takes part in a demand-driven update made of
//! four steps, which a pipeline engine calls in this order:
//!
//! 1. [`generate_output_information`]: derive the stream's temporal span
//!    and the frames' spatial region from the input region;
//! 2. [`generate_output_requested_region`]: give every demanded frame
//!    without a specific spatial demand its full region;
//! 3. [`generate_input_requested_region`]: ask the input for all of its
//!    data;
//! 4. [`generate_data`]: extract every demanded frame and graft it into
//!    the stream.
//!
//! [`update`] runs the four steps in sequence.
//!
//! # Example
//!
//! ```
//! # use volume_video::{FrameSink, Image, ImageToVideoFilter, TemporalRegion, VideoStream};
//! # use ndarray::{ArrayD, IxDyn};
//! // a 4x5x6 volume where the first axis is time
//! let data = ArrayD::from_shape_fn(IxDyn(&[4, 5, 6]), |i| (i[0] * 100 + i[1] * 10 + i[2]) as u16);
//! let mut input = Image::from_array(data);
//! let mut video = VideoStream::new();
//!
//! let filter = ImageToVideoFilter::new().with_frame_axis(0);
//! filter.update(Some(&mut input), &mut video)?;
//!
//! assert_eq!(video.largest_possible_temporal_region(), TemporalRegion::new(0, 4));
//! let frame = video.frame(2).unwrap();
//! assert_eq!(frame.region().size().as_ref(), &[5, 6]);
//! assert_eq!(frame.pixel(&[1, 3]), Some(&213));
//! # Ok::<(), volume_video::VideoError>(())
//! ```
//!
//! [`ImageToVideoFilter`]: ./struct.ImageToVideoFilter.html
//! [`generate_output_information`]: ./struct.ImageToVideoFilter.html#method.generate_output_information
//! [`generate_output_requested_region`]: ./struct.ImageToVideoFilter.html#method.generate_output_requested_region
//! [`generate_input_requested_region`]: ./struct.ImageToVideoFilter.html#method.generate_input_requested_region
//! [`generate_data`]: ./struct.ImageToVideoFilter.html#method.generate_data
//! [`update`]: ./struct.ImageToVideoFilter.html#method.update
use crate::error::{Result, VideoError};
use crate::geometry::DirectionCollapse;
use crate::pipeline::{FrameSink, MetadataSource, SliceSource};
use crate::region::ImageRegion;
use crate::temporal::TemporalRegion;

/// Output meta-data derived from an input region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMetadata {
    /// Span of frames, taken from the frame axis of the input.
    pub temporal_region: TemporalRegion,
    /// Spatial region shared by all frames: the input region without the
    /// frame axis.
    pub frame_region: ImageRegion,
}

/// Filter converting an N-dimensional image into a stream of
/// (N-1)-dimensional frames.
///
/// The filter holds no data, only its configuration. Please see the
/// [module-level documentation](index.html) for more details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ImageToVideoFilter {
    frame_axis: usize,
    direction_collapse: DirectionCollapse,
}

impl ImageToVideoFilter {
    /// Create a filter using axis 0 as time and collapsing directions to
    /// their submatrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input axis to be used as time.
    pub fn with_frame_axis(mut self, frame_axis: usize) -> Self {
        self.frame_axis = frame_axis;
        self
    }

    /// Set how the input direction matrix is reduced for each frame.
    pub fn with_direction_collapse(mut self, direction_collapse: DirectionCollapse) -> Self {
        self.direction_collapse = direction_collapse;
        self
    }

    /// The input axis used as time.
    pub fn frame_axis(&self) -> usize {
        self.frame_axis
    }

    /// Change the input axis used as time. The axis is validated against
    /// the input on the next update.
    pub fn set_frame_axis(&mut self, frame_axis: usize) {
        self.frame_axis = frame_axis;
    }

    /// How the input direction matrix is reduced for each frame.
    pub fn direction_collapse(&self) -> DirectionCollapse {
        self.direction_collapse
    }

    /// Change how the input direction matrix is reduced for each frame.
    pub fn set_direction_collapse(&mut self, direction_collapse: DirectionCollapse) {
        self.direction_collapse = direction_collapse;
    }

    /// Compute the output meta-data for the given input region.
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidInput` if the region has fewer than 2
    ///   dimensions.
    /// - `VideoError::InvalidAxis` if the frame axis is not an axis of the
    ///   region.
    pub fn output_metadata_for(&self, input_region: &ImageRegion) -> Result<OutputMetadata> {
        if input_region.rank() < 2 {
            return Err(VideoError::InvalidInput(
                "image must have at least 2 dimensions",
            ));
        }
        self.check_axis(input_region.rank())?;

        let axis = self.frame_axis;
        Ok(OutputMetadata {
            temporal_region: TemporalRegion::new(
                input_region.index_at(axis),
                input_region.size_at(axis) as u64,
            ),
            frame_region: input_region.remove_axis(axis)?,
        })
    }

    /// Compute the output meta-data of the given input, without touching
    /// any output.
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidInput` if the input has no meta-data.
    /// - any error of [`output_metadata_for`](#method.output_metadata_for).
    pub fn derive_output_metadata<I>(&self, input: &I) -> Result<OutputMetadata>
    where
        I: MetadataSource + ?Sized,
    {
        let region = input
            .largest_possible_region()
            .ok_or(VideoError::InvalidInput("no meta-data available"))?;
        self.output_metadata_for(&region)
    }

    /// Publish the output meta-data on the stream: the largest possible
    /// temporal region, the largest possible spatial region of every frame,
    /// and a requested region equal to the largest possible one.
    pub fn generate_output_information<I, S, T>(
        &self,
        input: &I,
        output: &mut S,
    ) -> Result<OutputMetadata>
    where
        I: MetadataSource + ?Sized,
        S: FrameSink<T> + ?Sized,
    {
        let metadata = self.derive_output_metadata(input)?;
        debug!(
            "frame axis {}: {} frames of {:?}",
            self.frame_axis, metadata.temporal_region, metadata.frame_region
        );

        output.set_largest_possible_temporal_region(metadata.temporal_region);
        output.set_all_largest_possible_spatial_regions(metadata.frame_region.clone());
        output.set_requested_region_to_largest_possible_region();
        Ok(metadata)
    }

    /// Give every frame of the requested temporal region a usable requested
    /// spatial region. Frames whose requested region is degenerate receive
    /// their largest possible region; other frames are left untouched.
    /// Requested frames outside of the largest possible temporal region are
    /// left for [`generate_data`](#method.generate_data) to report.
    pub fn generate_output_requested_region<S, T>(&self, output: &mut S)
    where
        S: FrameSink<T> + ?Sized,
    {
        let requested = output.requested_temporal_region();
        let largest = output.largest_possible_temporal_region();
        if !requested.is_inside(&largest) {
            warn!("requested frames {} exceed largest frames {}", requested, largest);
        }

        let mut resolved = 0;
        for frame in requested.intersect(&largest).frames() {
            let frame_largest = match output.frame_largest_possible_spatial_region(frame) {
                Some(region) => region,
                None => {
                    warn!("frame {} has no largest possible region", frame);
                    continue;
                }
            };
            let current = output.frame_requested_spatial_region(frame);
            let region = resolve_frame_region(&current, &frame_largest);
            if region != current {
                output.set_frame_requested_spatial_region(frame, region);
                resolved += 1;
            }
        }
        debug!("resolved {} requested regions in {}", resolved, requested);
    }

    /// Request the whole input, regardless of which frames are demanded.
    /// Returns the region now requested from the input.
    pub fn generate_input_requested_region<I>(&self, input: &mut I) -> Result<ImageRegion>
    where
        I: MetadataSource + ?Sized,
    {
        let region = input
            .largest_possible_region()
            .ok_or(VideoError::InvalidInput("no meta-data available"))?;
        input.set_requested_region(region.clone());
        Ok(region)
    }

    /// Extract every frame of the requested temporal region from the input
    /// and graft it into the stream, in increasing frame order.
    ///
    /// The whole requested span is validated before any frame is written,
    /// so a failure leaves the stream as it was.
    ///
    /// # Errors
    ///
    /// - `VideoError::RegionOutOfBounds` if the requested frames are not
    ///   all within the largest possible temporal region, if a frame's
    ///   requested region exceeds its largest possible region, or if the
    ///   input lacks data for a slice.
    /// - any error of the meta-data derivation.
    pub fn generate_data<I, S, T>(&self, input: &I, output: &mut S) -> Result<()>
    where
        I: SliceSource<T> + ?Sized,
        S: FrameSink<T> + ?Sized,
    {
        let input_region = input
            .largest_possible_region()
            .ok_or(VideoError::InvalidInput("no meta-data available"))?;
        let metadata = self.output_metadata_for(&input_region)?;

        let requested = output.requested_temporal_region();
        let largest = output.largest_possible_temporal_region();
        if !requested.is_inside(&largest) || !requested.is_inside(&metadata.temporal_region) {
            return Err(VideoError::out_of_bounds(requested, largest));
        }

        let buffered = input.buffered_region();
        let mut slices = Vec::new();
        for frame in requested.frames() {
            let frame_largest = output
                .frame_largest_possible_spatial_region(frame)
                .unwrap_or_else(|| metadata.frame_region.clone());
            let frame_requested = output.frame_requested_spatial_region(frame);
            if !frame_requested.is_degenerate() && !frame_requested.is_inside(&frame_largest) {
                return Err(VideoError::out_of_bounds(frame_requested, frame_largest));
            }

            let slice = slice_region(&input_region, self.frame_axis, frame)?;
            let mut footprint = slice.clone();
            footprint.set_size_at(self.frame_axis, 1);
            if !footprint.is_inside(&buffered) {
                return Err(VideoError::out_of_bounds(slice, buffered));
            }
            slices.push((frame, slice));
        }

        let mut frames = Vec::with_capacity(slices.len());
        for (frame, slice) in slices {
            frames.push((frame, input.extract_region(&slice, self.direction_collapse)?));
        }
        for (frame, image) in frames {
            trace!("grafting frame {} with region {:?}", frame, image.region());
            output.graft_frame(frame, image);
        }
        output.set_buffered_temporal_region(requested);
        debug!("generated frames {}", requested);
        Ok(())
    }

    /// Publish the output meta-data of the given input, as the first half
    /// of an update. Consumers may narrow the stream's requested regions
    /// before calling [`update_output_data`](#method.update_output_data).
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidInput` if `input` is `None`.
    /// - any error of [`generate_output_information`](#method.generate_output_information).
    pub fn update_output_information<I, S, T>(
        &self,
        input: Option<&I>,
        output: &mut S,
    ) -> Result<OutputMetadata>
    where
        I: MetadataSource + ?Sized,
        S: FrameSink<T> + ?Sized,
    {
        let input = input.ok_or(VideoError::InvalidInput("no input connected"))?;
        self.generate_output_information(input, output)
    }

    /// Produce the requested frames, as the second half of an update:
    /// output requested region, input requested region and data
    /// generation, in this order.
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidInput` if `input` is `None`.
    /// - any error of the individual steps.
    pub fn update_output_data<I, S, T>(&self, input: Option<&mut I>, output: &mut S) -> Result<()>
    where
        I: SliceSource<T> + ?Sized,
        S: FrameSink<T> + ?Sized,
    {
        let input = input.ok_or(VideoError::InvalidInput("no input connected"))?;
        self.generate_output_requested_region(&mut *output);
        let _ = self.generate_input_requested_region(&mut *input)?;
        self.generate_data(&*input, output)
    }

    /// Run a full update, producing every frame of the input. This is
    /// [`update_output_information`](#method.update_output_information)
    /// followed by [`update_output_data`](#method.update_output_data).
    ///
    /// # Errors
    ///
    /// - `VideoError::InvalidInput` if `input` is `None`.
    /// - any error of the individual steps.
    pub fn update<I, S, T>(&self, input: Option<&mut I>, output: &mut S) -> Result<()>
    where
        I: SliceSource<T> + ?Sized,
        S: FrameSink<T> + ?Sized,
    {
        let input = input.ok_or(VideoError::InvalidInput("no input connected"))?;
        let _ = self.generate_output_information(&*input, &mut *output)?;
        self.update_output_data(Some(input), output)
    }

    fn check_axis(&self, rank: usize) -> Result<()> {
        if self.frame_axis >= rank {
            return Err(VideoError::InvalidAxis(self.frame_axis, rank));
        }
        Ok(())
    }
}

/// Decide the spatial region to be produced for one frame. A degenerate
/// request (zero extent on every axis) stands for "not specified" and is
/// replaced with the largest possible region. Any other request is kept,
/// including one with only some zero extents.
pub fn resolve_frame_region(requested: &ImageRegion, largest: &ImageRegion) -> ImageRegion {
    if requested.is_degenerate() {
        largest.clone()
    } else {
        requested.clone()
    }
}

/// The input region to extract for a given frame: the input region
/// collapsed to `frame` on the frame axis.
pub fn slice_region(
    input_region: &ImageRegion,
    frame_axis: usize,
    frame: i64,
) -> Result<ImageRegion> {
    input_region.collapse_axis(frame_axis, frame)
}

#[cfg(test)]
mod tests {
    use super::{resolve_frame_region, slice_region, ImageToVideoFilter};
    use crate::error::VideoError;
    use crate::geometry::DirectionCollapse;
    use crate::region::ImageRegion;
    use crate::temporal::TemporalRegion;

    #[test]
    fn test_configuration() {
        let mut filter = ImageToVideoFilter::new();
        assert_eq!(filter.frame_axis(), 0);
        assert_eq!(filter.direction_collapse(), DirectionCollapse::Submatrix);

        filter.set_frame_axis(2);
        filter.set_direction_collapse(DirectionCollapse::Guess);
        assert_eq!(
            filter,
            ImageToVideoFilter::new()
                .with_frame_axis(2)
                .with_direction_collapse(DirectionCollapse::Guess)
        );
    }

    #[test]
    fn test_output_metadata_axis_0() {
        let filter = ImageToVideoFilter::new();
        let metadata = filter
            .output_metadata_for(&ImageRegion::from_size(&[4, 5, 6]))
            .unwrap();
        assert_eq!(metadata.temporal_region, TemporalRegion::new(0, 4));
        assert_eq!(metadata.frame_region, ImageRegion::from_size(&[5, 6]));
    }

    #[test]
    fn test_output_metadata_middle_axis() {
        let filter = ImageToVideoFilter::new().with_frame_axis(1);
        let region = ImageRegion::new(&[-1, 7, 2], &[3, 9, 4]).unwrap();
        let metadata = filter.output_metadata_for(&region).unwrap();
        assert_eq!(metadata.temporal_region, TemporalRegion::new(7, 9));
        assert_eq!(
            metadata.frame_region,
            ImageRegion::new(&[-1, 2], &[3, 4]).unwrap()
        );
    }

    #[test]
    fn test_output_metadata_errors() {
        let filter = ImageToVideoFilter::new().with_frame_axis(3);
        match filter.output_metadata_for(&ImageRegion::from_size(&[4, 5, 6])) {
            Err(VideoError::InvalidAxis(3, 3)) => {}
            other => panic!("unexpected result {:?}", other),
        }

        let filter = ImageToVideoFilter::new();
        match filter.output_metadata_for(&ImageRegion::from_size(&[4])) {
            Err(VideoError::InvalidInput(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_resolve_frame_region() {
        let largest = ImageRegion::from_size(&[5, 6]);
        assert_eq!(resolve_frame_region(&ImageRegion::zeros(2), &largest), largest);

        let mixed = ImageRegion::new(&[1, 1], &[0, 3]).unwrap();
        assert_eq!(resolve_frame_region(&mixed, &largest), mixed);

        let narrow = ImageRegion::new(&[1, 1], &[2, 3]).unwrap();
        assert_eq!(resolve_frame_region(&narrow, &largest), narrow);
    }

    #[test]
    fn test_slice_region() {
        let region = ImageRegion::new(&[0, 0, 0], &[4, 5, 6]).unwrap();
        assert_eq!(
            slice_region(&region, 2, 3).unwrap(),
            ImageRegion::new(&[0, 0, 3], &[4, 5, 0]).unwrap()
        );
        assert!(slice_region(&region, 3, 0).is_err());
    }
}
