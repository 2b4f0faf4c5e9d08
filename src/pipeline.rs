//! Capability interfaces between the image-to-video filter and the data
//! objects it reads from and writes to.
//!
//! The filter only relies on these traits: [`MetadataSource`] and
//! [`SliceSource`] on the input side, [`FrameSink`] on the output side.
//! [`Image`] and [`VideoStream`] are the implementations provided by this
//! crate, but any other container answering the same queries can take
//! their place.
//!
//! [`MetadataSource`]: ./trait.MetadataSource.html
//! [`SliceSource`]: ./trait.SliceSource.html
//! [`FrameSink`]: ./trait.FrameSink.html
//! [`Image`]: ../image/struct.Image.html
//! [`VideoStream`]: ../stream/struct.VideoStream.html
use crate::error::Result;
use crate::geometry::DirectionCollapse;
use crate::image::Image;
use crate::region::ImageRegion;
use crate::temporal::TemporalRegion;

/// Region meta-data of an N-dimensional input.
pub trait MetadataSource {
    /// The largest region which could ever be produced by this source, or
    /// `None` if no meta-data is available yet.
    fn largest_possible_region(&self) -> Option<ImageRegion>;

    /// The region currently demanded from this source.
    fn requested_region(&self) -> ImageRegion;

    /// Replace the region demanded from this source.
    fn set_requested_region(&mut self, region: ImageRegion);
}

/// An input from which sub-images can be extracted.
pub trait SliceSource<T>: MetadataSource {
    /// The region for which pixel data is actually available.
    fn buffered_region(&self) -> ImageRegion;

    /// Extract a region, dropping every axis on which the region has zero
    /// extent. See the [`extract`](../extract/index.html) module.
    fn extract_region(
        &self,
        region: &ImageRegion,
        collapse: DirectionCollapse,
    ) -> Result<Image<T>>;
}

/// A sequence of frames with per-frame region bookkeeping.
pub trait FrameSink<T> {
    /// The span of frames which could ever be produced.
    fn largest_possible_temporal_region(&self) -> TemporalRegion;

    /// Replace the span of frames which could ever be produced.
    fn set_largest_possible_temporal_region(&mut self, region: TemporalRegion);

    /// The span of frames currently demanded. Defaults to the largest
    /// possible temporal region if it was never set.
    fn requested_temporal_region(&self) -> TemporalRegion;

    /// Replace the span of frames currently demanded.
    fn set_requested_temporal_region(&mut self, region: TemporalRegion);

    /// Record the span of frames which currently hold valid data.
    fn set_buffered_temporal_region(&mut self, region: TemporalRegion);

    /// The largest spatial region of a frame, if known.
    fn frame_largest_possible_spatial_region(&self, frame: i64) -> Option<ImageRegion>;

    /// The spatial region demanded from a frame. A degenerate region means
    /// that nothing specific was asked for.
    fn frame_requested_spatial_region(&self, frame: i64) -> ImageRegion;

    /// Replace the spatial region demanded from a frame.
    fn set_frame_requested_spatial_region(&mut self, frame: i64, region: ImageRegion);

    /// Set the largest spatial region of every frame in the largest
    /// possible temporal region.
    fn set_all_largest_possible_spatial_regions(&mut self, region: ImageRegion);

    /// Demand every frame in full: the requested temporal region and every
    /// frame's requested spatial region become the largest possible ones.
    fn set_requested_region_to_largest_possible_region(&mut self);

    /// Move a freshly produced image into the frame slot at `frame`.
    fn graft_frame(&mut self, frame: i64, image: Image<T>);
}
