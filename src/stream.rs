//! Module holding the in-memory video stream: a sequence of frames indexed
//! by frame number, with temporal and per-frame spatial region slots.
use crate::image::Image;
use crate::pipeline::FrameSink;
use crate::region::ImageRegion;
use crate::temporal::TemporalRegion;
use std::collections::BTreeMap;

/// A video stream held in memory.
///
/// Besides the frames themselves, the stream keeps track of three temporal
/// regions (largest possible, requested and buffered) and of the same
/// three spatial regions for every frame, so that each frame can be
/// demanded independently of the others.
#[derive(Debug, Clone)]
pub struct VideoStream<T> {
    largest_temporal: TemporalRegion,
    requested_temporal: Option<TemporalRegion>,
    buffered_temporal: TemporalRegion,
    frame_rank: usize,
    largest_spatial: BTreeMap<i64, ImageRegion>,
    requested_spatial: BTreeMap<i64, ImageRegion>,
    buffered_spatial: BTreeMap<i64, ImageRegion>,
    frames: BTreeMap<i64, Image<T>>,
}

impl<T> Default for VideoStream<T> {
    fn default() -> Self {
        VideoStream {
            largest_temporal: TemporalRegion::default(),
            requested_temporal: None,
            buffered_temporal: TemporalRegion::default(),
            frame_rank: 0,
            largest_spatial: BTreeMap::new(),
            requested_spatial: BTreeMap::new(),
            buffered_spatial: BTreeMap::new(),
            frames: BTreeMap::new(),
        }
    }
}

impl<T> VideoStream<T> {
    /// Create an empty video stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dimensions of each frame, as last published through
    /// `set_all_largest_possible_spatial_regions`. Zero until then.
    pub fn frame_rank(&self) -> usize {
        self.frame_rank
    }

    /// The span of frames which currently hold valid data.
    pub fn buffered_temporal_region(&self) -> TemporalRegion {
        self.buffered_temporal
    }

    /// The region for which a frame holds data, if it holds any.
    pub fn frame_buffered_spatial_region(&self, frame: i64) -> Option<&ImageRegion> {
        self.buffered_spatial.get(&frame)
    }

    /// Obtain a frame, if it was ever produced.
    pub fn frame(&self, frame: i64) -> Option<&Image<T>> {
        self.frames.get(&frame)
    }

    /// Iterate over all produced frames in increasing frame order.
    pub fn frames(&self) -> impl Iterator<Item = (i64, &Image<T>)> {
        self.frames.iter().map(|(i, f)| (*i, f))
    }

    /// Number of frames which were produced.
    pub fn number_of_frames(&self) -> usize {
        self.frames.len()
    }

    /// Move the frames out of the stream, discarding region bookkeeping.
    pub fn into_frames(self) -> BTreeMap<i64, Image<T>> {
        self.frames
    }
}

impl<T> FrameSink<T> for VideoStream<T> {
    fn largest_possible_temporal_region(&self) -> TemporalRegion {
        self.largest_temporal
    }

    fn set_largest_possible_temporal_region(&mut self, region: TemporalRegion) {
        self.largest_temporal = region;
    }

    fn requested_temporal_region(&self) -> TemporalRegion {
        self.requested_temporal.unwrap_or(self.largest_temporal)
    }

    fn set_requested_temporal_region(&mut self, region: TemporalRegion) {
        self.requested_temporal = Some(region);
    }

    fn set_buffered_temporal_region(&mut self, region: TemporalRegion) {
        self.buffered_temporal = region;
    }

    fn frame_largest_possible_spatial_region(&self, frame: i64) -> Option<ImageRegion> {
        self.largest_spatial.get(&frame).cloned()
    }

    fn frame_requested_spatial_region(&self, frame: i64) -> ImageRegion {
        self.requested_spatial
            .get(&frame)
            .cloned()
            .unwrap_or_else(|| ImageRegion::zeros(self.frame_rank))
    }

    fn set_frame_requested_spatial_region(&mut self, frame: i64, region: ImageRegion) {
        let _ = self.requested_spatial.insert(frame, region);
    }

    fn set_all_largest_possible_spatial_regions(&mut self, region: ImageRegion) {
        let largest = self.largest_temporal;
        self.frame_rank = region.rank();
        self.largest_spatial = largest.frames().map(|i| (i, region.clone())).collect();

        // frames of a previous configuration outside the new span
        self.frames.retain(|i, _| largest.contains(*i));
        self.buffered_spatial.retain(|i, _| largest.contains(*i));
        self.requested_spatial.retain(|i, _| largest.contains(*i));
        self.buffered_temporal = self.buffered_temporal.intersect(&largest);
    }

    fn set_requested_region_to_largest_possible_region(&mut self) {
        self.requested_temporal = Some(self.largest_temporal);
        self.requested_spatial = self.largest_spatial.clone();
    }

    fn graft_frame(&mut self, frame: i64, image: Image<T>) {
        let _ = self.buffered_spatial.insert(frame, image.region().clone());
        match self.frames.get_mut(&frame) {
            Some(slot) => slot.graft(image),
            None => {
                let _ = self.frames.insert(frame, image);
            }
        }
    }
}
