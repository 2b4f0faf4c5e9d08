//! Temporal regions: contiguous spans of frame indices.
use std::convert::TryFrom;
use std::fmt;

/// A contiguous span of frames, described by the index of its first frame
/// and the number of frames it covers.
///
/// # Example
///
/// ```
/// # use volume_video::TemporalRegion;
/// let span = TemporalRegion::new(2, 3);
/// assert_eq!(span.frame_end(), Some(5));
/// assert_eq!(span.frames().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert!(span.is_inside(&TemporalRegion::new(0, 5)));
/// ```
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Default)]
pub struct TemporalRegion {
    frame_start: i64,
    frame_duration: u64,
}

impl TemporalRegion {
    /// Create a new temporal region.
    pub fn new(frame_start: i64, frame_duration: u64) -> Self {
        TemporalRegion {
            frame_start,
            frame_duration,
        }
    }

    /// Index of the first frame.
    pub fn frame_start(&self) -> i64 {
        self.frame_start
    }

    /// Number of frames in the span.
    pub fn frame_duration(&self) -> u64 {
        self.frame_duration
    }

    /// One past the index of the last frame, or `None` if that index does
    /// not fit in an `i64`.
    pub fn frame_end(&self) -> Option<i64> {
        i64::try_from(self.end()).ok()
    }

    // exact for every start and duration
    fn end(&self) -> i128 {
        i128::from(self.frame_start) + i128::from(self.frame_duration)
    }

    /// Set the index of the first frame, keeping the duration.
    pub fn set_frame_start(&mut self, frame_start: i64) {
        self.frame_start = frame_start;
    }

    /// Set the number of frames, keeping the start.
    pub fn set_frame_duration(&mut self, frame_duration: u64) {
        self.frame_duration = frame_duration;
    }

    /// Whether the span covers no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_duration == 0
    }

    /// Whether the given frame index is part of this span.
    pub fn contains(&self, frame: i64) -> bool {
        frame >= self.frame_start && i128::from(frame) < self.end()
    }

    /// Whether this span lies entirely within `other`.
    pub fn is_inside(&self, other: &TemporalRegion) -> bool {
        self.frame_start >= other.frame_start && self.end() <= other.end()
    }

    /// The frames common to this span and `other`. The result is empty,
    /// starting at the later of both starts, if they do not overlap.
    pub fn intersect(&self, other: &TemporalRegion) -> TemporalRegion {
        let start = self.frame_start.max(other.frame_start);
        let end = self.end().min(other.end());
        let duration = u64::try_from(end - i128::from(start)).unwrap_or(0);
        TemporalRegion::new(start, duration)
    }

    /// Iterate over the frame indices of this span in increasing order.
    pub fn frames(&self) -> impl Iterator<Item = i64> {
        let start = self.frame_start;
        (0..self.frame_duration).map_while(move |i| {
            i64::try_from(i).ok().and_then(|i| start.checked_add(i))
        })
    }
}

impl fmt::Display for TemporalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.frame_start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::TemporalRegion;

    #[test]
    fn test_temporal_region() {
        let span = TemporalRegion::new(-1, 4);
        assert_eq!(span.frame_end(), Some(3));
        assert!(span.contains(-1));
        assert!(span.contains(2));
        assert!(!span.contains(3));
        assert!(!span.is_empty());
        assert_eq!(span.frames().count(), 4);
        assert_eq!(span.to_string(), "[-1, 3)");
    }

    #[test]
    fn test_temporal_is_inside() {
        let largest = TemporalRegion::new(0, 10);
        assert!(TemporalRegion::new(0, 10).is_inside(&largest));
        assert!(TemporalRegion::new(4, 6).is_inside(&largest));
        assert!(!TemporalRegion::new(4, 7).is_inside(&largest));
        assert!(!TemporalRegion::new(-1, 2).is_inside(&largest));
        assert!(TemporalRegion::new(10, 0).is_inside(&largest));
    }

    #[test]
    fn test_spans_past_the_last_index() {
        let last = TemporalRegion::new(i64::MAX, 1);
        assert_eq!(last.frame_end(), None);
        assert!(last.contains(i64::MAX));
        assert_eq!(last.frames().collect::<Vec<_>>(), vec![i64::MAX]);
        assert_eq!(last.to_string(), format!("[{}, 9223372036854775808)", i64::MAX));

        let largest = TemporalRegion::new(0, 4);
        assert!(!last.is_inside(&largest));
        assert!(!TemporalRegion::new(0, u64::MAX).is_inside(&largest));
        assert!(!TemporalRegion::new(2, u64::MAX).is_inside(&largest));
        assert!(TemporalRegion::new(i64::MIN, u64::MAX).contains(i64::MAX - 1));
        assert!(!TemporalRegion::new(i64::MIN, u64::MAX).contains(i64::MAX));
    }

    #[test]
    fn test_intersect() {
        let largest = TemporalRegion::new(0, 4);
        assert_eq!(
            TemporalRegion::new(2, u64::MAX).intersect(&largest),
            TemporalRegion::new(2, 2)
        );
        assert_eq!(
            TemporalRegion::new(-3, 5).intersect(&largest),
            TemporalRegion::new(0, 2)
        );
        assert!(TemporalRegion::new(i64::MAX, 1).intersect(&largest).is_empty());
        assert!(TemporalRegion::new(-5, 2).intersect(&largest).is_empty());
    }

    #[test]
    fn test_empty_span_has_no_frames() {
        let span = TemporalRegion::default();
        assert!(span.is_empty());
        assert_eq!(span.frames().count(), 0);
    }
}
