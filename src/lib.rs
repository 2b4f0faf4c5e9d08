//! Conversion of N-dimensional images into video streams.
//!
//! This crate reinterprets one axis of an N-dimensional image as time and
//! produces a stream of (N-1)-dimensional frames, one for every index along
//! that axis. A 4-dimensional fMRI volume, for instance, becomes a video of
//! 3-dimensional frames, and a 3-dimensional stack of microscopy planes
//! becomes a video of 2-dimensional images.
//!
//! The conversion is performed by [`ImageToVideoFilter`], which reads from
//! an input [`Image`] and writes to an output [`VideoStream`]. The filter
//! follows a demand-driven protocol: only the frames in the stream's
//! requested temporal region are computed, and pixel values are copied
//! exactly.
//!
//! # Example
//!
//! ```
//! use volume_video::{FrameSink, Image, ImageToVideoFilter, VideoStream};
//! use ndarray::{ArrayD, IxDyn};
//! # use volume_video::TemporalRegion;
//!
//! // 3 planes of 4x5 pixels, stacked along the last axis
//! let data = ArrayD::from_shape_fn(IxDyn(&[4, 5, 3]), |i| i[2] as f32);
//! let mut volume = Image::from_array(data);
//! let mut video: VideoStream<f32> = VideoStream::new();
//!
//! let filter = ImageToVideoFilter::new().with_frame_axis(2);
//! filter.update_output_information(Some(&volume), &mut video)?;
//! // only compute the last two frames
//! video.set_requested_temporal_region(TemporalRegion::new(1, 2));
//! filter.update_output_data(Some(&mut volume), &mut video)?;
//!
//! assert!(video.frame(0).is_none());
//! assert_eq!(video.frame(2).unwrap().pixel(&[3, 4]), Some(&2.));
//! # Ok::<(), volume_video::VideoError>(())
//! ```
//!
//! [`ImageToVideoFilter`]: ./filter/struct.ImageToVideoFilter.html
//! [`Image`]: ./image/struct.Image.html
//! [`VideoStream`]: ./stream/struct.VideoStream.html
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate approx;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod error;
pub mod extract;
pub mod filter;
pub mod geometry;
pub mod image;
pub mod pipeline;
pub mod region;
pub mod stream;
pub mod temporal;

pub use crate::error::{Extent, Result, VideoError};
pub use crate::filter::{ImageToVideoFilter, OutputMetadata};
pub use crate::geometry::{DirectionCollapse, ImageGeometry};
pub use crate::image::Image;
pub use crate::pipeline::{FrameSink, MetadataSource, SliceSource};
pub use crate::region::{ImageIndex, ImageRegion, ImageSize};
pub use crate::stream::VideoStream;
pub use crate::temporal::TemporalRegion;
