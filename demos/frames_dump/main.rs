//! An application for splitting a synthetic volume into frames and
//! printing the resulting video stream's meta-data.
//!
//! Usage: `frames_dump <frame axis> <dim 0> <dim 1> [<dim 2> ...]`

extern crate ndarray;
extern crate volume_video;

use ndarray::{ArrayD, Dimension, IxDyn};
use std::env;
use volume_video::{FrameSink, Image, ImageToVideoFilter, VideoStream};

fn main() {
    let mut args = env::args().skip(1);
    let axis: usize = args
        .next()
        .expect("Frame axis is required")
        .parse()
        .expect("Frame axis must be a non-negative integer");
    let shape: Vec<usize> = args
        .map(|a| a.parse().expect("Dimensions must be non-negative integers"))
        .collect();

    // each pixel holds the sum of its coordinates
    let data = ArrayD::from_shape_fn(IxDyn(&shape), |i| i.slice().iter().sum::<usize>() as u32);
    let mut volume = Image::from_array(data);

    let mut video = VideoStream::new();
    ImageToVideoFilter::new()
        .with_frame_axis(axis)
        .update(Some(&mut volume), &mut video)
        .expect("Failed to split volume into frames");

    println!("{:#?}", video.largest_possible_temporal_region());
    for (i, frame) in video.frames() {
        let sum: u64 = frame.as_array().iter().map(|v| u64::from(*v)).sum();
        println!("frame {}: {:?}, pixel sum {}", i, frame.region(), sum);
    }
}
