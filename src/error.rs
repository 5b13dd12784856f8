//! Fatal input-validation errors.
//!
//! Per-step anomalies (insufficient matches, solver failures, outlier
//! steps) are absorbed inside the trackers and the fuser; only structural
//! violations of the input contract abort a run, and they do so before any
//! partial output is produced.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{stream} stream has {found} samples, at least {required} required")]
    TooFewSamples {
        stream: &'static str,
        found: usize,
        required: usize,
    },

    #[error("{stream} timestamps are not strictly increasing at sample {index}")]
    NonMonotonicTimestamps { stream: &'static str, index: usize },

    #[error("keypoint set covers {keypoint_frames} frames but the sequence has {frames}")]
    KeypointFrameMismatch {
        keypoint_frames: usize,
        frames: usize,
    },

    #[error("tracking interval must be at least 1 frame")]
    ZeroInterval,
}
