//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`KinemaError`] covers all failure modes:
//! - Keyframe store ordering violations
//! - Configuration and keyframe path-spec parsing errors
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, KinemaError>`.

use thiserror::Error;

/// The main error type for the kinema engine.
///
/// Sampling itself never fails; out-of-range queries clamp. Errors surface
/// only at the mutation and configuration boundaries.
#[derive(Error, Debug)]
pub enum KinemaError {
    // ========================================================================
    // Keyframe Store Errors
    // ========================================================================
    /// A keyframe was appended with a time earlier than the stored tail.
    /// Segment lookup binary-searches over keyframe times and requires them
    /// to be non-decreasing.
    #[error("Non-monotonic keyframe time {time} (last stored time {last})")]
    NonMonotonicKeyframe {
        /// Time of the rejected keyframe
        time: f32,
        /// Time of the last keyframe already stored
        last: f32,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A keyframe path spec contained no parsable group at all.
    #[error("Keyframe path spec has no parsable entries: {0:?}")]
    EmptyPathSpec(String),

    /// Unrecognized orientation mode name.
    #[error("Invalid orientation mode {0:?} (expected quat/quaternion/0 or euler/1)")]
    InvalidOrientationMode(String),

    /// Unrecognized spline family name.
    #[error("Invalid spline family {0:?} (expected crspline/catmullrom/0 or bspline/1)")]
    InvalidSplineFamily(String),
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
