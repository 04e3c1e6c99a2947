#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod errors;
pub mod motion;

pub use config::{KEYFRAME_TIME_STEP, MotionSettings, default_path, parse_path_spec};
pub use errors::{KinemaError, Result};
pub use motion::{
    Keyframe, LoopMode, MotionController, MotionSampler, MotionTrack, OrientationMode, Playback,
    SplineFamily, normalize_angles,
};
