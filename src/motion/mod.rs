mod segment;
pub mod controller;
pub mod keyframe;
pub mod playback;
pub mod sampler;
pub mod spline;
pub mod track;

pub use controller::MotionController;
pub use keyframe::{Keyframe, OrientationMode};
pub use playback::{LoopMode, Playback};
pub use sampler::MotionSampler;
pub use segment::normalize_angles;
pub use spline::SplineFamily;
pub use track::MotionTrack;
