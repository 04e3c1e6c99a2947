use glam::Mat4;

use crate::config::MotionSettings;
use crate::errors::Result;
use crate::motion::keyframe::Keyframe;
use crate::motion::sampler::MotionSampler;
use crate::motion::track::MotionTrack;

/// Owns a keyframe track and its sampler as one animation context.
///
/// Hosts keep a single controller per animated body and pass it explicitly to
/// whatever consumes the transform, rather than sharing the track and sampler
/// through ambient state.
#[derive(Debug, Clone, Default)]
pub struct MotionController {
    track: MotionTrack,
    sampler: MotionSampler,
}

impl MotionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a controller from an ordered keyframe path, e.g. the result of
    /// [`parse_path_spec`](crate::config::parse_path_spec) or
    /// [`default_path`](crate::config::default_path).
    pub fn from_keyframes(keyframes: impl IntoIterator<Item = Keyframe>) -> Result<Self> {
        let mut controller = Self::new();
        controller.track.extend(keyframes)?;
        Ok(controller)
    }

    /// Appends one keyframe. See [`MotionTrack::push`].
    pub fn push(&mut self, keyframe: Keyframe) -> Result<()> {
        self.track.push(keyframe)
    }

    /// Appends a batch of keyframes. See [`MotionTrack::extend`].
    pub fn extend(&mut self, keyframes: impl IntoIterator<Item = Keyframe>) -> Result<()> {
        self.track.extend(keyframes)
    }

    pub fn clear(&mut self) {
        self.track.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.track.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    /// Total animation duration in time units.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.track.duration()
    }

    #[must_use]
    pub fn track(&self) -> &MotionTrack {
        &self.track
    }

    /// The model matrix at `time` under the given settings.
    #[must_use]
    pub fn transform_at(&mut self, time: f32, settings: MotionSettings) -> Mat4 {
        self.sampler
            .sample(&self.track, time, settings.orientation, settings.family)
    }
}
