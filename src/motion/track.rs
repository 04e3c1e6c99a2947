use crate::errors::{KinemaError, Result};
use crate::motion::keyframe::Keyframe;

/// The ordered keyframe sequence, the source of truth for the animation.
///
/// Keyframe times must be non-decreasing; mutations that would break that
/// ordering are rejected. Every mutation bumps a revision counter so derived
/// sampler state can detect staleness lazily instead of rebuilding eagerly.
#[derive(Debug, Clone, Default)]
pub struct MotionTrack {
    keyframes: Vec<Keyframe>,
    revision: u64,
}

impl MotionTrack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one keyframe.
    ///
    /// Rejects a time earlier than the last stored keyframe; coincident times
    /// are allowed (the resulting zero-duration segment clamps downstream).
    pub fn push(&mut self, keyframe: Keyframe) -> Result<()> {
        if let Some(last) = self.keyframes.last() {
            if keyframe.time < last.time {
                return Err(KinemaError::NonMonotonicKeyframe {
                    time: keyframe.time,
                    last: last.time,
                });
            }
        }
        self.keyframes.push(keyframe);
        self.revision += 1;
        Ok(())
    }

    /// Appends a batch of keyframes, invalidating derived state exactly once.
    ///
    /// The whole batch is validated up front (internally monotonic and not
    /// earlier than the stored tail); a rejected batch leaves the track
    /// untouched. Otherwise observably identical to repeated [`push`](Self::push).
    pub fn extend(&mut self, keyframes: impl IntoIterator<Item = Keyframe>) -> Result<()> {
        let batch: Vec<Keyframe> = keyframes.into_iter().collect();

        let mut last_time = self.keyframes.last().map(|kf| kf.time);
        for kf in &batch {
            if let Some(last) = last_time {
                if kf.time < last {
                    return Err(KinemaError::NonMonotonicKeyframe {
                        time: kf.time,
                        last,
                    });
                }
            }
            last_time = Some(kf.time);
        }

        if batch.is_empty() {
            return Ok(());
        }
        self.keyframes.extend(batch);
        self.revision += 1;
        Ok(())
    }

    /// Empties the sequence; derived state notices through the revision bump.
    pub fn clear(&mut self) {
        self.keyframes.clear();
        self.revision += 1;
    }

    /// Number of stored keyframes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe, or 0 when the track is empty.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |kf| kf.time)
    }

    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }
}
