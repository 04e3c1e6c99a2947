use glam::Mat4;

use crate::motion::keyframe::{OrientationMode, quat_from_euler_deg};
use crate::motion::segment::{Segment, build_segments};
use crate::motion::spline::SplineFamily;
use crate::motion::track::MotionTrack;

/// Repeated queries closer in time than this are served from the cache.
const TIME_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
struct CachedSample {
    time: f32,
    mode: OrientationMode,
    family: SplineFamily,
    transform: Mat4,
}

/// Answers "what is the pose at time T" for a [`MotionTrack`].
///
/// Holds the derived segment array, the temporal-locality hint for segment
/// lookup, and the last-result cache. All of it is lookup acceleration:
/// sampling never changes the animation data itself, which is why
/// [`sample`](Self::sample) borrows the track shared while the sampler is the
/// one passed mutably.
#[derive(Debug, Clone, Default)]
pub struct MotionSampler {
    segments: Vec<Segment>,
    built_revision: Option<u64>,
    last_segment: usize,
    cached: Option<CachedSample>,
}

impl MotionSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the model matrix at `time` under the requested policy.
    ///
    /// Never fails: an empty track yields the identity, and times outside the
    /// keyframe range clamp to the boundary poses. The sampler backs a
    /// real-time loop, where a clamped frame beats an aborted one.
    #[must_use]
    pub fn sample(
        &mut self,
        track: &MotionTrack,
        time: f32,
        mode: OrientationMode,
        family: SplineFamily,
    ) -> Mat4 {
        if track.is_empty() {
            return Mat4::IDENTITY;
        }

        // 1. Rebuild derived state if the track mutated since the last build.
        //    This also drops the query cache, so a hit below is never stale.
        self.rebuild_if_stale(track);

        // 2. Cache hit: an epsilon-equal time under the same policy.
        if let Some(cached) = &self.cached {
            if (time - cached.time).abs() < TIME_EPSILON
                && cached.mode == mode
                && cached.family == family
            {
                return cached.transform;
            }
        }

        // 3. A single keyframe needs no spline data.
        let keyframes = track.keyframes();
        if let [only] = keyframes {
            return self.finish(time, mode, family, only.pose_matrix(mode));
        }

        // 4. Locate the active segment, remembering it for the next query.
        let index = self.find_segment(time);
        self.last_segment = index;

        // 5. Past the final segment the pose holds at the last keyframe.
        let Some(segment) = self.segments.get(index) else {
            let pose = keyframes[keyframes.len() - 1].pose_matrix(mode);
            return self.finish(time, mode, family, pose);
        };

        // 6. Normalized progression through the segment.
        let t = if segment.duration > 0.0 {
            ((time - segment.start_time) / segment.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let position = family.blend([segment.p0, segment.p1, segment.p2, segment.p3], t);

        // Quaternion orientation is always two-point slerp between the
        // segment boundaries, regardless of spline family: slerp already
        // gives shortest-path, constant-angular-velocity interpolation.
        let rotation = match mode {
            OrientationMode::Quaternion => segment.q1.slerp(segment.q2, t),
            OrientationMode::Euler => {
                let euler = family.blend([segment.e0, segment.e1, segment.e2, segment.e3], t);
                quat_from_euler_deg(euler)
            }
        };

        self.finish(
            time,
            mode,
            family,
            Mat4::from_rotation_translation(rotation, position),
        )
    }

    fn finish(
        &mut self,
        time: f32,
        mode: OrientationMode,
        family: SplineFamily,
        transform: Mat4,
    ) -> Mat4 {
        self.cached = Some(CachedSample {
            time,
            mode,
            family,
            transform,
        });
        transform
    }

    fn rebuild_if_stale(&mut self, track: &MotionTrack) {
        if self.built_revision == Some(track.revision()) {
            return;
        }
        self.segments = build_segments(track.keyframes());
        self.built_revision = Some(track.revision());
        self.last_segment = 0;
        self.cached = None;
    }

    /// Locates the segment whose `[start_time, end_time]` range contains
    /// `time`.
    ///
    /// Consecutive playback queries almost always land in the same or an
    /// adjacent segment, so those three are probed first (O(1) amortized
    /// during playback). Anything else falls back to binary search over the
    /// segment start times, clamped into `[0, segment_count - 1]`.
    fn find_segment(&self, time: f32) -> usize {
        let hint = self.last_segment;

        if self.segments.get(hint).is_some_and(|seg| seg.contains(time)) {
            return hint;
        }
        if self
            .segments
            .get(hint + 1)
            .is_some_and(|seg| seg.contains(time))
        {
            return hint + 1;
        }
        if hint > 0 && self.segments[hint - 1].contains(time) {
            return hint - 1;
        }

        // partition_point yields the first segment starting after `time`;
        // the one before it is the containing segment. Saturation clamps
        // times before the first keyframe to segment 0, and a time past
        // every start clamps to the final segment.
        let next = self.segments.partition_point(|seg| seg.start_time <= time);
        next.saturating_sub(1)
    }
}
