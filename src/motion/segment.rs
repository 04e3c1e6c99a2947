use glam::{Quat, Vec3};

use crate::motion::keyframe::Keyframe;

/// Precomputed spline control data for the interval between two consecutive
/// keyframes `i` and `i+1`.
///
/// Derived from the four keyframes `i-1, i, i+1, i+2`, index-clamped at the
/// sequence boundaries so the first and last keyframes act as their own
/// neighbors. Euler control points are pre-normalized against their neighbors
/// so component-wise blending never sweeps across a ±360° wrap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    // Position control points
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    // Euler control points, angle-normalized
    pub e0: Vec3,
    pub e1: Vec3,
    pub e2: Vec3,
    pub e3: Vec3,
    // Boundary quaternions
    pub q1: Quat,
    pub q2: Quat,
    pub start_time: f32,
    pub end_time: f32,
    /// May be 0 when two keyframes share a timestamp.
    pub duration: f32,
}

impl Segment {
    pub(crate) fn contains(&self, time: f32) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

/// Builds the full segment array for a keyframe sequence.
///
/// O(n) in keyframe count; one segment per consecutive pair, empty for fewer
/// than two keyframes.
pub(crate) fn build_segments(keyframes: &[Keyframe]) -> Vec<Segment> {
    if keyframes.len() < 2 {
        return Vec::new();
    }

    let last = keyframes.len() - 1;
    let mut segments = Vec::with_capacity(last);

    for i in 0..last {
        let prev = &keyframes[i.saturating_sub(1)];
        let curr = &keyframes[i];
        let next = &keyframes[i + 1];
        let after = &keyframes[(i + 2).min(last)];

        let e1 = curr.euler_deg;
        let e0 = normalize_angles(prev.euler_deg, e1);
        let e2 = normalize_angles(next.euler_deg, e1);
        let e3 = normalize_angles(after.euler_deg, e2);

        segments.push(Segment {
            p0: prev.position,
            p1: curr.position,
            p2: next.position,
            p3: after.position,
            e0,
            e1,
            e2,
            e3,
            q1: curr.rotation,
            q2: next.rotation,
            start_time: curr.time,
            end_time: next.time,
            duration: next.time - curr.time,
        });
    }

    segments
}

/// Shifts each axis of `angles` by whole turns until it lies within 180° of
/// the matching axis of `reference`.
///
/// Keyframe authors may use angles outside `[0, 360)` or crossing a wrap
/// boundary; without this shift the Euler interpolator would sweep the long
/// way around.
#[must_use]
pub fn normalize_angles(angles: Vec3, reference: Vec3) -> Vec3 {
    let mut result = angles;
    for i in 0..3 {
        while result[i] - reference[i] > 180.0 {
            result[i] -= 360.0;
        }
        while result[i] - reference[i] < -180.0 {
            result[i] += 360.0;
        }
    }
    result
}
