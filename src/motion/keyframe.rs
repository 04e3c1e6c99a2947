use glam::{EulerRot, Mat4, Quat, Vec3};

/// How a sampled orientation is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationMode {
    /// Slerp between the boundary quaternions of the active segment.
    Quaternion,
    /// Spline-blend the Euler control points, composed about X, then Y, then Z.
    Euler,
}

/// One authored pose sample of the animated body.
///
/// The orientation is held in both representations at once (Euler angles in
/// degrees and a unit quaternion) so either interpolation mode runs without
/// converting at query time. Constructing from one representation derives the
/// other immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// World-space translation.
    pub position: Vec3,
    /// Euler angles in degrees, X·Y·Z composition order.
    pub euler_deg: Vec3,
    pub rotation: Quat,
    pub time: f32,
}

impl Keyframe {
    /// Creates a keyframe from Euler angles in degrees.
    #[must_use]
    pub fn from_euler_deg(position: Vec3, euler_deg: Vec3, time: f32) -> Self {
        Self {
            position,
            euler_deg,
            rotation: quat_from_euler_deg(euler_deg),
            time,
        }
    }

    /// Creates a keyframe from a unit quaternion.
    #[must_use]
    pub fn from_rotation(position: Vec3, rotation: Quat, time: f32) -> Self {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Self {
            position,
            euler_deg: Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees()),
            rotation,
            time,
        }
    }

    /// The keyframe's own pose as a model matrix.
    #[must_use]
    pub fn pose_matrix(&self, mode: OrientationMode) -> Mat4 {
        let rotation = match mode {
            OrientationMode::Quaternion => self.rotation,
            OrientationMode::Euler => quat_from_euler_deg(self.euler_deg),
        };
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// X·Y·Z intrinsic composition. The rotation order is a contract shared by
/// keyframe construction and Euler-mode sampling; changing it changes every
/// sampled pose.
pub(crate) fn quat_from_euler_deg(euler_deg: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        euler_deg.x.to_radians(),
        euler_deg.y.to_radians(),
        euler_deg.z.to_radians(),
    )
}
