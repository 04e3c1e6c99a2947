//! Configuration surface: interpolation policy values and the textual
//! keyframe path format.
//!
//! These are the plain values a host's option layer produces; the crate
//! consumes them without owning any argv handling of its own.

use std::str::FromStr;

use glam::Vec3;

use crate::errors::{KinemaError, Result};
use crate::motion::{Keyframe, OrientationMode, SplineFamily};

/// Time spacing between successive keyframes parsed from a path spec.
pub const KEYFRAME_TIME_STEP: f32 = 2.0;

/// The interpolation policy a sampler query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSettings {
    pub orientation: OrientationMode,
    pub family: SplineFamily,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            orientation: OrientationMode::Quaternion,
            family: SplineFamily::CatmullRom,
        }
    }
}

impl FromStr for OrientationMode {
    type Err = KinemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quat" | "quaternion" | "0" => Ok(Self::Quaternion),
            "euler" | "1" => Ok(Self::Euler),
            other => Err(KinemaError::InvalidOrientationMode(other.to_string())),
        }
    }
}

impl FromStr for SplineFamily {
    type Err = KinemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "crspline" | "catmullrom" | "0" => Ok(Self::CatmullRom),
            "bspline" | "1" => Ok(Self::BSpline),
            other => Err(KinemaError::InvalidSplineFamily(other.to_string())),
        }
    }
}

/// Parses a textual keyframe path: `"x,y,z:eX,eY,eZ;…"`.
///
/// Each `;`-separated group is one keyframe: position and Euler angles in
/// degrees, comma-separated. Parsed keyframes are timed `0, Δ, 2Δ, …` with
/// Δ = [`KEYFRAME_TIME_STEP`]. Malformed groups are skipped with a logged
/// warning and do not advance the time counter; a spec with no parsable
/// group at all is rejected.
pub fn parse_path_spec(spec: &str) -> Result<Vec<Keyframe>> {
    let mut keyframes = Vec::new();
    let mut time = 0.0;

    for group in spec.split(';') {
        if group.is_empty() {
            continue;
        }
        let Some((pos, euler)) = group.split_once(':') else {
            log::warn!("Invalid keyframe format: {group:?}");
            continue;
        };
        let (Some(position), Some(euler_deg)) = (parse_vec3(pos), parse_vec3(euler)) else {
            log::warn!("Invalid keyframe components: {group:?}");
            continue;
        };

        keyframes.push(Keyframe::from_euler_deg(position, euler_deg, time));
        time += KEYFRAME_TIME_STEP;
    }

    if keyframes.is_empty() {
        return Err(KinemaError::EmptyPathSpec(spec.to_string()));
    }
    Ok(keyframes)
}

/// Three comma-separated floats; extra components are ignored.
fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut parts = s.split(',').map(|c| c.trim().parse::<f32>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    Some(Vec3::new(x, y, z))
}

/// The built-in fallback path used when no keyframe spec is provided or the
/// provided one is rejected.
#[must_use]
pub fn default_path() -> Vec<Keyframe> {
    vec![
        Keyframe::from_euler_deg(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), 0.0),
        Keyframe::from_euler_deg(Vec3::new(3.0, 2.0, 0.0), Vec3::new(45.0, 90.0, 0.0), 2.0),
        Keyframe::from_euler_deg(Vec3::new(0.0, 4.0, 3.0), Vec3::new(90.0, 180.0, 45.0), 4.0),
        Keyframe::from_euler_deg(Vec3::new(-3.0, 2.0, 0.0), Vec3::new(135.0, 270.0, 90.0), 6.0),
        Keyframe::from_euler_deg(Vec3::new(0.0, 0.0, -3.0), Vec3::new(180.0, 360.0, 135.0), 8.0),
        Keyframe::from_euler_deg(Vec3::new(0.0, 0.0, 0.0), Vec3::new(360.0, 720.0, 360.0), 10.0),
    ]
}
