//! Configuration Surface Tests
//!
//! Tests for:
//! - Textual keyframe path-spec parsing (format, skipping, rejection)
//! - Option value vocabularies for orientation mode and spline family
//! - The built-in default path

use glam::{Quat, Vec3};

use kinema::{
    KEYFRAME_TIME_STEP, KinemaError, MotionSettings, OrientationMode, SplineFamily, default_path,
    parse_path_spec,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Path Spec Parsing
// ============================================================================

#[test]
fn parse_two_keyframes_with_auto_times() {
    let frames = parse_path_spec("0,0,0:0,0,0;5,0,0:0,90,0").unwrap();
    assert_eq!(frames.len(), 2);

    assert!(approx(frames[0].time, 0.0));
    assert!(approx(frames[1].time, KEYFRAME_TIME_STEP));

    assert_eq!(frames[0].position, Vec3::ZERO);
    assert_eq!(frames[1].position, Vec3::new(5.0, 0.0, 0.0));

    assert_eq!(frames[1].euler_deg, Vec3::new(0.0, 90.0, 0.0));
    let expected = Quat::from_rotation_y(90.0_f32.to_radians());
    let angle = frames[1].rotation.angle_between(expected);
    assert!(angle < 1e-4, "Derived quaternion off by {angle}");
}

#[test]
fn parse_skips_group_without_colon() {
    let frames = parse_path_spec("0,0,0:0,0,0;garbage;1,1,1:0,0,0").unwrap();
    assert_eq!(frames.len(), 2);
    // A skipped group does not advance the time counter.
    assert!(approx(frames[1].time, KEYFRAME_TIME_STEP));
    assert_eq!(frames[1].position, Vec3::ONE);
}

#[test]
fn parse_skips_group_with_bad_components() {
    let frames = parse_path_spec("0,0,0:0,0,0;1,x,1:0,0,0;2,2,2:0,0,0").unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].position, Vec3::splat(2.0));
}

#[test]
fn parse_skips_group_with_missing_components() {
    let frames = parse_path_spec("1,2:0,0,0;1,2,3:0,0,0").unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn parse_ignores_extra_components() {
    let frames = parse_path_spec("1,2,3,99:4,5,6").unwrap();
    assert_eq!(frames[0].position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(frames[0].euler_deg, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn parse_tolerates_trailing_semicolon() {
    let frames = parse_path_spec("0,0,0:0,0,0;").unwrap();
    assert_eq!(frames.len(), 1);
}

#[test]
fn parse_rejects_empty_spec() {
    let result = parse_path_spec("");
    assert!(matches!(result, Err(KinemaError::EmptyPathSpec(_))));
}

#[test]
fn parse_rejects_spec_with_no_parsable_group() {
    let result = parse_path_spec("1,2,3;4,5,6");
    assert!(matches!(result, Err(KinemaError::EmptyPathSpec(_))));
}

// ============================================================================
// Option Vocabularies
// ============================================================================

#[test]
fn orientation_mode_vocabulary() {
    assert_eq!("quat".parse::<OrientationMode>().unwrap(), OrientationMode::Quaternion);
    assert_eq!(
        "quaternion".parse::<OrientationMode>().unwrap(),
        OrientationMode::Quaternion
    );
    assert_eq!("0".parse::<OrientationMode>().unwrap(), OrientationMode::Quaternion);
    assert_eq!("euler".parse::<OrientationMode>().unwrap(), OrientationMode::Euler);
    assert_eq!("1".parse::<OrientationMode>().unwrap(), OrientationMode::Euler);

    let err = "slerp".parse::<OrientationMode>();
    assert!(matches!(err, Err(KinemaError::InvalidOrientationMode(_))));
}

#[test]
fn spline_family_vocabulary() {
    assert_eq!("crspline".parse::<SplineFamily>().unwrap(), SplineFamily::CatmullRom);
    assert_eq!("catmullrom".parse::<SplineFamily>().unwrap(), SplineFamily::CatmullRom);
    assert_eq!("0".parse::<SplineFamily>().unwrap(), SplineFamily::CatmullRom);
    assert_eq!("bspline".parse::<SplineFamily>().unwrap(), SplineFamily::BSpline);
    assert_eq!("1".parse::<SplineFamily>().unwrap(), SplineFamily::BSpline);

    let err = "hermite".parse::<SplineFamily>();
    assert!(matches!(err, Err(KinemaError::InvalidSplineFamily(_))));
}

#[test]
fn settings_default_is_quaternion_catmull_rom() {
    let settings = MotionSettings::default();
    assert_eq!(settings.orientation, OrientationMode::Quaternion);
    assert_eq!(settings.family, SplineFamily::CatmullRom);
}

// ============================================================================
// Default Path
// ============================================================================

#[test]
fn default_path_shape() {
    let frames = default_path();
    assert_eq!(frames.len(), 6);

    // Evenly spaced, starting and ending at the origin.
    for (i, kf) in frames.iter().enumerate() {
        assert!(approx(kf.time, i as f32 * 2.0), "frame {i} at {}", kf.time);
    }
    assert_eq!(frames[0].position, Vec3::ZERO);
    assert_eq!(frames[5].position, Vec3::ZERO);

    // The path ends rotated by full turns; normalization happens at segment
    // build time, not here.
    assert_eq!(frames[5].euler_deg, Vec3::new(360.0, 720.0, 360.0));
}
