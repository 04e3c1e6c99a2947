//! Headless driver for the motion engine: builds a keyframe path, then
//! samples the model matrix along it the way a render loop would.
//!
//! ```text
//! cargo run --example sample_path
//! cargo run --example sample_path -- "0,0,0:0,0,0;3,2,1:45,90,0;0,4,2:90,180,45"
//! ```

use kinema::{
    LoopMode, MotionController, MotionSettings, Playback, default_path, parse_path_spec,
};

const FRAME_STEP: f32 = 0.25;

fn main() -> kinema::Result<()> {
    env_logger::init();

    let keyframes = match std::env::args().nth(1) {
        Some(spec) => match parse_path_spec(&spec) {
            Ok(frames) => frames,
            Err(err) => {
                log::warn!("{err}; falling back to the default path");
                default_path()
            }
        },
        None => default_path(),
    };

    let mut controller = MotionController::from_keyframes(keyframes)?;
    let settings = MotionSettings::default();
    let duration = controller.duration();

    println!(
        "{} keyframes over {duration} time units ({:?} / {:?})",
        controller.len(),
        settings.orientation,
        settings.family,
    );

    let mut playback = Playback {
        loop_mode: LoopMode::Once,
        ..Playback::new()
    };

    loop {
        let transform = controller.transform_at(playback.time, settings);
        let position = transform.w_axis.truncate();
        println!(
            "t={:5.2}  position=({:7.3}, {:7.3}, {:7.3})",
            playback.time, position.x, position.y, position.z
        );

        if playback.paused {
            break;
        }
        playback.advance(FRAME_STEP, duration);
    }

    Ok(())
}
