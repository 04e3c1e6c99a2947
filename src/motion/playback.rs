/// How the clock behaves at the end of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Clamp at the final keyframe time and pause.
    Once,
    /// Wrap back to the start and keep running.
    Loop,
}

/// The animation clock driving a motion track.
///
/// The host calls [`advance`](Self::advance) once per rendered frame with its
/// wall-clock delta and the track duration, then samples the track at
/// [`time`](Self::time).
#[derive(Debug, Clone)]
pub struct Playback {
    pub time: f32,
    /// Scale applied to incoming deltas. Negative plays in reverse.
    pub speed: f32,
    pub paused: bool,
    pub loop_mode: LoopMode,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            paused: false,
            loop_mode: LoopMode::Loop,
        }
    }
}

impl Playback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `dt` against a track of `duration` time units.
    pub fn advance(&mut self, dt: f32, duration: f32) {
        if self.paused {
            return;
        }
        if duration <= 0.0 {
            self.time = 0.0;
            return;
        }

        self.time += dt * self.speed;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps from the end.
                    self.time = duration + (self.time % duration);
                }
            }
        }
    }

    /// Rewinds to the start of the animation.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
