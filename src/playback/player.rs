// Animation playback state machine

use std::sync::Arc;

use crate::tileset::{Clip, Frame, IterationMode, Region};

use super::PlaybackError;

/// Advances one entity's current frame over elapsed time.
///
/// The instance owns only its cursor (frame index, residual time,
/// play/finish flags); the clip itself is shared and never mutated.
/// Dropping the instance is all the cleanup entity removal needs.
#[derive(Debug)]
pub struct Playback {
    /// Shared clip definition
    clip: Arc<Clip>,

    /// Index of the frame currently displayed
    frame_index: usize,

    /// Time accumulated toward the current frame's duration, already
    /// speed-scaled
    residual_ms: f32,

    /// Whether advance() consumes time
    playing: bool,

    /// Set once a Never clip has held its last frame
    finished: bool,

    /// Per-instance speed on top of the clip's own multiplier
    playback_speed: f32,
}

impl Playback {
    /// Start playback at frame 0.
    ///
    /// Fails with [`PlaybackError::InvalidClip`] if the clip has no
    /// frames; clip construction already rejects that, so this only
    /// triggers for definitions built outside the loader.
    pub fn start(clip: Arc<Clip>) -> Result<Self, PlaybackError> {
        if clip.frames().is_empty() {
            return Err(PlaybackError::InvalidClip);
        }

        Ok(Self {
            clip,
            frame_index: 0,
            residual_ms: 0.0,
            playing: true,
            finished: false,
            playback_speed: 1.0,
        })
    }

    /// Swap in another clip and restart from frame 0
    pub fn switch(&mut self, clip: Arc<Clip>) -> Result<(), PlaybackError> {
        if clip.frames().is_empty() {
            return Err(PlaybackError::InvalidClip);
        }

        self.clip = clip;
        self.restart();
        Ok(())
    }

    /// Rewind to frame 0 and resume playing
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.residual_ms = 0.0;
        self.playing = true;
        self.finished = false;
    }

    /// Accumulate elapsed time and advance the frame cursor.
    ///
    /// Elapsed time is scaled by the clip speed and the instance speed.
    /// Whole frame durations are consumed in a loop, so a large delta
    /// can step several frames in one call. A finished Never clip holds
    /// its last frame; calling this again is a no-op.
    pub fn advance(&mut self, delta_ms: f32) {
        if !self.playing || delta_ms <= 0.0 {
            return;
        }

        self.residual_ms += delta_ms * self.clip.speed() * self.playback_speed;

        while self.residual_ms >= self.clip.frame_duration_ms(self.frame_index) {
            self.residual_ms -= self.clip.frame_duration_ms(self.frame_index);
            self.frame_index += 1;

            if self.frame_index >= self.clip.len() {
                match self.clip.iteration() {
                    IterationMode::LoopFromStart => {
                        self.frame_index = 0;
                    }
                    IterationMode::Never => {
                        // Hold the last frame; drop the leftover time so
                        // repeated calls stay no-ops
                        self.frame_index = self.clip.len() - 1;
                        self.residual_ms = 0.0;
                        self.playing = false;
                        self.finished = true;
                        return;
                    }
                }
            }
        }
    }

    /// The frame to render this tick
    pub fn current_frame(&self) -> &Arc<Frame> {
        &self.clip.frames()[self.frame_index]
    }

    /// Ordered regions of the current frame; empty is valid
    pub fn active_regions(&self) -> &[Region] {
        self.current_frame().regions()
    }

    pub fn clip(&self) -> &Arc<Clip> {
        &self.clip
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Speed-scaled time accumulated toward the current frame
    pub fn residual_ms(&self) -> f32 {
        self.residual_ms
    }

    /// Stop consuming time, keeping the current frame
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Resume a paused instance; a finished Never clip stays finished
    pub fn resume(&mut self) {
        if !self.finished {
            self.playing = true;
        }
    }

    /// Pause and rewind to frame 0
    pub fn stop(&mut self) {
        self.playing = false;
        self.frame_index = 0;
        self.residual_ms = 0.0;
        self.finished = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a Never clip has played through and is holding its last
    /// frame
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_frame(&self) -> bool {
        self.frame_index == self.clip.len() - 1
    }

    /// Per-instance speed multiplier (1.0 = authored speed), clamped at 0
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.playback_speed = speed.max(0.0);
    }

    pub fn playback_speed(&self) -> f32 {
        self.playback_speed
    }
}
