// Animation clips: frame sequences with iteration policy and speed

use std::sync::Arc;

use super::{Frame, TilesetError};

/// Frame time used when neither the clip's timing table nor the frame
/// declares one
pub const DEFAULT_FRAME_MS: f32 = 100.0;

/// Policy for what happens after a clip's last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationMode {
    /// Play once and hold the last frame
    Never,

    /// Restart at frame 0 after the last frame
    LoopFromStart,
}

impl IterationMode {
    /// Parse an authored tag; returns None for anything unrecognized
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NEVER" => Some(Self::Never),
            "LOOP_FROM_START" => Some(Self::LoopFromStart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::LoopFromStart => "LOOP_FROM_START",
        }
    }
}

/// Ordered frame sequence shared read-only by playback instances
#[derive(Debug, Clone)]
pub struct Clip {
    frames: Vec<Arc<Frame>>,
    iteration: IterationMode,
    speed: f32,
}

impl Clip {
    /// Build a clip; the sequence must be non-empty and the speed
    /// positive
    pub fn new(
        frames: Vec<Arc<Frame>>,
        iteration: IterationMode,
        speed: f32,
    ) -> Result<Self, TilesetError> {
        if frames.is_empty() {
            return Err(TilesetError::InvalidClip);
        }

        if speed <= 0.0 {
            return Err(TilesetError::NonPositiveSpeed(speed));
        }

        Ok(Self {
            frames,
            iteration,
            speed,
        })
    }

    pub fn frames(&self) -> &[Arc<Frame>] {
        &self.frames
    }

    /// Number of frames; always at least 1
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn iteration(&self) -> IterationMode {
        self.iteration
    }

    /// Playback speed multiplier applied to elapsed time
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Display time of one frame, falling back to [`DEFAULT_FRAME_MS`]
    pub fn frame_duration_ms(&self, index: usize) -> f32 {
        self.frames[index].duration_ms().unwrap_or(DEFAULT_FRAME_MS)
    }

    /// Unscaled duration of one full pass over the sequence
    pub fn total_duration_ms(&self) -> f32 {
        (0..self.frames.len()).map(|i| self.frame_duration_ms(i)).sum()
    }
}
