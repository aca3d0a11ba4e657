use crate::foundation::core::{Fps, FrameNumber};
use crate::foundation::error::{GlanceError, GlanceResult};

/// Playback status of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Playback {
    /// Frame set, not advancing.
    Idle,
    /// Frame advances on each scheduler tick.
    Playing,
    /// Explicit halt; frame fixed.
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Static configuration of a timeline.
pub struct TimelineConfig {
    /// Total frame count; must be >= 1.
    pub total_frames: u32,
    /// Wrap back to frame 1 at end-of-media instead of pausing.
    pub loop_playback: bool,
    /// Playback frame rate; drives the external tick scheduler.
    pub fps: Fps,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            total_frames: 1,
            loop_playback: false,
            fps: Fps { num: 30, den: 1 },
        }
    }
}

impl TimelineConfig {
    fn validate(&self) -> GlanceResult<()> {
        if self.total_frames == 0 {
            return Err(GlanceError::timeline("total_frames must be >= 1"));
        }
        Ok(())
    }
}

/// Per-name playback state machine mapping seek operations to frame numbers.
///
/// The frame number is 1-based and always within `[1, total_frames]`. All
/// mutation happens on one cooperative thread: the external clock calls
/// [`Timeline::tick`] while playing, and any seek routes through
/// [`Timeline::pause`] first, so a tick scheduled before a seek can never
/// advance the frame afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    config: TimelineConfig,
    frame_number: FrameNumber,
    status: Playback,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            config: TimelineConfig::default(),
            frame_number: FrameNumber::FIRST,
            status: Playback::Idle,
        }
    }
}

impl Timeline {
    /// Create an idle timeline at frame 1. Rejects `total_frames == 0`.
    pub fn new(config: TimelineConfig) -> GlanceResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            frame_number: FrameNumber::FIRST,
            status: Playback::Idle,
        })
    }

    /// Create an idle timeline at a caller-specified starting frame, clamped
    /// into `[1, total_frames]`.
    pub fn with_start_frame(config: TimelineConfig, start: FrameNumber) -> GlanceResult<Self> {
        let mut timeline = Self::new(config)?;
        timeline.frame_number = timeline.clamp(start);
        Ok(timeline)
    }

    /// Current frame number.
    pub fn frame_number(&self) -> FrameNumber {
        self.frame_number
    }

    /// Current playback status.
    pub fn status(&self) -> Playback {
        self.status
    }

    /// Timeline configuration.
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    fn clamp(&self, frame: FrameNumber) -> FrameNumber {
        FrameNumber(frame.0.clamp(1, self.config.total_frames))
    }

    /// Begin advancing on scheduler ticks.
    pub fn play(&mut self) {
        self.status = Playback::Playing;
    }

    /// Halt playback, leaving the frame untouched. No-op when already
    /// paused; this is also the cancellation primitive for an in-flight
    /// playback loop.
    pub fn pause(&mut self) {
        self.status = Playback::Paused;
    }

    /// Advance one frame. Driven by the external clock; ignored unless
    /// playing. Overflow wraps to frame 1 when looping, otherwise clamps at
    /// the last frame and pauses (end-of-media).
    pub fn tick(&mut self) {
        if self.status != Playback::Playing {
            return;
        }
        let next = u64::from(self.frame_number.0) + 1;
        if next > u64::from(self.config.total_frames) {
            if self.config.loop_playback {
                self.frame_number = FrameNumber::FIRST;
            } else {
                self.frame_number = FrameNumber(self.config.total_frames);
                self.status = Playback::Paused;
            }
        } else {
            self.frame_number = FrameNumber(next as u32);
        }
    }

    /// Seek to a scrub percentage in `[0,100]`; out-of-range input is
    /// clamped. Forces [`Timeline::pause`] first, so the timeline is always
    /// paused afterwards with no race-induced extra tick.
    pub fn seek_to(&mut self, percentage: f64) -> FrameNumber {
        self.pause();
        let pct = percentage.clamp(0.0, 100.0);
        let span = f64::from(self.config.total_frames - 1);
        let frame = (pct / 100.0 * span).round() as u32 + 1;
        self.frame_number = self.clamp(FrameNumber(frame));
        self.frame_number
    }

    /// Current scrub percentage: `(frame - 1) / (total - 1) * 100`.
    ///
    /// Single-frame media has no meaningful scrub position; the zero
    /// divisor case is defined as `0` rather than propagating NaN.
    pub fn seek_value(&self) -> f64 {
        if self.config.total_frames == 1 {
            return 0.0;
        }
        f64::from(self.frame_number.0 - 1) / f64::from(self.config.total_frames - 1) * 100.0
    }

    /// Change the media length, clamping the current frame into the new
    /// range. Rejects zero.
    pub fn set_total_frames(&mut self, total_frames: u32) -> GlanceResult<()> {
        if total_frames == 0 {
            return Err(GlanceError::timeline("total_frames must be >= 1"));
        }
        self.config.total_frames = total_frames;
        self.frame_number = self.clamp(self.frame_number);
        Ok(())
    }

    /// Replace the whole configuration, clamping the current frame.
    pub fn configure(&mut self, config: TimelineConfig) -> GlanceResult<()> {
        config.validate()?;
        self.config = config;
        self.frame_number = self.clamp(self.frame_number);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/machine.rs"]
mod tests;
