use crate::foundation::core::FrameNumber;
use crate::timeline::registry::{GLOBAL_TIMELINE, TimelineRegistry};

/// Scrub-bar bridge over one named timeline.
///
/// Wraps the percentage↔frame mapping of the underlying state machine and
/// caches the derived seek percentage. The cache key is every input the
/// formula reads — `(frame_number, total_frames)` — so a media-length change
/// invalidates a cached percentage even at a fixed frame number.
#[derive(Clone, Debug)]
pub struct SeekBridge {
    name: String,
    cache: Option<SeekCache>,
}

#[derive(Clone, Copy, Debug)]
struct SeekCache {
    frame_number: FrameNumber,
    total_frames: u32,
    value: f64,
}

/// Bridges the default timeline of the currently active view.
impl Default for SeekBridge {
    fn default() -> Self {
        Self::new(GLOBAL_TIMELINE)
    }
}

impl SeekBridge {
    /// Bridge for the timeline named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache: None,
        }
    }

    /// Name of the bridged timeline.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seek the bridged timeline to a percentage in `[0,100]`.
    ///
    /// Routes through the machine's pause-then-seek protocol; the timeline
    /// is always paused afterwards. Returns the resulting frame number.
    #[tracing::instrument(skip(registry))]
    pub fn seek_to(&mut self, registry: &mut TimelineRegistry, percentage: f64) -> FrameNumber {
        let timeline = registry.get_or_create(&self.name);
        let frame = timeline.seek_to(percentage);
        self.cache = Some(SeekCache {
            frame_number: frame,
            total_frames: timeline.config().total_frames,
            value: timeline.seek_value(),
        });
        frame
    }

    /// Current scrub percentage of the bridged timeline.
    ///
    /// Cached between calls; recomputed whenever the frame number or the
    /// total frame count changed since the cached value was derived.
    pub fn seek_value(&mut self, registry: &mut TimelineRegistry) -> f64 {
        let timeline = registry.get_or_create(&self.name);
        let frame_number = timeline.frame_number();
        let total_frames = timeline.config().total_frames;

        if let Some(cache) = self.cache
            && cache.frame_number == frame_number
            && cache.total_frames == total_frames
        {
            return cache.value;
        }

        let value = timeline.seek_value();
        self.cache = Some(SeekCache {
            frame_number,
            total_frames,
            value,
        });
        value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/seek.rs"]
mod tests;
