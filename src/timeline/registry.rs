use std::collections::HashMap;

use crate::timeline::machine::Timeline;

/// Reserved name of the default timeline scoped to the currently active view.
pub const GLOBAL_TIMELINE: &str = "global";

/// Process-scoped registry of named timelines.
///
/// Entries are created lazily on first access with default configuration and
/// removed when their owning view is torn down. Named timelines are mutually
/// independent state machines; they may share one external tick source via
/// [`TimelineRegistry::tick_all`] but never share mutable state.
#[derive(Clone, Debug, Default)]
pub struct TimelineRegistry {
    entries: HashMap<String, Timeline>,
}

impl TimelineRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The timeline named `name`, created with default configuration on
    /// first access.
    pub fn get_or_create(&mut self, name: &str) -> &mut Timeline {
        if !self.entries.contains_key(name) {
            tracing::debug!(name, "creating timeline");
        }
        self.entries.entry(name.to_owned()).or_default()
    }

    /// The timeline named `name`, if it exists.
    pub fn get(&self, name: &str) -> Option<&Timeline> {
        self.entries.get(name)
    }

    /// Remove a timeline when its owning view is torn down.
    pub fn remove(&mut self, name: &str) -> Option<Timeline> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            tracing::debug!(name, "removed timeline");
        }
        removed
    }

    /// Registered timeline names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Advance every playing timeline by one frame. A shared wall-clock tick
    /// source calls this; paused and idle timelines are unaffected.
    pub fn tick_all(&mut self) {
        for timeline in self.entries.values_mut() {
            timeline.tick();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/registry.rs"]
mod tests;
