//! Glance renders interactive geometric annotations — polylines, boxes,
//! masks, keypoints — over a media frame on a 2D surface, and synchronizes a
//! playback/scrub timeline that selects which frame's annotations are shown.
//!
//! # Architecture
//!
//! 1. **Decode**: the external dataset/query layer supplies per-frame
//!    `(field, label)` JSON documents; [`decode_field_labels`] wraps each in
//!    a [`LabelOverlay`].
//! 2. **Render**: [`draw_overlays`] issues immediate-mode commands for every
//!    visible overlay against a [`DrawSurface`] — the bundled
//!    [`CpuSurface`] rasterizes via `vello_cpu`, [`RecordingSurface`]
//!    captures the stream.
//! 3. **Interact**: pointer events flow into [`resolve_hover`], which ranks
//!    overlays by [`Overlay::mouse_distance`] to pick the active one.
//! 4. **Playback**: a [`TimelineRegistry`] of named [`Timeline`] state
//!    machines maps play/pause/tick/seek operations to frame numbers;
//!    [`SeekBridge`] layers the scrub-percentage mapping on top.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure overlays**: overlay behavior is a function of
//!   `(label, RenderState)`; per-pass facts are never stored on the overlay.
//! - **Single cooperative thread**: drawing, hit-testing, and timeline
//!   mutation never run in parallel; the pause-before-seek protocol is the
//!   sole mutual-exclusion mechanism and no operation blocks.
//! - **No IO in the core**: label loading belongs to the external data
//!   layer; surfaces only receive commands.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod interaction;
mod label;
mod overlay;
mod render;
mod timeline;

pub use foundation::core::{
    BezPath, Canvas, Fps, FrameNumber, Point, Rect, RelPoint, Rgba8, Vec2, Viewport,
};
pub use foundation::error::{GlanceError, GlanceResult};
pub use foundation::math::{distance_to_segment, point_in_ring};
pub use interaction::{DEFAULT_SELECT_THRESHOLD_PX, HoverHit, resolve_hover};
pub use label::decode::decode_field_labels;
pub use label::model::{
    BoundingBoxLabel, KeypointLabel, Label, LabelKind, MaskLabel, PolylineLabel,
};
pub use overlay::{
    BoundingBoxOverlay, ColorSource, Containment, HIGHLIGHT_COLOR, HIGHLIGHT_DASH,
    KeypointOverlay, LabelOverlay, MaskOverlay, Overlay, PointInfo, PolylineOverlay,
    RenderState, SELECTED_FILL_ALPHA, UNSELECTED_FILL_ALPHA, overlay_bounds,
};
pub use overlay::keypoint::KEYPOINT_RADIUS_PX;
pub use render::cpu::CpuSurface;
pub use render::record::{RecordingSurface, SurfaceCommand};
pub use render::{DrawSurface, FramePixels, draw_overlays};
pub use timeline::machine::{Playback, Timeline, TimelineConfig};
pub use timeline::registry::{GLOBAL_TIMELINE, TimelineRegistry};
pub use timeline::seek::SeekBridge;
