use crate::overlay::{LabelOverlay, Overlay, RenderState};

/// Default pixel threshold within which an overlay is hoverable.
pub const DEFAULT_SELECT_THRESHOLD_PX: f64 = 12.0;

/// A resolved hover candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverHit {
    /// Index of the winning overlay in the visible slice.
    pub index: usize,
    /// Its pointer distance in pixels.
    pub distance_px: f64,
}

/// Resolve the active overlay under the pointer.
///
/// Picks the overlay with the minimum [`Overlay::mouse_distance`] at or below
/// `threshold_px`. Overlays reporting a non-finite distance carry no valid
/// geometry for the pointer and are excluded outright. Equal distances go to
/// the later overlay in the slice — the one rendered topmost, since
/// [`crate::render::draw_overlays`] paints in slice order.
#[tracing::instrument(skip_all, fields(overlays = overlays.len()))]
pub fn resolve_hover(
    overlays: &[LabelOverlay],
    state: &RenderState<'_>,
    threshold_px: f64,
) -> Option<HoverHit> {
    let mut best: Option<HoverHit> = None;
    for (index, overlay) in overlays.iter().enumerate() {
        let distance_px = overlay.mouse_distance(state);
        if !distance_px.is_finite() || distance_px > threshold_px {
            continue;
        }
        match best {
            Some(b) if distance_px > b.distance_px => {}
            _ => best = Some(HoverHit { index, distance_px }),
        }
    }
    best
}

#[cfg(test)]
#[path = "../tests/unit/interaction.rs"]
mod tests;
