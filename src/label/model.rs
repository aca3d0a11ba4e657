use std::fmt;

use crate::foundation::core::RelPoint;
use crate::foundation::error::{GlanceError, GlanceResult};

/// Tag identifying a label variant, used for dispatch and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LabelKind {
    /// Open or closed multi-path polyline.
    Polyline,
    /// Axis-aligned bounding box.
    BoundingBox,
    /// Set of individual keypoints.
    Keypoints,
    /// Region mask described by boundary contours.
    Mask,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabelKind::Polyline => "Polyline",
            LabelKind::BoundingBox => "BoundingBox",
            LabelKind::Keypoints => "Keypoints",
            LabelKind::Mask => "Mask",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Raw annotation geometry for one field on one frame.
///
/// A label is a pure data model delivered by the external dataset/query
/// layer; all coordinates are normalized to `[0,1]` relative to the media
/// frame.
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Label {
    /// Multi-path polyline geometry.
    Polyline(PolylineLabel),
    /// Bounding-box geometry.
    BoundingBox(BoundingBoxLabel),
    /// Keypoint set geometry.
    Keypoints(KeypointLabel),
    /// Mask region geometry.
    Mask(MaskLabel),
}

impl Label {
    /// Stable label identifier.
    pub fn id(&self) -> &str {
        match self {
            Label::Polyline(l) => &l.id,
            Label::BoundingBox(l) => &l.id,
            Label::Keypoints(l) => &l.id,
            Label::Mask(l) => &l.id,
        }
    }

    /// Variant tag.
    pub fn kind(&self) -> LabelKind {
        match self {
            Label::Polyline(_) => LabelKind::Polyline,
            Label::BoundingBox(_) => LabelKind::BoundingBox,
            Label::Keypoints(_) => LabelKind::Keypoints,
            Label::Mask(_) => LabelKind::Mask,
        }
    }

    /// Reject geometry containing non-finite coordinates.
    pub fn validate(&self) -> GlanceResult<()> {
        let ok = match self {
            Label::Polyline(l) => l.points.iter().flatten().all(|p| p.is_finite()),
            Label::BoundingBox(l) => l.bounds.iter().all(|v| v.is_finite()),
            Label::Keypoints(l) => l.points.iter().all(|p| p.is_finite()),
            Label::Mask(l) => l.contours.iter().flatten().all(|p| p.is_finite()),
        };
        if !ok {
            return Err(GlanceError::validation(format!(
                "label {} ({}) contains non-finite coordinates",
                self.id(),
                self.kind()
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered sequence of paths, each an ordered sequence of normalized
/// points.
pub struct PolylineLabel {
    /// Stable label identifier.
    pub id: String,
    /// Paths; a path with fewer than 2 points draws nothing and contributes
    /// no hit-test segments.
    pub points: Vec<Vec<RelPoint>>,
    /// An implicit segment connects each path's last point back to its first.
    #[serde(default)]
    pub closed: bool,
    /// Fill the path interior with a translucent color once stroked.
    #[serde(default)]
    pub filled: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned box as `[top-left x, top-left y, width, height]`, normalized.
pub struct BoundingBoxLabel {
    /// Stable label identifier.
    pub id: String,
    /// Normalized `[tlx, tly, w, h]`.
    pub bounds: [f64; 4],
}

impl BoundingBoxLabel {
    /// Corners in draw order: tl, tr, br, bl.
    pub fn corners(&self) -> [RelPoint; 4] {
        let [x, y, w, h] = self.bounds;
        [
            RelPoint::new(x, y),
            RelPoint::new(x + w, y),
            RelPoint::new(x + w, y + h),
            RelPoint::new(x, y + h),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A set of independent normalized points.
pub struct KeypointLabel {
    /// Stable label identifier.
    pub id: String,
    /// Keypoint positions.
    pub points: Vec<RelPoint>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Region mask described by one or more closed boundary contours.
pub struct MaskLabel {
    /// Stable label identifier.
    pub id: String,
    /// Boundary rings; each ring is implicitly closed.
    pub contours: Vec<Vec<RelPoint>>,
}
