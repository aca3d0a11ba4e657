use crate::foundation::error::{GlanceError, GlanceResult};
use crate::label::model::Label;
use crate::overlay::LabelOverlay;

const KNOWN_KINDS: [&str; 4] = ["polyline", "bounding_box", "keypoints", "mask"];

/// Decode one field's labels for a frame into overlays.
///
/// The dataset/query layer delivers labels as a JSON array of documents, each
/// tagged with a `kind`. An unrecognized kind is a hard error naming the kind
/// and the field; it is never coerced to a default variant.
pub fn decode_field_labels(
    field: &str,
    value: &serde_json::Value,
) -> GlanceResult<Vec<LabelOverlay>> {
    let docs = value.as_array().ok_or_else(|| {
        GlanceError::serde(format!("labels for field {field:?} must be a JSON array"))
    })?;

    let mut overlays = Vec::with_capacity(docs.len());
    for doc in docs {
        overlays.push(decode_label_doc(field, doc)?);
    }
    Ok(overlays)
}

fn decode_label_doc(field: &str, doc: &serde_json::Value) -> GlanceResult<LabelOverlay> {
    let kind = doc
        .get("kind")
        .and_then(|k| k.as_str())
        .ok_or_else(|| {
            GlanceError::serde(format!(
                "label in field {field:?} is missing a string \"kind\" tag"
            ))
        })?
        .to_owned();

    if !KNOWN_KINDS.contains(&kind.as_str()) {
        return Err(GlanceError::validation(format!(
            "unrecognized label kind {kind:?} in field {field:?}"
        )));
    }

    let label: Label = serde_json::from_value(doc.clone()).map_err(|e| {
        GlanceError::serde(format!(
            "malformed {kind} label in field {field:?}: {e}"
        ))
    })?;
    label.validate()?;

    Ok(LabelOverlay::new(field, label))
}

#[cfg(test)]
#[path = "../../tests/unit/label/decode.rs"]
mod tests;
