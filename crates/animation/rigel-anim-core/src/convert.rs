use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::coercion::{normalize_bool, parse_float};
use crate::data::{Channel, TargetAnimation, TargetBone, TargetDocument};
use crate::diagnostics::Diagnostics;
use crate::track::normalize_track;

/// Public API: convert a parsed Cosmic Reach animation document into Rigel's
/// canonical [`TargetDocument`].
///
/// `source_label` identifies the input in diagnostics (usually the file path).
/// Warnings are forwarded to `tracing`; use [`convert_animation_with`] to
/// inspect them.
pub fn convert_animation(source: &JsonValue, source_label: &str) -> TargetDocument {
    let mut diag = Diagnostics::new();
    convert_animation_with(source, source_label, &mut diag)
}

/// Variant of [`convert_animation`] that records every warning into `diag`.
///
/// Never fails: malformed animations, bones, tracks and keyframes are dropped
/// locally; a missing `animations` key yields an empty document; a non-map
/// `animations` value (or a non-object root) yields an empty document plus a
/// diagnostic.
pub fn convert_animation_with(
    source: &JsonValue,
    source_label: &str,
    diag: &mut Diagnostics,
) -> TargetDocument {
    let mut target = TargetDocument::default();

    let Some(root) = source.as_object() else {
        diag.warn(format!("No animations map in {source_label}"));
        return target;
    };
    let animations = match root.get("animations") {
        None => return target,
        Some(JsonValue::Object(map)) => map,
        Some(_) => {
            diag.warn(format!("No animations map in {source_label}"));
            return target;
        }
    };

    for (name, anim) in animations {
        let JsonValue::Object(anim) = anim else {
            continue;
        };
        let converted = convert_one(anim, &format!("{source_label}:{name}"), diag);
        target.animations.insert(name.clone(), converted);
    }
    target
}

/// `prefix` is `"{source_label}:{animation_name}"`.
fn convert_one(
    anim: &Map<String, JsonValue>,
    prefix: &str,
    diag: &mut Diagnostics,
) -> TargetAnimation {
    TargetAnimation {
        duration: read_duration(anim, prefix, diag),
        r#loop: anim.get("loop").map(normalize_bool).unwrap_or(false),
        bones: convert_bones(anim.get("bones"), prefix, diag),
    }
}

/// Precedence: `duration`, then `animation_length`, then 0.0.
/// An unparseable value also falls back to 0.0.
fn read_duration(anim: &Map<String, JsonValue>, prefix: &str, diag: &mut Diagnostics) -> f64 {
    let raw = match anim.get("duration") {
        Some(v) => v,
        None => match anim.get("animation_length") {
            Some(v) => v,
            None => return 0.0,
        },
    };
    parse_float(raw, &format!("{prefix} duration"), diag).unwrap_or(0.0)
}

fn convert_bones(
    bones: Option<&JsonValue>,
    prefix: &str,
    diag: &mut Diagnostics,
) -> IndexMap<String, TargetBone> {
    let mut out = IndexMap::new();
    let Some(JsonValue::Object(bones)) = bones else {
        return out;
    };

    for (bone_name, bone) in bones {
        let JsonValue::Object(bone) = bone else {
            continue;
        };
        let mut bone_out = TargetBone::default();
        for channel in Channel::ALL {
            if let Some(track) = bone.get(channel.key()) {
                let context = format!("{prefix}:{bone_name}:{}", channel.key());
                bone_out.set_channel(channel, normalize_track(track, &context, diag));
            }
        }
        // Gate on channel-key presence, not on whether tracks ended up empty.
        if !bone_out.is_empty() {
            out.insert(bone_name.clone(), bone_out);
        }
    }
    out
}
