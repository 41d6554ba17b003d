//! Channel track classification and normalization.

use std::cmp::Ordering;

use serde_json::{Map, Value as JsonValue};

use crate::coercion::parse_float_str;
use crate::data::{Keyframe, TargetTrack};
use crate::diagnostics::Diagnostics;

/// Shape of a source channel, decided once before normalization.
#[derive(Clone, Copy, Debug)]
pub enum SourceTrack<'a> {
    /// Already an ordered list of keyframes.
    List(&'a [JsonValue]),
    /// Mapping from a time string to a component array.
    Map(&'a Map<String, JsonValue>),
    Invalid,
}

impl<'a> SourceTrack<'a> {
    pub fn classify(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => SourceTrack::List(items),
            JsonValue::Object(map) => SourceTrack::Map(map),
            _ => SourceTrack::Invalid,
        }
    }
}

/// Normalize one channel track.
///
/// List-form tracks pass through untouched. Map-form tracks become keyframes
/// sorted by time (stable for equal times); entries with an unparseable time or
/// a value with fewer than three components are dropped with a diagnostic.
pub fn normalize_track(track: &JsonValue, context: &str, diag: &mut Diagnostics) -> TargetTrack {
    match SourceTrack::classify(track) {
        SourceTrack::List(items) => TargetTrack::Passthrough(items.to_vec()),
        SourceTrack::Map(map) => TargetTrack::Keyframes(keyframes_from_map(map, context, diag)),
        SourceTrack::Invalid => {
            diag.warn(format!("Skipping invalid track '{context}'"));
            TargetTrack::Keyframes(Vec::new())
        }
    }
}

fn keyframes_from_map(
    map: &Map<String, JsonValue>,
    context: &str,
    diag: &mut Diagnostics,
) -> Vec<Keyframe> {
    let time_context = format!("{context} time");
    let mut keyframes: Vec<Keyframe> = Vec::with_capacity(map.len());
    for (time_key, raw) in map {
        let Some(time) = parse_float_str(time_key, &time_context, diag) else {
            continue;
        };
        match leading_components(raw) {
            Some(value) => keyframes.push(Keyframe { time, value }),
            None => {
                diag.warn(format!(
                    "Skipping invalid value in {context} at time {time_key}"
                ));
            }
        }
    }
    // Stable; times are never NaN, and -0.0 ties with 0.0.
    keyframes.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
    keyframes
}

/// First three components of an array value, or `None` if it is not an array
/// of at least three elements.
fn leading_components(raw: &JsonValue) -> Option<[JsonValue; 3]> {
    match raw.as_array()?.as_slice() {
        [a, b, c, ..] => Some([a.clone(), b.clone(), c.clone()]),
        _ => None,
    }
}
