//! Rigel animation data model (the conversion target).
//!
//! Serialized key order follows declaration order: `duration`, `loop`, `bones`
//! for an animation and `position`, `rotation`, `scale` for a bone. Maps keep
//! the insertion order of the source document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One of the three spatial channels a bone may animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    Rotation,
    Scale,
}

impl Channel {
    /// Fixed processing and output order.
    pub const ALL: [Channel; 3] = [Channel::Position, Channel::Rotation, Channel::Scale];

    /// JSON key used for this channel in both source and target documents.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Position => "position",
            Channel::Rotation => "rotation",
            Channel::Scale => "scale",
        }
    }
}

/// A single `(time, value)` sample. Components are carried through verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Seconds from the start of the animation.
    pub time: f64,
    pub value: [JsonValue; 3],
}

/// Keyframes for one channel, serialized as a bare JSON array.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TargetTrack {
    /// Normalized from a time-keyed map; sorted by `time`.
    Keyframes(Vec<Keyframe>),
    /// Source track that was already a list; kept exactly as given.
    Passthrough(Vec<JsonValue>),
}

impl TargetTrack {
    pub fn len(&self) -> usize {
        match self {
            TargetTrack::Keyframes(k) => k.len(),
            TargetTrack::Passthrough(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized keyframes, or `None` for a pass-through track.
    pub fn keyframes(&self) -> Option<&[Keyframe]> {
        match self {
            TargetTrack::Keyframes(k) => Some(k),
            TargetTrack::Passthrough(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetBone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<TargetTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<TargetTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<TargetTrack>,
}

impl TargetBone {
    pub fn channel(&self, channel: Channel) -> Option<&TargetTrack> {
        match channel {
            Channel::Position => self.position.as_ref(),
            Channel::Rotation => self.rotation.as_ref(),
            Channel::Scale => self.scale.as_ref(),
        }
    }

    pub fn set_channel(&mut self, channel: Channel, track: TargetTrack) {
        let slot = match channel {
            Channel::Position => &mut self.position,
            Channel::Rotation => &mut self.rotation,
            Channel::Scale => &mut self.scale,
        };
        *slot = Some(track);
    }

    /// True when no channel key was present in the source bone.
    pub fn is_empty(&self) -> bool {
        Channel::ALL.iter().all(|c| self.channel(*c).is_none())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TargetAnimation {
    /// Length in seconds; `0.0` when the source value was missing or invalid.
    pub duration: f64,
    #[serde(rename = "loop")]
    pub r#loop: bool,
    pub bones: IndexMap<String, TargetBone>,
}

/// Root of a converted file. `animations` is always present, possibly empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetDocument {
    pub animations: IndexMap<String, TargetAnimation>,
}

impl TargetDocument {
    pub fn to_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }
}
