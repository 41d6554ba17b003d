//! Rigel Animation Core (no I/O)
//!
//! Converts Cosmic Reach skeletal animation JSON into Rigel's animation
//! format. Every channel in the output is an ordered list of
//! `{ time, value }` keyframes sorted by time. Malformed input is never an
//! error: offending units are dropped and reported through [`Diagnostics`].

pub mod coercion;
pub mod convert;
pub mod data;
pub mod diagnostics;
pub mod track;

// Re-exports for consumers (file pipeline, tests)
pub use coercion::{normalize_bool, parse_float};
pub use convert::{convert_animation, convert_animation_with};
pub use data::{Channel, Keyframe, TargetAnimation, TargetBone, TargetDocument, TargetTrack};
pub use diagnostics::{Diagnostics, Warning, TOOL_TAG};
pub use track::{normalize_track, SourceTrack};
