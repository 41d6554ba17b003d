//! File pipeline around `rigel-anim-core`: discovers Cosmic Reach
//! `.animation.json` files, converts each one, and writes Rigel JSON next to
//! it or under an output root.

pub mod args;
pub mod config;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod writer;

pub use args::{parse_args, Command, USAGE};
pub use config::{ConvertConfig, DEFAULT_OUTPUT_SUFFIX, SOURCE_SUFFIX};
pub use paths::{default_output_name, discover_inputs, resolve_output_path};
pub use pipeline::{convert_file, run, BatchReport, FileOutcome, PipelineError};
pub use writer::to_ascii_pretty_vec;
