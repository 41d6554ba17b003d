//! Command-line parsing for `convert_cr_animations`.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::ConvertConfig;

pub const USAGE: &str = "\
Convert Cosmic Reach animation JSON to Rigel format.

Usage: convert_cr_animations <input> [--output OUT] [--suffix SUFFIX] [--overwrite]

Arguments:
  <input>            Input file or directory of .animation.json files

Options:
  --output OUT       Output file or directory
  --suffix SUFFIX    Suffix for converted files (default: .rigel.json)
  --overwrite        Overwrite existing output
  -h, --help         Print this help

Log verbosity follows RUST_LOG (default: info).";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Convert(ConvertConfig),
    Help,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut input: Option<PathBuf> = None;
    let mut config = ConvertConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg, None),
        };
        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--overwrite" => {
                if inline.is_some() {
                    bail!("--overwrite does not take a value");
                }
                config.overwrite = true;
                i += 1;
            }
            "--output" | "--suffix" => {
                let value = match inline {
                    Some(v) => v,
                    None => {
                        if i + 1 >= args.len() {
                            bail!("{flag} expects a value");
                        }
                        i += 1;
                        args[i].clone()
                    }
                };
                if value.is_empty() {
                    bail!("{flag} expects a non-empty value");
                }
                if flag == "--output" {
                    config.output = Some(PathBuf::from(value));
                } else {
                    config.suffix = value;
                }
                i += 1;
            }
            other if other.starts_with('-') && other.len() > 1 => {
                bail!("unknown option '{other}'");
            }
            _ => {
                if input.is_some() {
                    bail!("unexpected extra argument '{arg}'");
                }
                input = Some(PathBuf::from(arg));
                i += 1;
            }
        }
    }

    let Some(input) = input else {
        bail!("missing <input>");
    };
    config.input = input;
    Ok(Command::Convert(config))
}
