//! Input discovery and output path derivation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SOURCE_SUFFIX;

/// Every file under `input` (recursively) whose name ends in `.animation.json`,
/// sorted by path. A non-directory `input` is returned as-is.
pub fn discover_inputs(input: &Path) -> io::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut found = Vec::new();
    walk(input, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Symlinked directories are not followed.
        if entry.file_type()?.is_dir() {
            walk(&path, found)?;
        } else if path.is_file() && has_source_suffix(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_source_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SOURCE_SUFFIX))
}

/// `walk.animation.json` -> `walk{suffix}`; any other name gets `suffix`
/// appended (`walk.json` -> `walk.json{suffix}`).
pub fn default_output_name(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = match name.strip_suffix(SOURCE_SUFFIX) {
        Some(base) => format!("{base}{suffix}"),
        None => format!("{name}{suffix}"),
    };
    path.with_file_name(renamed)
}

/// Where the converted form of `input_file` is written.
///
/// - `output` with an extension and a single-file run: `output` itself.
/// - other `output`: `output/<parent of input_file relative to input_root>/<derived name>`.
/// - no `output`: the derived name next to `input_file`.
pub fn resolve_output_path(
    input_root: &Path,
    input_file: &Path,
    single_file: bool,
    output: Option<&Path>,
    suffix: &str,
) -> PathBuf {
    let Some(output) = output else {
        return default_output_name(input_file, suffix);
    };
    if single_file && output.extension().is_some() {
        return output.to_path_buf();
    }
    let derived = default_output_name(input_file, suffix);
    let file_name = derived.file_name().unwrap_or_default();
    let rel_parent = input_file
        .strip_prefix(input_root)
        .ok()
        .and_then(Path::parent);
    match rel_parent {
        Some(parent) => output.join(parent).join(file_name),
        None => output.join(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_replaces_source_suffix() {
        assert_eq!(
            default_output_name(Path::new("mobs/crab.animation.json"), ".rigel.json"),
            PathBuf::from("mobs/crab.rigel.json")
        );
    }

    #[test]
    fn default_name_appends_for_other_names() {
        assert_eq!(
            default_output_name(Path::new("a/walk.json"), ".rigel.json"),
            PathBuf::from("a/walk.json.rigel.json")
        );
        assert_eq!(
            default_output_name(Path::new("walk"), ".out"),
            PathBuf::from("walk.out")
        );
    }

    #[test]
    fn no_output_places_result_beside_input() {
        let got = resolve_output_path(
            Path::new("in"),
            Path::new("in/sub/a.animation.json"),
            false,
            None,
            ".rigel.json",
        );
        assert_eq!(got, PathBuf::from("in/sub/a.rigel.json"));
    }

    #[test]
    fn output_root_preserves_relative_directories() {
        let got = resolve_output_path(
            Path::new("in"),
            Path::new("in/sub/deep/a.animation.json"),
            false,
            Some(Path::new("out")),
            ".rigel.json",
        );
        assert_eq!(got, PathBuf::from("out/sub/deep/a.rigel.json"));
    }

    #[test]
    fn single_file_with_output_file_uses_it_verbatim() {
        let got = resolve_output_path(
            Path::new("a.animation.json"),
            Path::new("a.animation.json"),
            true,
            Some(Path::new("dest/custom.json")),
            ".rigel.json",
        );
        assert_eq!(got, PathBuf::from("dest/custom.json"));
    }

    #[test]
    fn single_file_with_output_dir_derives_name() {
        let got = resolve_output_path(
            Path::new("x/a.animation.json"),
            Path::new("x/a.animation.json"),
            true,
            Some(Path::new("dest")),
            ".rigel.json",
        );
        assert_eq!(got, PathBuf::from("dest/a.rigel.json"));
    }
}
