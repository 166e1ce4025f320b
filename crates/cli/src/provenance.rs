//! `<artifact>.provenance.json` sidecars: where an output came from.

use anyhow::{Context, Result};
use polycat::BuiltShape;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a sidecar describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Shape {
        id: String,
        call: String,
        category: String,
    },
    Summary {
        shapes: Vec<String>,
        failed: Vec<String>,
    },
}

impl Subject {
    pub fn shape(shape: &BuiltShape) -> Self {
        Subject::Shape {
            id: shape.id.to_string(),
            call: shape.call.to_string(),
            category: shape.category.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub tool_version: String,
    pub callsite: Callsite,
    pub library: String,
    pub subject: Subject,
    pub outputs: Vec<String>,
}

/// Write the sidecar for `artifact`; the callsite is the caller of this function.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    library: &str,
    subject: Subject,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        callsite: Callsite {
            file: caller.file().to_string(),
            line: caller.line(),
        },
        library: library.to_string(),
        subject,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/cube.json` → `dir/cube.provenance.json`.
pub fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycat::{Backend, ShapeRegistry};
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let derived = provenance_path(Path::new("/tmp/shapes/cube.json"));
        assert_eq!(derived, Path::new("/tmp/shapes/cube.provenance.json"));
        let summary = provenance_path(Path::new("out/summary.parquet"));
        assert_eq!(summary, Path::new("out/summary.provenance.json"));
    }

    #[test]
    fn shape_sidecar_records_call_and_category() {
        let dir = tempdir().unwrap();
        let reg = ShapeRegistry::new(Backend::detect());
        let shape = reg.build("pentagonal_prism").unwrap();
        let artifact = dir.path().join("pentagonal_prism.json");
        fs::write(&artifact, "{}").unwrap();

        let path = write_sidecar(&artifact, "polylib", Subject::shape(&shape)).unwrap();
        let sidecar: Sidecar = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(sidecar.library, "polylib");
        assert_eq!(sidecar.outputs, vec![artifact.to_string_lossy().into_owned()]);
        assert!(sidecar.callsite.file.ends_with("provenance.rs"));
        assert_eq!(
            sidecar.subject,
            Subject::Shape {
                id: "pentagonal_prism".into(),
                call: "regular_prism(5)".into(),
                category: "prism".into(),
            }
        );
    }

    #[test]
    fn summary_subject_is_tagged() {
        let subject = Subject::Summary {
            shapes: vec!["cube".into(), "nope".into()],
            failed: vec!["nope".into()],
        };
        let value = serde_json::to_value(&subject).unwrap();
        assert_eq!(value["kind"], "summary");
        assert_eq!(value["failed"][0], "nope");
    }
}
