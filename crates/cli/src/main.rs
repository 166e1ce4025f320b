mod export;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polycat::{Backend, Category, ShapeRegistry};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use export::{write_document, write_summary, ShapeDocument, SummaryRow};
use provenance::{current_git_rev, write_sidecar, Subject};

#[derive(Parser)]
#[command(name = "polycat")]
#[command(about = "Build catalog polytopes and export them as JSON")]
struct Cmd {
    /// Simulate a missing geometry library
    #[arg(long, global = true)]
    no_library: bool,

    /// Log at debug level (one line per built shape)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print identifiers, categories and display names
    List {
        #[arg(long)]
        json: bool,
    },
    /// Build one shape and print its JSON document
    Build { id: String },
    /// Write `<out>/<id>.json` plus a provenance sidecar for every shape
    Generate {
        #[arg(long)]
        out: PathBuf,
        /// Restrict to these identifiers (repeatable)
        #[arg(long)]
        only: Vec<String>,
        /// Summary table (`.csv`, or `.parquet`)
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let backend = if cmd.no_library {
        Backend::unavailable("disabled with --no-library")
    } else {
        Backend::detect()
    };
    let registry = ShapeRegistry::new(backend);
    match cmd.action {
        Action::List { json } => list(&registry, json),
        Action::Build { id } => build(&registry, &id),
        Action::Generate { out, only, summary } => {
            generate(&registry, &out, &only, summary.as_deref()).map(|_| ())
        }
        Action::Report => report(&registry),
    }
}

fn list(registry: &ShapeRegistry, as_json: bool) -> Result<()> {
    if as_json {
        let rows: Vec<_> = registry
            .list_shapes()
            .iter()
            .map(|e| {
                json!({
                    "id": e.id,
                    "name": e.display_name,
                    "category": e.category.label(),
                    "call": e.call.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for e in registry.list_shapes() {
            println!("{:<34} {:<14} {}", e.id, e.category, e.display_name);
        }
    }
    Ok(())
}

fn build(registry: &ShapeRegistry, id: &str) -> Result<()> {
    let shape = registry.build(id)?;
    let doc = ShapeDocument::from_built(&shape);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Build the selected shapes (all when `only` is empty), write documents and
/// sidecars, then the optional summary. Fails at the end if any shape failed.
fn generate(
    registry: &ShapeRegistry,
    out: &Path,
    only: &[String],
    summary: Option<&Path>,
) -> Result<Vec<SummaryRow>> {
    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    let ids: Vec<String> = if only.is_empty() {
        registry.ids().map(str::to_string).collect()
    } else {
        only.to_vec()
    };
    let library = registry.backend().name().to_string();
    tracing::info!(shapes = ids.len(), out = %out.display(), library, "generate");

    let mut rows = Vec::with_capacity(ids.len());
    let mut failed = Vec::new();
    for id in &ids {
        match registry.build(id) {
            Ok(shape) => {
                let doc = ShapeDocument::from_built(&shape);
                let path = write_document(out, &doc)?;
                write_sidecar(&path, &library, Subject::shape(&shape))?;
                rows.push(SummaryRow::built(&shape));
            }
            Err(err) => {
                tracing::warn!(id, label = %err.label(), "skipped: {err}");
                rows.push(SummaryRow::failed(id, registry.get(id), &err));
                failed.push(id.clone());
            }
        }
    }

    if let Some(path) = summary {
        write_summary(path, &rows)?;
        let subject = Subject::Summary {
            shapes: ids.clone(),
            failed: failed.clone(),
        };
        write_sidecar(path, &library, subject)?;
    }
    let built = rows.len() - failed.len();
    tracing::info!(built, failed = failed.len(), "generate_done");
    if !failed.is_empty() {
        bail!(
            "{} of {} shapes failed: {}",
            failed.len(),
            ids.len(),
            failed.join(", ")
        );
    }
    Ok(rows)
}

fn report(registry: &ShapeRegistry) -> Result<()> {
    let backend = registry.backend();
    let reason = match backend {
        Backend::Missing { reason } => Some(reason.as_str()),
        Backend::Loaded(_) => None,
    };
    let categories: serde_json::Map<String, serde_json::Value> = Category::ALL
        .iter()
        .map(|c| {
            let n = registry
                .list_shapes()
                .iter()
                .filter(|e| e.category == *c)
                .count();
            (c.label().to_string(), json!(n))
        })
        .collect();
    let obj = json!({
        "code_rev": current_git_rev(),
        "tool_version": env!("CARGO_PKG_VERSION"),
        "library": {
            "name": backend.name(),
            "loaded": backend.is_loaded(),
            "reason": reason,
        },
        "catalog": {
            "shapes": registry.list_shapes().len(),
            "categories": categories,
        },
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn generate_writes_document_and_sidecar_per_shape() {
        let dir = tempdir().unwrap();
        let reg = ShapeRegistry::new(Backend::detect());
        let only = vec!["cube".to_string(), "snub_cube".to_string()];
        let summary = dir.path().join("summary.csv");
        let rows = generate(&reg, dir.path(), &only, Some(&summary)).unwrap();
        assert_eq!(rows.len(), 2);
        for id in &only {
            let doc: ShapeDocument =
                serde_json::from_slice(&fs::read(dir.path().join(format!("{id}.json"))).unwrap())
                    .unwrap();
            assert_eq!(&doc.id, id);
            assert!(dir.path().join(format!("{id}.provenance.json")).exists());
        }
        let sidecar: provenance::Sidecar = serde_json::from_slice(
            &fs::read(dir.path().join("snub_cube.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            sidecar.subject,
            Subject::Shape {
                id: "snub_cube".into(),
                call: "snub_cube".into(),
                category: "archimedean".into(),
            }
        );
        assert!(summary.exists());
        let sidecar: provenance::Sidecar = serde_json::from_slice(
            &fs::read(dir.path().join("summary.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            sidecar.subject,
            Subject::Summary {
                shapes: only.clone(),
                failed: vec![],
            }
        );
    }

    #[test]
    fn generate_all_covers_the_catalog() {
        let dir = tempdir().unwrap();
        let reg = ShapeRegistry::new(Backend::detect());
        let rows = generate(&reg, dir.path(), &[], None).unwrap();
        assert_eq!(rows.len(), reg.list_shapes().len());
        let json_files = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                let name = e.file_name();
                let name = name.to_string_lossy();
                name.ends_with(".json") && !name.ends_with(".provenance.json")
            })
            .count();
        assert_eq!(json_files, reg.list_shapes().len());
    }

    #[test]
    fn generate_continues_past_failures_and_reports_them() {
        let dir = tempdir().unwrap();
        let reg = ShapeRegistry::new(Backend::detect());
        let only = vec!["not_a_shape".to_string(), "octahedron".to_string()];
        let summary = dir.path().join("summary.csv");
        let err = generate(&reg, dir.path(), &only, Some(&summary)).unwrap_err();
        assert!(err.to_string().contains("1 of 2 shapes failed: not_a_shape"));
        // the valid shape and the summary were still written
        assert!(dir.path().join("octahedron.json").exists());
        let text = fs::read_to_string(&summary).unwrap();
        assert!(text.contains("not_a_shape"));
        assert!(text.contains("octahedron,Octahedron,platonic,built,6,12,8"));
    }

    #[test]
    fn generate_without_library_writes_no_documents() {
        let dir = tempdir().unwrap();
        let reg = ShapeRegistry::new(Backend::unavailable("test"));
        let err = generate(&reg, dir.path(), &["cube".to_string()], None).unwrap_err();
        assert!(err.to_string().contains("1 of 1 shapes failed"));
        assert!(!dir.path().join("cube.json").exists());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cmd = Cmd::try_parse_from([
            "polycat",
            "generate",
            "--out",
            "x",
            "--only",
            "cube",
            "--no-library",
        ])
        .unwrap();
        assert!(cmd.no_library);
        match cmd.action {
            Action::Generate { out, only, summary } => {
                assert_eq!(out, PathBuf::from("x"));
                assert_eq!(only, vec!["cube".to_string()]);
                assert!(summary.is_none());
            }
            _ => panic!("expected generate"),
        }
    }
}
