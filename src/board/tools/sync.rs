use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::board::tools::error::{Result, ToolError};
use crate::board::tools::flatten::{LabelMode, Row, flatten_hierarchy};
use crate::board::tools::hierarchy::build_hierarchy;
use crate::board::tools::io::csv_write;
use crate::board::tools::model::{BoardData, Hierarchy};

/// Locations of the three report artifacts derived from one board name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub hierarchy: PathBuf,
    pub table: PathBuf,
    pub csv: PathBuf,
}

/// Location of the input dataset for a board inside the working directory.
pub fn dataset_path(dir: &Path, board: &str) -> PathBuf {
    dir.join(format!("{board}.trello.json"))
}

/// Derives the artifact paths for a board inside the working directory.
pub fn artifact_paths(dir: &Path, board: &str) -> ArtifactPaths {
    ArtifactPaths {
        hierarchy: dir.join(format!("{board}.hierarchy.json")),
        table: dir.join(format!("{board}.table.json")),
        csv: dir.join(format!("{board}.table.csv")),
    }
}

/// Runs the full pipeline for one board: parse the dataset, reconstruct the
/// hierarchy, flatten it into the report table, and write the three
/// artifacts. Orphaned records are reported and skipped, never fatal; only
/// a missing or unparseable dataset aborts the run.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), out_dir = %out_dir.display(), board)
)]
pub fn convert_board(input: &Path, out_dir: &Path, board: &str, mode: LabelMode) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let data: BoardData = serde_json::from_str(&source)?;
    info!(
        lists = data.lists.len(),
        cards = data.cards.len(),
        checklists = data.checklists.len(),
        "parsed board dataset"
    );

    let build = build_hierarchy(&data);
    for orphan in &build.orphans {
        warn!("{orphan}");
    }

    let rows = flatten_hierarchy(&build.hierarchy, mode);
    info!(
        row_count = rows.len(),
        orphan_count = build.orphans.len(),
        "table flattened"
    );

    write_artifacts(&artifact_paths(out_dir, board), &build.hierarchy, &rows)
}

/// Writes the three artifacts independently. Every write is attempted even
/// when an earlier one failed; each failure is reported as a diagnostic and
/// the run fails with a summary only after all writes were tried.
fn write_artifacts(paths: &ArtifactPaths, hierarchy: &Hierarchy, rows: &[Row]) -> Result<()> {
    let writes: [(&Path, Result<()>); 3] = [
        (&paths.hierarchy, write_json(&paths.hierarchy, hierarchy)),
        (&paths.table, write_json(&paths.table, &rows)),
        (&paths.csv, csv_write::write_table(&paths.csv, rows)),
    ];

    let mut failed = 0;
    let total = writes.len();
    for (path, outcome) in writes {
        if let Err(error) = outcome {
            error!(artifact = %path.display(), %error, "failed to write artifact");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(ToolError::ArtifactWrites { failed, total });
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
