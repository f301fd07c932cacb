//! CSV gradebook loading.

use anyhow::{Context, Result, bail};
use std::fs::File;
use tracing::{debug, warn};

use crate::graders::types::{AssignmentRecord, Gradebook};

/// Name of the header column holding the student ID.
const ID_COLUMN: &str = "ID";

/// Reads a gradebook CSV into a [`Gradebook`].
///
/// The first line is a header row of assignment names and must contain an
/// `ID` column; every following line is one student's scores aligned
/// positionally to the header. Rows shorter than the header are padded with
/// empty trailing fields (the export truncates blank tails); fields past the
/// header length are ignored. Rows with an empty ID are skipped, and when two
/// rows share an ID the later one wins; both cases are logged.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV is malformed, or
/// the header has no `ID` column. No partial result is produced.
pub fn load_gradebook(path: &str) -> Result<Gradebook> {
    let file = File::open(path).with_context(|| format!("cannot open gradebook {path}"))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("cannot read gradebook header from {path}"))?
        .clone();
    let id_index = match headers.iter().position(|name| name == ID_COLUMN) {
        Some(index) => index,
        None => bail!("gradebook {path} has no {ID_COLUMN} column"),
    };

    let mut gradebook = Gradebook::new();
    for (line, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("malformed row in gradebook {path}"))?;

        let id = row.get(id_index).unwrap_or("").trim().to_string();
        if id.is_empty() {
            warn!(line = line + 2, "Skipping row without a student ID");
            continue;
        }

        let record: AssignmentRecord = headers
            .iter()
            .enumerate()
            .map(|(column, name)| {
                // Short rows read as empty scores; the header defines width.
                let score = row.get(column).unwrap_or("");
                (name.to_string(), score.to_string())
            })
            .collect();

        if gradebook.insert(id.clone(), record).is_some() {
            warn!(%id, "Duplicate student ID, keeping the later row");
        }
    }

    debug!(path, students = gradebook.len(), "Gradebook loaded");
    Ok(gradebook)
}
