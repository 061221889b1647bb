//! Ingestion of raw spending records from JSON and CSV inputs.
//!
//! JSON input is an array of project objects:
//!
//! ```json
//! [{ "title": "Alpha", "categories": [{ "title": "Food", "spent": 10 }] }]
//! ```
//!
//! CSV input is one row per (project, category) spend record under a
//! `Project,Category,Spent` header. Rows are grouped into projects by title, preserving
//! first-seen project order and row order within a project. Duplicate (project, category)
//! rows are kept as separate raw entries; normalization sums them.

use crate::model::{Amount, CategorySpend, Project};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// The format of a raw spending records input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// A JSON array of project objects, each with a title and a list of category spends.
    #[default]
    Json,
    /// Flat CSV rows under a `Project,Category,Spent` header.
    Csv,
}

serde_plain::derive_display_from_serialize!(InputFormat);
serde_plain::derive_fromstr_from_deserialize!(InputFormat);

// "Project","Category","Spent"
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    project: String,
    category: String,
    spent: String,
}

/// Reads an array of projects from JSON.
pub fn projects_from_json(reader: impl Read) -> Result<Vec<Project>> {
    let projects: Vec<Project> =
        serde_json::from_reader(reader).context("Unable to parse the projects JSON input")?;
    debug!("Parsed {} projects from JSON input", projects.len());
    Ok(projects)
}

/// Reads flat CSV spend rows and groups them into projects.
///
/// Amounts accept the formatted form (`$`, commas); an empty cell is zero. A malformed row or
/// amount is reported with its row number.
pub fn projects_from_csv(reader: impl Read) -> Result<Vec<Project>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut order: Vec<String> = Vec::new();
    let mut by_project: HashMap<String, Vec<CategorySpend>> = HashMap::new();

    for (ix, result) in rdr.deserialize().enumerate() {
        // ix + 2 because the header occupies row 1
        let row: CsvRow = result.with_context(|| format!("Unable to parse CSV row {}", ix + 2))?;
        let spent = Amount::from_str(&row.spent)
            .with_context(|| format!("Invalid amount '{}' at CSV row {}", row.spent, ix + 2))?;
        if !by_project.contains_key(&row.project) {
            order.push(row.project.clone());
        }
        by_project
            .entry(row.project)
            .or_default()
            .push(CategorySpend::new(row.category, spent));
    }

    debug!("Parsed {} projects from CSV input", order.len());
    Ok(order
        .into_iter()
        .map(|title| {
            let categories = by_project.remove(&title).unwrap_or_default();
            Project::new(title, categories)
        })
        .collect())
}
