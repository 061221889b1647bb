//! The aggregation pipeline that reconciles heterogeneous per-project category sets into one
//! consistent, chart-ready dataset.
//!
//! Every project may report spend under its own subset of category titles. The pipeline derives
//! the shared, ordered set of titles across all projects, widens each project to that full set
//! (zero-filled where a project has no spend), flattens the result into chart records, and pairs
//! each title with a palette color.

use crate::model::{Amount, CategoryLabel, CategorySpend, ChartRecord, Project};
use crate::palette::Palette;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// The normalized output: one flat record per input project, in input order, plus the
/// label/color legend in first-seen category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChartDataset {
    data: Vec<ChartRecord>,
    categories: Vec<CategoryLabel>,
}

impl ChartDataset {
    /// One `ChartRecord` per input project, in input project order. All records share the same
    /// category field set.
    pub fn data(&self) -> &[ChartRecord] {
        &self.data
    }

    /// The category labels with their assigned colors, in first-seen order.
    pub fn categories(&self) -> &[CategoryLabel] {
        &self.categories
    }
}

/// Builds the full chart dataset from raw projects.
///
/// A pure function of its inputs: no global state, no I/O, and identical inputs always produce
/// identical output. Errors only if a category total leaves the finite `f64` range.
pub fn build_chart_dataset(projects: &[Project], palette: &Palette) -> Result<ChartDataset> {
    let universe = category_universe(projects);
    let mut data = Vec::with_capacity(projects.len());
    for project in projects {
        let normalized = normalize_project(project, &universe)?;
        data.push(flatten_record(project.title(), &normalized));
    }
    let categories = assign_colors(&universe, palette);
    debug!(
        "Normalized {} projects across {} categories",
        data.len(),
        categories.len()
    );
    Ok(ChartDataset { data, categories })
}

/// Derives the ordered set of distinct category titles across all projects.
///
/// Order is first-seen: project order, then entry order within a project. Later repeats of a
/// title are discarded. An empty input yields an empty universe.
fn category_universe(projects: &[Project]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut universe = Vec::new();
    for category in projects.iter().flat_map(|p| p.categories()) {
        if seen.insert(category.title()) {
            universe.push(category.title().to_string());
        }
    }
    universe
}

/// Computes one project's full-width spend vector: one entry per universe title, in universe
/// order, where each entry is the sum of the project's raw spends under that title (zero if the
/// project has none).
fn normalize_project(project: &Project, universe: &[String]) -> Result<Vec<CategorySpend>> {
    universe
        .iter()
        .map(|title| {
            let total: f64 = project
                .categories()
                .iter()
                .filter(|c| c.title() == title)
                .map(|c| c.spent().value())
                .sum();
            let spent = Amount::new(total).with_context(|| {
                format!(
                    "Total spend for category '{title}' in project '{}' is out of range",
                    project.title()
                )
            })?;
            Ok(CategorySpend::new(title.clone(), spent))
        })
        .collect()
}

/// Converts a project's normalized vector into a flat chart record keyed by category title.
fn flatten_record(name: &str, normalized: &[CategorySpend]) -> ChartRecord {
    let values = normalized
        .iter()
        .map(|c| (c.title().to_string(), c.spent().value()))
        .collect();
    ChartRecord::new(name, values)
}

/// Pairs every universe title with a palette color, indexed by the title's position.
fn assign_colors(universe: &[String], palette: &Palette) -> Vec<CategoryLabel> {
    universe
        .iter()
        .enumerate()
        .map(|(ix, title)| CategoryLabel::new(title.clone(), palette.color_for(ix)))
        .collect()
}
