//! Shared test utilities for constructing raw spending records.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::{Amount, CategorySpend, Project};

/// Creates a single category spend from a title and value.
pub(crate) fn spend(title: &str, value: f64) -> CategorySpend {
    CategorySpend::new(title, Amount::new(value).unwrap())
}

/// Creates a project from a title and a list of (category, value) pairs.
pub(crate) fn project(title: &str, categories: &[(&str, f64)]) -> Project {
    Project::new(
        title,
        categories.iter().map(|(t, v)| spend(t, *v)).collect(),
    )
}

/// Two projects with overlapping and disjoint categories, including a duplicated category title
/// within the first project.
pub(crate) fn sample_projects() -> Vec<Project> {
    vec![
        project("Alpha", &[("Food", 10.0), ("Food", 5.0), ("Travel", 20.0)]),
        project("Beta", &[("Travel", 7.0), ("Rent", 50.0)]),
    ]
}
