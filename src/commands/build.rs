//! The build command: run the aggregation pipeline over a file of raw spending records and
//! render the resulting chart dataset.

use crate::args::BuildArgs;
use crate::commands::{read_projects, Out};
use crate::dataset::build_chart_dataset;
use crate::render::{render, Rendered};
use crate::{Config, Result};
use tracing::debug;

/// Reads raw spending records, normalizes them into the chart dataset, and renders the dataset
/// in the requested output format (falling back to the config file's default).
pub fn build(config: &Config, args: BuildArgs) -> Result<Out<Rendered>> {
    let projects = read_projects(args.file(), args.input())?;
    debug!("Loaded {} projects", projects.len());

    let dataset = build_chart_dataset(&projects, &config.palette()?)?;
    let format = args.format().unwrap_or_else(|| config.format());
    let rendered = render(&dataset, format)?;

    Ok(Out::new(
        format!(
            "Built a chart dataset of {} projects across {} categories",
            dataset.data().len(),
            dataset.categories().len()
        ),
        rendered,
    ))
}
