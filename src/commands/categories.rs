//! The categories command: list the category universe with its assigned colors, without the
//! per-project data.

use crate::args::CategoriesArgs;
use crate::commands::{read_projects, Out};
use crate::dataset::build_chart_dataset;
use crate::render::{render_categories, Rendered};
use crate::{Config, Result};

/// Reads raw spending records and renders only the category legend: every distinct category
/// title, in first-seen order, with its palette color.
pub fn categories(config: &Config, args: CategoriesArgs) -> Result<Out<Rendered>> {
    let projects = read_projects(args.file(), args.input())?;
    let dataset = build_chart_dataset(&projects, &config.palette()?)?;
    let format = args.format().unwrap_or_else(|| config.format());
    let rendered = render_categories(dataset.categories(), format)?;

    Ok(Out::new(
        format!("Found {} categories", dataset.categories().len()),
        rendered,
    ))
}
