//! Output rendering for the chart dataset.
//!
//! This module provides:
//! - `render`: the full dataset in the requested output format
//! - `render_categories`: only the category legend (titles and colors)

use crate::dataset::ChartDataset;
use crate::model::CategoryLabel;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::Write as _;
use std::fmt::{Debug, Display, Formatter};

/// The output format for rendered datasets.
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
pub enum Format {
    /// Chart-ready JSON with `data` and `categories`.
    #[default]
    Json,
    /// Markdown table as a single formatted string.
    Table,
    /// CSV data as a properly escaped string.
    Csv,
}

serde_plain::derive_display_from_serialize!(Format);
serde_plain::derive_fromstr_from_deserialize!(Format);

/// A rendered dataset in the requested output format.
#[derive(Clone, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// JSON value, pretty-printed on display.
    Json(serde_json::Value),
    /// Markdown table as a single formatted string.
    Table(String),
    /// CSV data as a properly escaped string.
    Csv(String),
}

impl Debug for Rendered {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendered::Json(v) => write!(f, "Rendered::Json({:?})", v),
            Rendered::Table(s) => write!(f, "Rendered::Table({} chars)", s.len()),
            Rendered::Csv(s) => write!(f, "Rendered::Csv({} chars)", s.len()),
        }
    }
}

impl Display for Rendered {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendered::Json(v) => {
                if let Ok(s) = serde_json::to_string_pretty(v) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{:?}", v)
                }
            }
            Rendered::Table(s) => write!(f, "{}", s),
            Rendered::Csv(s) => write!(f, "{}", s),
        }
    }
}

/// Renders the full dataset in the requested format.
pub fn render(dataset: &ChartDataset, format: Format) -> Result<Rendered> {
    match format {
        Format::Json => Ok(Rendered::Json(
            serde_json::to_value(dataset).context("Unable to serialize the chart dataset")?,
        )),
        Format::Table => Ok(Rendered::Table(dataset_table(dataset))),
        Format::Csv => Ok(Rendered::Csv(dataset_csv(dataset)?)),
    }
}

/// Renders only the category legend in the requested format.
pub fn render_categories(categories: &[CategoryLabel], format: Format) -> Result<Rendered> {
    match format {
        Format::Json => Ok(Rendered::Json(
            serde_json::to_value(categories).context("Unable to serialize the categories")?,
        )),
        Format::Table => Ok(Rendered::Table(categories_table(categories))),
        Format::Csv => Ok(Rendered::Csv(categories_csv(categories)?)),
    }
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push('|');
    for cell in cells {
        // A write to a String cannot fail
        let _ = write!(out, " {cell} |");
    }
    out.push('\n');
}

fn separator(width: usize) -> Vec<String> {
    vec!["---".to_string(); width]
}

fn dataset_table(dataset: &ChartDataset) -> String {
    let mut headers = vec!["name".to_string()];
    headers.extend(dataset.categories().iter().map(|c| c.title().to_string()));

    let mut out = String::new();
    push_row(&mut out, &headers);
    push_row(&mut out, &separator(headers.len()));
    for record in dataset.data() {
        let mut cells = vec![record.name().to_string()];
        cells.extend(record.values().iter().map(|(_, v)| format!("{v:.2}")));
        push_row(&mut out, &cells);
    }
    out
}

fn categories_table(categories: &[CategoryLabel]) -> String {
    let headers = vec!["title".to_string(), "color".to_string()];
    let mut out = String::new();
    push_row(&mut out, &headers);
    push_row(&mut out, &separator(headers.len()));
    for label in categories {
        push_row(
            &mut out,
            &[label.title().to_string(), label.color().to_string()],
        );
    }
    out
}

fn dataset_csv(dataset: &ChartDataset) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut headers = vec!["name".to_string()];
    headers.extend(dataset.categories().iter().map(|c| c.title().to_string()));
    wtr.write_record(&headers)
        .context("Unable to write the CSV header")?;

    for record in dataset.data() {
        let mut cells = vec![record.name().to_string()];
        cells.extend(record.values().iter().map(|(_, v)| v.to_string()));
        wtr.write_record(&cells)
            .context("Unable to write a CSV row")?;
    }

    finish_csv(wtr)
}

fn categories_csv(categories: &[CategoryLabel]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["title", "color"])
        .context("Unable to write the CSV header")?;
    for label in categories {
        wtr.write_record([label.title(), label.color()])
            .context("Unable to write a CSV row")?;
    }
    finish_csv(wtr)
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Unable to finish writing CSV output")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::build_chart_dataset;
    use crate::palette::Palette;
    use crate::test::sample_projects;
    use serde_json::json;

    fn dataset() -> ChartDataset {
        build_chart_dataset(&sample_projects(), &Palette::default()).unwrap()
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!("table".parse::<Format>().unwrap(), Format::Table);
        assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
    }

    #[test]
    fn test_render_json_shape() {
        let rendered = render(&dataset(), Format::Json).unwrap();
        let value = match rendered {
            Rendered::Json(v) => v,
            other => panic!("Expected json, got {other:?}"),
        };
        assert_eq!(
            value["data"][0],
            json!({ "name": "Alpha", "Food": 15.0, "Travel": 20.0, "Rent": 0.0 })
        );
        assert_eq!(
            value["categories"][0],
            json!({ "title": "Food", "color": "#8884d8" })
        );
    }

    #[test]
    fn test_render_table() {
        let rendered = render(&dataset(), Format::Table).unwrap();
        let table = rendered.to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| name | Food | Travel | Rent |");
        assert_eq!(lines[1], "| --- | --- | --- | --- |");
        assert_eq!(lines[2], "| Alpha | 15.00 | 20.00 | 0.00 |");
        assert_eq!(lines[3], "| Beta | 0.00 | 7.00 | 50.00 |");
    }

    #[test]
    fn test_render_csv() {
        let rendered = render(&dataset(), Format::Csv).unwrap();
        let csv = rendered.to_string();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,Food,Travel,Rent");
        assert_eq!(lines[1], "Alpha,15,20,0");
        assert_eq!(lines[2], "Beta,0,7,50");
    }

    #[test]
    fn test_render_csv_escapes_commas_in_titles() {
        let projects = vec![crate::test::project("A, B", &[("Food, Drink", 1.0)])];
        let dataset = build_chart_dataset(&projects, &Palette::default()).unwrap();
        let rendered = render(&dataset, Format::Csv).unwrap();
        let csv = rendered.to_string();
        assert!(csv.contains("\"Food, Drink\""));
        assert!(csv.contains("\"A, B\""));
    }

    #[test]
    fn test_render_categories_json() {
        let rendered = render_categories(dataset().categories(), Format::Json).unwrap();
        let value = match rendered {
            Rendered::Json(v) => v,
            other => panic!("Expected json, got {other:?}"),
        };
        assert_eq!(
            value,
            json!([
                { "title": "Food", "color": "#8884d8" },
                { "title": "Travel", "color": "#82ca9d" },
                { "title": "Rent", "color": "#ffc658" }
            ])
        );
    }

    #[test]
    fn test_render_categories_table() {
        let rendered = render_categories(dataset().categories(), Format::Table).unwrap();
        let table = rendered.to_string();
        assert!(table.starts_with("| title | color |\n| --- | --- |\n"));
        assert!(table.contains("| Food | #8884d8 |"));
    }

    #[test]
    fn test_render_categories_csv() {
        let rendered = render_categories(dataset().categories(), Format::Csv).unwrap();
        let csv = rendered.to_string();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "title,color");
        assert_eq!(lines[1], "Food,#8884d8");
    }

    #[test]
    fn test_rendered_display_json_is_pretty() {
        let rendered = Rendered::Json(json!({ "a": 1 }));
        assert_eq!(rendered.to_string(), "{\n  \"a\": 1\n}");
    }
}
