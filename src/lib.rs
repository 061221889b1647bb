pub mod args;
pub mod commands;
mod config;
mod dataset;
mod error;
pub mod import;
pub mod model;
mod palette;
pub mod render;
#[cfg(test)]
mod test;
mod utils;

pub use config::Config;
pub use dataset::{build_chart_dataset, ChartDataset};
pub use error::Error;
pub use error::Result;
pub use palette::{Palette, PaletteError};
