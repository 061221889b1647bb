use crate::commands::Out;
use crate::palette::Palette;
use crate::render::Rendered;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the spendchart home directory and an initial `config.json` inside it.
///
/// # Arguments
/// - `home` - The directory that will be the root of the data directory, e.g. `$HOME/spendchart`
/// - `colors` - Custom palette colors to store in the config file. An empty slice means the
///   default palette. Colors are validated before anything is written.
///
/// # Errors
/// - Returns an error if a color is invalid, if a config file already exists, or if any file
///   operation fails.
pub fn init(home: &Path, colors: &[String]) -> Result<Out<Rendered>> {
    let colors = if colors.is_empty() {
        None
    } else {
        // Validate before touching the filesystem
        Palette::new(colors.iter().cloned())?;
        Some(colors.to_vec())
    };
    let _config = Config::create(home, colors)
        .context("Unable to create the spendchart directory and config")?;
    Ok("Successfully created the spendchart directory and config".into())
}
