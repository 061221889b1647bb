//! Command handlers for the spendchart CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod build;
mod categories;
mod init;

use crate::import::{self, InputFormat};
use crate::model::Project;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

pub use build::build;
pub use categories::categories;
pub use init::init;

/// The output type for a command. This allows the command to return a consistent status message
/// along with, optionally, the rendered data that belongs on stdout.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any rendered data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` (stderr) and the rendered data (if it exists) to stdout, so
    /// the data stays pipeable.
    pub fn print(&self)
    where
        T: Display,
    {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            println!("{structure}");
        }
    }
}

/// Reads raw spending records from `file`, or from stdin when `file` is `None`.
pub(crate) fn read_projects(file: Option<&Path>, input: InputFormat) -> Result<Vec<Project>> {
    let reader: Box<dyn BufRead> = match file {
        None => Box::new(BufReader::new(io::stdin())),
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("Unable to open file {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
    };
    match input {
        InputFormat::Json => import::projects_from_json(reader),
        InputFormat::Csv => import::projects_from_csv(reader),
    }
}
