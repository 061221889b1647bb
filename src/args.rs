//! These structs provide the CLI interface for the spendchart CLI.

use crate::import::InputFormat;
use crate::render::Format;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// spendchart: A command-line tool for turning raw spending records into chart-ready data.
///
/// The purpose of this program is to take per-project spending records, each listing spend broken
/// down by category, and normalize them into one consistent dataset for a multi-series chart:
/// every project gets a value for every category (zero where it spent nothing), and every
/// category gets a stable color.
///
/// Raw records are read from a JSON or CSV file (or stdin), and the resulting dataset is written
/// to stdout as JSON, a markdown table, or CSV.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is optional: `build` and `categories` fall back to default settings when no config
    /// file exists. Run it when you want to customize the palette or the default output format.
    Init(InitArgs),
    /// Build the chart dataset from a file of raw spending records.
    Build(BuildArgs),
    /// List the category universe with its assigned colors.
    Categories(CategoriesArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where spendchart configuration is held. Defaults to ~/spendchart
    #[arg(long, env = "SPENDCHART_HOME", default_value_t = default_spendchart_home())]
    spendchart_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, spendchart_home: PathBuf) -> Self {
        Self {
            log_level,
            spendchart_home: spendchart_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn spendchart_home(&self) -> &DisplayPath {
        &self.spendchart_home
    }
}

/// Args for the `spendchart init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// A comma-separated list of hex colors to store as the palette, e.g.
    /// "#8884d8,#82ca9d,#ffc658". When omitted, the default palette is used.
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,
}

impl InitArgs {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Args for the `spendchart build` command.
#[derive(Debug, Parser, Clone)]
pub struct BuildArgs {
    /// The file of raw spending records to read. If not supplied, input will be taken from
    /// stdin.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// The format of the raw spending records.
    #[arg(long, default_value_t = InputFormat::Json)]
    input: InputFormat,

    /// The output format. Overrides the format configured in the config file.
    #[arg(long)]
    format: Option<Format>,
}

impl BuildArgs {
    pub fn new(file: Option<PathBuf>, input: InputFormat, format: Option<Format>) -> Self {
        Self {
            file,
            input,
            format,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn input(&self) -> InputFormat {
        self.input
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }
}

/// Args for the `spendchart categories` command.
#[derive(Debug, Parser, Clone)]
pub struct CategoriesArgs {
    /// The file of raw spending records to read. If not supplied, input will be taken from
    /// stdin.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// The format of the raw spending records.
    #[arg(long, default_value_t = InputFormat::Json)]
    input: InputFormat,

    /// The output format. Overrides the format configured in the config file.
    #[arg(long)]
    format: Option<Format>,
}

impl CategoriesArgs {
    pub fn new(file: Option<PathBuf>, input: InputFormat, format: Option<Format>) -> Self {
        Self {
            file,
            input,
            format,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn input(&self) -> InputFormat {
        self.input
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }
}

fn default_spendchart_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("spendchart"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --spendchart-home or SPENDCHART_HOME instead of relying on the \
                default spendchart home directory. If you continue using the program right now, \
                you may have problems!",
            );
            PathBuf::from("spendchart")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
