use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("'{0}' does not contain any index")]
    NoIndex(String),

    #[error("'{0}' contains a zero index, indices start at 1")]
    ZeroIndex(String),

    #[error("Index '{0}' is out of range")]
    InvalidIndex(String),

    #[error("Invalid index pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Layout constant '{name}' must be positive (got {value})")]
    InvalidLayout { name: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Format not supported ({0})")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid task reference '{reference}' for {person}")]
    InvalidReference { reference: String, person: String },

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),

    #[error("Task '{task}' must start at 1 or later (got {start})")]
    InvalidStart { task: String, start: u32 },

    #[error("Task '{task}' must last at least one time unit")]
    InvalidDuration { task: String },

    #[error("Task '{task}' ends past the last time unit (start {start}, duration {duration})")]
    TaskOutOfRange {
        task: String,
        start: u32,
        duration: u32,
    },

    #[error("No team found in '{0}'")]
    MissingTeam(PathBuf),
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("An empty figure has no bounding box")]
    EmptyFigure,

    #[error("Failed to format SVG: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Gantt charts can only be written as SVG ({0})")]
    UnsupportedFormat(PathBuf),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
