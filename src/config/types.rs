use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;
use crate::verify::{Code, Level};

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub gantt: GanttConfig,
}

/// Constants driving the Gantt layout, in SVG user units
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Layout {
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,

    #[serde(default = "default_left_margin")]
    pub left_margin: f64,

    /// Width of the "T 1.2" column
    #[serde(default = "default_identifier_width")]
    pub identifier_width: f64,

    /// Width of identifier and name together, before the time axis
    #[serde(default = "default_label_width")]
    pub label_width: f64,

    #[serde(default = "default_row_height")]
    pub row_height: f64,

    #[serde(default = "default_time_axis_length")]
    pub time_axis_length: f64,

    /// Vertical gap above top-level activities, divided by depth below
    #[serde(default = "default_space_before_activity")]
    pub space_before_activity: f64,

    #[serde(default = "default_separator")]
    pub separator: f64,

    #[serde(default = "default_indentation")]
    pub indentation: f64,

    #[serde(default = "default_milestone_label_width")]
    pub milestone_label_width: f64,

    #[serde(default = "default_deliverable_size")]
    pub deliverable_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_margin: default_top_margin(),
            left_margin: default_left_margin(),
            identifier_width: default_identifier_width(),
            label_width: default_label_width(),
            row_height: default_row_height(),
            time_axis_length: default_time_axis_length(),
            space_before_activity: default_space_before_activity(),
            separator: default_separator(),
            indentation: default_indentation(),
            milestone_label_width: default_milestone_label_width(),
            deliverable_size: default_deliverable_size(),
        }
    }
}

impl Layout {
    /// Gap above an activity row, shrinking with depth
    pub fn space_before(&self, depth: usize) -> f64 {
        self.space_before_activity / depth.max(1) as f64
    }

    pub fn indent(&self, depth: usize) -> f64 {
        self.indentation * depth.saturating_sub(1) as f64
    }

    /// Room left for the activity name once indented
    pub fn name_width(&self, depth: usize) -> f64 {
        (self.label_width - self.indent(depth) - self.identifier_width).max(0.0)
    }

    /// Horizontal position where the time axis begins
    pub fn axis_left(&self) -> f64 {
        self.left_margin + self.label_width + 2.0 * self.separator
    }

    pub(crate) fn lengths(&self) -> [(&'static str, f64); 6] {
        [
            ("identifier_width", self.identifier_width),
            ("label_width", self.label_width),
            ("row_height", self.row_height),
            ("time_axis_length", self.time_axis_length),
            ("milestone_label_width", self.milestone_label_width),
            ("deliverable_size", self.deliverable_size),
        ]
    }

    pub(crate) fn offsets(&self) -> [(&'static str, f64); 5] {
        [
            ("top_margin", self.top_margin),
            ("left_margin", self.left_margin),
            ("space_before_activity", self.space_before_activity),
            ("separator", self.separator),
            ("indentation", self.indentation),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct VerifyConfig {
    /// Issue codes left out of reports
    #[serde(default)]
    pub ignore: Vec<Code>,

    #[serde(default = "default_fail_on")]
    pub fail_on: FailLevel,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            fail_on: default_fail_on(),
        }
    }
}

/// Lowest issue level that makes `verify` exit with a failure status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FailLevel {
    #[default]
    Error,
    Warning,
    Never,
}

impl FailLevel {
    /// Whether a report whose worst issue has this level should fail
    pub fn is_reached_by(&self, worst: Option<Level>) -> bool {
        match (self, worst) {
            (FailLevel::Never, _) | (_, None) => false,
            (FailLevel::Warning, Some(_)) => true,
            (FailLevel::Error, Some(level)) => level == Level::Error,
        }
    }
}

impl std::fmt::Display for FailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailLevel::Error => write!(f, "error"),
            FailLevel::Warning => write!(f, "warning"),
            FailLevel::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GanttConfig {
    #[serde(default = "default_gantt_output")]
    pub output: PathBuf,
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self {
            output: default_gantt_output(),
        }
    }
}
