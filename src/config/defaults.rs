use std::path::PathBuf;

use super::types::FailLevel;

pub fn default_version() -> u32 {
    1
}

pub fn default_top_margin() -> f64 {
    5.0
}

pub fn default_left_margin() -> f64 {
    5.0
}

pub fn default_identifier_width() -> f64 {
    50.0
}

pub fn default_label_width() -> f64 {
    300.0
}

pub fn default_row_height() -> f64 {
    20.0
}

pub fn default_time_axis_length() -> f64 {
    750.0
}

pub fn default_space_before_activity() -> f64 {
    20.0
}

pub fn default_separator() -> f64 {
    5.0
}

pub fn default_indentation() -> f64 {
    10.0
}

pub fn default_milestone_label_width() -> f64 {
    150.0
}

pub fn default_deliverable_size() -> f64 {
    8.0
}

pub fn default_fail_on() -> FailLevel {
    FailLevel::Error
}

pub fn default_gantt_output() -> PathBuf {
    PathBuf::from("gantt.svg")
}
