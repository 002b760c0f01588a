//! Work-breakdown structures: consistency checks and Gantt diagrams
//!
//! A plan is loaded into a [`wbs::Blueprint`], then either checked by
//! [`verify::Guard`] or laid out by [`gantt::GanttPainter`].

pub mod cli;
pub mod config;
pub mod error;
pub mod gantt;
pub mod output;
pub mod storage;
pub mod verify;
pub mod wbs;
