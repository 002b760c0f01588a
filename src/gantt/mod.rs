//! Gantt diagrams
//!
//! [`GanttPainter`] lays a blueprint out as a [`Figure`] of positioned shapes.
//! Serialising the figure is left to `storage::svg`.

pub mod geometry;
pub mod painter;
pub mod style;
pub mod time;

pub use geometry::{tags, BoundingBox, Figure, Point, Shape, ShapeKind};
pub use painter::GanttPainter;
pub use style::{Baseline, Element, Fill, Font, Stroke, Style, StyleSheet, TextAnchor};
pub use time::{Period, Unit};
