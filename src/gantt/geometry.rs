//! Positioned shapes produced by the layout
//!
//! Coordinates follow SVG: `x` grows to the right and `y` grows downwards.

use super::style::Style;
use crate::error::LayoutError;

/// Tags attached to shapes so that callers can find them again
pub mod tags {
    pub const BAR: &str = "bar";
    pub const NAME: &str = "name";
    pub const IDENTIFIER: &str = "identifier";
    pub const TIME_AXIS: &str = "time_axis";
    pub const TIME_SCALE: &str = "time_scale";
    pub const GRID: &str = "grid";
    pub const DELIVERABLE: &str = "deliverable";
    pub const MILESTONE: &str = "milestone";
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn moved_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn with_x(&self, x: f64) -> Self {
        Self::new(x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: Point,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Smallest box holding both points
    #[must_use]
    pub fn spanning(a: Point, b: Point) -> Self {
        let top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
        Self::new(
            top_left,
            a.x.max(b.x) - top_left.x,
            a.y.max(b.y) - top_left.y,
        )
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.width / 2.0,
            self.top_left.y + self.height / 2.0,
        )
    }

    /// Left and right edges included, bottom edge excluded
    pub fn includes(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        [
            other.top_left,
            Point::new(other.right(), other.top()),
            Point::new(other.left(), other.bottom()),
            other.bottom_right(),
        ]
        .into_iter()
        .any(|corner| self.includes(corner))
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(Point::new(left, top), right - left, bottom - top)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "@({}, {}) {}x{}",
            self.top_left.x, self.top_left.y, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rectangle(BoundingBox),
    Line { source: Point, target: Point },
    Text { text: String, frame: BoundingBox },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub style: Style,
    pub tags: Vec<String>,
}

impl Shape {
    pub fn rectangle(frame: BoundingBox, style: Style, tags: Vec<String>) -> Self {
        Self {
            kind: ShapeKind::Rectangle(frame),
            style,
            tags,
        }
    }

    pub fn line(source: Point, target: Point, style: Style, tags: Vec<String>) -> Self {
        Self {
            kind: ShapeKind::Line { source, target },
            style,
            tags,
        }
    }

    pub fn text(
        text: impl Into<String>,
        frame: BoundingBox,
        style: Style,
        tags: Vec<String>,
    ) -> Self {
        Self {
            kind: ShapeKind::Text {
                text: text.into(),
                frame,
            },
            style,
            tags,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match &self.kind {
            ShapeKind::Rectangle(frame) => *frame,
            ShapeKind::Line { source, target } => BoundingBox::spanning(*source, *target),
            ShapeKind::Text { frame, .. } => *frame,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_all_tags(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.has_tag(tag))
    }

    pub fn overlaps(&self, other: &Shape) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }
}

/// Ordered collection of shapes, drawn first to last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    shapes: Vec<Shape>,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Union of every shape's box
    pub fn bounding_box(&self) -> Result<BoundingBox, LayoutError> {
        self.shapes
            .iter()
            .map(Shape::bounding_box)
            .reduce(|acc, frame| acc.union(&frame))
            .ok_or(LayoutError::EmptyFigure)
    }

    /// Shapes carrying every one of the given tags
    pub fn find_with_tags(&self, tags: &[&str]) -> Vec<&Shape> {
        self.shapes
            .iter()
            .filter(|shape| shape.has_all_tags(tags))
            .collect()
    }
}
