//! Gantt layout
//!
//! The painter moves a cursor from top to bottom. It draws the calendar
//! header, one row per activity in declaration order, the calendar footer,
//! then grid lines and milestones over the rows. Horizontal positions on the
//! time axis are fractions of the project horizon scaled to the axis length.

use super::geometry::{tags, BoundingBox, Figure, Point, Shape};
use super::style::{Element, Style, StyleSheet};
use super::time::{Period, Unit};
use crate::config::Layout;
use crate::wbs::{
    walk_project, Blueprint, Bounds, Deliverable, Package, Path, Project, Task, Visitor,
};
use tracing::debug;

/// Turns blueprints into figures. Drawing is a pure function of the
/// blueprint, the layout and the style sheet.
#[derive(Debug, Clone, Default)]
pub struct GanttPainter {
    layout: Layout,
    styles: StyleSheet,
}

impl GanttPainter {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            styles: StyleSheet::default(),
        }
    }

    pub fn draw(&self, blueprint: &Blueprint) -> Figure {
        let project = &blueprint.project;
        let mut canvas = Canvas::new(&self.layout, &self.styles, project);

        canvas.draw_calendar(&[Unit::Year, Unit::Quarter, Unit::Month]);
        let top_axis = canvas.draw_time_axis();
        canvas.cursor = canvas
            .cursor
            .moved_by(0.0, project.milestones.len() as f64 * self.layout.row_height);

        walk_project(project, &mut canvas);

        canvas.cursor = canvas.cursor.moved_by(0.0, self.layout.space_before_activity);
        let bottom_axis = canvas.draw_time_axis();
        canvas.draw_calendar(&[Unit::Month, Unit::Quarter, Unit::Year]);

        canvas.draw_grid(top_axis, bottom_axis);
        canvas.draw_milestones(project, top_axis, bottom_axis);

        debug!(
            "Laid out {} shape(s) for project '{}'",
            canvas.figure.len(),
            project.name
        );
        canvas.figure
    }
}

struct Canvas<'l> {
    layout: &'l Layout,
    styles: &'l StyleSheet,
    horizon: Option<u32>,
    period: Option<Period>,
    figure: Figure,
    cursor: Point,
}

impl<'l> Canvas<'l> {
    fn new(layout: &'l Layout, styles: &'l StyleSheet, project: &Project) -> Self {
        Self {
            layout,
            styles,
            horizon: project.horizon(),
            period: project.period(),
            figure: Figure::new(),
            cursor: Point::new(layout.left_margin, layout.top_margin),
        }
    }

    /// Horizontal position of a time unit offset, `None` without a horizon
    fn time_x(&self, units: f64) -> Option<f64> {
        let horizon = self.horizon?;
        Some(self.layout.axis_left() + self.layout.time_axis_length * units / f64::from(horizon))
    }

    fn date_x(&self, period: &Period, date: chrono::NaiveDate) -> f64 {
        self.layout.axis_left() + self.layout.time_axis_length * period.normalize(date)
    }

    fn style(&self, element: Element, depth: usize) -> Style {
        self.styles.style(element, depth).clone()
    }

    fn write_text(&mut self, text: impl Into<String>, width: f64, style: Style, tags: Vec<String>) {
        let frame = BoundingBox::new(self.cursor, width, self.layout.row_height);
        self.figure.add(Shape::text(text, frame, style, tags));
    }

    /// One row of calendar bands per unit, each starting at the axis
    fn draw_calendar(&mut self, units: &[Unit]) {
        let Some(period) = self.period else {
            return;
        };
        for unit in units {
            for (index, part) in period.split_by(*unit).iter().enumerate() {
                let left = self.date_x(&period, part.start);
                let width = self.date_x(&period, part.end) - left;
                self.cursor = self.cursor.with_x(left);
                let style = self.style(Element::TimeScale, 0);
                self.write_text(
                    unit.label(part, index),
                    width,
                    style,
                    vec![tags::TIME_SCALE.to_string(), unit.to_string()],
                );
            }
            self.cursor = self.cursor.moved_by(0.0, self.layout.row_height);
        }
        self.cursor = self.cursor.with_x(self.layout.left_margin);
    }

    /// Horizontal axis at the cursor; returns its vertical position
    fn draw_time_axis(&mut self) -> f64 {
        let source = self.cursor.with_x(self.layout.axis_left());
        let target = source.moved_by(self.layout.time_axis_length, 0.0);
        self.figure.add(Shape::line(
            source,
            target,
            self.style(Element::Axis, 0),
            vec![tags::TIME_AXIS.to_string()],
        ));
        source.y
    }

    fn draw_activity(&mut self, name: &str, bounds: Option<Bounds>, path: &Path, prefix: &str) {
        let depth = path.depth();
        let identifier = path.as_identifier(prefix);

        self.cursor = self
            .cursor
            .with_x(self.layout.left_margin)
            .moved_by(self.layout.indent(depth), self.layout.space_before(depth));

        let style = self.style(Element::Identifier, depth);
        self.write_text(
            identifier.clone(),
            self.layout.identifier_width,
            style,
            vec![identifier.clone(), tags::IDENTIFIER.to_string()],
        );

        self.cursor = self
            .cursor
            .moved_by(self.layout.identifier_width + self.layout.separator, 0.0);
        let style = self.style(Element::Label, depth);
        self.write_text(
            name,
            self.layout.name_width(depth),
            style,
            vec![identifier.clone(), tags::NAME.to_string()],
        );

        if let Some(bounds) = bounds {
            let start = self.time_x(f64::from(bounds.start) - 1.0);
            let end = self.time_x(f64::from(bounds.end));
            if let (Some(start), Some(end)) = (start, end) {
                let frame = BoundingBox::new(
                    self.cursor.with_x(start),
                    end - start,
                    self.layout.row_height,
                );
                self.figure.add(Shape::rectangle(
                    frame,
                    self.style(Element::Bar, depth),
                    vec![identifier, tags::BAR.to_string()],
                ));
            }
        }
    }

    /// Markers sit just above the row whose top is at `row_top`
    fn draw_deliverables(&mut self, deliverables: &[Deliverable], path: &Path, row_top: f64) {
        let size = self.layout.deliverable_size;
        for (index, deliverable) in deliverables.iter().enumerate() {
            let Some(center) = self.time_x(f64::from(deliverable.due) - 0.5) else {
                return;
            };
            let mut location = path.clone();
            location.enter(index + 1);
            let frame =
                BoundingBox::new(Point::new(center - size / 2.0, row_top - size), size, size);
            self.figure.add(Shape::rectangle(
                frame,
                self.style(Element::Deliverable, 0),
                vec![location.as_identifier("D"), tags::DELIVERABLE.to_string()],
            ));
        }
    }

    /// Vertical lines at quarter and year changes, between the two axes
    fn draw_grid(&mut self, top: f64, bottom: f64) {
        let Some(period) = self.period else {
            return;
        };
        let years = period.boundaries(Unit::Year);
        for date in period.boundaries(Unit::Quarter) {
            let (element, unit) = if years.contains(&date) {
                (Element::YearGrid, Unit::Year)
            } else {
                (Element::QuarterGrid, Unit::Quarter)
            };
            let x = self.date_x(&period, date);
            self.figure.add(Shape::line(
                Point::new(x, top),
                Point::new(x, bottom),
                self.style(element, 0),
                vec![tags::GRID.to_string(), unit.to_string()],
            ));
        }
    }

    /// Lines across the diagram, labels stacked under the top axis
    fn draw_milestones(&mut self, project: &Project, top: f64, bottom: f64) {
        for (index, milestone) in project.milestones.iter().enumerate() {
            let Some(x) = self.time_x(f64::from(milestone.date) - 1.0) else {
                return;
            };
            let identifier = format!("M {}", index + 1);
            self.figure.add(Shape::line(
                Point::new(x, top),
                Point::new(x, bottom),
                self.style(Element::Milestone, 0),
                vec![identifier.clone(), tags::MILESTONE.to_string()],
            ));

            let width = self.layout.milestone_label_width;
            self.cursor = Point::new(
                x - self.layout.separator - width,
                top + index as f64 * self.layout.row_height,
            );
            let style = self.style(Element::MilestoneLabel, 0);
            self.write_text(
                milestone.name.clone(),
                width,
                style,
                vec![identifier, tags::MILESTONE.to_string(), tags::NAME.to_string()],
            );
        }
    }
}

impl<'a, 'l> Visitor<'a> for Canvas<'l> {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        self.draw_activity(&package.name, package.bounds(), path, "WP");
        self.cursor = self.cursor.moved_by(0.0, self.layout.row_height);
    }

    fn on_task(&mut self, task: &'a Task, path: &Path) {
        self.draw_activity(&task.name, Some(task.bounds()), path, "T");
        let row_top = self.cursor.y;
        self.draw_deliverables(&task.deliverables, path, row_top);
        self.cursor = self.cursor.moved_by(0.0, self.layout.row_height);
    }
}
