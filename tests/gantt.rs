use chrono::NaiveDate;
use proptest::prelude::*;
use std::path::PathBuf;

use wbsplan::config::Layout;
use wbsplan::gantt::{tags, GanttPainter};
use wbsplan::storage::{load_blueprint, svg};
use wbsplan::wbs::{Activity, Blueprint, Milestone, Package, Project, Task};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn single_task_covers_the_time_axis() {
    let project = Project::new("P", origin(), vec![Task::new("T1", 1, 10).into()]);
    let layout = Layout::default();
    let figure = GanttPainter::new(layout.clone()).draw(&Blueprint::new(project));

    let bar = figure.find_with_tags(&["T 1", tags::BAR])[0].bounding_box();
    let axis = figure.find_with_tags(&[tags::TIME_AXIS])[0].bounding_box();
    assert_eq!(bar.left(), axis.left());
    assert!((bar.right() - axis.right()).abs() < 1e-9);
    assert!((axis.width - layout.time_axis_length).abs() < 1e-9);
}

#[test]
fn sample_plan_renders_to_svg() {
    let blueprint = load_blueprint(&fixture("sample.yaml"), None).unwrap();
    let figure = GanttPainter::new(Layout::default()).draw(&blueprint);

    assert_eq!(figure.find_with_tags(&[tags::BAR]).len(), 6);
    assert_eq!(figure.find_with_tags(&[tags::DELIVERABLE]).len(), 4);
    assert_eq!(figure.find_with_tags(&["WP 2", tags::NAME]).len(), 1);

    let svg = svg::write(&figure).unwrap();
    assert!(svg.contains(">Development</text>"));
    assert!(svg.contains(">Final review</text>"));
    let written = svg.matches("<rect").count()
        + svg.matches("<line").count()
        + svg.matches("<text").count();
    assert_eq!(written, figure.len());
}

#[test]
fn custom_layout_moves_the_axis() {
    let layout = Layout {
        label_width: 400.0,
        time_axis_length: 500.0,
        ..Layout::default()
    };
    let project = Project::new("P", origin(), vec![Task::new("T1", 1, 4).into()]);
    let figure = GanttPainter::new(layout.clone()).draw(&Blueprint::new(project));
    let axis = figure.find_with_tags(&[tags::TIME_AXIS])[0].bounding_box();
    assert_eq!(axis.left(), layout.axis_left());
    assert_eq!(axis.width, 500.0);
}

#[test]
fn task_reaching_the_last_time_unit_is_drawn() {
    let project = Project::new(
        "P",
        origin(),
        vec![Package::new(
            "WP",
            vec![
                Task::new("Late", u32::MAX - 1, 2).into(),
                Task::new("Early", 1, 1).into(),
            ],
        )
        .into()],
    );
    let figure = GanttPainter::new(Layout::default()).draw(&Blueprint::new(project));
    assert_eq!(figure.find_with_tags(&[tags::BAR]).len(), 3);
    assert!(figure.bounding_box().is_ok());
}

fn activity() -> impl Strategy<Value = Activity> {
    let task = (1u32..24, 1u32..12).prop_map(|(start, duration)| {
        Activity::from(Task::new("Task", start, duration))
    });
    task.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4)
            .prop_map(|breakdown| Activity::from(Package::new("Package", breakdown)))
    })
}

proptest! {
    #[test]
    fn drawing_twice_gives_the_same_figure(
        breakdown in prop::collection::vec(activity(), 0..5),
        milestones in prop::collection::vec(0u32..40, 0..3),
    ) {
        let project = Project::new("P", origin(), breakdown).with_milestones(
            milestones.into_iter().map(|date| Milestone::new("M", date)).collect(),
        );
        let blueprint = Blueprint::new(project);
        let painter = GanttPainter::new(Layout::default());
        let first = painter.draw(&blueprint);
        let second = painter.draw(&blueprint);
        prop_assert!(first.bounding_box().is_ok());
        prop_assert_eq!(first, second);
    }
}
