//! Rules about the work plan itself: structure and dates

use super::Rule;
use crate::verify::report::{Code, Issue, Report};
use crate::wbs::{Bounds, Deliverable, Milestone, Package, Path, Project, Task, Visitor};

const FORGOTTEN_ACTIVITIES: &str = "Have we forgotten some tasks or work packages there?";

#[derive(Debug, Default)]
pub struct EmptyProject {
    report: Report,
}

impl<'a> Visitor<'a> for EmptyProject {
    fn on_project(&mut self, project: &'a Project, _path: &Path) {
        if project.breakdown.is_empty() {
            self.report.error(
                Code::EmptyProject,
                format!("Project '{}' is empty.", project.name),
                FORGOTTEN_ACTIVITIES,
                project.name.as_str(),
            );
        }
    }
}

impl<'a> Rule<'a> for EmptyProject {
    fn name(&self) -> &'static str {
        "empty-project"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct EmptyWorkPackage {
    report: Report,
}

impl<'a> Visitor<'a> for EmptyWorkPackage {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        if package.breakdown.is_empty() {
            self.report.warn(
                Code::EmptyWorkPackage,
                format!("Work package '{}' is empty.", package.name),
                FORGOTTEN_ACTIVITIES,
                path.as_identifier("WP"),
            );
        }
    }
}

impl<'a> Rule<'a> for EmptyWorkPackage {
    fn name(&self) -> &'static str {
        "empty-work-package"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct SingleActivityWorkPackage {
    report: Report,
}

impl<'a> Visitor<'a> for SingleActivityWorkPackage {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        if package.breakdown.len() == 1 {
            self.report.warn(
                Code::SingleTaskWorkPackage,
                format!("Work package '{}' includes only one activity.", package.name),
                "Is this work package really necessary?",
                path.as_identifier("WP"),
            );
        }
    }
}

impl<'a> Rule<'a> for SingleActivityWorkPackage {
    fn name(&self) -> &'static str {
        "single-activity-work-package"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

/// Milestones must fall within the project. A project without any dated
/// activity has no bounds, and then nothing is checked.
#[derive(Debug, Default)]
pub struct MilestoneOutsideProject {
    project: Option<Bounds>,
    report: Report,
}

impl<'a> Visitor<'a> for MilestoneOutsideProject {
    fn on_project(&mut self, project: &'a Project, _path: &Path) {
        self.project = project.bounds();
    }

    fn on_milestone(&mut self, milestone: &'a Milestone, path: &Path) {
        let Some(project) = self.project else {
            return;
        };
        if milestone.date > project.end {
            self.report.error(
                Code::MilestoneAfterProjectEnd,
                format!(
                    "Milestone '{}' comes after the project ends ({} > {}).",
                    milestone.name, milestone.date, project.end
                ),
                "Please check the milestone date and the project end.",
                path.as_identifier("M"),
            );
        } else if milestone.date < project.start {
            self.report.error(
                Code::MilestoneBeforeProjectStart,
                format!(
                    "Milestone '{}' comes before the project starts ({} < {}).",
                    milestone.name, milestone.date, project.start
                ),
                "Please check the milestone date and the project start.",
                path.as_identifier("M"),
            );
        }
    }
}

impl<'a> Rule<'a> for MilestoneOutsideProject {
    fn name(&self) -> &'static str {
        "milestone-outside-project"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct TaskWithoutDeliverable {
    report: Report,
}

impl<'a> Visitor<'a> for TaskWithoutDeliverable {
    fn on_task(&mut self, task: &'a Task, path: &Path) {
        if task.deliverables.is_empty() {
            let identifier = path.as_identifier("T");
            self.report.warn(
                Code::TaskWithoutDeliverable,
                format!("{} ({}) has no deliverable.", identifier, task.name),
                "Do we miss some?",
                identifier,
            );
        }
    }
}

impl<'a> Rule<'a> for TaskWithoutDeliverable {
    fn name(&self) -> &'static str {
        "task-without-deliverable"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

/// Deliverables are due within the task that produces them
#[derive(Debug, Default)]
pub struct DeliverableOutsideTask {
    task: Option<Bounds>,
    report: Report,
}

impl<'a> Visitor<'a> for DeliverableOutsideTask {
    fn on_task(&mut self, task: &'a Task, _path: &Path) {
        self.task = Some(task.bounds());
    }

    fn on_deliverable(&mut self, deliverable: &'a Deliverable, path: &Path) {
        let Some(task) = self.task else {
            return;
        };
        let identifier = path.as_identifier("D");
        let description = if deliverable.due > task.end {
            format!("{} ({}) is due after the task ends.", identifier, deliverable.name)
        } else if deliverable.due < task.start {
            format!("{} ({}) is due before the task starts.", identifier, deliverable.name)
        } else {
            return;
        };
        self.report.error(
            Code::WrongDeliverableDate,
            description,
            "Please check task start, duration and deliverable date.",
            identifier,
        );
    }
}

impl<'a> Rule<'a> for DeliverableOutsideTask {
    fn name(&self) -> &'static str {
        "deliverable-outside-task"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

/// Every activity of a work package should overlap with, or directly follow,
/// one of its siblings. Undated (empty) children are left out of the check.
#[derive(Debug, Default)]
pub struct DiscontinuousWorkPackage {
    report: Report,
}

impl<'a> Visitor<'a> for DiscontinuousWorkPackage {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        let dated: Vec<(&str, Bounds)> = package
            .breakdown
            .iter()
            .filter_map(|activity| activity.bounds().map(|b| (activity.name(), b)))
            .collect();
        if dated.len() < 2 {
            return;
        }

        let disconnected = dated.iter().enumerate().find(|(index, (_, bounds))| {
            !dated.iter().enumerate().any(|(other_index, (_, other))| {
                other_index != *index
                    && (bounds.overlaps(other) || bounds.is_contiguous_with(other))
            })
        });

        if let Some((_, (name, _))) = disconnected {
            let identifier = path.as_identifier("WP");
            self.report.warn(
                Code::DiscontinuityInWorkPackage,
                format!(
                    "{} ({}) is discontinuous. Activity '{}' is disconnected from the others.",
                    identifier, package.name, name
                ),
                format!("Please check start and duration of {} activities.", identifier),
                identifier,
            );
        }
    }
}

impl<'a> Rule<'a> for DiscontinuousWorkPackage {
    fn name(&self) -> &'static str {
        "discontinuous-work-package"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}
