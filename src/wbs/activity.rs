//! The work breakdown: tasks, work packages, deliverables and milestones
//!
//! Dates are expressed in 1-based time units (months) counted from the project
//! origin. A task covers `[start, start + duration - 1]`, both ends included.

use chrono::{Months, NaiveDate};

use crate::gantt::time::Period;

/// Inclusive range of time units covered by an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub start: u32,
    pub end: u32,
}

impl Bounds {
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).saturating_add(1)
    }

    /// True when `date` falls within the range, both ends included
    #[must_use]
    pub fn contains(&self, date: u32) -> bool {
        date >= self.start && date <= self.end
    }

    /// True when either range has its start or end within the other
    #[must_use]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
    }

    /// True when one range ends right before the other starts
    #[must_use]
    pub fn is_contiguous_with(&self, other: &Bounds) -> bool {
        self.end.checked_add(1) == Some(other.start)
            || other.end.checked_add(1) == Some(self.start)
    }

    /// Smallest range covering both
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Something a task produces, due at a given time unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deliverable {
    pub name: String,
    pub kind: String,
    pub due: u32,
}

impl Deliverable {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, due: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            due,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub name: String,
    pub date: u32,
}

impl Milestone {
    pub fn new(name: impl Into<String>, date: u32) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// Leaf activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub start: u32,
    pub duration: u32,
    pub deliverables: Vec<Deliverable>,
}

impl Task {
    pub fn new(name: impl Into<String>, start: u32, duration: u32) -> Self {
        Self {
            name: name.into(),
            start,
            duration,
            deliverables: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_deliverables(mut self, deliverables: Vec<Deliverable>) -> Self {
        self.deliverables = deliverables;
        self
    }

    /// Last time unit covered by the task, clamped to `u32::MAX`
    #[must_use]
    pub fn end(&self) -> u32 {
        match self.duration {
            0 => self.start.saturating_sub(1),
            duration => self.start.saturating_add(duration - 1),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.start, self.end())
    }
}

/// Work package: an ordered breakdown into tasks and nested packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub breakdown: Vec<Activity>,
}

impl Package {
    pub fn new(name: impl Into<String>, breakdown: Vec<Activity>) -> Self {
        Self {
            name: name.into(),
            breakdown,
        }
    }

    #[must_use]
    pub fn is_package(&self) -> bool {
        !self.breakdown.is_empty()
    }

    /// Hull of the children's bounds; `None` when nothing below carries dates
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        hull(&self.breakdown)
    }

    /// Deliverables of every task below this package, in declaration order
    #[must_use]
    pub fn deliverables(&self) -> Vec<&Deliverable> {
        self.breakdown
            .iter()
            .flat_map(|activity| activity.deliverables())
            .collect()
    }
}

/// Either kind of node found in a breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Task(Task),
    Package(Package),
}

impl Activity {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Activity::Task(task) => &task.name,
            Activity::Package(package) => &package.name,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Activity::Task(task) => Some(task.bounds()),
            Activity::Package(package) => package.bounds(),
        }
    }

    #[must_use]
    pub fn start(&self) -> Option<u32> {
        self.bounds().map(|b| b.start)
    }

    #[must_use]
    pub fn end(&self) -> Option<u32> {
        self.bounds().map(|b| b.end)
    }

    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.bounds().map(|b| b.duration())
    }

    #[must_use]
    pub fn deliverables(&self) -> Vec<&Deliverable> {
        match self {
            Activity::Task(task) => task.deliverables.iter().collect(),
            Activity::Package(package) => package.deliverables(),
        }
    }

    /// True for a work package with at least one child
    #[must_use]
    pub fn is_package(&self) -> bool {
        match self {
            Activity::Task(_) => false,
            Activity::Package(package) => package.is_package(),
        }
    }
}

impl From<Task> for Activity {
    fn from(task: Task) -> Self {
        Activity::Task(task)
    }
}

impl From<Package> for Activity {
    fn from(package: Package) -> Self {
        Activity::Package(package)
    }
}

/// Root of the breakdown, anchored to a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub breakdown: Vec<Activity>,
    pub origin: NaiveDate,
    pub milestones: Vec<Milestone>,
}

impl Project {
    pub fn new(name: impl Into<String>, origin: NaiveDate, breakdown: Vec<Activity>) -> Self {
        Self {
            name: name.into(),
            breakdown,
            origin,
            milestones: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        hull(&self.breakdown)
    }

    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.bounds().map(|b| b.duration())
    }

    /// Number of time units shown on the time axis, which always starts at 1
    #[must_use]
    pub fn horizon(&self) -> Option<u32> {
        self.bounds().map(|b| b.end).filter(|end| *end > 0)
    }

    /// Calendar span of the time axis: origin up to origin + horizon months
    #[must_use]
    pub fn period(&self) -> Option<Period> {
        let horizon = self.horizon()?;
        let end = self.origin.checked_add_months(Months::new(horizon))?;
        Some(Period::new(self.origin, end))
    }

    #[must_use]
    pub fn deliverables(&self) -> Vec<&Deliverable> {
        self.breakdown
            .iter()
            .flat_map(|activity| activity.deliverables())
            .collect()
    }
}

fn hull(breakdown: &[Activity]) -> Option<Bounds> {
    breakdown
        .iter()
        .filter_map(Activity::bounds)
        .reduce(|acc, bounds| acc.union(&bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_task_end_is_inclusive() {
        let task = Task::new("Design", 3, 5);
        assert_eq!(task.end(), 7);
        assert_eq!(task.bounds().duration(), 5);
    }

    #[test]
    fn test_package_bounds_cover_children() {
        let package = Package::new(
            "WP",
            vec![
                Task::new("A", 4, 2).into(),
                Package::new("Nested", vec![Task::new("B", 2, 10).into()]).into(),
            ],
        );
        assert_eq!(package.bounds(), Some(Bounds::new(2, 11)));
    }

    #[test]
    fn test_empty_package_has_no_bounds() {
        let package = Package::new("Empty", vec![]);
        assert!(!package.is_package());
        assert_eq!(package.bounds(), None);

        let activity = Activity::from(package);
        assert!(!activity.is_package());
        assert_eq!(activity.start(), None);
        assert_eq!(activity.duration(), None);
    }

    #[test]
    fn test_empty_children_are_ignored_in_hull() {
        let package = Package::new(
            "WP",
            vec![Package::new("Empty", vec![]).into(), Task::new("A", 5, 1).into()],
        );
        assert_eq!(package.bounds(), Some(Bounds::new(5, 5)));
    }

    #[test]
    fn test_deliverables_are_flattened() {
        let project = Project::new(
            "P",
            origin(),
            vec![
                Task::new("A", 1, 3)
                    .with_deliverables(vec![Deliverable::new("D1", "report", 3)])
                    .into(),
                Package::new(
                    "WP",
                    vec![Task::new("B", 4, 3)
                        .with_deliverables(vec![Deliverable::new("D2", "software", 6)])
                        .into()],
                )
                .into(),
            ],
        );
        let names: Vec<_> = project.deliverables().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["D1", "D2"]);
    }

    #[test]
    fn test_overlap_and_contiguity() {
        let a = Bounds::new(1, 5);
        assert!(a.overlaps(&Bounds::new(5, 8)));
        assert!(a.overlaps(&Bounds::new(2, 3)));
        assert!(!a.overlaps(&Bounds::new(6, 8)));
        assert!(a.is_contiguous_with(&Bounds::new(6, 8)));
        assert!(Bounds::new(6, 8).is_contiguous_with(&a));
        assert!(!a.is_contiguous_with(&Bounds::new(10, 14)));
    }

    #[test]
    fn test_bounds_arithmetic_saturates_at_the_last_time_unit() {
        let task = Task::new("Late", u32::MAX, 1);
        assert_eq!(task.end(), u32::MAX);
        assert_eq!(task.bounds().duration(), 1);
        assert_eq!(Task::new("Long", u32::MAX - 1, 5).end(), u32::MAX);

        let last = Bounds::new(u32::MAX - 1, u32::MAX);
        assert!(!last.is_contiguous_with(&Bounds::new(1, 1)));
        assert!(Bounds::new(1, u32::MAX - 2).is_contiguous_with(&last));
        assert_eq!(Bounds::new(0, u32::MAX).duration(), u32::MAX);
    }

    #[test]
    fn test_package_near_the_last_time_unit() {
        let package = Package::new(
            "WP",
            vec![
                Task::new("A", u32::MAX - 1, 2).into(),
                Task::new("B", 1, 1).into(),
            ],
        );
        assert_eq!(package.bounds(), Some(Bounds::new(1, u32::MAX)));
    }

    #[test]
    fn test_project_period_spans_horizon() {
        let project = Project::new("P", origin(), vec![Task::new("A", 1, 14).into()]);
        let period = project.period().unwrap();
        assert_eq!(period.start, origin());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_empty_project_has_no_period() {
        let project = Project::new("P", origin(), vec![]);
        assert_eq!(project.horizon(), None);
        assert!(project.period().is_none());
    }
}
