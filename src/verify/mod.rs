//! Verification engine
//!
//! [`Guard::scrutinize`] runs every rule over the blueprint, one walk per rule,
//! and gathers what they find into a single [`Report`]. Rules run in a fixed
//! order so that reports are reproducible.

pub mod report;
pub mod rules;

pub use report::{Code, Issue, Level, Report};

use crate::wbs::{walk, Blueprint};
use rules::{
    ActivityWithoutContributor, ActivityWithoutLeader, DeliverableOutsideTask,
    DiscontinuousWorkPackage, DuplicateLeader, EmptyProject, EmptyTeam, EmptyWorkPackage,
    IdlePerson, MilestoneOutsideProject, Rule, SingleActivityWorkPackage, TaskWithoutDeliverable,
};
use tracing::debug;

/// Runs the rule catalogue and filters out ignored codes
#[derive(Debug, Clone, Default)]
pub struct Guard {
    ignored: Vec<Code>,
}

impl Guard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave issues with these codes out of every report
    #[must_use]
    pub fn ignoring(mut self, codes: Vec<Code>) -> Self {
        self.ignored = codes;
        self
    }

    /// Check the blueprint. This never fails: every finding becomes an issue.
    pub fn scrutinize(&self, blueprint: &Blueprint) -> Report {
        let mut report = Report::new();
        for mut rule in rules_for(blueprint) {
            walk(blueprint, rule.as_mut());
            let issues = rule.take_issues();
            debug!("Rule {} raised {} issue(s)", rule.name(), issues.len());
            report.extend(issues);
        }
        if !self.ignored.is_empty() {
            let before = report.len();
            report.discard_codes(&self.ignored);
            debug!("Ignored {} issue(s)", before - report.len());
        }
        report
    }
}

fn rules_for<'a>(blueprint: &'a Blueprint) -> Vec<Box<dyn Rule<'a> + 'a>> {
    let team = blueprint.team();
    vec![
        Box::new(EmptyProject::default()),
        Box::new(EmptyWorkPackage::default()),
        Box::new(SingleActivityWorkPackage::default()),
        Box::new(MilestoneOutsideProject::default()),
        Box::new(TaskWithoutDeliverable::default()),
        Box::new(DeliverableOutsideTask::default()),
        Box::new(DiscontinuousWorkPackage::default()),
        Box::new(ActivityWithoutContributor::new(team)),
        Box::new(ActivityWithoutLeader::new(team)),
        Box::new(DuplicateLeader::new(team)),
        Box::new(EmptyTeam::default()),
        Box::new(IdlePerson::default()),
    ]
}

/// Shorthand for a guard with no ignored codes
pub fn scrutinize(blueprint: &Blueprint) -> Report {
    Guard::new().scrutinize(blueprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wbs::{Deliverable, Milestone, Package, Path, Person, Project, Role, Task, Team};
    use chrono::NaiveDate;

    fn origin() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn documented(name: &str, start: u32, duration: u32) -> Task {
        Task::new(name, start, duration)
            .with_deliverables(vec![Deliverable::new("Report", "document", start)])
    }

    #[test]
    fn test_task_with_deliverable_is_clean() {
        let project = Project::new(
            "Demo",
            origin(),
            vec![Task::new("T1", 1, 5)
                .with_deliverables(vec![Deliverable::new("D1", "document", 3)])
                .into()],
        );
        let report = scrutinize(&Blueprint::new(project));
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_empty_project_with_milestone() {
        let project =
            Project::new("Demo", origin(), vec![]).with_milestones(vec![Milestone::new("M", 10)]);
        let report = scrutinize(&Blueprint::new(project));
        assert_eq!(report.codes(), vec![Code::EmptyProject]);
    }

    #[test]
    fn test_two_leaders_on_same_task() {
        let project = Project::new("Demo", origin(), vec![documented("T1", 1, 5).into()]);
        let team = Team::new(
            "Crew",
            vec![
                Person::new("Ada", "Lovelace")
                    .with_roles(vec![Role::lead(Path::from_indices(vec![1]))])
                    .into(),
                Person::new("Alan", "Turing")
                    .with_roles(vec![Role::lead(Path::from_indices(vec![1]))])
                    .into(),
            ],
        );
        let report = scrutinize(&Blueprint::new(project).with_team(team));
        assert_eq!(report.codes(), vec![Code::DuplicateLeader]);
    }

    #[test]
    fn test_gap_in_work_package() {
        let project = Project::new(
            "Demo",
            origin(),
            vec![Package::new(
                "WP",
                vec![documented("First", 1, 5).into(), documented("Second", 10, 5).into()],
            )
            .into()],
        );
        let report = scrutinize(&Blueprint::new(project));
        assert_eq!(report.codes(), vec![Code::DiscontinuityInWorkPackage]);
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(report.issues()[0].location, "WP 1");
    }

    #[test]
    fn test_scrutinize_is_idempotent() {
        let project = Project::new(
            "Demo",
            origin(),
            vec![
                Task::new("Lonely", 1, 2).into(),
                Package::new("Empty", vec![]).into(),
            ],
        )
        .with_milestones(vec![Milestone::new("Late", 40)]);
        let blueprint = Blueprint::new(project).with_team(Team::new("Nobody", vec![]));
        let guard = Guard::new();
        assert_eq!(guard.scrutinize(&blueprint), guard.scrutinize(&blueprint));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let project = Project::new(
            "Demo",
            origin(),
            vec![Package::new("Single", vec![Task::new("Only", 1, 2).into()]).into()],
        )
        .with_milestones(vec![Milestone::new("Late", 9)]);
        let team = Team::new("Crew", vec![Person::new("Idle", "Hands").into()]);
        let report = scrutinize(&Blueprint::new(project).with_team(team));
        assert_eq!(
            report.codes(),
            vec![
                Code::SingleTaskWorkPackage,
                Code::MilestoneAfterProjectEnd,
                Code::TaskWithoutDeliverable,
                Code::NoContributor,
                Code::NoContributor,
                Code::NoLeader,
                Code::NoLeader,
                Code::NoRole,
            ]
        );
    }

    #[test]
    fn test_ignored_codes_are_dropped() {
        let project = Project::new("Demo", origin(), vec![Task::new("T1", 1, 2).into()]);
        let team = Team::new("Crew", vec![Person::new("Idle", "Hands").into()]);
        let blueprint = Blueprint::new(project).with_team(team);
        let report = Guard::new()
            .ignoring(vec![Code::NoRole, Code::TaskWithoutDeliverable])
            .scrutinize(&blueprint);
        assert_eq!(report.codes(), vec![Code::NoContributor, Code::NoLeader]);
    }
}
