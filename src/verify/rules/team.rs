//! Rules relating the team to the work plan
//!
//! The activity rules only apply when the blueprint has a team. They compare
//! the path of each task and work package with the paths held by roles.

use super::Rule;
use crate::verify::report::{Code, Issue, Report};
use crate::wbs::{Package, Path, Person, Task, Team, Visitor};

const CHECK_ROLES: &str = "Please check the roles set up in the team.";

#[derive(Debug, Default)]
pub struct ActivityWithoutContributor<'a> {
    team: Option<&'a Team>,
    report: Report,
}

impl<'a> ActivityWithoutContributor<'a> {
    pub fn new(team: Option<&'a Team>) -> Self {
        Self {
            team,
            report: Report::new(),
        }
    }

    fn check(&mut self, name: &str, identifier: String, path: &Path) {
        let Some(team) = self.team else {
            return;
        };
        if !team.contributes_to(path) {
            self.report.error(
                Code::NoContributor,
                format!("No one contributes to activity '{}'.", name),
                CHECK_ROLES,
                identifier,
            );
        }
    }
}

impl<'a> Visitor<'a> for ActivityWithoutContributor<'a> {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        self.check(&package.name, path.as_identifier("WP"), path);
    }

    fn on_task(&mut self, task: &'a Task, path: &Path) {
        self.check(&task.name, path.as_identifier("T"), path);
    }
}

impl<'a> Rule<'a> for ActivityWithoutContributor<'a> {
    fn name(&self) -> &'static str {
        "activity-without-contributor"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct ActivityWithoutLeader<'a> {
    team: Option<&'a Team>,
    report: Report,
}

impl<'a> ActivityWithoutLeader<'a> {
    pub fn new(team: Option<&'a Team>) -> Self {
        Self {
            team,
            report: Report::new(),
        }
    }

    fn check(&mut self, name: &str, identifier: String, path: &Path) {
        let Some(team) = self.team else {
            return;
        };
        if !team.leads(path) {
            self.report.error(
                Code::NoLeader,
                format!("No one leads activity '{}'.", name),
                CHECK_ROLES,
                identifier,
            );
        }
    }
}

impl<'a> Visitor<'a> for ActivityWithoutLeader<'a> {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        self.check(&package.name, path.as_identifier("WP"), path);
    }

    fn on_task(&mut self, task: &'a Task, path: &Path) {
        self.check(&task.name, path.as_identifier("T"), path);
    }
}

impl<'a> Rule<'a> for ActivityWithoutLeader<'a> {
    fn name(&self) -> &'static str {
        "activity-without-leader"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct DuplicateLeader<'a> {
    team: Option<&'a Team>,
    report: Report,
}

impl<'a> DuplicateLeader<'a> {
    pub fn new(team: Option<&'a Team>) -> Self {
        Self {
            team,
            report: Report::new(),
        }
    }

    fn check(&mut self, name: &str, identifier: String, path: &Path) {
        let Some(team) = self.team else {
            return;
        };
        let leaders = team.leaders_of(path);
        if leaders.len() > 1 {
            let names: Vec<String> = leaders.iter().map(|person| person.name()).collect();
            self.report.error(
                Code::DuplicateLeader,
                format!("Activity '{}' has multiple leaders: {}.", name, names.join(", ")),
                "Please check their roles.",
                identifier,
            );
        }
    }
}

impl<'a> Visitor<'a> for DuplicateLeader<'a> {
    fn on_package(&mut self, package: &'a Package, path: &Path) {
        self.check(&package.name, path.as_identifier("WP"), path);
    }

    fn on_task(&mut self, task: &'a Task, path: &Path) {
        self.check(&task.name, path.as_identifier("T"), path);
    }
}

impl<'a> Rule<'a> for DuplicateLeader<'a> {
    fn name(&self) -> &'static str {
        "duplicate-leader"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

/// Applies to the root team and to every nested team
#[derive(Debug, Default)]
pub struct EmptyTeam {
    report: Report,
}

impl<'a> Visitor<'a> for EmptyTeam {
    fn on_team(&mut self, team: &'a Team, _path: &Path) {
        if team.members.is_empty() {
            self.report.error(
                Code::EmptyTeam,
                format!("Team '{}' has no member.", team.name),
                "Have we forgotten some collaborators?",
                format!("Team {}", team.name),
            );
        }
    }
}

impl<'a> Rule<'a> for EmptyTeam {
    fn name(&self) -> &'static str {
        "empty-team"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[derive(Debug, Default)]
pub struct IdlePerson {
    report: Report,
}

impl<'a> Visitor<'a> for IdlePerson {
    fn on_person(&mut self, person: &'a Person, _path: &Path) {
        if person.roles.is_empty() {
            let name = person.name();
            self.report.warn(
                Code::NoRole,
                format!("Partner '{}' has no assigned role.", name),
                "Please check their responsibilities.",
                name,
            );
        }
    }
}

impl<'a> Rule<'a> for IdlePerson {
    fn name(&self) -> &'static str {
        "idle-person"
    }

    fn take_issues(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.report).issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::report::Level;
    use crate::wbs::{walk, Blueprint, Project, Role};
    use chrono::NaiveDate;

    fn path(indices: &[usize]) -> Path {
        Path::from_indices(indices.to_vec())
    }

    fn blueprint(team: Option<Team>) -> Blueprint {
        let project = Project::new(
            "Demo",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![
                Task::new("Setup", 1, 2).into(),
                Package::new(
                    "Build",
                    vec![Task::new("Code", 3, 4).into(), Task::new("Test", 6, 2).into()],
                )
                .into(),
            ],
        );
        let blueprint = Blueprint::new(project);
        match team {
            Some(team) => blueprint.with_team(team),
            None => blueprint,
        }
    }

    fn check<'p, R: Rule<'p>>(mut rule: R, blueprint: &'p Blueprint) -> Vec<Issue> {
        walk(blueprint, &mut rule);
        rule.take_issues()
    }

    #[test]
    fn test_team_rules_skip_without_team() {
        let blueprint = blueprint(None);
        assert!(check(ActivityWithoutContributor::new(blueprint.team()), &blueprint).is_empty());
        assert!(check(ActivityWithoutLeader::new(blueprint.team()), &blueprint).is_empty());
        assert!(check(DuplicateLeader::new(blueprint.team()), &blueprint).is_empty());
    }

    #[test]
    fn test_contribution_on_package_covers_its_tasks() {
        let team = Team::new(
            "Crew",
            vec![Person::new("Ada", "Lovelace")
                .with_roles(vec![Role::contribute_to(path(&[2]))])
                .into()],
        );
        let blueprint = blueprint(Some(team));
        let issues = check(ActivityWithoutContributor::new(blueprint.team()), &blueprint);
        let locations: Vec<_> = issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["T 1"]);
    }

    #[test]
    fn test_missing_leaders_on_tasks_and_packages() {
        let team = Team::new(
            "Crew",
            vec![Person::new("Ada", "Lovelace")
                .with_roles(vec![Role::lead(path(&[1])), Role::lead(path(&[2, 1]))])
                .into()],
        );
        let blueprint = blueprint(Some(team));
        let issues = check(ActivityWithoutLeader::new(blueprint.team()), &blueprint);
        let locations: Vec<_> = issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["WP 2", "T 2.2"]);
    }

    #[test]
    fn test_duplicate_leader_lists_names() {
        let team = Team::new(
            "Crew",
            vec![
                Person::new("Ada", "Lovelace")
                    .with_roles(vec![Role::lead(path(&[1]))])
                    .into(),
                Person::new("Alan", "Turing")
                    .with_roles(vec![Role::lead(path(&[1]))])
                    .into(),
            ],
        );
        let blueprint = blueprint(Some(team));
        let issues = check(DuplicateLeader::new(blueprint.team()), &blueprint);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "T 1");
        assert!(issues[0].description.contains("Ada Lovelace, Alan Turing"));
    }

    #[test]
    fn test_empty_root_team() {
        let blueprint = blueprint(Some(Team::new("Nobody", vec![])));
        let issues = check(EmptyTeam::default(), &blueprint);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, Code::EmptyTeam);
        assert_eq!(issues[0].level, Level::Error);
        assert_eq!(issues[0].location, "Team Nobody");
    }

    #[test]
    fn test_empty_nested_team() {
        let team = Team::new("Crew", vec![Team::new("Ghosts", vec![]).into()]);
        let blueprint = blueprint(Some(team));
        let issues = check(EmptyTeam::default(), &blueprint);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "Team Ghosts");
    }

    #[test]
    fn test_idle_person() {
        let team = Team::new("Crew", vec![Person::new("Idle", "Hands").into()]);
        let blueprint = blueprint(Some(team));
        let issues = check(IdlePerson::default(), &blueprint);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, Code::NoRole);
        assert_eq!(issues[0].location, "Idle Hands");
    }
}
