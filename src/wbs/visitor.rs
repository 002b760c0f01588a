//! Depth-first traversal of blueprints
//!
//! A [`Visitor`] overrides the hooks it cares about; [`Traversal`] owns the
//! [`Path`] and calls each hook before descending into the children, in their
//! declared order. The path is extended with the 1-based index of a child
//! before the child is visited and shortened right after.

use super::activity::{Activity, Deliverable, Milestone, Package, Project, Task};
use super::blueprint::Blueprint;
use super::path::Path;
use super::team::{Partner, Person, Role, Team};

/// Hooks called during a traversal. All of them do nothing by default.
///
/// The path passed along is the location of the node being visited. The
/// project and the root team are visited at the empty path.
#[allow(unused_variables)]
pub trait Visitor<'a> {
    fn on_project(&mut self, project: &'a Project, path: &Path) {}

    fn on_package(&mut self, package: &'a Package, path: &Path) {}

    fn on_task(&mut self, task: &'a Task, path: &Path) {}

    fn on_deliverable(&mut self, deliverable: &'a Deliverable, path: &Path) {}

    fn on_milestone(&mut self, milestone: &'a Milestone, path: &Path) {}

    fn on_team(&mut self, team: &'a Team, path: &Path) {}

    fn on_person(&mut self, person: &'a Person, path: &Path) {}

    fn on_role(&mut self, role: &'a Role, path: &Path) {}
}

/// Pre-order walker owning the path shared by every hook
#[derive(Debug, Default)]
pub struct Traversal {
    path: Path,
}

impl Traversal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Visit the project, then the team if there is one
    pub fn visit_blueprint<'a, V>(&mut self, blueprint: &'a Blueprint, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        self.visit_project(&blueprint.project, visitor);
        if let Some(team) = &blueprint.team {
            self.visit_team(team, visitor);
        }
    }

    /// Breakdown first, then milestones, each list indexed from 1
    pub fn visit_project<'a, V>(&mut self, project: &'a Project, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.on_project(project, &self.path);
        self.each(&project.breakdown, visitor, |walker, activity, visitor| {
            walker.visit_activity(activity, visitor)
        });
        self.each(&project.milestones, visitor, |walker, milestone, visitor| {
            visitor.on_milestone(milestone, &walker.path)
        });
    }

    pub fn visit_activity<'a, V>(&mut self, activity: &'a Activity, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        match activity {
            Activity::Task(task) => self.visit_task(task, visitor),
            Activity::Package(package) => self.visit_package(package, visitor),
        }
    }

    pub fn visit_package<'a, V>(&mut self, package: &'a Package, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.on_package(package, &self.path);
        self.each(&package.breakdown, visitor, |walker, activity, visitor| {
            walker.visit_activity(activity, visitor)
        });
    }

    pub fn visit_task<'a, V>(&mut self, task: &'a Task, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.on_task(task, &self.path);
        self.each(&task.deliverables, visitor, |walker, deliverable, visitor| {
            visitor.on_deliverable(deliverable, &walker.path)
        });
    }

    pub fn visit_team<'a, V>(&mut self, team: &'a Team, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.on_team(team, &self.path);
        self.each(&team.members, visitor, |walker, member, visitor| match member {
            Partner::Team(nested) => walker.visit_team(nested, visitor),
            Partner::Person(person) => walker.visit_person(person, visitor),
        });
    }

    pub fn visit_person<'a, V>(&mut self, person: &'a Person, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.on_person(person, &self.path);
        self.each(&person.roles, visitor, |walker, role, visitor| {
            visitor.on_role(role, &walker.path)
        });
    }

    fn each<'a, T, V, F>(&mut self, items: &'a [T], visitor: &mut V, mut visit: F)
    where
        V: Visitor<'a> + ?Sized,
        F: FnMut(&mut Self, &'a T, &mut V),
    {
        for (index, item) in items.iter().enumerate() {
            self.path.enter(index + 1);
            visit(self, item, visitor);
            self.path.exit();
        }
    }
}

/// Walk a whole blueprint with a fresh path
pub fn walk<'a, V>(blueprint: &'a Blueprint, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    Traversal::new().visit_blueprint(blueprint, visitor);
}

/// Walk a project alone, ignoring any team
pub fn walk_project<'a, V>(project: &'a Project, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    Traversal::new().visit_project(project, visitor);
}
