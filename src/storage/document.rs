//! Serialized shape of plan and team documents
//!
//! These types mirror the files users write. They are decoded with serde and
//! then converted, with validation, into the model of [`crate::wbs`].

use chrono::NaiveDate;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, PathError};
use crate::wbs::{
    Activity, Blueprint, Deliverable, Milestone, Package, Partner, Path, Person, Project, Role,
    Task, Team,
};

/// A plan file: the project and, optionally, its team
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PlanDocument {
    pub project: ProjectDocument,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamDocument>,
}

/// A team file, used with `--team`
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TeamFileDocument {
    #[serde(default)]
    pub team: Option<TeamDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ProjectDocument {
    pub name: String,

    /// First day of the project, `YYYY-MM-DD`. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<NaiveDate>,

    #[serde(default)]
    pub milestones: Vec<MilestoneDocument>,

    pub breakdown: Vec<ActivityDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct MilestoneDocument {
    pub name: String,
    pub date: u32,
}

/// A work package (has a `breakdown`) or a task (has `start` and `duration`)
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum ActivityDocument {
    Package(PackageDocument),
    Task(TaskDocument),
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PackageDocument {
    pub name: String,
    pub breakdown: Vec<ActivityDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TaskDocument {
    pub name: String,

    /// 1-based month in which the task starts
    pub start: u32,

    /// Number of months, at least 1
    pub duration: u32,

    #[serde(default)]
    pub deliverables: Vec<DeliverableDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DeliverableDocument {
    pub name: String,
    pub kind: String,
    pub due: u32,
}

/// A team (has `members`) or a person
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum PartnerDocument {
    Team(TeamDocument),
    Person(PersonDocument),
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TeamDocument {
    pub name: String,
    pub members: Vec<PartnerDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PersonDocument {
    pub firstname: String,
    pub lastname: String,

    /// Activities led, such as `WP 1` or `T 2.3`
    #[serde(default)]
    pub leads: Vec<String>,

    #[serde(default)]
    pub contributes: Vec<String>,
}

impl PlanDocument {
    pub fn into_blueprint(self) -> Result<Blueprint, LoadError> {
        let blueprint = Blueprint::new(self.project.into_project()?);
        match self.team {
            Some(team) => Ok(blueprint.with_team(team.into_team()?)),
            None => Ok(blueprint),
        }
    }
}

impl ProjectDocument {
    pub fn into_project(self) -> Result<Project, LoadError> {
        let origin = self
            .origin
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let breakdown = into_activities(self.breakdown)?;
        let milestones = self
            .milestones
            .into_iter()
            .map(|m| Milestone::new(m.name, m.date))
            .collect();
        Ok(Project::new(self.name, origin, breakdown).with_milestones(milestones))
    }
}

fn into_activities(documents: Vec<ActivityDocument>) -> Result<Vec<Activity>, LoadError> {
    documents
        .into_iter()
        .map(|document| -> Result<Activity, LoadError> {
            match document {
                ActivityDocument::Package(package) => {
                    let breakdown = into_activities(package.breakdown)?;
                    Ok(Package::new(package.name, breakdown).into())
                }
                ActivityDocument::Task(task) => Ok(task.into_task()?.into()),
            }
        })
        .collect()
}

impl TaskDocument {
    pub fn into_task(self) -> Result<Task, LoadError> {
        if self.start < 1 {
            return Err(LoadError::InvalidStart {
                task: self.name,
                start: self.start,
            });
        }
        if self.duration < 1 {
            return Err(LoadError::InvalidDuration { task: self.name });
        }
        if self.start.checked_add(self.duration - 1).is_none() {
            return Err(LoadError::TaskOutOfRange {
                task: self.name,
                start: self.start,
                duration: self.duration,
            });
        }
        let deliverables = self
            .deliverables
            .into_iter()
            .map(|d| Deliverable::new(d.name, d.kind, d.due))
            .collect();
        Ok(Task::new(self.name, self.start, self.duration).with_deliverables(deliverables))
    }
}

impl TeamDocument {
    pub fn into_team(self) -> Result<Team, LoadError> {
        let members = self
            .members
            .into_iter()
            .map(|member| match member {
                PartnerDocument::Team(team) => team.into_team().map(Partner::from),
                PartnerDocument::Person(person) => person.into_person().map(Partner::from),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Team::new(self.name, members))
    }
}

impl PersonDocument {
    pub fn into_person(self) -> Result<Person, LoadError> {
        let name = format!("{} {}", self.firstname, self.lastname);
        let mut roles = Vec::with_capacity(self.leads.len() + self.contributes.len());
        for reference in &self.leads {
            roles.push(Role::lead(parse_reference(reference, &name)?));
        }
        for reference in &self.contributes {
            roles.push(Role::contribute_to(parse_reference(reference, &name)?));
        }
        Ok(Person::new(self.firstname, self.lastname).with_roles(roles))
    }
}

/// Accepts `T 1.2`, `WP3`, `A 2` or a bare `1.2`
fn parse_reference(reference: &str, person: &str) -> Result<Path, LoadError> {
    let re = Regex::new(r"^\s*(T|WP|A)?\s*\d+(\.\d+)*\s*$").map_err(PathError::Pattern)?;
    if !re.is_match(reference) {
        return Err(LoadError::InvalidReference {
            reference: reference.to_string(),
            person: person.to_string(),
        });
    }
    Ok(Path::from_text(reference)?)
}
