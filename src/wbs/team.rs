//! People and teams, and the activities they lead or contribute to
//!
//! Teams nest. Responsibilities are expressed as roles pointing at a [`Path`] of
//! the work breakdown.

use super::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Leader,
    Contributor,
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleKind::Leader => write!(f, "leader"),
            RoleKind::Contributor => write!(f, "contributor"),
        }
    }
}

/// Responsibility of a person over one activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub kind: RoleKind,
    pub target: Path,
}

impl Role {
    #[must_use]
    pub fn lead(target: Path) -> Self {
        Self {
            kind: RoleKind::Leader,
            target,
        }
    }

    #[must_use]
    pub fn contribute_to(target: Path) -> Self {
        Self {
            kind: RoleKind::Contributor,
            target,
        }
    }

    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.kind == RoleKind::Leader
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Any role on the activity itself or on one of its ancestors counts
    #[must_use]
    pub fn contributes_to(&self, activity: &Path) -> bool {
        self.roles.iter().any(|role| role.target.includes(activity))
    }

    /// Leadership only holds on the exact activity
    #[must_use]
    pub fn leads(&self, activity: &Path) -> bool {
        self.roles
            .iter()
            .any(|role| role.is_leader() && role.target == *activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub members: Vec<Partner>,
}

impl Team {
    pub fn new(name: impl Into<String>, members: Vec<Partner>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    #[must_use]
    pub fn contributes_to(&self, activity: &Path) -> bool {
        self.members
            .iter()
            .any(|member| member.contributes_to(activity))
    }

    #[must_use]
    pub fn leads(&self, activity: &Path) -> bool {
        self.members.iter().any(|member| member.leads(activity))
    }

    /// Every person, at any nesting depth, who leads the activity
    #[must_use]
    pub fn leaders_of(&self, activity: &Path) -> Vec<&Person> {
        self.members
            .iter()
            .flat_map(|member| member.leaders_of(activity))
            .collect()
    }

    /// Every person, at any nesting depth, who contributes to the activity
    #[must_use]
    pub fn contributors_to(&self, activity: &Path) -> Vec<&Person> {
        self.members
            .iter()
            .flat_map(|member| member.contributors_to(activity))
            .collect()
    }
}

/// Member of a team: a person or a nested team
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partner {
    Team(Team),
    Person(Person),
}

impl Partner {
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Partner::Team(team) => team.name.clone(),
            Partner::Person(person) => person.name(),
        }
    }

    #[must_use]
    pub fn contributes_to(&self, activity: &Path) -> bool {
        match self {
            Partner::Team(team) => team.contributes_to(activity),
            Partner::Person(person) => person.contributes_to(activity),
        }
    }

    #[must_use]
    pub fn leads(&self, activity: &Path) -> bool {
        match self {
            Partner::Team(team) => team.leads(activity),
            Partner::Person(person) => person.leads(activity),
        }
    }

    #[must_use]
    pub fn leaders_of(&self, activity: &Path) -> Vec<&Person> {
        match self {
            Partner::Team(team) => team.leaders_of(activity),
            Partner::Person(person) if person.leads(activity) => vec![person],
            Partner::Person(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn contributors_to(&self, activity: &Path) -> Vec<&Person> {
        match self {
            Partner::Team(team) => team.contributors_to(activity),
            Partner::Person(person) if person.contributes_to(activity) => vec![person],
            Partner::Person(_) => Vec::new(),
        }
    }
}

impl From<Person> for Partner {
    fn from(person: Person) -> Self {
        Partner::Person(person)
    }
}

impl From<Team> for Partner {
    fn from(team: Team) -> Self {
        Partner::Team(team)
    }
}
