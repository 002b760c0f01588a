use super::activity::Project;
use super::team::Team;

/// A project together with the team that carries it out, if known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub project: Project,
    pub team: Option<Team>,
}

impl Blueprint {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            project,
            team: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    #[must_use]
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }
}
