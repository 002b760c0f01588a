use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of an issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Warning,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Warning => write!(f, "WARNING"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// Stable, machine-readable identifier of the rule that raised an issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    // Work plan
    EmptyProject,
    EmptyWorkPackage,
    SingleTaskWorkPackage,
    TaskWithoutDeliverable,
    WrongDeliverableDate,
    MilestoneAfterProjectEnd,
    MilestoneBeforeProjectStart,
    DiscontinuityInWorkPackage,

    // Team
    NoContributor,
    NoLeader,
    DuplicateLeader,
    EmptyTeam,
    NoRole,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::EmptyProject => "EMPTY_PROJECT",
            Code::EmptyWorkPackage => "EMPTY_WORK_PACKAGE",
            Code::SingleTaskWorkPackage => "SINGLE_TASK_WORK_PACKAGE",
            Code::TaskWithoutDeliverable => "TASK_WITHOUT_DELIVERABLE",
            Code::WrongDeliverableDate => "WRONG_DELIVERABLE_DATE",
            Code::MilestoneAfterProjectEnd => "MILESTONE_AFTER_PROJECT_END",
            Code::MilestoneBeforeProjectStart => "MILESTONE_BEFORE_PROJECT_START",
            Code::DiscontinuityInWorkPackage => "DISCONTINUITY_IN_WORK_PACKAGE",
            Code::NoContributor => "NO_CONTRIBUTOR",
            Code::NoLeader => "NO_LEADER",
            Code::DuplicateLeader => "DUPLICATE_LEADER",
            Code::EmptyTeam => "EMPTY_TEAM",
            Code::NoRole => "NO_ROLE",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Code {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "EMPTY_PROJECT" => Ok(Code::EmptyProject),
            "EMPTY_WORK_PACKAGE" => Ok(Code::EmptyWorkPackage),
            "SINGLE_TASK_WORK_PACKAGE" => Ok(Code::SingleTaskWorkPackage),
            "TASK_WITHOUT_DELIVERABLE" => Ok(Code::TaskWithoutDeliverable),
            "WRONG_DELIVERABLE_DATE" => Ok(Code::WrongDeliverableDate),
            "MILESTONE_AFTER_PROJECT_END" => Ok(Code::MilestoneAfterProjectEnd),
            "MILESTONE_BEFORE_PROJECT_START" => Ok(Code::MilestoneBeforeProjectStart),
            "DISCONTINUITY_IN_WORK_PACKAGE" => Ok(Code::DiscontinuityInWorkPackage),
            "NO_CONTRIBUTOR" => Ok(Code::NoContributor),
            "NO_LEADER" => Ok(Code::NoLeader),
            "DUPLICATE_LEADER" => Ok(Code::DuplicateLeader),
            "EMPTY_TEAM" => Ok(Code::EmptyTeam),
            "NO_ROLE" => Ok(Code::NoRole),
            _ => Err(format!("Unknown issue code: {}", s)),
        }
    }
}

/// One diagnostic raised by a rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Issue {
    pub level: Level,
    pub code: Code,
    pub description: String,
    pub advice: String,
    pub location: String,
}

impl Issue {
    pub fn warning(
        code: Code,
        description: impl Into<String>,
        advice: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Warning,
            code,
            description: description.into(),
            advice: advice.into(),
            location: location.into(),
        }
    }

    pub fn error(
        code: Code,
        description: impl Into<String>,
        advice: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Error,
            code,
            description: description.into(),
            advice: advice.into(),
            location: location.into(),
        }
    }
}

/// Ordered collection of issues
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn warn(
        &mut self,
        code: Code,
        description: impl Into<String>,
        advice: impl Into<String>,
        location: impl Into<String>,
    ) {
        self.push(Issue::warning(code, description, advice, location));
    }

    pub fn error(
        &mut self,
        code: Code,
        description: impl Into<String>,
        advice: impl Into<String>,
        location: impl Into<String>,
    ) {
        self.push(Issue::error(code, description, advice, location));
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn warnings(&self) -> Vec<&Issue> {
        self.by_level(Level::Warning)
    }

    pub fn errors(&self) -> Vec<&Issue> {
        self.by_level(Level::Error)
    }

    pub fn codes(&self) -> Vec<Code> {
        self.issues.iter().map(|issue| issue.code).collect()
    }

    pub fn count(&self, code: Code) -> usize {
        self.issues.iter().filter(|issue| issue.code == code).count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.level == Level::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Drop every issue whose code is listed
    pub fn discard_codes(&mut self, ignored: &[Code]) {
        self.issues.retain(|issue| !ignored.contains(&issue.code));
    }

    /// Highest level found, if any
    pub fn worst_level(&self) -> Option<Level> {
        self.issues.iter().map(|issue| issue.level).max()
    }

    fn by_level(&self, level: Level) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.level == level)
            .collect()
    }
}

impl Extend<Issue> for Report {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        self.issues.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new();
        report.warn(Code::NoRole, "Idle", "Give a role", "Jane Doe");
        report.error(Code::EmptyProject, "Empty", "Add tasks", "Demo");
        report
    }

    #[test]
    fn test_views_by_level() {
        let report = sample();
        assert_eq!(report.len(), 2);
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(report.errors().len(), 1);
        assert!(report.has_errors());
        assert_eq!(report.worst_level(), Some(Level::Error));
    }

    #[test]
    fn test_discard_codes() {
        let mut report = sample();
        report.discard_codes(&[Code::EmptyProject]);
        assert_eq!(report.codes(), vec![Code::NoRole]);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&Code::DiscontinuityInWorkPackage).unwrap();
        assert_eq!(json, "\"DISCONTINUITY_IN_WORK_PACKAGE\"");
        let level = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(level, "\"WARNING\"");
    }

    #[test]
    fn test_code_from_str() {
        assert_eq!("no_role".parse::<Code>().unwrap(), Code::NoRole);
        assert_eq!("EMPTY TEAM".parse::<Code>().unwrap(), Code::EmptyTeam);
        assert!("whatever".parse::<Code>().is_err());
    }

    #[test]
    fn test_display_matches_serialization() {
        for code in [Code::EmptyProject, Code::MilestoneBeforeProjectStart, Code::NoLeader] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code));
        }
    }
}
