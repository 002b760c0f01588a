//! Reading plans from disk
//!
//! The format is chosen from the file extension: `.json`, `.yaml` or `.yml`.

pub mod document;
pub mod svg;

pub use document::{PlanDocument, TeamFileDocument};

use crate::error::LoadError;
use crate::wbs::Blueprint;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, LoadError> {
        match self {
            Format::Json => Ok(serde_json::from_str(content)?),
            Format::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Parsing {} as {}", path.display(), format);
    format.parse(&content)
}

/// Load a plan, replacing its team with the one in `team_path` when given
pub fn load_blueprint(plan_path: &Path, team_path: Option<&Path>) -> Result<Blueprint, LoadError> {
    let mut plan: PlanDocument = read(plan_path)?;
    if let Some(team_path) = team_path {
        let file: TeamFileDocument = read(team_path)?;
        let team = file
            .team
            .ok_or_else(|| LoadError::MissingTeam(team_path.to_path_buf()))?;
        plan.team = Some(team);
    }
    let blueprint = plan.into_blueprint()?;
    debug!(
        "Loaded project '{}' ({} top-level activities, team: {})",
        blueprint.project.name,
        blueprint.project.breakdown.len(),
        blueprint.team.is_some()
    );
    Ok(blueprint)
}
