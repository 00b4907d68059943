use crate::{
    approval::Approval,
    command::Action,
    dashboard::{Milestone, Report},
    material::Material,
    project::Project,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Initial records loaded into a fresh session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    pub schema_version: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub inventory: BTreeMap<String, Vec<Material>>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
    #[serde(default)]
    pub catalog: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// A recorded or hand-written sequence of actions to replay.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFile {
    pub schema_version: String,
    pub actions: Vec<Action>,
}
