use crate::error::ObraError;
use obra_schemas::{
    approval::{Approval, ApprovalStatus},
    dashboard::{Milestone, Report},
    file_formats::SeedFile,
    material::Material,
    project::{Project, ProjectStatus},
    requirement::Requirement,
    screen::Screen,
    user::User,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Something that happened as the result of one dispatched action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Navigated { from: Screen, to: Screen },
    LoggedIn { email: String },
    LoggedOut,
    ProjectSelected { project_id: String },
    ProjectStatusChanged { project_id: String, from: ProjectStatus, to: ProjectStatus },
    MaterialAdded { project_id: String, material_id: String },
    QuantityUpdated { project_id: String, material_id: String, quantity: String },
    MaterialDeleted { project_id: String, material_id: String },
    CatalogExtended { name: String },
    RequirementDrafted { requirement_id: String },
    RequirementDeleted { requirement_id: String },
    DraftFlushed { approval_ids: Vec<String> },
    ApprovalDecided { approval_id: String, from: ApprovalStatus, to: ApprovalStatus },
}

/// Everything a session holds. Owned by one `SessionEngine`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub screen: Screen,
    pub user: Option<User>,
    pub selected_project: Option<String>,
    pub projects: Vec<Project>,
    pub inventory: BTreeMap<String, Vec<Material>>,
    pub draft: Vec<Requirement>,
    pub approvals: Vec<Approval>,
    pub catalog: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub reports: Vec<Report>,
}

impl AppState {
    pub fn from_seed(seed: SeedFile) -> Self {
        let mut state = Self {
            projects: seed.projects,
            inventory: seed.inventory,
            approvals: seed.approvals,
            milestones: seed.milestones,
            reports: seed.reports,
            ..Self::default()
        };
        for name in seed.catalog {
            state.insert_catalog_entry(&name);
        }
        state
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// The ledger of a known project. A project without a ledger entry has
    /// an empty one.
    pub fn materials(&self, project_id: &str) -> Result<&[Material], ObraError> {
        self.ensure_project(project_id)?;
        Ok(self
            .inventory
            .get(project_id)
            .map_or(&[][..], |list| list.as_slice()))
    }

    pub fn approval(&self, approval_id: &str) -> Option<&Approval> {
        self.approvals.iter().find(|a| a.id == approval_id)
    }

    pub(crate) fn ensure_project(&self, project_id: &str) -> Result<(), ObraError> {
        match self.project(project_id) {
            Some(_) => Ok(()),
            None => Err(ObraError::ProjectNotFound(project_id.to_string())),
        }
    }

    /// Adds a trimmed, non-empty name unless it is already present.
    pub(crate) fn insert_catalog_entry(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.catalog.iter().any(|c| c == name) {
            return false;
        }
        self.catalog.push(name.to_string());
        true
    }
}
