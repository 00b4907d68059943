use crate::{approval::ApprovalStatus, project::ProjectStatus, screen::Screen};
use serde::{Deserialize, Serialize};

/// A single user intent applied to the session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate {
        screen: Screen,
    },
    Login {
        email: String,
    },
    Logout,
    SelectProject {
        project_id: String,
    },
    SetProjectStatus {
        project_id: String,
        status: ProjectStatus,
    },
    AddMaterial {
        project_id: String,
        name: String,
        quantity: String,
    },
    UpdateQuantity {
        project_id: String,
        material_id: String,
        quantity: String,
    },
    DeleteMaterial {
        project_id: String,
        material_id: String,
    },
    AddToCatalog {
        name: String,
    },
    AddRequirement {
        name: String,
        #[serde(default)]
        description: String,
        quantity: String,
    },
    DeleteRequirement {
        requirement_id: String,
    },
    FlushDraft,
    DecideApproval {
        approval_id: String,
        status: ApprovalStatus,
    },
}

impl Action {
    /// The serialized tag, used for journal rows and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::Login { .. } => "login",
            Action::Logout => "logout",
            Action::SelectProject { .. } => "select_project",
            Action::SetProjectStatus { .. } => "set_project_status",
            Action::AddMaterial { .. } => "add_material",
            Action::UpdateQuantity { .. } => "update_quantity",
            Action::DeleteMaterial { .. } => "delete_material",
            Action::AddToCatalog { .. } => "add_to_catalog",
            Action::AddRequirement { .. } => "add_requirement",
            Action::DeleteRequirement { .. } => "delete_requirement",
            Action::FlushDraft => "flush_draft",
            Action::DecideApproval { .. } => "decide_approval",
        }
    }
}
