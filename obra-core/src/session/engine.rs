use super::{
    reducer::{self, Context},
    state::{AppState, SessionEvent},
};
use crate::{
    analysis, clock::Clock, error::ObraError, ids::IdGenerator, journal::ActionJournal,
    settings::Settings,
};
use obra_schemas::{
    approval::ApprovalStatus, command::Action, material::Material, project::ProjectStatus,
    screen::Screen,
};
use tracing::{debug, info, warn};

/// Owns the session state and applies actions to it one at a time.
pub struct SessionEngine {
    pub(super) state: AppState,
    pub(super) settings: Settings,
    pub(super) ids: Box<dyn IdGenerator>,
    pub(super) clock: Box<dyn Clock>,
    pub(super) journal: Option<ActionJournal>,
    pub(super) dispatched: u64,
}

impl SessionEngine {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies one action. The new state is committed only after the
    /// journal row (when a journal is configured) has been written, so any
    /// `Err` leaves the state as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatched += 1;
        let kind = action.kind();
        let journaled = self.journal.is_some().then(|| action.clone());

        let mut next = self.state.clone();
        let mut ctx = Context {
            ids: &mut *self.ids,
            clock: &*self.clock,
            settings: &self.settings,
        };
        let result = reducer::apply(&mut next, action, &mut ctx);

        match &result {
            Ok(events) => {
                debug!(seq = self.dispatched, action = kind, events = events.len(), "action applied");
                for event in events {
                    match event {
                        SessionEvent::DraftFlushed { approval_ids } => {
                            info!(count = approval_ids.len(), "requirement draft submitted for approval")
                        }
                        SessionEvent::ApprovalDecided { approval_id, from, to } => {
                            info!(%approval_id, ?from, ?to, "approval decision recorded")
                        }
                        _ => {}
                    }
                }
            }
            Err(e) => warn!(seq = self.dispatched, action = kind, "action rejected: {}", e),
        }

        if let (Some(journal), Some(action)) = (&mut self.journal, journaled) {
            if let Err(e) = journal.log_dispatch(self.dispatched, &action, &result) {
                warn!(seq = self.dispatched, action = kind, "journal write failed, action discarded: {}", e);
                return Err(ObraError::JournalError(e));
            }
        }
        if result.is_ok() {
            self.state = next;
        }
        result
    }

    /// Applies actions in order and stops at the first rejected one.
    pub fn run<I>(&mut self, actions: I) -> Result<Vec<SessionEvent>, ObraError>
    where
        I: IntoIterator<Item = Action>,
    {
        let mut events = Vec::new();
        for action in actions {
            events.extend(self.dispatch(action)?);
        }
        Ok(events)
    }

    pub fn navigate(&mut self, screen: Screen) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::Navigate { screen })
    }

    pub fn login(&mut self, email: &str) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::Login {
            email: email.to_string(),
        })
    }

    pub fn logout(&mut self) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::Logout)
    }

    pub fn select_project(&mut self, project_id: &str) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::SelectProject {
            project_id: project_id.to_string(),
        })
    }

    pub fn set_project_status(
        &mut self,
        project_id: &str,
        status: ProjectStatus,
    ) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::SetProjectStatus {
            project_id: project_id.to_string(),
            status,
        })
    }

    /// Returns the id of the new ledger line.
    pub fn add_material(
        &mut self,
        project_id: &str,
        name: &str,
        quantity: &str,
    ) -> Result<String, ObraError> {
        let events = self.dispatch(Action::AddMaterial {
            project_id: project_id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
        })?;
        Ok(events
            .into_iter()
            .find_map(|e| match e {
                SessionEvent::MaterialAdded { material_id, .. } => Some(material_id),
                _ => None,
            })
            .unwrap_or_default())
    }

    pub fn update_quantity(
        &mut self,
        project_id: &str,
        material_id: &str,
        quantity: &str,
    ) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::UpdateQuantity {
            project_id: project_id.to_string(),
            material_id: material_id.to_string(),
            quantity: quantity.to_string(),
        })
    }

    pub fn delete_material(
        &mut self,
        project_id: &str,
        material_id: &str,
    ) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::DeleteMaterial {
            project_id: project_id.to_string(),
            material_id: material_id.to_string(),
        })
    }

    pub fn search_inventory(&self, project_id: &str, term: &str) -> Result<Vec<&Material>, ObraError> {
        analysis::search_inventory(&self.state, project_id, term)
    }

    /// Returns whether the catalog grew.
    pub fn add_to_catalog(&mut self, name: &str) -> Result<bool, ObraError> {
        let events = self.dispatch(Action::AddToCatalog {
            name: name.to_string(),
        })?;
        Ok(!events.is_empty())
    }

    /// Returns the id of the new draft entry.
    pub fn add_requirement(
        &mut self,
        name: &str,
        description: &str,
        quantity: &str,
    ) -> Result<String, ObraError> {
        let events = self.dispatch(Action::AddRequirement {
            name: name.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
        })?;
        Ok(events
            .into_iter()
            .find_map(|e| match e {
                SessionEvent::RequirementDrafted { requirement_id } => Some(requirement_id),
                _ => None,
            })
            .unwrap_or_default())
    }

    pub fn delete_requirement(&mut self, requirement_id: &str) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::DeleteRequirement {
            requirement_id: requirement_id.to_string(),
        })
    }

    /// Submits the whole draft and returns the ids of the new approvals.
    pub fn flush_draft(&mut self) -> Result<Vec<String>, ObraError> {
        let events = self.dispatch(Action::FlushDraft)?;
        Ok(events
            .into_iter()
            .find_map(|e| match e {
                SessionEvent::DraftFlushed { approval_ids } => Some(approval_ids),
                _ => None,
            })
            .unwrap_or_default())
    }

    pub fn act(&mut self, approval_id: &str, status: ApprovalStatus) -> Result<Vec<SessionEvent>, ObraError> {
        self.dispatch(Action::DecideApproval {
            approval_id: approval_id.to_string(),
            status,
        })
    }
}
