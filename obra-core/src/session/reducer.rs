//! State transitions for a single action.
//!
//! `apply` checks everything an action needs before it touches the state, so
//! an `Err` always leaves the state exactly as it was.

use super::state::{AppState, SessionEvent};
use crate::{
    clock::Clock,
    error::ObraError,
    ids::{IdGenerator, IdKind},
    quantity::Quantity,
    settings::Settings,
};
use obra_schemas::{
    approval::{Approval, ApprovalStatus},
    command::Action,
    material::Material,
    project::ProjectStatus,
    requirement::Requirement,
    screen::Screen,
    user::User,
};

pub const FLUSH_CATEGORY: &str = "General";
pub const FLUSH_COST: &str = "N/A";
pub const FLUSH_PRIORITY: &str = "Media";

/// Dependencies a transition may draw on besides the state itself.
pub struct Context<'a> {
    pub ids: &'a mut dyn IdGenerator,
    pub clock: &'a dyn Clock,
    pub settings: &'a Settings,
}

pub fn apply(
    state: &mut AppState,
    action: Action,
    ctx: &mut Context<'_>,
) -> Result<Vec<SessionEvent>, ObraError> {
    match action {
        Action::Navigate { screen } => Ok(navigate(state, screen).into_iter().collect()),
        Action::Login { email } => {
            state.user = Some(User {
                name: ctx.settings.display_name.clone(),
                email: email.clone(),
            });
            let mut events = vec![SessionEvent::LoggedIn { email }];
            events.extend(navigate(state, Screen::Home));
            Ok(events)
        }
        Action::Logout => {
            state.user = None;
            let mut events = vec![SessionEvent::LoggedOut];
            events.extend(navigate(state, Screen::Login));
            Ok(events)
        }
        Action::SelectProject { project_id } => {
            state.ensure_project(&project_id)?;
            state.selected_project = Some(project_id.clone());
            let mut events = vec![SessionEvent::ProjectSelected { project_id }];
            events.extend(navigate(state, Screen::ProjectDetail));
            Ok(events)
        }
        Action::SetProjectStatus { project_id, status } => {
            set_project_status(state, project_id, status)
        }
        Action::AddMaterial {
            project_id,
            name,
            quantity,
        } => add_material(state, ctx, project_id, name, quantity),
        Action::UpdateQuantity {
            project_id,
            material_id,
            quantity,
        } => update_quantity(state, ctx, project_id, material_id, quantity),
        Action::DeleteMaterial {
            project_id,
            material_id,
        } => delete_material(state, project_id, material_id),
        Action::AddToCatalog { name } => {
            if state.insert_catalog_entry(&name) {
                Ok(vec![SessionEvent::CatalogExtended {
                    name: name.trim().to_string(),
                }])
            } else {
                Ok(Vec::new())
            }
        }
        Action::AddRequirement {
            name,
            description,
            quantity,
        } => add_requirement(state, ctx, name, description, quantity),
        Action::DeleteRequirement { requirement_id } => {
            let before = state.draft.len();
            state.draft.retain(|r| r.id != requirement_id);
            if state.draft.len() == before {
                return Ok(Vec::new());
            }
            Ok(vec![SessionEvent::RequirementDeleted { requirement_id }])
        }
        Action::FlushDraft => flush_draft(state, ctx),
        Action::DecideApproval {
            approval_id,
            status,
        } => decide_approval(state, approval_id, status),
    }
}

fn navigate(state: &mut AppState, to: Screen) -> Option<SessionEvent> {
    let from = state.screen;
    state.screen = to;
    (from != to).then_some(SessionEvent::Navigated { from, to })
}

fn check_quantity(ctx: &Context<'_>, quantity: &str) -> Result<(), ObraError> {
    if ctx.settings.strict_quantities {
        quantity.parse::<Quantity>()?;
    }
    Ok(())
}

fn set_project_status(
    state: &mut AppState,
    project_id: String,
    status: ProjectStatus,
) -> Result<Vec<SessionEvent>, ObraError> {
    let project = state
        .projects
        .iter_mut()
        .find(|p| p.id == project_id)
        .ok_or_else(|| ObraError::ProjectNotFound(project_id.clone()))?;
    let from = project.status;
    project.status = status;
    Ok(vec![SessionEvent::ProjectStatusChanged {
        project_id,
        from,
        to: status,
    }])
}

fn add_material(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    project_id: String,
    name: String,
    quantity: String,
) -> Result<Vec<SessionEvent>, ObraError> {
    state.ensure_project(&project_id)?;
    check_quantity(ctx, &quantity)?;

    let material_id = ctx.ids.next_id(IdKind::Material);
    state
        .inventory
        .entry(project_id.clone())
        .or_default()
        .push(Material {
            id: material_id.clone(),
            name,
            quantity,
            last_update: ctx.clock.now(),
        });
    Ok(vec![SessionEvent::MaterialAdded {
        project_id,
        material_id,
    }])
}

fn update_quantity(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    project_id: String,
    material_id: String,
    quantity: String,
) -> Result<Vec<SessionEvent>, ObraError> {
    state.ensure_project(&project_id)?;
    check_quantity(ctx, &quantity)?;

    let material = state
        .inventory
        .get_mut(&project_id)
        .and_then(|list| list.iter_mut().find(|m| m.id == material_id))
        .ok_or_else(|| ObraError::MaterialNotFound {
            project_id: project_id.clone(),
            material_id: material_id.clone(),
        })?;
    material.quantity = quantity.clone();
    material.last_update = ctx.clock.now().max(material.last_update);
    Ok(vec![SessionEvent::QuantityUpdated {
        project_id,
        material_id,
        quantity,
    }])
}

fn delete_material(
    state: &mut AppState,
    project_id: String,
    material_id: String,
) -> Result<Vec<SessionEvent>, ObraError> {
    state.ensure_project(&project_id)?;
    let Some(list) = state.inventory.get_mut(&project_id) else {
        return Ok(Vec::new());
    };
    let before = list.len();
    list.retain(|m| m.id != material_id);
    if list.len() == before {
        return Ok(Vec::new());
    }
    Ok(vec![SessionEvent::MaterialDeleted {
        project_id,
        material_id,
    }])
}

fn add_requirement(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    name: String,
    description: String,
    quantity: String,
) -> Result<Vec<SessionEvent>, ObraError> {
    if name.trim().is_empty() {
        return Err(ObraError::MissingField("name"));
    }
    if quantity.trim().is_empty() {
        return Err(ObraError::MissingField("quantity"));
    }
    check_quantity(ctx, &quantity)?;

    let requirement_id = ctx.ids.next_id(IdKind::Requirement);
    state.draft.push(Requirement {
        id: requirement_id.clone(),
        name,
        description,
        quantity,
    });
    let mut events = vec![SessionEvent::RequirementDrafted { requirement_id }];
    events.extend(navigate(state, Screen::RequirementList));
    Ok(events)
}

fn flush_draft(state: &mut AppState, ctx: &mut Context<'_>) -> Result<Vec<SessionEvent>, ObraError> {
    if state.draft.is_empty() {
        return Err(ObraError::EmptyDraft);
    }

    let engineer = state
        .user
        .as_ref()
        .map_or_else(|| ctx.settings.anonymous_name.clone(), |u| u.name.clone());
    let date = ctx.clock.now().date();

    let approvals: Vec<Approval> = std::mem::take(&mut state.draft)
        .into_iter()
        .map(|req| Approval {
            id: ctx.ids.next_id(IdKind::Approval),
            material: req.name,
            quantity: req.quantity,
            engineer: engineer.clone(),
            description: req.description,
            category: FLUSH_CATEGORY.to_string(),
            cost: FLUSH_COST.to_string(),
            priority: FLUSH_PRIORITY.to_string(),
            date,
            status: ApprovalStatus::Pending,
        })
        .collect();
    let approval_ids = approvals.iter().map(|a| a.id.clone()).collect();
    state.approvals.extend(approvals);

    let mut events = vec![SessionEvent::DraftFlushed { approval_ids }];
    events.extend(navigate(state, Screen::Approvals));
    Ok(events)
}

fn decide_approval(
    state: &mut AppState,
    approval_id: String,
    status: ApprovalStatus,
) -> Result<Vec<SessionEvent>, ObraError> {
    let approval = state
        .approvals
        .iter_mut()
        .find(|a| a.id == approval_id)
        .ok_or_else(|| ObraError::ApprovalNotFound(approval_id.clone()))?;
    let from = approval.status;
    approval.status = status;
    Ok(vec![SessionEvent::ApprovalDecided {
        approval_id,
        from,
        to: status,
    }])
}
