//! Read-side views over the session state: the filtered lists and summaries
//! each screen shows.

use crate::{error::ObraError, session::state::AppState};
use obra_schemas::{
    approval::{Approval, ApprovalStatus},
    dashboard::{Milestone, Report},
    material::Material,
    project::{ClientCategory, Project, ProjectStatus},
};
use serde::Serialize;

/// Project list filter: text over name or client, plus optional chips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub category: Option<ClientCategory>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = project.name.to_lowercase().contains(&needle)
            || project.client.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |s| project.status == s);
        let matches_category = self.category.map_or(true, |c| project.client_category == c);
        matches_search && matches_status && matches_category
    }
}

pub fn filter_projects<'a>(state: &'a AppState, filter: &ProjectFilter) -> Vec<&'a Project> {
    state.projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Case-insensitive substring match on material names only.
pub fn search_inventory<'a>(
    state: &'a AppState,
    project_id: &str,
    term: &str,
) -> Result<Vec<&'a Material>, ObraError> {
    let needle = term.to_lowercase();
    Ok(state
        .materials(project_id)?
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect())
}

#[derive(Debug, Default)]
pub struct ApprovalPartition<'a> {
    pub pending: Vec<&'a Approval>,
    pub decided: Vec<&'a Approval>,
}

impl ApprovalPartition<'_> {
    pub fn count(&self, status: ApprovalStatus) -> usize {
        match status {
            ApprovalStatus::Pending => self.pending.len(),
            _ => self.decided.iter().filter(|a| a.status == status).count(),
        }
    }
}

pub fn partition_approvals(state: &AppState) -> ApprovalPartition<'_> {
    let (decided, pending): (Vec<&Approval>, Vec<&Approval>) =
        state.approvals.iter().partition(|a| a.status.is_decided());
    ApprovalPartition { pending, decided }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub project_status: Vec<StatusCount>,
    pub upcoming_milestones: Vec<Milestone>,
    pub recent_reports: Vec<Report>,
}

pub fn dashboard_summary(state: &AppState) -> DashboardSummary {
    let project_status = ProjectStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: state.projects.iter().filter(|p| p.status == *status).count(),
        })
        .collect();

    let mut upcoming_milestones = state.milestones.clone();
    upcoming_milestones.sort_by_key(|m| m.date);
    let mut recent_reports = state.reports.clone();
    recent_reports.sort_by(|a, b| b.date.cmp(&a.date));

    DashboardSummary {
        project_status,
        upcoming_milestones,
        recent_reports,
    }
}
