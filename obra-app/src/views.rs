//! Plain-text renderings of the session screens for the terminal.

use obra_core::{
    analysis::{self, ProjectFilter},
    error::ObraError,
    session::state::AppState,
};
use obra_schemas::formats::{APPROVAL_DATE_FORMAT, TIMESTAMP_FORMAT};

pub fn projects(state: &AppState, filter: &ProjectFilter) -> String {
    let mut out = String::from("=== Proyectos ===\n");
    let projects = analysis::filter_projects(state, filter);
    if projects.is_empty() {
        out.push_str("  (sin resultados)\n");
    }
    for p in projects {
        out.push_str(&format!(
            "  [{}] {:<18} {:<11} {:<20} {:<12} {}\n",
            p.id, p.name, p.status, p.client, p.client_category, p.date
        ));
    }
    out
}

pub fn inventory(state: &AppState, project_id: &str, search: &str) -> Result<String, ObraError> {
    let name = state.project(project_id).map_or("", |p| p.name.as_str());
    let mut out = format!("=== Inventario: {} ===\n", name);
    let materials = analysis::search_inventory(state, project_id, search)?;
    if materials.is_empty() {
        out.push_str("  (sin materiales)\n");
    }
    for m in materials {
        out.push_str(&format!(
            "  [{}] {:<22} {:<15} {}\n",
            m.id,
            m.name,
            m.quantity,
            m.last_update.format(TIMESTAMP_FORMAT)
        ));
    }
    Ok(out)
}

pub fn draft(state: &AppState) -> String {
    let mut out = format!("=== Requerimiento ({}) ===\n", state.draft.len());
    for r in &state.draft {
        out.push_str(&format!(
            "  [{}] {} - {} {}\n",
            r.id, r.name, r.quantity, r.description
        ));
    }
    out
}

pub fn approvals(state: &AppState) -> String {
    let partition = analysis::partition_approvals(state);
    let mut out = format!("=== Pendientes ({}) ===\n", partition.pending.len());
    for a in &partition.pending {
        out.push_str(&format!(
            "  [{}] {} | {} | {} | {} | {} | {}\n",
            a.id,
            a.material,
            a.quantity,
            a.engineer,
            a.priority,
            a.cost,
            a.date.format(APPROVAL_DATE_FORMAT)
        ));
    }
    out.push_str(&format!("=== Resumen ({}) ===\n", partition.decided.len()));
    for a in &partition.decided {
        out.push_str(&format!("  [{}] {} | {} | {}\n", a.id, a.material, a.quantity, a.status));
    }
    out
}

pub fn catalog(state: &AppState) -> String {
    let mut out = format!("=== Catálogo ({}) ===\n", state.catalog.len());
    for name in &state.catalog {
        out.push_str(&format!("  - {}\n", name));
    }
    out
}

pub fn dashboard(state: &AppState) -> String {
    let summary = analysis::dashboard_summary(state);
    let mut out = String::from("=== Dashboard ===\n");
    for entry in &summary.project_status {
        out.push_str(&format!("  {:<11} {}\n", entry.status, entry.count));
    }
    out.push_str("--- Próximos hitos ---\n");
    for m in &summary.upcoming_milestones {
        out.push_str(&format!("  {} {} ({})\n", m.date, m.title, m.project));
    }
    out.push_str("--- Reportes recientes ---\n");
    for r in &summary.recent_reports {
        out.push_str(&format!("  {} {} [{}]\n", r.date, r.title, r.kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use obra_core::seed::builtin_seed;
    use obra_schemas::project::ProjectStatus;

    fn state() -> AppState {
        AppState::from_seed(builtin_seed().unwrap())
    }

    #[test]
    fn project_view_respects_filter() {
        let filter = ProjectFilter {
            status: Some(ProjectStatus::Finished),
            ..ProjectFilter::default()
        };
        let text = projects(&state(), &filter);
        assert!(text.contains("PROYECTO 3"));
        assert!(!text.contains("PROYECTO 1"));
    }

    #[test]
    fn inventory_view_lists_matching_lines() {
        let text = inventory(&state(), "2", "acero").unwrap();
        assert!(text.contains("Inventario: PROYECTO 2"));
        assert!(text.contains("Acero 8mm"));
        assert!(text.contains("2026-02-16 08:20"));
        assert!(!text.contains("Cemento"));
    }

    #[test]
    fn approvals_view_shows_both_sections() {
        let text = approvals(&state());
        assert!(text.contains("Pendientes (2)"));
        assert!(text.contains("Resumen (0)"));
        assert!(text.contains("13 Feb 2026"));
    }

    #[test]
    fn dashboard_view_counts_statuses() {
        let text = dashboard(&state());
        assert!(text.contains("En curso"));
        assert!(text.contains("Entrega Fase 1"));
    }

    #[test]
    fn every_line_of_a_view_is_terminated() {
        let text = catalog(&state());
        assert!(text.starts_with("=== Catálogo (7) ===\n"));
        assert_eq!(text.lines().count(), 8);
        assert!(text.ends_with('\n'));
        assert!(text.contains("  - Cemento Portland Tipo I\n"));
    }
}
