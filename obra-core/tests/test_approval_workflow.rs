//! Integration tests for the requirement draft and the approval queue.
//!
//! Tests cover:
//! - Drafting and deleting requirements
//! - Flushing the draft into pending approvals
//! - Approval decisions, including reverting to pending
//! - Pending / decided partitions

mod common;

use common::*;

#[test]
fn test_flush_single_entry_uses_fixed_defaults() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    engine.login("renato@obra.pe")?;
    engine.add_requirement("X", "", "5")?;

    let ids = engine.flush_draft()?;

    assert_eq!(ids.len(), 1);
    let approval = engine.state().approval(&ids[0]).expect("flushed approval");
    assert_eq!(approval.material, "X");
    assert_eq!(approval.quantity, "5");
    assert_eq!(approval.status, ApprovalStatus::Pending);
    assert_eq!(approval.category, "General");
    assert_eq!(approval.cost, "N/A");
    assert_eq!(approval.priority, "Media");
    assert_eq!(approval.engineer, "Renato Perez");
    assert_eq!(approval.date, session_start().date());
    Ok(())
}

#[test]
fn test_flush_of_n_requirements_appends_n_pending_and_clears_draft() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    let seeded = engine.state().approvals.len();
    let names = ["Arena Fina", "Madera para Encofrado", "Ladrillo King Kong"];
    for (i, name) in names.iter().enumerate() {
        engine.add_requirement(name, "Sector C", &format!("{} unidades", i + 1))?;
    }

    let ids = engine.flush_draft()?;

    let state = engine.state();
    assert_eq!(state.draft.len(), 0);
    assert_eq!(state.approvals.len(), seeded + names.len());
    assert_eq!(ids.len(), names.len());
    let appended: Vec<&str> = state.approvals[seeded..]
        .iter()
        .map(|a| a.material.as_str())
        .collect();
    assert_eq!(appended, names);
    assert!(state.approvals[seeded..]
        .iter()
        .all(|a| a.status == ApprovalStatus::Pending));
    assert_eq!(state.screen, Screen::Approvals);
    Ok(())
}

#[test]
fn test_empty_draft_cannot_be_flushed() {
    let (mut engine, _clock) = seeded_engine();
    let before = engine.state().clone();

    assert!(matches!(engine.flush_draft(), Err(ObraError::EmptyDraft)));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_requirement_needs_name_and_quantity() {
    let (mut engine, _clock) = seeded_engine();

    assert!(matches!(
        engine.add_requirement("", "sin nombre", "5"),
        Err(ObraError::MissingField("name"))
    ));
    assert!(matches!(
        engine.add_requirement("Arena Fina", "sin cantidad", "  "),
        Err(ObraError::MissingField("quantity"))
    ));
    assert!(engine.state().draft.is_empty());
}

#[test]
fn test_requirement_ids_are_unique_and_deletion_is_targeted() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    let first = engine.add_requirement("Arena Fina", "", "2 m³")?;
    let second = engine.add_requirement("Arena Fina", "", "2 m³")?;
    assert_ne!(first, second);
    assert_eq!(engine.state().screen, Screen::RequirementList);

    engine.delete_requirement(&first)?;

    let remaining: Vec<&str> = engine.state().draft.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(remaining, vec![second.as_str()]);
    Ok(())
}

#[test]
fn test_approval_ids_stay_unique_across_flushes() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    engine.add_requirement("Arena Fina", "", "1 m³")?;
    let mut ids = engine.flush_draft()?;
    engine.add_requirement("Arena Fina", "", "1 m³")?;
    ids.extend(engine.flush_draft()?);

    let mut all: Vec<&str> = engine.state().approvals.iter().map(|a| a.id.as_str()).collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), engine.state().approvals.len());
    assert_eq!(ids.len(), 2);
    Ok(())
}

#[test]
fn test_generated_ids_skip_prefixed_seed_ids() -> anyhow::Result<()> {
    let mut seed = obra_core::seed::builtin_seed()?;
    seed.approvals[0].id = "apr-1".to_string();
    if let Some(first) = seed.inventory.get_mut("1").and_then(|lines| lines.first_mut()) {
        first.id = "mat-2".to_string();
    }
    let mut engine = SessionBuilder::new()
        .with_seed(seed)
        .with_id_generator(Box::new(obra_core::ids::SequentialIds::new()))
        .with_clock(Box::new(ManualClock::new(session_start())))
        .build()?;

    engine.add_requirement("X", "", "5")?;
    let flushed = engine.flush_draft()?;
    assert_eq!(flushed, vec!["apr-2".to_string()]);

    let ids: Vec<&str> = engine.state().approvals.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["apr-1", "2", "apr-2"]);

    let added = engine.add_material("1", "Yeso", "10 bolsas")?;
    assert_eq!(added, "mat-3");
    Ok(())
}

#[test]
fn test_act_is_idempotent() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    let count = engine.state().approvals.len();

    engine.act("1", ApprovalStatus::Approved)?;
    engine.act("1", ApprovalStatus::Approved)?;

    assert_eq!(engine.state().approvals.len(), count);
    assert_eq!(
        engine.state().approval("1").map(|a| a.status),
        Some(ApprovalStatus::Approved)
    );
    Ok(())
}

#[test]
fn test_decisions_can_be_reverted_to_pending() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();

    engine.act("2", ApprovalStatus::Rejected)?;
    let events = engine.act("2", ApprovalStatus::Pending)?;
    engine.act("2", ApprovalStatus::Approved)?;

    assert_eq!(
        events,
        vec![SessionEvent::ApprovalDecided {
            approval_id: "2".to_string(),
            from: ApprovalStatus::Rejected,
            to: ApprovalStatus::Pending,
        }]
    );
    assert_eq!(
        engine.state().approval("2").map(|a| a.status),
        Some(ApprovalStatus::Approved)
    );
    Ok(())
}

#[test]
fn test_partition_splits_pending_from_decided() -> anyhow::Result<()> {
    let (mut engine, _clock) = seeded_engine();
    engine.add_requirement("Arena Fina", "", "4 m³")?;
    engine.flush_draft()?;
    engine.act("1", ApprovalStatus::Approved)?;

    let partition = analysis::partition_approvals(engine.state());

    let pending: Vec<&str> = partition.pending.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(pending, vec!["2", "apr-1"]);
    assert_eq!(partition.decided.len(), 1);
    assert_eq!(partition.count(ApprovalStatus::Approved), 1);
    assert_eq!(partition.count(ApprovalStatus::Rejected), 0);
    assert_eq!(partition.count(ApprovalStatus::Pending), 2);
    Ok(())
}

#[test]
fn test_unknown_approval_is_reported() {
    let (mut engine, _clock) = seeded_engine();
    assert!(matches!(
        engine.act("77", ApprovalStatus::Approved),
        Err(ObraError::ApprovalNotFound(id)) if id == "77"
    ));
}
