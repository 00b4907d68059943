use chrono::{NaiveDate, NaiveDateTime};
use obra_core::{
    clock::ManualClock,
    ids::SequentialIds,
    seed::builtin_seed,
    session::{builder::SessionBuilder, engine::SessionEngine},
    settings::Settings,
};

/// The moment every test session starts at.
pub fn session_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 18)
        .expect("valid date")
        .and_hms_opt(8, 0, 0)
        .expect("valid time")
}

/// A session over the built-in seed with sequential ids and a manual clock.
/// The returned clock shares its time with the engine's.
pub fn seeded_engine() -> (SessionEngine, ManualClock) {
    seeded_engine_with(Settings::default())
}

pub fn seeded_engine_with(settings: Settings) -> (SessionEngine, ManualClock) {
    let clock = ManualClock::new(session_start());
    let engine = SessionBuilder::new()
        .with_seed(builtin_seed().expect("builtin seed parses"))
        .with_settings(settings)
        .with_id_generator(Box::new(SequentialIds::new()))
        .with_clock(Box::new(clock.clone()))
        .build()
        .expect("Failed to build seeded session");
    (engine, clock)
}

/// Ids of a project's ledger lines, in ledger order.
pub fn material_ids(engine: &SessionEngine, project_id: &str) -> Vec<String> {
    engine
        .state()
        .materials(project_id)
        .expect("project exists")
        .iter()
        .map(|m| m.id.clone())
        .collect()
}
