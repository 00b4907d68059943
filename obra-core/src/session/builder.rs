use crate::{
    clock::{Clock, SystemClock},
    error::ObraError,
    ids::{IdGenerator, IdKind},
    journal::ActionJournal,
    session::{engine::SessionEngine, state::AppState},
    settings::Settings,
};
use obra_schemas::file_formats::SeedFile;
use std::collections::HashSet;

/// A fluent builder for constructing a `SessionEngine`.
///
/// Seed data, settings, the id generator, the clock and the journal are all
/// optional; an unconfigured builder yields an empty session with default
/// settings, sequential ids and the system clock.
#[derive(Default)]
pub struct SessionBuilder {
    seed: Option<SeedFile>,
    settings: Settings,
    ids: Option<Box<dyn IdGenerator>>,
    clock: Option<Box<dyn Clock>>,
    journal_path: Option<String>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records the session starts from.
    pub fn with_seed(mut self, seed: SeedFile) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Overrides the generator picked by `Settings::id_strategy`.
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Writes one CSV row per dispatched action to `path`.
    pub fn with_journal_to_file(mut self, path: &str) -> Self {
        self.journal_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a ready `SessionEngine`.
    ///
    /// # Errors
    ///
    /// Returns `ObraError::ConfigError` when the seed repeats a project or
    /// approval id, or keeps a ledger for a project it does not define, and
    /// `ObraError::FileIO` when the journal file cannot be created.
    pub fn build(self) -> Result<SessionEngine, ObraError> {
        let seed = self.seed.unwrap_or_default();
        validate_seed(&seed)?;

        let journal = match self.journal_path {
            Some(path) => Some(
                ActionJournal::new(&path).map_err(|e| ObraError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        let mut ids = self
            .ids
            .unwrap_or_else(|| self.settings.id_strategy.generator());
        for material in seed.inventory.values().flatten() {
            ids.reserve(IdKind::Material, &material.id);
        }
        for approval in &seed.approvals {
            ids.reserve(IdKind::Approval, &approval.id);
        }

        Ok(SessionEngine {
            state: AppState::from_seed(seed),
            settings: self.settings,
            ids,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            journal,
            dispatched: 0,
        })
    }
}

fn validate_seed(seed: &SeedFile) -> Result<(), ObraError> {
    let mut project_ids = HashSet::new();
    for project in &seed.projects {
        if !project_ids.insert(project.id.as_str()) {
            return Err(ObraError::ConfigError(format!(
                "duplicate project id '{}' in seed",
                project.id
            )));
        }
    }

    for (project_id, materials) in &seed.inventory {
        if !project_ids.contains(project_id.as_str()) {
            return Err(ObraError::ConfigError(format!(
                "inventory listed for unknown project '{}'",
                project_id
            )));
        }
        let mut material_ids = HashSet::new();
        for material in materials {
            if !material_ids.insert(material.id.as_str()) {
                return Err(ObraError::ConfigError(format!(
                    "duplicate material id '{}' in project '{}'",
                    material.id, project_id
                )));
            }
        }
    }

    let mut approval_ids = HashSet::new();
    for approval in &seed.approvals {
        if !approval_ids.insert(approval.id.as_str()) {
            return Err(ObraError::ConfigError(format!(
                "duplicate approval id '{}' in seed",
                approval.id
            )));
        }
    }
    Ok(())
}
