use crate::{error::ObraError, session::state::SessionEvent};
use csv::Writer;
use obra_schemas::command::Action;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub sequence: u64,
    pub action: String,
    pub outcome: String,
    pub action_json: String,
    pub events_json: String,
}

/// Appends one CSV row per dispatched action, accepted or not.
pub struct ActionJournal {
    writer: Writer<fs::File>,
}

impl ActionJournal {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_dispatch(
        &mut self,
        sequence: u64,
        action: &Action,
        result: &Result<Vec<SessionEvent>, ObraError>,
    ) -> Result<(), anyhow::Error> {
        let (outcome, events_json) = match result {
            Ok(events) => ("ok".to_string(), serde_json::to_string(events)?),
            Err(e) => (format!("rejected: {}", e), "[]".to_string()),
        };

        let entry = JournalEntry {
            sequence,
            action: action.kind().to_string(),
            outcome,
            action_json: serde_json::to_string(action)?,
            events_json,
        };

        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn read_journal(path: &str) -> Result<Vec<JournalEntry>, ObraError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| ObraError::CsvError(path.to_string(), e))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| ObraError::CsvError(path.to_string(), e)))
        .collect()
}

impl JournalEntry {
    pub fn accepted(&self) -> bool {
        self.outcome == "ok"
    }

    pub fn events(&self) -> Result<Vec<SessionEvent>, ObraError> {
        Ok(serde_json::from_str(&self.events_json)?)
    }

    pub fn action(&self) -> Result<Action, ObraError> {
        Ok(serde_json::from_str(&self.action_json)?)
    }
}
