//! Identifier generation for records created during a session.
//!
//! Generators are injected into the engine so uniqueness holds by
//! construction instead of by chance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Material,
    Requirement,
    Approval,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Material => "mat",
            IdKind::Requirement => "req",
            IdKind::Approval => "apr",
        }
    }
}

pub trait IdGenerator: Send {
    fn next_id(&mut self, kind: IdKind) -> String;

    /// Marks an id that already exists in the session so it is never issued.
    fn reserve(&mut self, _kind: IdKind, _existing: &str) {}
}

/// Monotonic per-kind counters: `mat-1`, `mat-2`, `req-1`, ...
///
/// Seed ids that already look like `apr-7` are reserved by the builder, so
/// counting resumes past them.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counters: HashMap<IdKind, u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{}-{}", kind.prefix(), counter)
    }

    fn reserve(&mut self, kind: IdKind, existing: &str) {
        let taken = existing
            .strip_prefix(kind.prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse::<u64>().ok());
        if let Some(taken) = taken {
            let counter = self.counters.entry(kind).or_insert(0);
            *counter = (*counter).max(taken);
        }
    }
}

#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _kind: IdKind) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_counters_are_independent_per_kind() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(IdKind::Requirement), "req-1");
        assert_eq!(ids.next_id(IdKind::Requirement), "req-2");
        assert_eq!(ids.next_id(IdKind::Approval), "apr-1");
        assert_eq!(ids.next_id(IdKind::Material), "mat-1");
        assert_eq!(ids.next_id(IdKind::Requirement), "req-3");
    }

    #[test]
    fn reserved_ids_are_skipped() {
        let mut ids = SequentialIds::new();
        ids.reserve(IdKind::Approval, "apr-3");
        ids.reserve(IdKind::Approval, "apr-1");
        ids.reserve(IdKind::Approval, "2");
        ids.reserve(IdKind::Approval, "apr-x");
        ids.reserve(IdKind::Material, "apr-9");
        assert_eq!(ids.next_id(IdKind::Approval), "apr-4");
        assert_eq!(ids.next_id(IdKind::Material), "mat-1");
    }

    #[test]
    fn uuid_ids_do_not_repeat() {
        let mut ids = UuidIds;
        let generated: HashSet<String> = (0..64).map(|_| ids.next_id(IdKind::Approval)).collect();
        assert_eq!(generated.len(), 64);
    }
}
