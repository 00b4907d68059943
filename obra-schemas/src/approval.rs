use crate::formats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn is_decided(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pendiente",
            ApprovalStatus::Approved => "Aprobado",
            ApprovalStatus::Rejected => "Rechazado",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: String,
    pub material: String,
    pub quantity: String,
    pub engineer: String,
    pub description: String,
    pub category: String,
    pub cost: String,
    pub priority: String,
    #[serde(with = "formats::approval_date")]
    pub date: NaiveDate,
    pub status: ApprovalStatus,
}
