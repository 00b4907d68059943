use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[serde(alias = "En curso")]
    InProgress,
    #[serde(alias = "Pendiente")]
    Pending,
    #[serde(alias = "Finalizado")]
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::InProgress,
        ProjectStatus::Pending,
        ProjectStatus::Finished,
    ];

    /// Label shown on project cards and filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "En curso",
            ProjectStatus::Pending => "Pendiente",
            ProjectStatus::Finished => "Finalizado",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCategory {
    #[serde(alias = "Corporativo")]
    Corporate,
    #[serde(alias = "Público", alias = "Publico")]
    Public,
    #[serde(alias = "Residencial")]
    Residential,
}

impl ClientCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ClientCategory::Corporate => "Corporativo",
            ClientCategory::Public => "Público",
            ClientCategory::Residential => "Residencial",
        }
    }
}

impl fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub client: String,
    pub client_category: ClientCategory,
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
}
