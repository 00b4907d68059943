use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: String,
}
