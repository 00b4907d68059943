use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObraError {
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Material '{material_id}' not found in project '{project_id}'")]
    MaterialNotFound {
        project_id: String,
        material_id: String,
    },

    #[error("Approval '{0}' not found")]
    ApprovalNotFound(String),

    #[error("Field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("The requirement draft is empty, nothing to submit")]
    EmptyDraft,

    #[error("Invalid quantity '{0}': expected a number optionally followed by a unit")]
    InvalidQuantity(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred while journaling: {0}")]
    JournalError(#[from] anyhow::Error),
}
