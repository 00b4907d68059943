use crate::{error::ObraError, ids::IdStrategy};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_DISPLAY_NAME: &str = "Renato Perez";
pub const DEFAULT_ANONYMOUS_NAME: &str = "Usuario";

/// Session-wide knobs, read from a YAML file by the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name given to whoever logs in; login performs no identity lookup.
    pub display_name: String,
    /// Engineer recorded on flushed approvals when nobody is logged in.
    pub anonymous_name: String,
    pub id_strategy: IdStrategy,
    /// Reject quantities that are not `<number> [<unit>]`.
    pub strict_quantities: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            anonymous_name: DEFAULT_ANONYMOUS_NAME.to_string(),
            id_strategy: IdStrategy::default(),
            strict_quantities: false,
        }
    }
}

impl Settings {
    pub fn from_yaml_file(path: &Path) -> Result<Self, ObraError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| ObraError::FileIO(display.clone(), e))?;
        serde_yaml::from_str(&content).map_err(|e| ObraError::YamlParsing(display, e))
    }
}
