use crate::error::ObraError;
use obra_schemas::file_formats::SeedFile;
use std::{fs, path::Path};

const BUILTIN_SEED: &str = include_str!("../data/seed.yaml");

/// The demo records every fresh session starts from unless a seed file is
/// given.
pub fn builtin_seed() -> Result<SeedFile, ObraError> {
    serde_yaml::from_str(BUILTIN_SEED)
        .map_err(|e| ObraError::YamlParsing("<builtin seed>".to_string(), e))
}

pub fn load_seed_file(path: &Path) -> Result<SeedFile, ObraError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ObraError::FileIO(display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| ObraError::YamlParsing(display, e))
}
