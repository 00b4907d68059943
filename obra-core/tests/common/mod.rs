mod fixtures;
pub use fixtures::*;

// Re-export commonly used types for tests
pub use obra_core::{
    analysis::{self, ProjectFilter},
    clock::ManualClock,
    error::ObraError,
    session::{builder::SessionBuilder, engine::SessionEngine, state::SessionEvent},
    settings::Settings,
};
pub use obra_schemas::{
    approval::ApprovalStatus,
    command::Action,
    project::{ClientCategory, ProjectStatus},
    screen::Screen,
};
