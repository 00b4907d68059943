pub mod builder;
pub mod engine;
pub mod reducer;
pub mod state;
