pub mod analysis;
pub mod clock;
pub mod error;
pub mod ids;
pub mod journal;
pub mod quantity;
pub mod seed;
pub mod session;
pub mod settings;
