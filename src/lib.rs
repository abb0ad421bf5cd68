pub mod constants;
pub mod delivery;
pub mod engine;
pub mod error;
pub mod rng;
pub mod types;
