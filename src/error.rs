//! Errors that abort a night before any card moves.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NightError {
    #[error("got {roles} roles for {players} players, need one per player plus 3 center cards")]
    RosterSize { players: usize, roles: usize },

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("a night needs at least one player")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, NightError>;
