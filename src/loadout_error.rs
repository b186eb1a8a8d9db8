use std::fmt::Display;

use thiserror::Error;

/// Which part of a generation run outgrew its configured limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Combinations,
    PairChecks,
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Combinations => write!(f, "per-side combinations"),
            Bound::PairChecks => write!(f, "pair checks"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("Invalid inventory: {0}")]
    InvalidInventory(String),

    #[error("Invalid range: min {min}kg must be ≤ max {max}kg.")]
    InvalidRange { min: u32, max: u32 },

    #[error("Inventory needs {size} {bound}, above the limit of {limit}.")]
    ResourceBoundExceeded { bound: Bound, size: u128, limit: u128 },

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadoutResult<T> = Result<T, LoadoutError>;
