//! Error types

use thiserror::Error;

use crate::vehicle::VehicleId;

/// Errors surfaced to the host layer
#[derive(Debug, Error)]
pub enum GameError {
    /// Selection of a vehicle id the registry does not know
    #[error("vehicle {0} not found")]
    NotFound(VehicleId),

    /// A catalog entry with out-of-range tuning
    #[error("invalid vehicle profile {id}: {reason}")]
    InvalidProfile { id: VehicleId, reason: String },

    /// A balance value outside the range the motion model supports
    #[error("invalid tuning {field}: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    /// Malformed tuning or catalog JSON
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
