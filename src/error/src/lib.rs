//! Errors for the simulation's outer surface.
//!
//! The simulation itself is total; what can fail is loading and validating a
//! scenario, and driving the turn state machine out of order.

use thiserror::Error;

/// Errors raised around a simulation run
#[derive(Debug, Error)]
pub enum SimError {
    /// Scenario file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid JSON for a scenario
    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scenario parsed but describes an impossible game
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// Turn state machine was asked for an illegal transition
    #[error("Invalid turn transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl SimError {
    pub fn invalid_scenario(reason: impl Into<String>) -> Self {
        SimError::InvalidScenario(reason.into())
    }

    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        SimError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Convert an error into a message suitable for the terminal
pub fn handle_error(error: &SimError) -> String {
    match error {
        SimError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Scenario file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to read the scenario file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        SimError::Parse(e) => format!("Scenario is not valid JSON (line {}): {}", e.line(), e),
        _ => error.to_string(),
    }
}
