// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator session events
// ============================================================================

use crate::engine::Operator;
use crate::numeric::CalcError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Digit, decimal point or backspace edited the display
    DisplayChanged { display: String },

    /// First operator press: the display became the running value
    OperandAdopted { value: f64, pending: Operator },

    /// Pending operator folded the display into the running value
    OperatorApplied {
        operator: Operator,
        left: f64,
        right: f64,
        result: f64,
    },

    /// Equals pressed with a pending operator
    Evaluated {
        operator: Operator,
        left: f64,
        right: f64,
        result: f64,
    },

    /// Arithmetic produced no displayable number; session was reset
    InvalidResult { error: CalcError },

    /// Session cleared
    Cleared,
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history tapes, analytics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        match &event {
            CalculatorEvent::InvalidResult { error } => {
                tracing::warn!(%error, "Calculator produced no result");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}
