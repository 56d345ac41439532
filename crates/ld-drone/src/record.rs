//! Flight-log hook.
//!
//! The drone reports every committed step, hovers included, to a
//! [`FlightRecorder`].  Writers that persist the log live in `ld-output`.

use ld_core::{Heading, LngLat};

/// One committed step.  `heading` is [`Heading::HOVER`] for hovers, in which
/// case `from == to`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Order being worked on, or `None` outside any order.
    pub order:   Option<String>,
    pub from:    LngLat,
    pub heading: Heading,
    pub to:      LngLat,
}

/// Receives every step the drone commits, in order.
pub trait FlightRecorder {
    fn record(&mut self, step: &StepRecord);
}

/// Discards all steps.
pub struct NoopRecorder;

impl FlightRecorder for NoopRecorder {
    fn record(&mut self, _step: &StepRecord) {}
}

/// Collects steps in memory.
impl FlightRecorder for Vec<StepRecord> {
    fn record(&mut self, step: &StepRecord) {
        self.push(step.clone());
    }
}
