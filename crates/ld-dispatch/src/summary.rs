//! End-of-run report.

use std::fmt;

/// Totals for one run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub orders_offered:   usize,
    pub orders_delivered: usize,
    /// Delivery charges of completed orders, in pence.
    pub revenue_pence:    u64,
    /// Delivery charges of all offered orders, in pence.
    pub offered_pence:    u64,
    pub moves_used:       u32,
    pub moves_left:       u32,
    /// The drone ended within arrival tolerance of the home base.
    pub returned_home:    bool,
}

impl RunSummary {
    /// Fraction of the offered value that was delivered.  `1.0` when
    /// nothing was offered.
    pub fn captured_fraction(&self) -> f64 {
        if self.offered_pence == 0 {
            return 1.0;
        }
        self.revenue_pence as f64 / self.offered_pence as f64
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delivered {}/{} orders, {} pence ({:.3} of offered), {} moves used, returned home: {}",
            self.orders_delivered,
            self.orders_offered,
            self.revenue_pence,
            self.captured_fraction(),
            self.moves_used,
            self.returned_home,
        )
    }
}
