//! Settlement outcome models.
//!
//! A [`Settlement`] is what the forward and inverse operations hand to the
//! presentation layer: the chosen scenario plus how it was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ScenarioResult;

/// How a settlement's scenario was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Resolution {
    /// Forward operation: evaluated once at the requested gross, or at the
    /// legal minimum when the request was below it.
    Evaluated {
        /// Whether the requested gross was raised to the legal minimum.
        raised_to_minimum: bool,
    },
    /// Inverse operation: the target net was reachable at the legal minimum,
    /// so no search was performed.
    FloorAdjusted,
    /// Inverse operation: bisection met the tolerance.
    Converged {
        /// Number of bisection iterations used.
        iterations: u32,
    },
    /// Inverse operation: the iteration cap was reached; the last evaluated
    /// scenario is returned as the best available approximation.
    IterationCapReached {
        /// Number of bisection iterations used.
        iterations: u32,
    },
}

impl Resolution {
    /// Whether the result was moved to the legal minimum gross.
    pub fn adjusted_to_minimum(&self) -> bool {
        matches!(
            self,
            Resolution::FloorAdjusted
                | Resolution::Evaluated {
                    raised_to_minimum: true
                }
        )
    }
}

/// One iteration of the gross-from-net bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BisectionStep {
    /// 1-based iteration number.
    pub iteration: u32,
    /// Lower bound before this iteration.
    pub lower_bound: Decimal,
    /// Upper bound before this iteration.
    pub upper_bound: Decimal,
    /// Gross evaluated in this iteration.
    pub candidate: Decimal,
    /// Net produced by the candidate.
    pub net: Decimal,
}

/// The outcome of a forward or inverse settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The scenario that was settled on.
    pub scenario: ScenarioResult,
    /// How the scenario was reached.
    pub resolution: Resolution,
    /// Bisection trace; empty for the forward operation and floor results.
    pub trace: Vec<BisectionStep>,
}
