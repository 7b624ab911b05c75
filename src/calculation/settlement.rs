//! Forward and inverse settlement entry points.

use crate::models::{EngagementParameters, Resolution, Settlement};

use super::gross_from_net::solve_gross_from_net;
use super::scenario::evaluate_scenario;

/// Settles an engagement from its gross (`params.principal`).
///
/// A gross below the legal minimum is raised to it and the result is
/// flagged as adjusted.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::settle_from_gross;
/// use performer_settlement::models::EngagementParameters;
/// use rust_decimal::Decimal;
///
/// let params = EngagementParameters::new(Decimal::from(50), 1, Decimal::TWO);
/// let settlement = settle_from_gross(&params);
///
/// assert_eq!(settlement.scenario.gross, Decimal::from(75));
/// assert!(settlement.resolution.adjusted_to_minimum());
/// ```
pub fn settle_from_gross(params: &EngagementParameters) -> Settlement {
    let floor = params.legal_minimum_gross();
    let raised_to_minimum = params.principal < floor;
    let gross = params.principal.max(floor);

    Settlement {
        scenario: evaluate_scenario(gross, params),
        resolution: Resolution::Evaluated { raised_to_minimum },
        trace: Vec::new(),
    }
}

/// Settles an engagement from the net the performer should receive
/// (`params.principal`).
pub fn settle_from_net(params: &EngagementParameters) -> Settlement {
    solve_gross_from_net(params)
}
