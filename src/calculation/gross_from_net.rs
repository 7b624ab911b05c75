//! Gross-from-net solver.
//!
//! Inverts the gross → net function with a bounded bisection. Net is only
//! monotone within a social-security bracket, so the search is best effort:
//! it always terminates and returns the last scenario it evaluated when the
//! tolerance is not met.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BisectionStep, EngagementParameters, Resolution, Settlement};

use super::scenario::evaluate_scenario;

/// Maximum distance between achieved and target net for the search to stop.
pub const NET_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Upper bound on bisection iterations.
pub const MAX_ITERATIONS: u32 = 100;

const UPPER_BOUND_FACTOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const UPPER_BOUND_MARGIN: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Finds the gross whose scenario pays `params.principal` as net.
///
/// When the target is reachable at the legal minimum gross no search is
/// performed and the floor scenario is returned.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::solve_gross_from_net;
/// use performer_settlement::models::{EngagementParameters, Resolution};
/// use rust_decimal::Decimal;
///
/// let params = EngagementParameters::new(Decimal::from(10), 1, Decimal::TWO);
/// let settlement = solve_gross_from_net(&params);
///
/// assert_eq!(settlement.resolution, Resolution::FloorAdjusted);
/// assert_eq!(settlement.scenario.gross, Decimal::from(75));
/// ```
pub fn solve_gross_from_net(params: &EngagementParameters) -> Settlement {
    let target = params.principal;
    let floor = params.legal_minimum_gross();

    let floor_scenario = evaluate_scenario(floor, params);
    if target <= floor_scenario.net {
        debug!(
            target = %target,
            floor_net = %floor_scenario.net,
            "Target net reachable at legal minimum gross"
        );
        return Settlement {
            scenario: floor_scenario,
            resolution: Resolution::FloorAdjusted,
            trace: Vec::new(),
        };
    }

    let mut low = floor;
    let mut high = target * UPPER_BOUND_FACTOR + floor + UPPER_BOUND_MARGIN;
    let mut trace = Vec::new();
    let mut last = floor_scenario;

    for iteration in 1..=MAX_ITERATIONS {
        let candidate = (low + high) / Decimal::TWO;
        let scenario = evaluate_scenario(candidate, params);

        debug!(
            iteration,
            lower_bound = %low,
            upper_bound = %high,
            candidate = %candidate,
            net = %scenario.net,
            "Bisection step"
        );
        trace.push(BisectionStep {
            iteration,
            lower_bound: low,
            upper_bound: high,
            candidate,
            net: scenario.net,
        });

        if (scenario.net - target).abs() < NET_TOLERANCE {
            return Settlement {
                scenario,
                resolution: Resolution::Converged { iterations: iteration },
                trace,
            };
        }

        if scenario.net < target {
            low = candidate;
        } else {
            high = candidate;
        }
        last = scenario;
    }

    debug!(
        target = %target,
        achieved = %last.net,
        "Bisection reached the iteration cap"
    );
    Settlement {
        scenario: last,
        resolution: Resolution::IterationCapReached {
            iterations: MAX_ITERATIONS,
        },
        trace,
    }
}
