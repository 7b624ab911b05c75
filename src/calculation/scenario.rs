//! Scenario evaluation.
//!
//! Evaluating a scenario runs the allocation cascade for one trial gross,
//! taxes each day's wage, applies the commission-only split to every
//! reimbursement category and settles rental through the vendor. This is the
//! function the gross-from-net solver calls on every iteration.

use rust_decimal::Decimal;

use crate::models::{
    ConceptCategory, ConceptEntry, ConceptNet, DayAllocation, DayBreakdown, EngagementParameters,
    FlatSettlement, ScenarioResult, ScenarioTotals,
};

use super::allocation_cascade::run_allocation_cascade;
use super::day_tax::calculate_day_tax;
use super::secondary_settlement::calculate_secondary_settlement;

/// Evaluates the full settlement for one trial gross.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::evaluate_scenario;
/// use performer_settlement::models::EngagementParameters;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = EngagementParameters::new(Decimal::from(75), 1, Decimal::TWO);
/// let scenario = evaluate_scenario(Decimal::from(75), &params);
///
/// assert_eq!(scenario.net, Decimal::from_str("49.245").unwrap());
/// assert!(scenario.secondary.is_none());
/// ```
pub fn evaluate_scenario(trial_gross: Decimal, params: &EngagementParameters) -> ScenarioResult {
    let allocation = run_allocation_cascade(trial_gross, params);

    let days: Vec<DayBreakdown> = allocation
        .days
        .iter()
        .map(|day| DayBreakdown {
            day: day.day,
            concepts: day_concepts(day, params.income_tax_rate),
        })
        .collect();

    let justified_expenses = if allocation.justified_expenses > Decimal::ZERO {
        FlatSettlement::of(allocation.justified_expenses)
    } else {
        FlatSettlement::default()
    };

    let totals = days
        .iter()
        .flat_map(|day| day.concepts.iter())
        .fold(ScenarioTotals::default(), ScenarioTotals::add_concept)
        .add_flat(&justified_expenses);

    let secondary = calculate_secondary_settlement(allocation.rental_total, &params.rentals);
    let secondary_net = secondary
        .as_ref()
        .map(|settlement| settlement.net)
        .unwrap_or_default();

    ScenarioResult {
        gross: trial_gross,
        net: totals.net + secondary_net,
        days,
        justified_expenses,
        secondary,
        totals,
    }
}

/// Builds a day's concept lines: the taxed wage first, then each
/// reimbursement category that received a positive amount.
fn day_concepts(day: &DayAllocation, income_tax_rate: Decimal) -> Vec<ConceptEntry> {
    let tax = calculate_day_tax(day.wage, income_tax_rate);
    let wage = ConceptEntry {
        category: ConceptCategory::Wage,
        gross: tax.gross,
        commission: tax.commission,
        taxable_base: tax.cost,
        social_security: Some(tax.social_security),
        income_tax: Some(tax.income_tax),
        net: ConceptNet::Amount(tax.net),
    };

    let reimbursements = [
        (ConceptCategory::Mileage, day.mileage),
        (ConceptCategory::PerDiem, day.per_diem),
        (ConceptCategory::EquipmentRental, day.rental),
    ];

    std::iter::once(wage)
        .chain(
            reimbursements
                .into_iter()
                .filter(|(_, amount)| *amount > Decimal::ZERO)
                .map(|(category, amount)| reimbursement_concept(category, amount)),
        )
        .collect()
}

fn reimbursement_concept(category: ConceptCategory, amount: Decimal) -> ConceptEntry {
    let split = FlatSettlement::of(amount);
    ConceptEntry {
        category,
        gross: split.gross,
        commission: split.commission,
        taxable_base: split.taxable_base,
        social_security: None,
        income_tax: None,
        net: match category {
            ConceptCategory::EquipmentRental => ConceptNet::ViaSecondary,
            _ => ConceptNet::Amount(split.net),
        },
    }
}
