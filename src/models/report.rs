//! Settlement report rendering.
//!
//! This module shapes a [`Settlement`] into the external JSON contract. It is
//! the only place where values are rounded; every monetary amount is rounded
//! to two decimals (midpoint away from zero) and rendered as a JSON number
//! through `rust_decimal`'s float serde module.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{
    ConceptEntry, ConceptNet, DayBreakdown, FlatSettlement, Resolution, ScenarioTotals,
    SecondarySettlement, Settlement,
};

/// Warning attached when the result was moved to the legal minimum gross.
pub const MINIMUM_WAGE_WARNING: &str =
    "The requested amount was too low and has been adjusted to the legal minimum of 75.00 per day";

/// Warning attached when the inverse search stopped at its iteration cap.
pub const BEST_EFFORT_WARNING: &str =
    "The gross could not be matched to the target net within tolerance; the closest result found is returned";

/// Marker rendered in place of the net of equipment rental lines.
pub const VIA_SECONDARY_MARKER: &str = "via-secondary";

/// Rounds a monetary amount for presentation.
pub fn round_money(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// The rendered result of a forward or inverse operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Always "success"; failures are reported as API errors instead.
    pub status: String,
    /// Human-readable notes about adjustments made to the request.
    pub warnings: Vec<String>,
    /// Gross used and net received.
    pub computed_parameters: ComputedParameters,
    /// The performer's own settlement.
    pub primary_breakdown: PrimaryBreakdown,
    /// The equipment vendor's settlement.
    pub secondary_breakdown: SecondaryBreakdown,
}

/// Headline figures of a settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedParameters {
    /// Gross the scenario was evaluated at.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_used: Decimal,
    /// Primary net plus secondary net.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_received: Decimal,
}

/// The performer's settlement: totals, per-day concepts and expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryBreakdown {
    /// Aggregates across all categories.
    pub totals: TotalsReport,
    /// One entry per work day.
    pub per_day: Vec<DayReport>,
    /// Justified-expense lump.
    pub justified_expenses: FlatReport,
}

/// Rounded primary totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsReport {
    /// Total gross.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross: Decimal,
    /// Total commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    /// Total gross minus commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    /// Total social security.
    #[serde(with = "rust_decimal::serde::float")]
    pub social_security: Decimal,
    /// Total income tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub income_tax: Decimal,
    /// Total primary net.
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
}

/// One work day in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// 1-based day number.
    pub day: u32,
    /// Concept lines for the day.
    pub concepts: Vec<ConceptReport>,
}

/// A rendered concept line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptReport {
    /// Category name (`wage`, `mileage`, `per_diem`, `equipment_rental`).
    pub category: super::ConceptCategory,
    /// Gross.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross: Decimal,
    /// Commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    /// Gross minus commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_base: Decimal,
    /// Wage lines only.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub social_security: Option<Decimal>,
    /// Wage lines only.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub income_tax: Option<Decimal>,
    /// Amount, or the `via-secondary` marker for rental lines.
    pub net: ReportNet,
}

/// A concept's net: a number, or a marker string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportNet {
    /// Paid directly to the performer.
    Amount(#[serde(with = "rust_decimal::serde::float")] Decimal),
    /// Settled elsewhere.
    Marker(String),
}

/// A rendered commission-only settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatReport {
    /// Gross.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross: Decimal,
    /// Commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    /// Gross minus commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_base: Decimal,
    /// Net.
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
}

/// The vendor settlement block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryBreakdown {
    /// Whether any rental was granted.
    pub applies: bool,
    /// Vendor settlement figures, `null` when it does not apply.
    pub totals: Option<SecondaryReport>,
}

/// Rounded vendor settlement figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryReport {
    /// Rental total granted across all days.
    #[serde(with = "rust_decimal::serde::float")]
    pub allocated_amount: Decimal,
    /// Allocated amount after the primary commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_basis: Decimal,
    /// Vendor commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    /// Net basis minus vendor commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_base: Decimal,
    /// Vendor income tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    /// Amount paid out through the vendor.
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
    /// Equipment behind the rental amount.
    pub equipment_detail: Vec<EquipmentReport>,
}

/// A rendered equipment line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentReport {
    /// Catalog display name.
    pub name: String,
    /// Units rented.
    pub quantity: u32,
    /// Price of one unit, at catalog precision.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Rounded subtotal.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl From<&Settlement> for SettlementReport {
    fn from(settlement: &Settlement) -> Self {
        let scenario = &settlement.scenario;

        let mut warnings = Vec::new();
        if settlement.resolution.adjusted_to_minimum() {
            warnings.push(MINIMUM_WAGE_WARNING.to_string());
        }
        if matches!(
            settlement.resolution,
            Resolution::IterationCapReached { .. }
        ) {
            warnings.push(BEST_EFFORT_WARNING.to_string());
        }

        SettlementReport {
            status: "success".to_string(),
            warnings,
            computed_parameters: ComputedParameters {
                gross_used: round_money(scenario.gross),
                net_received: round_money(scenario.net),
            },
            primary_breakdown: PrimaryBreakdown {
                totals: (&scenario.totals).into(),
                per_day: scenario.days.iter().map(Into::into).collect(),
                justified_expenses: (&scenario.justified_expenses).into(),
            },
            secondary_breakdown: SecondaryBreakdown {
                applies: scenario.secondary.is_some(),
                totals: scenario.secondary.as_ref().map(Into::into),
            },
        }
    }
}

impl From<&ScenarioTotals> for TotalsReport {
    fn from(totals: &ScenarioTotals) -> Self {
        TotalsReport {
            gross: round_money(totals.gross),
            commission: round_money(totals.commission),
            cost: round_money(totals.cost),
            social_security: round_money(totals.social_security),
            income_tax: round_money(totals.income_tax),
            net: round_money(totals.net),
        }
    }
}

impl From<&DayBreakdown> for DayReport {
    fn from(day: &DayBreakdown) -> Self {
        DayReport {
            day: day.day,
            concepts: day.concepts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ConceptEntry> for ConceptReport {
    fn from(entry: &ConceptEntry) -> Self {
        ConceptReport {
            category: entry.category,
            gross: round_money(entry.gross),
            commission: round_money(entry.commission),
            taxable_base: round_money(entry.taxable_base),
            social_security: entry.social_security.map(round_money),
            income_tax: entry.income_tax.map(round_money),
            net: match entry.net {
                ConceptNet::Amount(amount) => ReportNet::Amount(round_money(amount)),
                ConceptNet::ViaSecondary => ReportNet::Marker(VIA_SECONDARY_MARKER.to_string()),
            },
        }
    }
}

impl From<&FlatSettlement> for FlatReport {
    fn from(flat: &FlatSettlement) -> Self {
        FlatReport {
            gross: round_money(flat.gross),
            commission: round_money(flat.commission),
            taxable_base: round_money(flat.taxable_base),
            net: round_money(flat.net),
        }
    }
}

impl From<&SecondarySettlement> for SecondaryReport {
    fn from(secondary: &SecondarySettlement) -> Self {
        SecondaryReport {
            allocated_amount: round_money(secondary.allocated),
            net_basis: round_money(secondary.net_basis),
            commission: round_money(secondary.commission),
            taxable_base: round_money(secondary.taxable_base),
            tax: round_money(secondary.tax),
            net: round_money(secondary.net),
            equipment_detail: secondary
                .equipment
                .iter()
                .map(|item| EquipmentReport {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price.normalize(),
                    subtotal: round_money(item.subtotal),
                })
                .collect(),
        }
    }
}
