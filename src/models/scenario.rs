//! Scenario result models.
//!
//! This module contains the [`ScenarioResult`] type and its associated
//! structures that capture one full evaluation of a trial gross: the per-day
//! concepts, the aggregate totals, the justified-expense settlement and the
//! optional secondary (equipment vendor) settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Withholding breakdown for one day's base wage.
///
/// Invariant: `net = gross − commission − social_security − income_tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTaxResult {
    /// The day's wage gross.
    pub gross: Decimal,
    /// Intermediary commission (5% of gross).
    pub commission: Decimal,
    /// Gross minus commission.
    pub cost: Decimal,
    /// Bracket-selected social-security withholding.
    pub social_security: Decimal,
    /// Cost minus social security; the income-tax base.
    pub taxable_base: Decimal,
    /// Income-tax withholding.
    pub income_tax: Decimal,
    /// Amount payable to the performer.
    pub net: Decimal,
}

/// The category of a per-day concept.
///
/// ```
/// use performer_settlement::models::ConceptCategory;
///
/// let json = serde_json::to_string(&ConceptCategory::PerDiem).unwrap();
/// assert_eq!(json, "\"per_diem\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptCategory {
    /// Base wage, subject to social security and income tax.
    Wage,
    /// Mileage reimbursement.
    Mileage,
    /// Per-diem allowance.
    PerDiem,
    /// Equipment rental, settled through the vendor.
    EquipmentRental,
}

/// What a concept contributes to the performer's net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptNet {
    /// Paid to the performer directly.
    Amount(Decimal),
    /// Settled through the secondary settlement; excluded from the primary net.
    ViaSecondary,
}

impl ConceptNet {
    /// The amount counted towards the primary net.
    pub fn primary_amount(&self) -> Decimal {
        match self {
            ConceptNet::Amount(amount) => *amount,
            ConceptNet::ViaSecondary => Decimal::ZERO,
        }
    }
}

/// One line of a day's breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Which cost category this line represents.
    pub category: ConceptCategory,
    /// Gross amount.
    pub gross: Decimal,
    /// Commission deducted from the gross.
    pub commission: Decimal,
    /// Gross minus commission.
    pub taxable_base: Decimal,
    /// Social security, present on wage lines only.
    pub social_security: Option<Decimal>,
    /// Income tax, present on wage lines only.
    pub income_tax: Option<Decimal>,
    /// Net contribution.
    pub net: ConceptNet,
}

/// All concepts for one work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// 1-based day number.
    pub day: u32,
    /// Concepts in fixed order: wage, mileage, per-diem, rental.
    pub concepts: Vec<ConceptEntry>,
}

/// Aggregate totals of the primary settlement.
///
/// `net` excludes equipment rental, which is settled separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTotals {
    /// Total gross across all categories.
    pub gross: Decimal,
    /// Total commission.
    pub commission: Decimal,
    /// Total gross minus commission.
    pub cost: Decimal,
    /// Total social-security withholding.
    pub social_security: Decimal,
    /// Total income-tax withholding.
    pub income_tax: Decimal,
    /// Total paid to the performer in the primary settlement.
    pub net: Decimal,
}

impl ScenarioTotals {
    /// Adds one concept line. Rental lines count towards every aggregate
    /// except the net.
    pub fn add_concept(self, entry: &ConceptEntry) -> Self {
        Self {
            gross: self.gross + entry.gross,
            commission: self.commission + entry.commission,
            cost: self.cost + entry.taxable_base,
            social_security: self.social_security + entry.social_security.unwrap_or_default(),
            income_tax: self.income_tax + entry.income_tax.unwrap_or_default(),
            net: self.net + entry.net.primary_amount(),
        }
    }

    /// Adds a commission-only settlement that is paid to the performer.
    pub fn add_flat(self, flat: &FlatSettlement) -> Self {
        Self {
            gross: self.gross + flat.gross,
            commission: self.commission + flat.commission,
            cost: self.cost + flat.taxable_base,
            net: self.net + flat.net,
            ..self
        }
    }
}

/// A commission-only split of a reimbursement amount.
///
/// ```
/// use performer_settlement::models::FlatSettlement;
/// use rust_decimal::Decimal;
///
/// let split = FlatSettlement::of(Decimal::from(200));
/// assert_eq!(split.commission, Decimal::from(10));
/// assert_eq!(split.net, Decimal::from(190));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSettlement {
    /// Gross amount.
    pub gross: Decimal,
    /// Commission (5% of gross).
    pub commission: Decimal,
    /// Gross minus commission.
    pub taxable_base: Decimal,
    /// Equal to the taxable base: no further withholding applies.
    pub net: Decimal,
}

impl FlatSettlement {
    /// Commission rate applied to every gross category.
    pub const COMMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    /// Splits `gross` into commission and net.
    pub fn of(gross: Decimal) -> Self {
        let commission = gross * Self::COMMISSION_RATE;
        let taxable_base = gross - commission;
        Self {
            gross,
            commission,
            taxable_base,
            net: taxable_base,
        }
    }
}

/// One line of the equipment detail attached to a secondary settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDetail {
    /// Catalog display name.
    pub name: String,
    /// Units rented.
    pub quantity: u32,
    /// Price of one unit.
    pub unit_price: Decimal,
    /// `unit_price × quantity`.
    pub subtotal: Decimal,
}

/// The equipment vendor's own commission and withholding chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySettlement {
    /// Rental total actually granted across all days.
    pub allocated: Decimal,
    /// Allocated amount after the primary commission.
    pub net_basis: Decimal,
    /// Vendor commission.
    pub commission: Decimal,
    /// Net basis minus vendor commission.
    pub taxable_base: Decimal,
    /// Vendor income tax at the fixed vendor rate.
    pub tax: Decimal,
    /// Amount finally paid out through the vendor.
    pub net: Decimal,
    /// Equipment behind the rental amount.
    pub equipment: Vec<EquipmentDetail>,
}

/// The full result of evaluating one trial gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The trial gross this scenario was evaluated at.
    pub gross: Decimal,
    /// Primary net plus the secondary settlement's net.
    pub net: Decimal,
    /// Per-day concept breakdown.
    pub days: Vec<DayBreakdown>,
    /// Justified-expense lump; all zero when none was granted.
    pub justified_expenses: FlatSettlement,
    /// Present only when some rental was granted.
    pub secondary: Option<SecondarySettlement>,
    /// Primary settlement totals.
    pub totals: ScenarioTotals,
}
