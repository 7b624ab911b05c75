//! Engagement parameter models.
//!
//! This module contains the [`EngagementParameters`] type that describes one
//! multi-day engagement with every external identifier already resolved to
//! numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LEGAL_MINIMUM_DAILY_WAGE;

/// A rented piece of equipment, already resolved against the catalog.
///
/// # Example
///
/// ```
/// use performer_settlement::models::RentalLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = RentalLine {
///     name: "Microphone".to_string(),
///     unit_price: Decimal::from_str("52.6316").unwrap(),
///     quantity: 2,
/// };
/// assert_eq!(line.subtotal(), Decimal::from_str("105.2632").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalLine {
    /// Catalog display name.
    pub name: String,
    /// Rental price for one unit.
    pub unit_price: Decimal,
    /// Number of units rented.
    pub quantity: u32,
}

impl RentalLine {
    /// Returns `unit_price × quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The inputs of one settlement evaluation.
///
/// `principal` is the gross amount for the forward operation and the target
/// net for the inverse one. The remaining fields are shared by both.
///
/// Preconditions (checked at the boundary, not by the core): `work_days ≥ 1`,
/// `income_tax_rate ≥ 2.0`, every amount ≥ 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementParameters {
    /// Gross amount or target net, depending on direction.
    pub principal: Decimal,
    /// Number of work days in the engagement.
    pub work_days: u32,
    /// Income-tax withholding percentage (e.g. 2.0 for 2%).
    pub income_tax_rate: Decimal,
    /// Total mileage driven, in kilometres.
    pub total_mileage: Decimal,
    /// Number of days entitled to a per-diem.
    pub per_diem_days: u32,
    /// Per-diem amount for one day.
    pub per_diem_rate: Decimal,
    /// Justified expenses requested as a single lump.
    pub justified_expenses: Decimal,
    /// Equipment rented for the engagement.
    pub rentals: Vec<RentalLine>,
}

impl EngagementParameters {
    /// Creates parameters for a plain engagement with no extras.
    ///
    /// ```
    /// use performer_settlement::models::EngagementParameters;
    /// use rust_decimal::Decimal;
    ///
    /// let params = EngagementParameters::new(Decimal::from(300), 2, Decimal::TWO);
    /// assert_eq!(params.legal_minimum_gross(), Decimal::from(150));
    /// ```
    pub fn new(principal: Decimal, work_days: u32, income_tax_rate: Decimal) -> Self {
        Self {
            principal,
            work_days,
            income_tax_rate,
            total_mileage: Decimal::ZERO,
            per_diem_days: 0,
            per_diem_rate: Decimal::ZERO,
            justified_expenses: Decimal::ZERO,
            rentals: Vec::new(),
        }
    }

    /// Work days, clamped to at least one.
    pub fn effective_work_days(&self) -> u32 {
        self.work_days.max(1)
    }

    /// Per-diem days, clamped to the number of work days.
    pub fn effective_per_diem_days(&self) -> u32 {
        self.per_diem_days.min(self.effective_work_days())
    }

    /// Sum of every rental line's subtotal.
    pub fn rental_total(&self) -> Decimal {
        self.rentals.iter().map(RentalLine::subtotal).sum()
    }

    /// The lowest gross the engagement can be settled at: the legal minimum
    /// daily wage for every work day.
    pub fn legal_minimum_gross(&self) -> Decimal {
        Decimal::from(self.effective_work_days()) * LEGAL_MINIMUM_DAILY_WAGE
    }

    /// Returns a copy with a different principal.
    pub fn with_principal(&self, principal: Decimal) -> Self {
        Self {
            principal,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_work_days_clamped_to_one() {
        let params = EngagementParameters::new(dec("100"), 0, dec("2"));
        assert_eq!(params.effective_work_days(), 1);
        assert_eq!(params.legal_minimum_gross(), dec("75"));
    }

    #[test]
    fn test_per_diem_days_clamped_to_work_days() {
        let mut params = EngagementParameters::new(dec("1000"), 3, dec("2"));
        params.per_diem_days = 5;
        assert_eq!(params.effective_per_diem_days(), 3);

        params.per_diem_days = 2;
        assert_eq!(params.effective_per_diem_days(), 2);
    }

    #[test]
    fn test_rental_total_sums_subtotals() {
        let mut params = EngagementParameters::new(dec("1000"), 1, dec("2"));
        params.rentals = vec![
            RentalLine {
                name: "Microphone".to_string(),
                unit_price: dec("52.6316"),
                quantity: 2,
            },
            RentalLine {
                name: "Cables".to_string(),
                unit_price: dec("5.2632"),
                quantity: 3,
            },
        ];
        // 105.2632 + 15.7896
        assert_eq!(params.rental_total(), dec("121.0528"));
    }

    #[test]
    fn test_rental_total_empty_is_zero() {
        let params = EngagementParameters::new(dec("1000"), 1, dec("2"));
        assert_eq!(params.rental_total(), Decimal::ZERO);
    }

    #[test]
    fn test_with_principal_keeps_other_fields() {
        let mut params = EngagementParameters::new(dec("1000"), 4, dec("15"));
        params.total_mileage = dec("120");

        let moved = params.with_principal(dec("2500"));
        assert_eq!(moved.principal, dec("2500"));
        assert_eq!(moved.work_days, 4);
        assert_eq!(moved.total_mileage, dec("120"));
    }
}
