//! Per-day allocation records produced by the allocation cascade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legal minimum wage for one work day.
pub const LEGAL_MINIMUM_DAILY_WAGE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// How one work day's gross is split across cost categories.
///
/// A fresh allocation carries only the legal minimum wage. Cascade stages
/// build new records from old ones; the wage is only ever raised.
///
/// # Example
///
/// ```
/// use performer_settlement::models::{DayAllocation, LEGAL_MINIMUM_DAILY_WAGE};
/// use rust_decimal::Decimal;
///
/// let day = DayAllocation::at_minimum_wage(1);
/// assert_eq!(day.wage, LEGAL_MINIMUM_DAILY_WAGE);
/// assert_eq!(day.gross(), Decimal::from(75));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAllocation {
    /// 1-based day number.
    pub day: u32,
    /// Base wage ("cache"), never below the legal minimum.
    pub wage: Decimal,
    /// Mileage reimbursement share.
    pub mileage: Decimal,
    /// Per-diem share.
    pub per_diem: Decimal,
    /// Equipment rental share.
    pub rental: Decimal,
}

impl DayAllocation {
    /// A day carrying only the legal minimum wage.
    pub fn at_minimum_wage(day: u32) -> Self {
        Self {
            day,
            wage: LEGAL_MINIMUM_DAILY_WAGE,
            mileage: Decimal::ZERO,
            per_diem: Decimal::ZERO,
            rental: Decimal::ZERO,
        }
    }

    /// Total gross allocated to this day across all categories.
    pub fn gross(&self) -> Decimal {
        self.wage + self.mileage + self.per_diem + self.rental
    }
}
