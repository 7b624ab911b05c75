//! Request types for the settlement API.
//!
//! This module defines the JSON body shared by both simulation endpoints and
//! its resolution into [`EngagementParameters`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{EngagementParameters, RentalLine};

/// Lowest income-tax percentage accepted.
const MINIMUM_INCOME_TAX_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Highest income-tax percentage accepted.
const MAXIMUM_INCOME_TAX_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Largest magnitude accepted for any monetary amount or distance (1e12).
pub const MAXIMUM_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Most work days or per-diem days one engagement may span.
pub const MAXIMUM_DAYS: u32 = 366;

/// Most units of one catalog item per request.
pub const MAXIMUM_QUANTITY: u32 = 1000;

/// Request body for the simulation endpoints.
///
/// `principal_amount` is the gross for `gross-to-net` and the target net for
/// `net-to-gross`. Every other field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Gross amount or target net.
    pub principal_amount: Decimal,
    /// Number of work days.
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    /// Income-tax withholding percentage.
    #[serde(default = "default_income_tax_rate")]
    pub income_tax_rate: Decimal,
    /// Total kilometres driven.
    #[serde(default)]
    pub total_mileage: Decimal,
    /// Days entitled to a per-diem.
    #[serde(default)]
    pub per_diem_days: u32,
    /// Per-diem rate table key.
    #[serde(default = "default_per_diem_kind")]
    pub per_diem_kind: String,
    /// Justified expenses.
    #[serde(default)]
    pub justified_expenses: Decimal,
    /// Equipment to rent.
    #[serde(default)]
    pub equipment_rental: Vec<EquipmentRentalRequest>,
}

/// One rented catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRentalRequest {
    /// Catalog identifier (e.g. "microphone").
    pub equipment_id: String,
    /// Units rented.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_work_days() -> u32 {
    1
}

fn default_income_tax_rate() -> Decimal {
    MINIMUM_INCOME_TAX_RATE
}

fn default_per_diem_kind() -> String {
    "national".to_string()
}

fn default_quantity() -> u32 {
    1
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidParameter {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl SettlementRequest {
    /// Checks the field preconditions the calculation relies on.
    ///
    /// Upper bounds keep every intermediate product within `Decimal` range
    /// and the per-day records within a year.
    pub fn validate(&self) -> EngineResult<()> {
        if self.principal_amount.abs() > MAXIMUM_AMOUNT {
            return Err(invalid("principal_amount", "magnitude must not exceed 1000000000000"));
        }
        if self.work_days < 1 {
            return Err(invalid("work_days", "must be at least 1"));
        }
        if self.work_days > MAXIMUM_DAYS {
            return Err(invalid("work_days", "must not exceed 366"));
        }
        if self.income_tax_rate < MINIMUM_INCOME_TAX_RATE {
            return Err(invalid("income_tax_rate", "must be at least 2.0"));
        }
        if self.income_tax_rate > MAXIMUM_INCOME_TAX_RATE {
            return Err(invalid("income_tax_rate", "must not exceed 100"));
        }
        if self.total_mileage < Decimal::ZERO {
            return Err(invalid("total_mileage", "must not be negative"));
        }
        if self.total_mileage > MAXIMUM_AMOUNT {
            return Err(invalid("total_mileage", "must not exceed 1000000000000"));
        }
        if self.per_diem_days > MAXIMUM_DAYS {
            return Err(invalid("per_diem_days", "must not exceed 366"));
        }
        if self.justified_expenses < Decimal::ZERO {
            return Err(invalid("justified_expenses", "must not be negative"));
        }
        if self.justified_expenses > MAXIMUM_AMOUNT {
            return Err(invalid("justified_expenses", "must not exceed 1000000000000"));
        }
        if let Some(item) = self
            .equipment_rental
            .iter()
            .find(|item| item.quantity < 1 || item.quantity > MAXIMUM_QUANTITY)
        {
            return Err(EngineError::InvalidParameter {
                field: "equipment_rental.quantity".to_string(),
                message: format!("must be between 1 and 1000 for '{}'", item.equipment_id),
            });
        }
        Ok(())
    }

    /// Validates the request and resolves its catalog and rate identifiers.
    pub fn resolve(&self, config: &ConfigLoader) -> EngineResult<EngagementParameters> {
        self.validate()?;

        let per_diem_rate = config.get_per_diem_rate(&self.per_diem_kind)?;
        let rentals = self
            .equipment_rental
            .iter()
            .map(|item| {
                config.get_equipment(&item.equipment_id).map(|equipment| RentalLine {
                    name: equipment.name.clone(),
                    unit_price: equipment.unit_price,
                    quantity: item.quantity,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(EngagementParameters {
            principal: self.principal_amount,
            work_days: self.work_days,
            income_tax_rate: self.income_tax_rate,
            total_mileage: self.total_mileage,
            per_diem_days: self.per_diem_days,
            per_diem_rate,
            justified_expenses: self.justified_expenses,
            rentals,
        })
    }
}
