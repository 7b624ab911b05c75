//! Configuration types for the settlement engine.
//!
//! These structures are deserialized from the YAML files of a configuration
//! directory and back the per-diem rate and equipment catalog lookups.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Contents of `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Identifier of the settlement schedule.
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// Version tag of the schedule.
    pub version: String,
    /// Date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Per-diem rate keyed by kind (e.g. "national").
    pub per_diem_rates: HashMap<String, Decimal>,
}

/// A single rentable piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EquipmentItem {
    /// Display name shown in the secondary settlement detail.
    pub name: String,
    /// Rental price for one unit.
    pub unit_price: Decimal,
}

/// Contents of `equipment.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentCatalog {
    /// Equipment keyed by catalog identifier.
    pub equipment: HashMap<String, EquipmentItem>,
}

/// The complete settlement configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    schedule: ScheduleConfig,
    catalog: EquipmentCatalog,
}

impl SettlementConfig {
    /// Creates a new SettlementConfig from its component parts.
    pub fn new(schedule: ScheduleConfig, catalog: EquipmentCatalog) -> Self {
        Self { schedule, catalog }
    }

    /// Returns the schedule metadata and rate table.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the equipment catalog.
    pub fn catalog(&self) -> &HashMap<String, EquipmentItem> {
        &self.catalog.equipment
    }
}
