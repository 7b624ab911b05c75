//! Core data models for the settlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod engagement;
mod report;
mod scenario;
mod settlement;

pub use allocation::{DayAllocation, LEGAL_MINIMUM_DAILY_WAGE};
pub use engagement::{EngagementParameters, RentalLine};
pub use report::{
    BEST_EFFORT_WARNING, ComputedParameters, ConceptReport, DayReport, EquipmentReport,
    FlatReport, MINIMUM_WAGE_WARNING, PrimaryBreakdown, ReportNet, SecondaryBreakdown,
    SecondaryReport, SettlementReport, TotalsReport, VIA_SECONDARY_MARKER, round_money,
};
pub use scenario::{
    ConceptCategory, ConceptEntry, ConceptNet, DayBreakdown, DayTaxResult, EquipmentDetail,
    FlatSettlement, ScenarioResult, ScenarioTotals, SecondarySettlement,
};
pub use settlement::{BisectionStep, Resolution, Settlement};
