//! Calculation logic for the settlement engine.
//!
//! This module contains the numeric core: per-day withholding with its
//! social-security bracket chain, the cascading allocation of a trial gross
//! across days and cost categories, the vendor's secondary settlement,
//! scenario evaluation and the bisection solver that inverts it.

mod allocation_cascade;
mod day_tax;
mod gross_from_net;
mod scenario;
mod secondary_settlement;
mod settlement;

pub use allocation_cascade::{
    CASCADE_STAGES, CascadeOutcome, CascadeStage, CascadeState, MILEAGE_RATE_PER_KM, SHARE_SCALE,
    allocate_equipment_rental, allocate_justified_expenses, allocate_mileage, allocate_per_diem,
    allocate_residual, equal_share, run_allocation_cascade,
};
pub use day_tax::{
    SOCIAL_SECURITY_BRACKETS, SocialSecurityBracket, SocialSecurityRule, calculate_day_tax,
    social_security_bracket,
};
pub use gross_from_net::{MAX_ITERATIONS, NET_TOLERANCE, solve_gross_from_net};
pub use scenario::evaluate_scenario;
pub use secondary_settlement::{VENDOR_TAX_RATE, calculate_secondary_settlement};
pub use settlement::{settle_from_gross, settle_from_net};
