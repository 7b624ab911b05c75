//! Cascading allocation of a trial gross across days and cost categories.
//!
//! Every work day starts at the legal minimum wage. What remains of the trial
//! gross (the bucket) is handed through a fixed sequence of stages, each
//! taking what it needs, in priority order:
//!
//! 1. mileage, split equally over all work days
//! 2. per-diem, split equally over the first per-diem days
//! 3. justified expenses, as a single lump
//! 4. equipment rental, granted greedily day by day
//! 5. residual, added to the last day's wage
//!
//! The bucket is threaded through the stages as part of [`CascadeState`];
//! each stage consumes a state and returns a new one built from fresh day
//! records.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{DayAllocation, EngagementParameters, LEGAL_MINIMUM_DAILY_WAGE};

/// Reimbursement per kilometre driven.
pub const MILEAGE_RATE_PER_KM: Decimal = Decimal::from_parts(2737, 0, 0, false, 4);

/// Decimal places kept on an equal per-day share.
pub const SHARE_SCALE: u32 = 10;

/// Splits `granted` into `count` equal shares, truncated to [`SHARE_SCALE`]
/// places so that `share × count` never exceeds `granted`. Negative grants
/// yield a zero share.
///
/// ```
/// use performer_settlement::calculation::equal_share;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let share = equal_share(Decimal::from(200), Decimal::from(3));
/// assert_eq!(share, Decimal::from_str("66.6666666666").unwrap());
/// ```
pub fn equal_share(granted: Decimal, count: Decimal) -> Decimal {
    if granted <= Decimal::ZERO || count <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let share = (granted / count).round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::ToZero);
    if share * count > granted {
        share - Decimal::new(1, SHARE_SCALE)
    } else {
        share
    }
}

/// The value threaded through the cascade stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeState {
    /// One record per work day, in day order.
    pub days: Vec<DayAllocation>,
    /// What is left of the trial gross to distribute.
    pub bucket: Decimal,
    /// Justified expenses granted so far.
    pub justified_expenses: Decimal,
}

impl CascadeState {
    /// Every day at the legal minimum wage; the bucket holds the rest of the
    /// trial gross. The bucket is not clamped here.
    pub fn seed(trial_gross: Decimal, params: &EngagementParameters) -> Self {
        let work_days = params.effective_work_days();
        Self {
            days: (1..=work_days).map(DayAllocation::at_minimum_wage).collect(),
            bucket: trial_gross - Decimal::from(work_days) * LEGAL_MINIMUM_DAILY_WAGE,
            justified_expenses: Decimal::ZERO,
        }
    }
}

/// A named step of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct CascadeStage {
    /// Stage name, used in debug events.
    pub name: &'static str,
    /// The stage itself.
    pub apply: fn(CascadeState, &EngagementParameters) -> CascadeState,
}

/// The cascade stages in priority order.
pub const CASCADE_STAGES: [CascadeStage; 5] = [
    CascadeStage {
        name: "mileage",
        apply: allocate_mileage,
    },
    CascadeStage {
        name: "per_diem",
        apply: allocate_per_diem,
    },
    CascadeStage {
        name: "justified_expenses",
        apply: allocate_justified_expenses,
    },
    CascadeStage {
        name: "equipment_rental",
        apply: allocate_equipment_rental,
    },
    CascadeStage {
        name: "residual",
        apply: allocate_residual,
    },
];

/// The result of running every stage of the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Final per-day allocations.
    pub days: Vec<DayAllocation>,
    /// Justified expenses actually granted.
    pub justified_expenses: Decimal,
    /// Rental actually granted, summed over all days.
    pub rental_total: Decimal,
}

/// Distributes `trial_gross` across the engagement's days and categories.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::run_allocation_cascade;
/// use performer_settlement::models::EngagementParameters;
/// use rust_decimal::Decimal;
///
/// let params = EngagementParameters::new(Decimal::from(500), 2, Decimal::TWO);
/// let outcome = run_allocation_cascade(Decimal::from(500), &params);
///
/// // Nothing else to pay for, so the remainder lands on the last day
/// assert_eq!(outcome.days[0].wage, Decimal::from(75));
/// assert_eq!(outcome.days[1].wage, Decimal::from(425));
/// ```
pub fn run_allocation_cascade(trial_gross: Decimal, params: &EngagementParameters) -> CascadeOutcome {
    let state = CASCADE_STAGES
        .iter()
        .fold(CascadeState::seed(trial_gross, params), |state, stage| {
            let state = (stage.apply)(state, params);
            debug!(stage = stage.name, bucket = %state.bucket, "Cascade stage applied");
            state
        });

    let rental_total = state.days.iter().map(|day| day.rental).sum();

    CascadeOutcome {
        days: state.days,
        justified_expenses: state.justified_expenses,
        rental_total,
    }
}

/// Stage 1: mileage, equal split across every work day.
pub fn allocate_mileage(state: CascadeState, params: &EngagementParameters) -> CascadeState {
    if params.total_mileage <= Decimal::ZERO {
        return state;
    }

    let work_days = Decimal::from(params.effective_work_days());
    let required = params.total_mileage * MILEAGE_RATE_PER_KM * work_days;
    let per_day = equal_share(required.min(state.bucket), work_days);

    CascadeState {
        days: state
            .days
            .into_iter()
            .map(|day| DayAllocation {
                mileage: per_day,
                ..day
            })
            .collect(),
        bucket: (state.bucket - per_day * work_days).max(Decimal::ZERO),
        justified_expenses: state.justified_expenses,
    }
}

/// Stage 2: per-diem, equal split across the first per-diem days.
pub fn allocate_per_diem(state: CascadeState, params: &EngagementParameters) -> CascadeState {
    let per_diem_days = params.effective_per_diem_days();
    if per_diem_days == 0 {
        return state;
    }

    let count = Decimal::from(per_diem_days);
    let required = params.per_diem_rate * count;
    let per_day = equal_share(required.min(state.bucket), count);

    CascadeState {
        days: state
            .days
            .into_iter()
            .map(|day| {
                if day.day <= per_diem_days {
                    DayAllocation {
                        per_diem: per_day,
                        ..day
                    }
                } else {
                    day
                }
            })
            .collect(),
        bucket: (state.bucket - per_day * count).max(Decimal::ZERO),
        justified_expenses: state.justified_expenses,
    }
}

/// Stage 3: justified expenses, one lump with no per-day split.
pub fn allocate_justified_expenses(
    state: CascadeState,
    params: &EngagementParameters,
) -> CascadeState {
    if params.justified_expenses <= Decimal::ZERO || state.bucket <= Decimal::ZERO {
        return state;
    }

    let granted = params.justified_expenses.min(state.bucket);
    CascadeState {
        bucket: state.bucket - granted,
        justified_expenses: granted,
        ..state
    }
}

/// Stage 4: equipment rental.
///
/// Each day, in order, is granted up to the *full* rental total from what is
/// left in the bucket, so earlier days fill first and later days may receive
/// nothing.
pub fn allocate_equipment_rental(
    state: CascadeState,
    params: &EngagementParameters,
) -> CascadeState {
    let rental_total = params.rental_total();
    if rental_total <= Decimal::ZERO {
        return state;
    }

    let day_count = state.days.len();
    let (days, bucket) = state.days.into_iter().fold(
        (Vec::with_capacity(day_count), state.bucket),
        |(mut days, bucket), day| {
            let grant = rental_total.min(bucket);
            days.push(DayAllocation {
                rental: grant,
                ..day
            });
            (days, bucket - grant)
        },
    );

    CascadeState {
        days,
        bucket: bucket.max(Decimal::ZERO),
        justified_expenses: state.justified_expenses,
    }
}

/// Stage 5: whatever is left goes to the last day's wage.
pub fn allocate_residual(state: CascadeState, _params: &EngagementParameters) -> CascadeState {
    if state.bucket <= Decimal::ZERO {
        return state;
    }

    let last_day = state.days.len() as u32;
    let residual = state.bucket;

    CascadeState {
        days: state
            .days
            .into_iter()
            .map(|day| {
                if day.day == last_day {
                    DayAllocation {
                        wage: day.wage + residual,
                        ..day
                    }
                } else {
                    day
                }
            })
            .collect(),
        bucket: Decimal::ZERO,
        justified_expenses: state.justified_expenses,
    }
}
